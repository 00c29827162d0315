use chrono::{Datelike, NaiveDate, Weekday};

/// All dates between `start` and `end` (inclusive) falling on a Monday,
/// Wednesday, or Friday, in ascending order. Girl Genius publishes on
/// exactly those weekdays. Every later pipeline stage preserves the order
/// this sequence establishes, so entry numbering depends on it alone.
///
/// Yields nothing when `start` is after `end`.
pub fn publication_dates(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start
        .iter_days()
        .take_while(move |date| *date <= end)
        .filter(|date| matches!(date.weekday(), Weekday::Mon | Weekday::Wed | Weekday::Fri))
}
