use chrono::{Datelike, Weekday};

use super::date;
use crate::dates::publication_dates;

#[test]
fn test_first_week_of_publication() {
    let dates: Vec<_> = publication_dates(date(2002, 11, 4), date(2002, 11, 8)).collect();

    assert_eq!(
        dates,
        vec![date(2002, 11, 4), date(2002, 11, 6), date(2002, 11, 8)]
    );
}

#[test]
fn test_only_publication_weekdays_ascending_no_duplicates() {
    let start = date(2024, 1, 1);
    let end = date(2024, 3, 31);
    let dates: Vec<_> = publication_dates(start, end).collect();

    for d in &dates {
        assert!(matches!(
            d.weekday(),
            Weekday::Mon | Weekday::Wed | Weekday::Fri
        ));
        assert!(*d >= start && *d <= end);
    }

    // Strictly ascending, which also rules out duplicates
    for pair in dates.windows(2) {
        assert!(pair[0] < pair[1]);
    }

    // 2024-01-01 is a Monday and the range spans exactly 13 weeks
    assert_eq!(dates.len(), 39);
}

#[test]
fn test_bounds_falling_midweek() {
    // Tuesday through Thursday picks up only the Wednesday
    let dates: Vec<_> = publication_dates(date(2002, 11, 5), date(2002, 11, 7)).collect();
    assert_eq!(dates, vec![date(2002, 11, 6)]);
}

#[test]
fn test_single_publication_day_range() {
    let dates: Vec<_> = publication_dates(date(2002, 11, 6), date(2002, 11, 6)).collect();
    assert_eq!(dates, vec![date(2002, 11, 6)]);
}

#[test]
fn test_single_off_day_range_is_empty() {
    // A lone Tuesday yields nothing
    assert_eq!(publication_dates(date(2002, 11, 5), date(2002, 11, 5)).count(), 0);
}

#[test]
fn test_empty_when_start_after_end() {
    assert_eq!(publication_dates(date(2002, 11, 8), date(2002, 11, 4)).count(), 0);
}

#[test]
fn test_sequence_is_restartable() {
    let first: Vec<_> = publication_dates(date(2003, 6, 1), date(2003, 6, 30)).collect();
    let second: Vec<_> = publication_dates(date(2003, 6, 1), date(2003, 6, 30)).collect();
    assert_eq!(first, second);
}
