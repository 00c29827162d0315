use chrono::NaiveDate;

/// Where the next run should pick up: the first date to process and the
/// archive entry index it will be numbered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeState {
    pub start_date: NaiveDate,
    pub next_index: usize,
}

impl ResumeState {
    /// The first Girl Genius strip ran on 2002-11-04; a fresh archive
    /// starts there with entry index 0.
    pub fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2002, 11, 4).unwrap()
    }

    /// Parse the archive comment, `"<YYYYMMDD> <index>"`, holding the last
    /// date processed and the last entry index written. Resumption starts
    /// the day after that date with the following index. Anything that
    /// fails to parse (absent, malformed, extra tokens) means "no prior
    /// progress" and falls back to the epoch rather than failing the run.
    pub fn decode(raw: &[u8]) -> Self {
        parse_comment(raw).unwrap_or(Self {
            start_date: Self::epoch(),
            next_index: 0,
        })
    }

    /// Comment text recording that everything up to `end_date` has been
    /// processed and `last_index` was the final entry written.
    pub fn encode(end_date: NaiveDate, last_index: usize) -> String {
        format!("{} {}", end_date.format("%Y%m%d"), last_index)
    }
}

fn parse_comment(raw: &[u8]) -> Option<ResumeState> {
    let text = std::str::from_utf8(raw).ok()?;
    let mut tokens = text.split_whitespace();
    let last_date = NaiveDate::parse_from_str(tokens.next()?, "%Y%m%d").ok()?;
    let last_index = tokens.next()?.parse::<usize>().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(ResumeState {
        start_date: last_date.succ_opt()?,
        next_index: last_index + 1,
    })
}
