//! Recurrence policy - deriving occurrence dates from a post's frequency.

use chrono::{DateTime, Duration, Months, Utc};

use super::post::Frequency;

/// Half-open time window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Lazy iterator over the occurrence dates of an anchor inside a window.
///
/// The sequence is a pure function of `(anchor, frequency, window)`: creating
/// a new iterator with the same inputs restarts it. Occurrences outside the
/// window are never yielded, and iteration stops at the first candidate at
/// or past `end`.
#[derive(Debug, Clone)]
pub struct Occurrences {
    anchor: DateTime<Utc>,
    frequency: Frequency,
    range: DateRange,
    k: u32,
    done: bool,
}

impl Occurrences {
    /// An iterator that yields nothing.
    pub fn empty() -> Self {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        Self {
            anchor: epoch,
            frequency: Frequency::None,
            range: DateRange::new(epoch, epoch),
            k: 0,
            done: true,
        }
    }

    /// Occurrence number `k`, counted from the anchor.
    ///
    /// Monthly steps are always taken from the anchor, not from the previous
    /// occurrence, so the anchor's day-of-month is preserved across shorter
    /// months (Jan 31 -> Feb 29 -> Mar 31); chrono clamps to the last day of
    /// the target month.
    fn occurrence(&self, k: u32) -> Option<DateTime<Utc>> {
        match self.frequency {
            Frequency::None => (k == 0).then_some(self.anchor),
            Frequency::Daily => self.anchor.checked_add_signed(Duration::days(i64::from(k))),
            Frequency::Weekly => self
                .anchor
                .checked_add_signed(Duration::days(7 * i64::from(k))),
            Frequency::Monthly => self.anchor.checked_add_months(Months::new(k)),
        }
    }
}

impl Iterator for Occurrences {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        if self.done {
            return None;
        }
        // Occurrence dates are monotonically increasing in k, so the first
        // candidate at or past `end` terminates the sequence. Candidates
        // before `start` are skipped (only monthly reaches this path; the
        // fixed-step frequencies fast-forward at construction).
        loop {
            let Some(occurrence) = self.occurrence(self.k) else {
                self.done = true;
                return None;
            };
            self.k += 1;
            if occurrence >= self.range.end {
                self.done = true;
                return None;
            }
            if self.frequency == Frequency::None {
                self.done = true;
            }
            if occurrence >= self.range.start {
                return Some(occurrence);
            }
        }
    }
}

/// The finite sequence of occurrences of `anchor` repeating at `frequency`
/// that fall within `range`.
pub fn occurrences(anchor: DateTime<Utc>, frequency: Frequency, range: &DateRange) -> Occurrences {
    // Fixed-step frequencies skip straight to the first occurrence at or
    // after the window start instead of iterating through the gap.
    let k = match frequency {
        Frequency::Daily | Frequency::Weekly if anchor < range.start => {
            let step = match frequency {
                Frequency::Daily => Duration::days(1),
                _ => Duration::weeks(1),
            }
            .num_milliseconds();
            let gap = (range.start - anchor).num_milliseconds();
            let steps = gap.div_euclid(step) + i64::from(gap.rem_euclid(step) != 0);
            u32::try_from(steps).unwrap_or(u32::MAX)
        }
        _ => 0,
    };

    Occurrences {
        anchor,
        frequency,
        range: *range,
        k,
        done: anchor >= range.end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn collect(anchor: DateTime<Utc>, frequency: Frequency, range: &DateRange) -> Vec<DateTime<Utc>> {
        occurrences(anchor, frequency, range).collect()
    }

    #[test]
    fn weekly_window_is_half_open() {
        let range = DateRange::new(utc(2024, 1, 1), utc(2024, 1, 22));
        let dates = collect(utc(2024, 1, 1), Frequency::Weekly, &range);
        // 2024-01-22 is excluded: the window end is exclusive.
        assert_eq!(dates, vec![utc(2024, 1, 1), utc(2024, 1, 8), utc(2024, 1, 15)]);
    }

    #[test]
    fn monthly_clamps_to_shorter_months() {
        let range = DateRange::new(utc(2024, 1, 1), utc(2024, 4, 1));
        let dates = collect(utc(2024, 1, 31), Frequency::Monthly, &range);
        // 2024 is a leap year: Jan 31 clamps to Feb 29, then back to Mar 31.
        assert_eq!(dates, vec![utc(2024, 1, 31), utc(2024, 2, 29), utc(2024, 3, 31)]);
    }

    #[test]
    fn one_off_inside_window() {
        let range = DateRange::new(utc(2024, 1, 1), utc(2024, 2, 1));
        let dates = collect(utc(2024, 1, 15), Frequency::None, &range);
        assert_eq!(dates, vec![utc(2024, 1, 15)]);
    }

    #[test]
    fn one_off_outside_window() {
        let range = DateRange::new(utc(2024, 1, 1), utc(2024, 2, 1));
        assert!(collect(utc(2024, 2, 15), Frequency::None, &range).is_empty());
        assert!(collect(utc(2023, 12, 31), Frequency::None, &range).is_empty());
    }

    #[test]
    fn anchor_at_or_after_end_is_empty_for_every_frequency() {
        let range = DateRange::new(utc(2024, 1, 1), utc(2024, 2, 1));
        for frequency in [
            Frequency::None,
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
        ] {
            assert!(collect(utc(2024, 2, 1), frequency, &range).is_empty());
            assert!(collect(utc(2024, 3, 10), frequency, &range).is_empty());
        }
    }

    #[test]
    fn daily_anchor_before_window_fast_forwards() {
        let range = DateRange::new(utc(2024, 3, 10), utc(2024, 3, 13));
        let dates = collect(utc(2024, 1, 1), Frequency::Daily, &range);
        assert_eq!(dates, vec![utc(2024, 3, 10), utc(2024, 3, 11), utc(2024, 3, 12)]);
    }

    #[test]
    fn weekly_anchor_before_window_keeps_phase() {
        // Anchored on a Monday; the window opens mid-week, so the first
        // occurrence is the next Monday, not the window start.
        let range = DateRange::new(utc(2024, 1, 3), utc(2024, 1, 17));
        let dates = collect(utc(2024, 1, 1), Frequency::Weekly, &range);
        assert_eq!(dates, vec![utc(2024, 1, 8), utc(2024, 1, 15)]);
    }

    #[test]
    fn monthly_anchor_before_window() {
        let range = DateRange::new(utc(2024, 3, 1), utc(2024, 5, 1));
        let dates = collect(utc(2024, 1, 31), Frequency::Monthly, &range);
        assert_eq!(dates, vec![utc(2024, 3, 31), utc(2024, 4, 30)]);
    }

    #[test]
    fn sequence_is_restartable() {
        let range = DateRange::new(utc(2024, 1, 1), utc(2024, 1, 22));
        let first: Vec<_> = occurrences(utc(2024, 1, 1), Frequency::Weekly, &range).collect();
        let second: Vec<_> = occurrences(utc(2024, 1, 1), Frequency::Weekly, &range).collect();
        assert_eq!(first, second);
    }
}
