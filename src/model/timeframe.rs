//! Hourly simulation timeframe.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// An hourly timestamp index: a start instant plus a period count.
///
/// Every example system spans a handful of one-hour steps; the timeframe
/// fixes both the step count and the calendar anchor of the profile data.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeframe {
    pub start: NaiveDateTime,
    pub periods: usize,
}

impl Timeframe {
    /// Hourly index starting at midnight of the given calendar date.
    ///
    /// # Panics
    ///
    /// Panics if the date is not a valid calendar date.
    pub fn hourly(year: i32, month: u32, day: u32, periods: usize) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("invalid calendar date {year}-{month:02}-{day:02}"));
        Self {
            start: date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            periods,
        }
    }

    /// Hourly index anchored at the current wall-clock time.
    pub fn starting_now(periods: usize) -> Self {
        Self {
            start: chrono::Local::now().naive_local(),
            periods,
        }
    }

    /// Number of one-hour steps.
    pub fn len(&self) -> usize {
        self.periods
    }

    pub fn is_empty(&self) -> bool {
        self.periods == 0
    }

    /// Iterator over the step timestamps.
    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        (0..self.periods).map(|i| self.start + Duration::hours(i as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_counts_periods() {
        let tf = Timeframe::hourly(1990, 7, 13, 3);
        assert_eq!(tf.len(), 3);
        assert!(!tf.is_empty());
    }

    #[test]
    fn timestamps_step_by_one_hour() {
        let tf = Timeframe::hourly(2019, 1, 1, 24);
        let stamps: Vec<_> = tf.timestamps().collect();
        assert_eq!(stamps.len(), 24);
        assert_eq!(stamps[1] - stamps[0], Duration::hours(1));
        assert_eq!(stamps[23] - stamps[0], Duration::hours(23));
    }

    #[test]
    #[should_panic(expected = "invalid calendar date")]
    fn rejects_invalid_date() {
        let _ = Timeframe::hourly(2019, 2, 31, 1);
    }
}
