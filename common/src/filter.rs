//! Date-range filter for submissions.
//!
//! A range is only active when both bounds are set. The lower bound is the
//! start of `from` and the upper bound is `to` at 23:59:59, both in UTC and
//! both inclusive. The backend query and the client-side export filter go
//! through [`DateRange::bounds`] so they select the same rows.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Parses the `yyyy-MM-dd` values of two date inputs. Blank or malformed
    /// values leave that bound unset.
    pub fn from_inputs(from: &str, to: &str) -> Self {
        Self {
            from: parse_input(from),
            to: parse_input(to),
        }
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Inclusive `[from 00:00:00, to 23:59:59]` bounds, or `None` when either
    /// date is missing.
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let (from, to) = (self.from?, self.to?);
        let start_of_day = NaiveTime::from_hms_opt(0, 0, 0)?;
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)?;
        let start = Utc.from_utc_datetime(&from.and_time(start_of_day));
        let end = Utc.from_utc_datetime(&to.and_time(end_of_day));
        Some((start, end))
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        match self.bounds() {
            Some((start, end)) => *timestamp >= start && *timestamp <= end,
            None => true,
        }
    }

    pub fn apply<'a, T, F>(&self, rows: &'a [T], timestamp: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> &DateTime<Utc>,
    {
        rows.iter().filter(|row| self.contains(timestamp(row))).collect()
    }
}

fn parse_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn missing_bound_is_a_no_op() {
        let ts = at(1999, 12, 31, 23, 0, 0);
        assert!(DateRange::default().contains(&ts));
        assert!(DateRange::new(Some(date(2024, 1, 1)), None).contains(&ts));
        assert!(DateRange::new(None, Some(date(2024, 1, 1))).contains(&ts));
        assert_eq!(DateRange::new(Some(date(2024, 1, 1)), None).bounds(), None);
    }

    #[test]
    fn upper_bound_includes_last_second_of_day() {
        let range = DateRange::new(Some(date(2024, 1, 5)), Some(date(2024, 1, 6)));
        assert!(range.contains(&at(2024, 1, 5, 0, 0, 0)));
        assert!(range.contains(&at(2024, 1, 6, 23, 59, 59)));
        assert!(!range.contains(&at(2024, 1, 4, 23, 59, 59)));
        assert!(!range.contains(&at(2024, 1, 7, 0, 0, 0)));
    }

    #[test]
    fn sub_second_past_upper_bound_is_excluded() {
        let range = DateRange::new(Some(date(2024, 1, 5)), Some(date(2024, 1, 5)));
        let late = at(2024, 1, 5, 23, 59, 59) + Duration::milliseconds(500);
        assert!(!range.contains(&late));
    }

    #[test]
    fn single_day_range_spans_whole_day() {
        let range = DateRange::new(Some(date(2024, 3, 1)), Some(date(2024, 3, 1)));
        let (start, end) = range.bounds().unwrap();
        assert_eq!(start, at(2024, 3, 1, 0, 0, 0));
        assert_eq!(end, at(2024, 3, 1, 23, 59, 59));
    }

    #[test]
    fn apply_keeps_exactly_rows_in_range() {
        let rows = vec![
            at(2024, 1, 1, 12, 0, 0),
            at(2024, 1, 10, 23, 59, 59),
            at(2024, 1, 11, 0, 0, 0),
            at(2023, 12, 31, 23, 59, 59),
        ];
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 10)));
        let kept = range.apply(&rows, |ts| ts);
        assert_eq!(kept, vec![&rows[0], &rows[1]]);
    }

    #[test]
    fn inputs_parse_as_iso_dates() {
        let range = DateRange::from_inputs("2024-02-01", " ");
        assert_eq!(range.from, Some(date(2024, 2, 1)));
        assert_eq!(range.to, None);
        assert!(!range.is_active());

        let range = DateRange::from_inputs("02/01/2024", "2024-02-03");
        assert_eq!(range.from, None);
    }
}
