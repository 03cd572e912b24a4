use chrono::{NaiveDate, NaiveTime};

use crate::models::forecast::ForecastRecord;

/// Keep only records whose time-of-day falls strictly between 05:59:00 and
/// 22:59:00, preserving input order.
pub fn filter_daytime(records: Vec<ForecastRecord>) -> Vec<ForecastRecord> {
    let day_start = NaiveTime::from_hms_opt(5, 59, 0).unwrap();
    let day_end = NaiveTime::from_hms_opt(22, 59, 0).unwrap();
    records
        .into_iter()
        .filter(|r| r.time > day_start && r.time < day_end)
        .collect()
}

/// Contiguous run of forecast records sharing one calendar date.
/// Never empty: the only way to build one is through `group_by_day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    date: NaiveDate,
    records: Vec<ForecastRecord>,
}

impl DayGroup {
    fn new(first: ForecastRecord) -> Self {
        Self {
            date: first.date,
            records: vec![first],
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn records(&self) -> &[ForecastRecord] {
        &self.records
    }

    /// First record of the day. Total: every group holds at least one record.
    pub fn first(&self) -> &ForecastRecord {
        &self.records[0]
    }
}

/// Partition a chronologically ordered sequence into contiguous same-date
/// runs. Input order is kept as-is and nothing is re-sorted; out-of-order
/// input produces duplicate groups for a date (undefined behavior for the
/// caller, not detected here).
pub fn group_by_day(records: Vec<ForecastRecord>) -> Vec<DayGroup> {
    let mut days: Vec<DayGroup> = Vec::new();
    for record in records {
        match days.last_mut() {
            Some(day) if day.date == record.date => day.records.push(record),
            _ => days.push(DayGroup::new(record)),
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, time: &str) -> ForecastRecord {
        ForecastRecord {
            date: date.parse().unwrap(),
            time: NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
            temp: 70,
            feels_like: 68,
            wind_speed: 5,
            precip_chance: 10,
        }
    }

    #[test]
    fn test_filter_daytime_bounds_are_strict() {
        let records = vec![
            record("2026-08-07", "03:00:00"),
            record("2026-08-07", "05:59:00"),
            record("2026-08-07", "06:00:00"),
            record("2026-08-07", "21:00:00"),
            record("2026-08-07", "23:00:00"),
        ];
        let kept = filter_daytime(records);
        let times: Vec<String> = kept.iter().map(|r| r.time.to_string()).collect();
        assert_eq!(times, vec!["06:00:00", "21:00:00"]);
    }

    #[test]
    fn test_filter_daytime_preserves_order() {
        let records = vec![
            record("2026-08-07", "09:00:00"),
            record("2026-08-07", "12:00:00"),
            record("2026-08-08", "06:00:00"),
        ];
        let kept = filter_daytime(records.clone());
        assert_eq!(kept, records);
    }

    #[test]
    fn test_filter_daytime_empty() {
        assert!(filter_daytime(Vec::new()).is_empty());
    }

    #[test]
    fn test_group_by_day_concatenation_equals_input() {
        let records = vec![
            record("2026-08-07", "18:00:00"),
            record("2026-08-07", "21:00:00"),
            record("2026-08-08", "06:00:00"),
            record("2026-08-08", "09:00:00"),
            record("2026-08-09", "06:00:00"),
        ];
        let days = group_by_day(records.clone());
        assert_eq!(days.len(), 3);

        let rejoined: Vec<ForecastRecord> = days
            .iter()
            .flat_map(|d| d.records().iter().cloned())
            .collect();
        assert_eq!(rejoined, records);
    }

    #[test]
    fn test_group_by_day_single_date_per_group() {
        let records = vec![
            record("2026-08-07", "06:00:00"),
            record("2026-08-07", "09:00:00"),
            record("2026-08-08", "06:00:00"),
        ];
        let days = group_by_day(records);
        for day in &days {
            assert!(day.records().iter().all(|r| r.date == day.date()));
            assert_eq!(day.first().date, day.date());
        }
    }

    #[test]
    fn test_group_by_day_empty() {
        assert!(group_by_day(Vec::new()).is_empty());
    }
}
