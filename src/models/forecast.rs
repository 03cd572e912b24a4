use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// One match from the OpenWeatherMap direct geocoding API
#[derive(Debug, Clone, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}

impl GeoLocation {
    /// "Terre Haute, IN, US"-style name for report headers
    pub fn display_name(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}, {}", self.name, state, self.country),
            None => format!("{}, {}", self.name, self.country),
        }
    }
}

/// Raw 5-day/3-hour forecast body from the OpenWeatherMap forecast API
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<RawForecastEntry>,
}

/// One raw 3-hour entry as the API returns it
#[derive(Debug, Deserialize)]
pub struct RawForecastEntry {
    pub main: RawMain,
    pub wind: RawWind,
    /// Probability of precipitation as a [0,1] fraction
    #[serde(default)]
    pub pop: f64,
    /// Window start as "YYYY-MM-DD HH:MM:SS" local time
    pub dt_txt: String,
}

#[derive(Debug, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawWind {
    pub speed: f64,
}

/// One 3-hour forecast window, cleaned for classification.
/// Values are truncated to integers, not rounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub temp: i32,
    pub feels_like: i32,
    pub wind_speed: u32,
    pub precip_chance: u32,
}

impl ForecastRecord {
    pub fn from_raw(raw: &RawForecastEntry) -> Result<Self> {
        let (date, time) = raw
            .dt_txt
            .split_once(' ')
            .with_context(|| format!("Malformed forecast timestamp: {}", raw.dt_txt))?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Malformed forecast date: {}", date))?;
        let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
            .with_context(|| format!("Malformed forecast time: {}", time))?;

        Ok(Self {
            date,
            time,
            temp: raw.main.temp as i32,
            feels_like: raw.main.feels_like as i32,
            wind_speed: raw.wind.speed as u32,
            precip_chance: (raw.pop * 100.0) as u32,
        })
    }
}

impl ForecastResponse {
    /// Build one record per raw entry in a single pass, preserving API order.
    pub fn records(&self) -> Result<Vec<ForecastRecord>> {
        self.list.iter().map(ForecastRecord::from_raw).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_entry(dt_txt: &str, pop: f64) -> RawForecastEntry {
        serde_json::from_value(json!({
            "main": {"temp": 72.9, "feels_like": 70.2},
            "wind": {"speed": 10.8},
            "pop": pop,
            "dt_txt": dt_txt
        }))
        .unwrap()
    }

    #[test]
    fn test_from_raw_truncates() {
        let record = ForecastRecord::from_raw(&raw_entry("2026-08-07 15:00:00", 0.34)).unwrap();
        assert_eq!(record.temp, 72);
        assert_eq!(record.feels_like, 70);
        assert_eq!(record.wind_speed, 10);
        assert_eq!(record.precip_chance, 34);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        assert_eq!(record.time, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
    }

    #[test]
    fn test_pop_fraction_to_percent() {
        let zero = ForecastRecord::from_raw(&raw_entry("2026-08-07 15:00:00", 0.0)).unwrap();
        assert_eq!(zero.precip_chance, 0);
        let full = ForecastRecord::from_raw(&raw_entry("2026-08-07 15:00:00", 1.0)).unwrap();
        assert_eq!(full.precip_chance, 100);
        let quarter = ForecastRecord::from_raw(&raw_entry("2026-08-07 15:00:00", 0.25)).unwrap();
        assert_eq!(quarter.precip_chance, 25);
    }

    #[test]
    fn test_malformed_timestamp_errors() {
        assert!(ForecastRecord::from_raw(&raw_entry("2026-08-07T15:00:00", 0.0)).is_err());
        assert!(ForecastRecord::from_raw(&raw_entry("not a date 15:00:00", 0.0)).is_err());
    }

    #[test]
    fn test_records_preserves_order() {
        let response: ForecastResponse = serde_json::from_value(json!({
            "list": [
                {"main": {"temp": 60.0, "feels_like": 58.0}, "wind": {"speed": 4.0}, "pop": 0.0, "dt_txt": "2026-08-07 06:00:00"},
                {"main": {"temp": 68.0, "feels_like": 67.0}, "wind": {"speed": 6.0}, "pop": 0.1, "dt_txt": "2026-08-07 09:00:00"}
            ]
        }))
        .unwrap();

        let records = response.records().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].time < records[1].time);
        assert_eq!(records[0].temp, 60);
    }

    #[test]
    fn test_missing_pop_defaults_to_zero() {
        let raw: RawForecastEntry = serde_json::from_value(json!({
            "main": {"temp": 72.0, "feels_like": 71.0},
            "wind": {"speed": 3.0},
            "dt_txt": "2026-08-07 12:00:00"
        }))
        .unwrap();
        let record = ForecastRecord::from_raw(&raw).unwrap();
        assert_eq!(record.precip_chance, 0);
    }
}
