pub mod classify;
pub mod grouping;
pub mod render;
pub mod slots;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::forecast::ForecastRecord;
use self::grouping::{filter_daytime, group_by_day, DayGroup};

/// Play-condition bounds, checked strictly: a value sitting exactly on a
/// bound counts as unsuitable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuitabilityThresholds {
    #[serde(default = "default_min_temp")]
    pub min_temp: i32,
    #[serde(default = "default_max_temp")]
    pub max_temp: i32,
    #[serde(default = "default_max_wind_speed")]
    pub max_wind_speed: u32,
    #[serde(default = "default_max_precip_chance")]
    pub max_precip_chance: u32,
}

impl Default for SuitabilityThresholds {
    fn default() -> Self {
        Self {
            min_temp: default_min_temp(),
            max_temp: default_max_temp(),
            max_wind_speed: default_max_wind_speed(),
            max_precip_chance: default_max_precip_chance(),
        }
    }
}

fn default_min_temp() -> i32 { 40 }
fn default_max_temp() -> i32 { 90 }
fn default_max_wind_speed() -> u32 { 15 }
fn default_max_precip_chance() -> u32 { 30 }

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("minimum temperature ({min}°F) must be below maximum temperature ({max}°F)")]
    InvalidTemperatureRange { min: i32, max: i32 },
}

impl SuitabilityThresholds {
    /// Only the temperature range is validated; an out-of-range
    /// precipitation bound just makes that check unreachable.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if self.min_temp >= self.max_temp {
            return Err(ThresholdError::InvalidTemperatureRange {
                min: self.min_temp,
                max: self.max_temp,
            });
        }
        Ok(())
    }
}

/// One fetched forecast, filtered to daytime windows and grouped by
/// calendar date. Held read-only by the presentation layer and replaced
/// wholesale on the next fetch.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    days: Vec<DayGroup>,
}

impl Calendar {
    /// Filter and group a chronologically ordered record list.
    /// An empty list yields an empty calendar, never an error.
    pub fn build(records: Vec<ForecastRecord>) -> Self {
        Self {
            days: group_by_day(filter_daytime(records)),
        }
    }

    pub fn days(&self) -> &[DayGroup] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
