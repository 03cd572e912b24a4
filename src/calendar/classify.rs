use crate::models::forecast::ForecastRecord;

use super::SuitabilityThresholds;

/// A single violated play-condition check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooCold,
    TooHot,
    TooWindy,
    TooWet,
}

impl Violation {
    pub fn emoji(&self) -> &'static str {
        match self {
            Violation::TooCold => "🥶",
            Violation::TooHot => "🥵",
            Violation::TooWindy => "🌪️",
            Violation::TooWet => "🌧️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Violation::TooCold => "too cold",
            Violation::TooHot => "too hot",
            Violation::TooWindy => "too windy",
            Violation::TooWet => "high chance of precipitation",
        }
    }
}

/// Outcome of checking one record against the thresholds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    violations: Vec<Violation>,
}

impl Verdict {
    pub fn suitable(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

/// Check a record against the thresholds. All four bounds are strict, so a
/// value equal to a threshold is a violation. Every failed check is
/// surfaced, not just the first.
pub fn classify(record: &ForecastRecord, thresholds: &SuitabilityThresholds) -> Verdict {
    let mut violations = Vec::new();
    if record.temp <= thresholds.min_temp {
        violations.push(Violation::TooCold);
    }
    if record.temp >= thresholds.max_temp {
        violations.push(Violation::TooHot);
    }
    if record.wind_speed >= thresholds.max_wind_speed {
        violations.push(Violation::TooWindy);
    }
    if record.precip_chance >= thresholds.max_precip_chance {
        violations.push(Violation::TooWet);
    }
    Verdict { violations }
}
