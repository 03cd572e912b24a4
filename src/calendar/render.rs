use crate::models::forecast::ForecastRecord;

use super::classify::classify;
use super::slots::{align_to_slots, SLOT_LABELS};
use super::{Calendar, SuitabilityThresholds};

/// Legend printed under every non-empty calendar
pub const LEGEND: &str = "😀 = good conditions; 🥶 = too cold; 🥵 = too hot; 🌪️ = too windy; 🌧️ = high chance of precipitation";

/// Placeholder cell for slots outside the forecast horizon
const NO_DATA: &str = "-";

/// One table column: a heading plus exactly six slot-aligned cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub heading: String,
    pub cells: [String; 6],
}

/// Day-keyed suitability table. The first column is always the fixed
/// "Time of day" label column; the rest are dates in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTable {
    pub columns: Vec<TableColumn>,
}

/// Build the suitability table for a calendar under the given thresholds
pub fn table(calendar: &Calendar, thresholds: &SuitabilityThresholds) -> CalendarTable {
    let mut columns = vec![TableColumn {
        heading: "Time of day".to_string(),
        cells: SLOT_LABELS.map(String::from),
    }];

    for day in calendar.days() {
        let slots = align_to_slots(day);
        columns.push(TableColumn {
            heading: day.date().format("%Y-%m-%d").to_string(),
            cells: slots.map(|slot| match slot {
                Some(record) => format_cell(record, thresholds),
                None => NO_DATA.to_string(),
            }),
        });
    }

    CalendarTable { columns }
}

/// One-line cell: verdict marks, then the numbers behind them.
/// Suitable windows get 😀; unsuitable ones lead with one mark per
/// violated check.
pub fn format_cell(record: &ForecastRecord, thresholds: &SuitabilityThresholds) -> String {
    let verdict = classify(record, thresholds);
    let marks = if verdict.suitable() {
        "😀".to_string()
    } else {
        verdict
            .violations()
            .iter()
            .map(|v| v.emoji())
            .collect::<String>()
    };
    format!(
        "{} {}°F (feels {}°F), {} mph, {}%",
        marks, record.temp, record.feels_like, record.wind_speed, record.precip_chance
    )
}

/// Print the table as a fixed-width console grid, one column per day
pub fn print_table(table: &CalendarTable) {
    let widths: Vec<usize> = table
        .columns
        .iter()
        .map(|c| {
            c.cells
                .iter()
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
                .max(c.heading.chars().count())
        })
        .collect();

    let header = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, &w)| format!("{:<w$}", c.heading))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header);
    println!("{}", "-".repeat(header.chars().count()));

    for row in 0..SLOT_LABELS.len() {
        let line = table
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{:<w$}", c.cells[row]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

/// Per-day listing, one line per populated slot, with feels-like and the
/// failing checks spelled out
pub fn print_detailed(calendar: &Calendar, thresholds: &SuitabilityThresholds) {
    for day in calendar.days() {
        println!("\n{}", day.date().format("%A %Y-%m-%d"));
        let slots = align_to_slots(day);
        for (label, slot) in SLOT_LABELS.iter().zip(slots) {
            let Some(record) = slot else { continue };
            let verdict = classify(record, thresholds);
            let status = if verdict.suitable() {
                "suitable".to_string()
            } else {
                verdict
                    .violations()
                    .iter()
                    .map(|v| v.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            println!(
                "  {:<19} {:>3}°F (feels like {}°F)  wind {:>2} mph  precip {:>3}%  [{}]",
                label, record.temp, record.feels_like, record.wind_speed, record.precip_chance, status
            );
        }
    }
}
