use crate::models::{weekday_name, TableRow, WeeklySummary, WeeklyTable};
use crate::week::{format_day, WeekWindow};
use chrono::Datelike;

pub const EMPTY_MILEAGE: &str = "--";

pub fn build_table(summary: &WeeklySummary, window: &WeekWindow) -> WeeklyTable {
    let rows = window
        .days()
        .map(|date| {
            let miles = summary.daily_mileage.get(date.weekday());
            TableRow {
                day: weekday_name(date.weekday()).to_string(),
                date_label: format_day(date),
                mileage: if miles > 0.0 {
                    format_miles(miles)
                } else {
                    EMPTY_MILEAGE.to_string()
                },
            }
        })
        .collect();

    WeeklyTable {
        rows,
        total: format_miles(summary.total),
        goal: format_miles(summary.goal),
        completed: format_miles(summary.total),
        remaining: format_miles(summary.remaining),
    }
}

pub fn format_miles(miles: f64) -> String {
    format!("{miles:.2}")
}
