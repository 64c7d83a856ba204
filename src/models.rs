use crate::errors::MileageError;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// `date` and `distance` stay raw JSON so one bad record cannot fail the whole feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub athlete_id: i64,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub distance: Option<Value>,
}

impl ActivityRecord {
    pub fn new(athlete_id: i64, date: impl Into<String>, distance: f64) -> Self {
        Self {
            athlete_id,
            date: Some(Value::from(date.into())),
            distance: Some(Value::from(distance)),
        }
    }

    pub fn calendar_date(&self) -> Result<NaiveDate, MileageError> {
        let raw = match &self.date {
            Some(Value::String(text)) if !text.trim().is_empty() => text.trim(),
            None | Some(Value::Null) | Some(Value::String(_)) => {
                return Err(MileageError::MalformedActivity(format!(
                    "athlete {} activity has no date",
                    self.athlete_id
                )));
            }
            Some(other) => {
                return Err(MileageError::MalformedActivity(format!(
                    "athlete {} activity has non-text date {other}",
                    self.athlete_id
                )));
            }
        };

        parse_calendar_date(raw).ok_or_else(|| {
            MileageError::MalformedActivity(format!(
                "athlete {} activity has unparseable date '{raw}'",
                self.athlete_id
            ))
        })
    }

    pub fn distance(&self) -> f64 {
        let value = match &self.distance {
            Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
            Some(Value::String(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        if value.is_finite() && value > 0.0 { value } else { 0.0 }
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Timestamps such as "2024-01-03T07:15:00Z" keep only their date part.
    let (day, rest) = (raw.get(..10)?, raw.get(10..)?);
    if rest.starts_with('T') || rest.starts_with(' ') {
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteMetadata {
    pub athlete_id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub mileage_goal: Option<f64>,
    #[serde(default)]
    pub long_run_goal: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Athlete {
    pub athlete_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mileage_goal: f64,
    pub long_run_goal: f64,
    pub activities: Vec<ActivityRecord>,
}

impl Athlete {
    pub fn new(athlete_id: i64) -> Self {
        Self {
            athlete_id,
            first_name: None,
            last_name: None,
            mileage_goal: 0.0,
            long_run_goal: 0.0,
            activities: Vec::new(),
        }
    }

    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        }
    }

    pub fn display_name(&self) -> String {
        self.full_name()
            .or_else(|| self.first_name.clone())
            .unwrap_or_else(|| format!("Athlete #{}", self.athlete_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyMileage {
    #[serde(rename = "Monday")]
    pub monday: f64,
    #[serde(rename = "Tuesday")]
    pub tuesday: f64,
    #[serde(rename = "Wednesday")]
    pub wednesday: f64,
    #[serde(rename = "Thursday")]
    pub thursday: f64,
    #[serde(rename = "Friday")]
    pub friday: f64,
    #[serde(rename = "Saturday")]
    pub saturday: f64,
    #[serde(rename = "Sunday")]
    pub sunday: f64,
}

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl DailyMileage {
    pub fn get(&self, day: Weekday) -> f64 {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn add(&mut self, day: Weekday, distance: f64) {
        let bucket = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *bucket += distance;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, f64)> + '_ {
        WEEKDAYS.iter().map(move |day| (*day, self.get(*day)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, miles)| miles).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub goal: f64,
    pub daily_mileage: DailyMileage,
    pub total: f64,
    pub remaining: f64,
    pub long_run_goal: f64,
    pub longest_run: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub day: String,
    pub date_label: String,
    pub mileage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTable {
    pub rows: Vec<TableRow>,
    pub total: String,
    pub goal: String,
    pub completed: String,
    pub remaining: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekOption {
    pub value: String,
    pub label: String,
    pub start: String,
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub week: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AthleteSummary {
    pub athlete_id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyResponse {
    pub week_start: String,
    pub week_end: String,
    pub athlete: Option<AthleteSummary>,
    pub summary: WeeklySummary,
    pub table: WeeklyTable,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotStatusResponse {
    pub status: String,
    pub snapshot_loaded: bool,
    pub athletes: usize,
    pub metadata_enriched: bool,
    pub loaded_at: Option<String>,
    pub error: Option<String>,
}
