use crate::errors::MileageError;
use crate::models::WeekOption;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const PREVIOUS_WEEKS: i64 = 4;

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => panic!("23:59:59.999 is a valid time"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl WeekWindow {
    /// Sunday closes its week rather than opening the next.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, MileageError> {
        let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| MileageError::InvalidWeek(raw.to_string()))?;
        Ok(Self::containing(date))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn start_at(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    pub fn end_at(&self) -> NaiveDateTime {
        self.end.and_time(END_OF_DAY)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..7).map(move |offset| self.start + Duration::days(offset))
    }

    pub fn previous(&self, weeks: i64) -> Self {
        Self::containing(self.start - Duration::weeks(weeks))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekSelection {
    Current,
    Starting(WeekWindow),
}

impl WeekSelection {
    pub fn parse(raw: Option<&str>) -> Result<Self, MileageError> {
        match raw.map(str::trim) {
            None | Some("") | Some("current") => Ok(Self::Current),
            Some(value) => WeekWindow::parse(value).map(Self::Starting),
        }
    }

    pub fn resolve_at(&self, today: NaiveDate) -> WeekWindow {
        match self {
            Self::Current => WeekWindow::containing(today),
            Self::Starting(window) => *window,
        }
    }
}

pub fn format_day(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn iso_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn selectable_weeks(today: NaiveDate) -> Vec<WeekOption> {
    let current = WeekWindow::containing(today);
    let mut weeks = Vec::with_capacity(PREVIOUS_WEEKS as usize + 1);
    weeks.push(WeekOption {
        value: "current".to_string(),
        label: "Current week".to_string(),
        start: iso_day(current.start()),
    });
    for offset in 1..=PREVIOUS_WEEKS {
        let week = current.previous(offset);
        weeks.push(WeekOption {
            value: iso_day(week.start()),
            label: format!("Week of {}", format_day(week.start())),
            start: iso_day(week.start()),
        });
    }
    weeks
}
