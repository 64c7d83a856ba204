use crate::errors::MileageError;
use crate::models::{Athlete, AthleteSummary, WeeklyResponse, WeeklySummary};
use crate::render::build_table;
use crate::selection::SelectionPolicy;
use crate::snapshot::ActivitySnapshot;
use crate::week::{iso_day, WeekSelection, WeekWindow};
use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

/// Records are summed in feed order so identical inputs give bit-identical totals.
pub fn aggregate(athlete: Option<&Athlete>, window: &WeekWindow) -> WeeklySummary {
    let Some(athlete) = athlete else {
        return WeeklySummary::default();
    };

    let mut summary = WeeklySummary {
        goal: athlete.mileage_goal,
        long_run_goal: athlete.long_run_goal,
        ..WeeklySummary::default()
    };

    for activity in &athlete.activities {
        let date = match activity.calendar_date() {
            Ok(date) => date,
            Err(err) => {
                debug!("skipping activity: {err}");
                continue;
            }
        };
        if !window.contains(date) {
            continue;
        }

        let distance = activity.distance();
        summary.daily_mileage.add(date.weekday(), distance);
        summary.total += distance;
        summary.longest_run = summary.longest_run.max(distance);
    }

    summary.remaining = (summary.goal - summary.total).max(0.0);
    summary
}

pub fn build_weekly(
    snapshot: &ActivitySnapshot,
    policy: &SelectionPolicy,
    selection: WeekSelection,
) -> WeeklyResponse {
    build_weekly_at(Local::now().date_naive(), snapshot, policy, selection)
}

pub fn build_weekly_at(
    today: NaiveDate,
    snapshot: &ActivitySnapshot,
    policy: &SelectionPolicy,
    selection: WeekSelection,
) -> WeeklyResponse {
    let window = selection.resolve_at(today);
    let athlete = policy.select(&snapshot.athletes);
    if athlete.is_none() {
        debug!("{} for {policy:?}, rendering zero summary", MileageError::NoAthleteFound);
    }

    let summary = aggregate(athlete, &window);

    WeeklyResponse {
        week_start: iso_day(window.start()),
        week_end: iso_day(window.end()),
        athlete: athlete.map(|athlete| AthleteSummary {
            athlete_id: athlete.athlete_id,
            name: athlete.display_name(),
        }),
        table: build_table(&summary, &window),
        summary,
    }
}
