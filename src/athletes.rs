use crate::models::{ActivityRecord, Athlete, AthleteMetadata};
use std::collections::HashMap;

/// Athletes appear in order of their first activity and keep their records in feed order.
pub fn group_by_athlete(activities: &[ActivityRecord]) -> Vec<Athlete> {
    let mut athletes: Vec<Athlete> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for activity in activities {
        let slot = *index.entry(activity.athlete_id).or_insert_with(|| {
            athletes.push(Athlete::new(activity.athlete_id));
            athletes.len() - 1
        });
        athletes[slot].activities.push(activity.clone());
    }

    athletes
}

pub fn enrich(athletes: &mut [Athlete], metadata: &[AthleteMetadata]) {
    for athlete in athletes.iter_mut() {
        let Some(info) = metadata.iter().find(|m| m.athlete_id == athlete.athlete_id) else {
            continue;
        };
        athlete.first_name = info.first_name.clone();
        athlete.last_name = info.last_name.clone();
        athlete.mileage_goal = sanitize_goal(info.mileage_goal);
        athlete.long_run_goal = sanitize_goal(info.long_run_goal);
    }
}

fn sanitize_goal(goal: Option<f64>) -> f64 {
    match goal {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}
