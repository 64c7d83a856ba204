use crate::models::Athlete;

pub const DEFAULT_TARGET_NAME: &str = "tori";

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionPolicy {
    ById(i64),
    /// Falls back to the last athlete in feed order when no name matches.
    ByNameWithFallback(String),
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::ByNameWithFallback(DEFAULT_TARGET_NAME.to_string())
    }
}

impl SelectionPolicy {
    pub fn select<'a>(&self, athletes: &'a [Athlete]) -> Option<&'a Athlete> {
        match self {
            Self::ById(id) => athletes.iter().find(|athlete| athlete.athlete_id == *id),
            Self::ByNameWithFallback(needle) => {
                let needle = needle.to_lowercase();
                athletes
                    .iter()
                    .find(|athlete| name_matches(athlete, &needle))
                    .or_else(|| athletes.last())
            }
        }
    }
}

fn name_matches(athlete: &Athlete, needle: &str) -> bool {
    let first_matches = athlete
        .first_name
        .as_deref()
        .is_some_and(|first| first.to_lowercase() == needle);
    let full_matches = athlete
        .full_name()
        .is_some_and(|full| full.to_lowercase().contains(needle));
    first_matches || full_matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete(id: i64, first: Option<&str>, last: Option<&str>) -> Athlete {
        let mut athlete = Athlete::new(id);
        athlete.first_name = first.map(str::to_string);
        athlete.last_name = last.map(str::to_string);
        athlete
    }

    #[test]
    fn name_policy_matches_first_name_case_insensitively() {
        let athletes = vec![
            athlete(1, Some("TORI"), None),
            athlete(2, Some("John"), Some("Smith")),
        ];
        let chosen = SelectionPolicy::default().select(&athletes).unwrap();
        assert_eq!(chosen.athlete_id, 1);
    }

    #[test]
    fn name_policy_matches_substring_of_full_name() {
        let athletes = vec![
            athlete(1, Some("John"), Some("Smith")),
            athlete(2, Some("Victoria"), Some("Reyes")),
            athlete(3, Some("Ann"), Some("Lee")),
        ];
        let chosen = SelectionPolicy::default().select(&athletes).unwrap();
        assert_eq!(chosen.athlete_id, 2);
    }

    #[test]
    fn substring_needs_both_names() {
        // Only a full "first last" name is searched for substrings.
        let athletes = vec![athlete(1, Some("Victoria"), None), athlete(2, None, None)];
        let chosen = SelectionPolicy::default().select(&athletes).unwrap();
        assert_eq!(chosen.athlete_id, 2);
    }

    #[test]
    fn name_policy_falls_back_to_last_athlete() {
        let athletes = vec![athlete(5, None, None), athlete(9, Some("John"), Some("Smith"))];
        let chosen = SelectionPolicy::default().select(&athletes).unwrap();
        assert_eq!(chosen.athlete_id, 9);
    }

    #[test]
    fn fallback_follows_feed_order_not_highest_id() {
        let athletes = vec![athlete(9, None, None), athlete(3, Some("John"), None)];
        let chosen = SelectionPolicy::default().select(&athletes).unwrap();
        assert_eq!(chosen.athlete_id, 3);
    }

    #[test]
    fn empty_set_selects_nobody() {
        assert!(SelectionPolicy::default().select(&[]).is_none());
        assert!(SelectionPolicy::ById(1).select(&[]).is_none());
    }

    #[test]
    fn id_policy_requires_exact_match() {
        let athletes = vec![athlete(1, Some("Tori"), None), athlete(2, None, None)];
        assert_eq!(SelectionPolicy::ById(2).select(&athletes).unwrap().athlete_id, 2);
        assert!(SelectionPolicy::ById(3).select(&athletes).is_none());
    }
}
