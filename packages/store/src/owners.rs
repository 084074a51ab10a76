//! Index from result id to the athlete whose embedded results contain it.
//!
//! Results do not point back at their athlete on the wire. The index is built
//! once per athlete list so the result table can look up name, gender and age
//! per row without rescanning every athlete.

use std::collections::HashMap;

use crate::models::{Athlete, ResultRecord};

/// Shown in the athlete column when no athlete owns a result.
pub const UNKNOWN_ATHLETE: &str = "Unknown Athlete";

#[derive(Clone, Debug, Default)]
pub struct ResultOwners<'a> {
    athletes: &'a [Athlete],
    by_result: HashMap<u64, usize>,
}

impl<'a> ResultOwners<'a> {
    /// Build the index. If two athletes claim the same result id the first wins.
    pub fn new(athletes: &'a [Athlete]) -> Self {
        let mut by_result = HashMap::new();
        for (idx, athlete) in athletes.iter().enumerate() {
            for result_id in athlete.results.iter().filter_map(|r| r.id) {
                by_result.entry(result_id).or_insert(idx);
            }
        }
        Self { athletes, by_result }
    }

    /// Owning athlete of a result, if it has been persisted and assigned.
    pub fn owner(&self, result: &ResultRecord) -> Option<&'a Athlete> {
        let idx = *self.by_result.get(&result.id?)?;
        self.athletes.get(idx)
    }

    pub fn owner_id(&self, result: &ResultRecord) -> Option<u64> {
        self.owner(result).and_then(|a| a.id)
    }

    pub fn athlete_name(&self, result: &ResultRecord) -> &'a str {
        self.owner(result)
            .map(|a| a.name.as_str())
            .unwrap_or(UNKNOWN_ATHLETE)
    }

    pub fn len(&self) -> usize {
        self.by_result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_result.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Discipline, ResultType};
    use chrono::NaiveDate;

    fn result(id: Option<u64>) -> ResultRecord {
        ResultRecord {
            id,
            result_type: ResultType::Points,
            date: NaiveDate::from_ymd_opt(2023, 9, 9).unwrap(),
            result_value: "10".to_string(),
            discipline: Discipline {
                id: Some(1),
                name: "Darts".to_string(),
                result_type: ResultType::Points,
            },
        }
    }

    fn athlete(id: u64, name: &str, results: Vec<ResultRecord>) -> Athlete {
        Athlete {
            id: Some(id),
            name: name.to_string(),
            age: 20,
            gender: "Male".to_string(),
            club: "Club".to_string(),
            disciplines: vec![],
            results,
        }
    }

    #[test]
    fn test_lookup() {
        let athletes = vec![
            athlete(1, "Ann", vec![result(Some(10)), result(Some(11))]),
            athlete(2, "Ben", vec![result(Some(12))]),
        ];
        let owners = ResultOwners::new(&athletes);

        assert_eq!(owners.len(), 3);
        assert_eq!(owners.athlete_name(&result(Some(11))), "Ann");
        assert_eq!(owners.owner_id(&result(Some(12))), Some(2));
        assert_eq!(owners.athlete_name(&result(Some(99))), UNKNOWN_ATHLETE);
        assert!(owners.owner(&result(None)).is_none());
    }

    #[test]
    fn test_first_claim_wins() {
        let athletes = vec![
            athlete(1, "Ann", vec![result(Some(10))]),
            athlete(2, "Ben", vec![result(Some(10))]),
        ];
        let owners = ResultOwners::new(&athletes);
        assert_eq!(owners.owner_id(&result(Some(10))), Some(1));
    }
}
