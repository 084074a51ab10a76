//! # Domain models mirrored from the club backend
//!
//! These DTOs are exactly what the REST backend sends and receives. They are
//! `Serialize + Deserialize` with camelCase field names so they round-trip
//! through the backend's JSON unchanged, and `PartialEq + Clone` so they can be
//! passed as Dioxus component props.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Athlete`] | A club member with their disciplines (by reference) and embedded results. |
//! | [`Discipline`] | A competitive category; its [`ResultType`] decides how results are validated and ranked. |
//! | [`ResultRecord`] | A single performance in a discipline on a date. |
//! | [`Product`] | The generic product record of the demo variant. |
//!
//! Identity is the backend-assigned numeric id, `None` until the record has
//! been persisted. Every model implements [`Record`] so generic code (page
//! state, the API client) can read that id.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Genders offered by forms and filters.
pub const GENDERS: [&str; 2] = ["Male", "Female"];

/// Anything the backend assigns an id to.
pub trait Record {
    fn id(&self) -> Option<u64>;

    /// Return a copy carrying the given id.
    fn with_id(&self, id: u64) -> Self
    where
        Self: Sized;
}

/// How results in a discipline are encoded and ranked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultType {
    Time,
    Distance,
    Points,
}

impl ResultType {
    pub const ALL: [ResultType; 3] = [ResultType::Time, ResultType::Distance, ResultType::Points];

    /// Wire name: "TIME", "DISTANCE" or "POINTS".
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Time => "TIME",
            ResultType::Distance => "DISTANCE",
            ResultType::Points => "POINTS",
        }
    }

    /// Human label for select options.
    pub fn label(&self) -> &'static str {
        match self {
            ResultType::Time => "Time",
            ResultType::Distance => "Distance",
            ResultType::Points => "Points",
        }
    }

    /// Unit appended to result values in tables.
    pub fn unit(&self) -> &'static str {
        match self {
            ResultType::Time => "",
            ResultType::Distance => "m",
            ResultType::Points => "points",
        }
    }

    /// Parse the wire name. Used by `<select>` handlers.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Whether a higher value is a better performance.
    pub fn higher_is_better(&self) -> bool {
        !matches!(self, ResultType::Time)
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub result_type: ResultType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Copy of the discipline's result type.
    pub result_type: ResultType,
    pub date: NaiveDate,
    /// Encoded per `result_type`: "hh:mm:ss:ms" for TIME, a number otherwise.
    pub result_value: String,
    pub discipline: Discipline,
}

impl ResultRecord {
    /// Value followed by its unit, e.g. "7.45 m".
    pub fn display_value(&self) -> String {
        match self.result_type.unit() {
            "" => self.result_value.clone(),
            unit => format!("{} {unit}", self.result_value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub club: String,
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
    #[serde(default)]
    pub results: Vec<ResultRecord>,
}

impl Athlete {
    /// Discipline names joined with ", " as shown in the athlete table.
    pub fn discipline_names(&self) -> String {
        self.disciplines
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn has_result(&self, result_id: u64) -> bool {
        self.results.iter().any(|r| r.id == Some(result_id))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub price: f64,
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(
            impl Record for $ty {
                fn id(&self) -> Option<u64> {
                    self.id
                }

                fn with_id(&self, id: u64) -> Self {
                    Self {
                        id: Some(id),
                        ..self.clone()
                    }
                }
            }
        )*
    };
}

impl_record!(Athlete, Discipline, ResultRecord, Product);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_athlete_json_shape() {
        let json = r#"{
            "id": 3,
            "name": "Ida",
            "age": 12,
            "gender": "Female",
            "club": "Lyngby",
            "disciplines": [{"id": 1, "name": "100m", "resultType": "TIME"}],
            "results": [{
                "id": 9,
                "resultType": "TIME",
                "date": "2024-05-01",
                "resultValue": "00:00:14:20",
                "discipline": {"id": 1, "name": "100m", "resultType": "TIME"}
            }]
        }"#;

        let athlete: Athlete = serde_json::from_str(json).unwrap();
        assert_eq!(athlete.id, Some(3));
        assert_eq!(athlete.disciplines[0].result_type, ResultType::Time);
        assert_eq!(athlete.results[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(athlete.has_result(9));
        assert!(!athlete.has_result(10));
    }

    #[test]
    fn test_unsaved_record_omits_id() {
        let discipline = Discipline {
            id: None,
            name: "Long jump".to_string(),
            result_type: ResultType::Distance,
        };
        let json = serde_json::to_value(&discipline).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["resultType"], "DISTANCE");
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{"name": "Bo", "age": 30, "gender": "Male", "club": "AIK"}"#;
        let athlete: Athlete = serde_json::from_str(json).unwrap();
        assert!(athlete.id.is_none());
        assert!(athlete.disciplines.is_empty());
        assert!(athlete.results.is_empty());
    }

    #[test]
    fn test_display_value_units() {
        let discipline = Discipline {
            id: Some(2),
            name: "Long jump".to_string(),
            result_type: ResultType::Distance,
        };
        let mut result = ResultRecord {
            id: Some(1),
            result_type: ResultType::Distance,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            result_value: "7.45".to_string(),
            discipline,
        };
        assert_eq!(result.display_value(), "7.45 m");

        result.result_type = ResultType::Time;
        result.result_value = "00:01:02:300".to_string();
        assert_eq!(result.display_value(), "00:01:02:300");
    }

    #[test]
    fn test_discipline_names_and_with_id() {
        let athlete = Athlete {
            id: None,
            name: "Ida".to_string(),
            age: 12,
            gender: "Female".to_string(),
            club: "Lyngby".to_string(),
            disciplines: vec![
                Discipline { id: Some(1), name: "100m".to_string(), result_type: ResultType::Time },
                Discipline { id: Some(2), name: "High jump".to_string(), result_type: ResultType::Distance },
            ],
            results: vec![],
        };
        assert_eq!(athlete.discipline_names(), "100m, High jump");
        assert_eq!(athlete.with_id(4).id(), Some(4));
    }

    #[test]
    fn test_result_type_parse() {
        assert_eq!(ResultType::parse("POINTS"), Some(ResultType::Points));
        assert_eq!(ResultType::parse("points"), None);
        assert!(ResultType::Distance.higher_is_better());
        assert!(!ResultType::Time.higher_is_better());
    }
}
