//! # Form drafts and validation
//!
//! Each form edits a draft: a loosely typed, uncommitted copy of a record that
//! holds exactly what the inputs hold (numbers as strings, selections as ids).
//! `Default` is the blank template used in create mode; `From<&Record>` seeds
//! the draft in edit mode.
//!
//! `validate` turns a draft into the record to submit, or into the list of
//! human-readable messages shown beneath the form. Validation never touches the
//! network; data the form needs (the discipline catalogue) is passed in.

use chrono::NaiveDate;
use thiserror::Error;

use crate::age_group::AgeGroup;
use crate::models::{Athlete, Discipline, Product, ResultRecord, ResultType};
use crate::result_value::{is_valid_time, parse_number};

pub const MSG_REQUIRED: &str = "Please fill out all fields.";
pub const MSG_AGE_NUMBER: &str = "Age must be a whole number.";
pub const MSG_MIN_AGE: &str = "Athletes must be at least 6 years old.";
pub const MSG_DISCIPLINE: &str = "Select at least one discipline.";
pub const MSG_DATE: &str = "Date must be in the format YYYY-MM-DD.";
pub const MSG_TIME_FORMAT: &str = "Time results must be in the format hh:mm:ss:ms.";
pub const MSG_NUMBER: &str = "Result value must be a non-negative number.";
pub const MSG_ATHLETE: &str = "Select an athlete.";
pub const MSG_UNKNOWN_DISCIPLINE: &str = "The selected discipline no longer exists.";
pub const MSG_PRICE: &str = "Price must be a non-negative number.";

/// Messages collected by a failed validation, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{}", .0.join(" "))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    fn push(&mut self, msg: &str) {
        if !self.0.iter().any(|m| m == msg) {
            self.0.push(msg.to_string());
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Athlete
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AthleteDraft {
    pub id: Option<u64>,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub club: String,
    /// Ids of the checked disciplines.
    pub discipline_ids: Vec<u64>,
    /// Carried through unchanged so an edit does not drop existing results.
    pub results: Vec<ResultRecord>,
}

impl From<&Athlete> for AthleteDraft {
    fn from(a: &Athlete) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            age: a.age.to_string(),
            gender: a.gender.clone(),
            club: a.club.clone(),
            discipline_ids: a.disciplines.iter().filter_map(|d| d.id).collect(),
            results: a.results.clone(),
        }
    }
}

impl AthleteDraft {
    pub fn toggle_discipline(&mut self, id: u64) {
        if let Some(pos) = self.discipline_ids.iter().position(|d| *d == id) {
            self.discipline_ids.remove(pos);
        } else {
            self.discipline_ids.push(id);
        }
    }

    pub fn has_discipline(&self, id: u64) -> bool {
        self.discipline_ids.contains(&id)
    }

    /// Build the athlete to submit. `catalogue` is the backend's discipline list.
    pub fn validate(&self, catalogue: &[Discipline]) -> Result<Athlete, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if blank(&self.name) || blank(&self.age) || blank(&self.gender) || blank(&self.club) {
            errors.push(MSG_REQUIRED);
        }

        let age = match self.age.trim().parse::<u32>() {
            Ok(age) => Some(age),
            Err(_) if blank(&self.age) => None,
            Err(_) => {
                errors.push(MSG_AGE_NUMBER);
                None
            }
        };
        if age.is_some_and(|a| a < AgeGroup::MIN_AGE) {
            errors.push(MSG_MIN_AGE);
        }

        let disciplines: Vec<Discipline> = catalogue
            .iter()
            .filter(|d| d.id.is_some_and(|id| self.has_discipline(id)))
            .cloned()
            .collect();
        if disciplines.is_empty() {
            errors.push(MSG_DISCIPLINE);
        }

        errors.into_result(|| Athlete {
            id: self.id,
            name: self.name.trim().to_string(),
            age: age.unwrap_or_default(),
            gender: self.gender.clone(),
            club: self.club.trim().to_string(),
            disciplines,
            results: self.results.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Discipline
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisciplineDraft {
    pub id: Option<u64>,
    pub name: String,
    pub result_type: Option<ResultType>,
}

impl From<&Discipline> for DisciplineDraft {
    fn from(d: &Discipline) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            result_type: Some(d.result_type),
        }
    }
}

impl DisciplineDraft {
    pub fn validate(&self) -> Result<Discipline, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let result_type = match self.result_type {
            Some(t) if !blank(&self.name) => Some(t),
            _ => {
                errors.push(MSG_REQUIRED);
                None
            }
        };
        errors.into_result(|| Discipline {
            id: self.id,
            name: self.name.trim().to_string(),
            result_type: result_type.unwrap_or(ResultType::Time),
        })
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultDraft {
    pub id: Option<u64>,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub date: String,
    pub result_value: String,
    pub discipline_id: Option<u64>,
    /// Athlete the result is assigned to.
    pub athlete_id: Option<u64>,
}

impl ResultDraft {
    /// Seed the draft from an existing result and its owning athlete.
    pub fn from_result(result: &ResultRecord, athlete_id: Option<u64>) -> Self {
        Self {
            id: result.id,
            date: result.date.format("%Y-%m-%d").to_string(),
            result_value: result.result_value.clone(),
            discipline_id: result.discipline.id,
            athlete_id,
        }
    }

    /// Result type implied by the selected discipline.
    pub fn result_type(&self, catalogue: &[Discipline]) -> Option<ResultType> {
        self.discipline(catalogue).map(|d| d.result_type)
    }

    fn discipline<'a>(&self, catalogue: &'a [Discipline]) -> Option<&'a Discipline> {
        let id = self.discipline_id?;
        catalogue.iter().find(|d| d.id == Some(id))
    }

    /// Build the result to submit together with the owning athlete id.
    pub fn validate(&self, catalogue: &[Discipline]) -> Result<(ResultRecord, u64), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if blank(&self.date) || blank(&self.result_value) || self.discipline_id.is_none() {
            errors.push(MSG_REQUIRED);
        }

        let date = if blank(&self.date) {
            None
        } else {
            let parsed = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
            if parsed.is_none() {
                errors.push(MSG_DATE);
            }
            parsed
        };

        let discipline = self.discipline(catalogue);
        if self.discipline_id.is_some() && discipline.is_none() {
            errors.push(MSG_UNKNOWN_DISCIPLINE);
        }

        let value = self.result_value.trim();
        if let (Some(d), false) = (discipline, value.is_empty()) {
            match d.result_type {
                ResultType::Time if !is_valid_time(value) => errors.push(MSG_TIME_FORMAT),
                ResultType::Distance | ResultType::Points
                    if !parse_number(value).is_some_and(|n| n >= 0.0) =>
                {
                    errors.push(MSG_NUMBER)
                }
                _ => {}
            }
        }

        if self.athlete_id.is_none() {
            errors.push(MSG_ATHLETE);
        }

        match (errors.is_empty(), date, discipline, self.athlete_id) {
            (true, Some(date), Some(discipline), Some(athlete_id)) => Ok((
                ResultRecord {
                    id: self.id,
                    result_type: discipline.result_type,
                    date,
                    result_value: value.to_string(),
                    discipline: discipline.clone(),
                },
                athlete_id,
            )),
            _ => Err(errors),
        }
    }
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<u64>,
    pub name: String,
    pub price: String,
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            price: p.price.to_string(),
        }
    }
}

impl ProductDraft {
    pub fn validate(&self) -> Result<Product, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if blank(&self.name) || blank(&self.price) {
            errors.push(MSG_REQUIRED);
        }
        let price = parse_number(&self.price).filter(|p| *p >= 0.0);
        if price.is_none() && !blank(&self.price) {
            errors.push(MSG_PRICE);
        }
        errors.into_result(|| Product {
            id: self.id,
            name: self.name.trim().to_string(),
            price: price.unwrap_or_default(),
        })
    }
}
