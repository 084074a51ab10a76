//! # Client-side filtering and sorting for the record tables
//!
//! Every table is a pure function of `(records, filter, sort state)`. The
//! functions here return the rows to display, in display order, as borrowed
//! references into the page's list.
//!
//! Filters are conjunctions of independent predicates. An empty text field or
//! an unset enumeration matches everything.
//!
//! [`SortState`] implements the column-header behaviour: clicking the active
//! column flips the direction, clicking another column selects it ascending.

use std::cmp::Ordering;

use crate::age_group::AgeGroup;
use crate::models::{Athlete, Product, ResultRecord};
use crate::owners::ResultOwners;
use crate::result_value::compare_results;

/// Sort direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }

    /// Arrow shown next to the active column header.
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Active sort column and direction. `field` is `None` until a header is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: Option<F>,
    pub direction: SortDirection,
}

impl<F> Default for SortState<F> {
    fn default() -> Self {
        Self {
            field: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl<F: Copy + PartialEq> SortState<F> {
    /// Header click on `field`.
    pub fn toggle(&mut self, field: F) {
        if self.field == Some(field) {
            self.direction = self.direction.toggle();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Indicator for a header, empty unless it is the active column.
    pub fn indicator(&self, field: F) -> &'static str {
        if self.field == Some(field) {
            self.direction.indicator()
        } else {
            ""
        }
    }
}

/// Locale-style text comparison: case-insensitive first, exact as tie-breaker.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ---------------------------------------------------------------------------
// Athletes
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AthleteFilter {
    /// Substring of the name.
    pub name: String,
    /// Substring of the club.
    pub club: String,
    /// Substring of any discipline name.
    pub discipline: String,
    /// Exact gender, `None` for all.
    pub gender: Option<String>,
    pub age_group: Option<AgeGroup>,
}

impl AthleteFilter {
    pub fn matches(&self, athlete: &Athlete) -> bool {
        contains_ignore_case(&athlete.name, &self.name)
            && contains_ignore_case(&athlete.club, &self.club)
            && (self.discipline.is_empty()
                || athlete
                    .disciplines
                    .iter()
                    .any(|d| contains_ignore_case(&d.name, &self.discipline)))
            && self.gender.as_ref().is_none_or(|g| &athlete.gender == g)
            && self.age_group.is_none_or(|g| g.contains(athlete.age))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AthleteSortField {
    Name,
    Age,
    Gender,
    Club,
    Disciplines,
}

impl AthleteSortField {
    pub fn compare(&self, a: &Athlete, b: &Athlete) -> Ordering {
        match self {
            Self::Name => compare_text(&a.name, &b.name),
            Self::Age => a.age.cmp(&b.age),
            Self::Gender => compare_text(&a.gender, &b.gender),
            Self::Club => compare_text(&a.club, &b.club),
            Self::Disciplines => compare_text(&a.discipline_names(), &b.discipline_names()),
        }
    }
}

/// Rows of the athlete table.
pub fn athlete_rows<'a>(
    athletes: &'a [Athlete],
    filter: &AthleteFilter,
    sort: &SortState<AthleteSortField>,
) -> Vec<&'a Athlete> {
    let mut rows: Vec<&Athlete> = athletes.iter().filter(|a| filter.matches(a)).collect();
    if let Some(field) = sort.field {
        rows.sort_by(|a, b| sort.direction.apply(field.compare(a, b)));
    }
    rows
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultFilter {
    /// Exact discipline name, case-insensitive.
    pub discipline: Option<String>,
    /// Exact gender of the owning athlete.
    pub gender: Option<String>,
    /// Age bucket of the owning athlete.
    pub age_group: Option<AgeGroup>,
}

impl ResultFilter {
    pub fn matches(&self, result: &ResultRecord, owners: &ResultOwners<'_>) -> bool {
        let discipline_ok = self
            .discipline
            .as_ref()
            .is_none_or(|d| result.discipline.name.to_lowercase() == d.to_lowercase());
        if !discipline_ok {
            return false;
        }
        if self.gender.is_none() && self.age_group.is_none() {
            return true;
        }
        let Some(athlete) = owners.owner(result) else {
            return false;
        };
        self.gender.as_ref().is_none_or(|g| &athlete.gender == g)
            && self.age_group.is_none_or(|g| g.contains(athlete.age))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultSortField {
    Discipline,
    Value,
    Date,
    Athlete,
}

impl ResultSortField {
    pub fn compare(&self, a: &ResultRecord, b: &ResultRecord, owners: &ResultOwners<'_>) -> Ordering {
        match self {
            Self::Discipline => compare_text(&a.discipline.name, &b.discipline.name),
            Self::Value => compare_results(a, b),
            Self::Date => a.date.cmp(&b.date),
            Self::Athlete => compare_text(owners.athlete_name(a), owners.athlete_name(b)),
        }
    }
}

/// Rows of the result table. Ranking order until a column is chosen.
pub fn result_rows<'a>(
    results: &'a [ResultRecord],
    owners: &ResultOwners<'_>,
    filter: &ResultFilter,
    sort: &SortState<ResultSortField>,
) -> Vec<&'a ResultRecord> {
    let mut rows: Vec<&ResultRecord> = results
        .iter()
        .filter(|r| filter.matches(r, owners))
        .collect();
    match sort.field {
        Some(field) => rows.sort_by(|a, b| sort.direction.apply(field.compare(a, b, owners))),
        None => rows.sort_by(|a, b| compare_results(a, b)),
    }
    rows
}

/// Distinct discipline names among the results, in first-seen order.
pub fn result_discipline_names(results: &[ResultRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for result in results {
        if !names.contains(&result.discipline.name) {
            names.push(result.discipline.name.clone());
        }
    }
    names
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductSortField {
    Name,
    Price,
}

impl ProductSortField {
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => compare_text(&a.name, &b.name),
            Self::Price => a.price.total_cmp(&b.price),
        }
    }
}

pub fn product_rows<'a>(products: &'a [Product], sort: &SortState<ProductSortField>) -> Vec<&'a Product> {
    let mut rows: Vec<&Product> = products.iter().collect();
    if let Some(field) = sort.field {
        rows.sort_by(|a, b| sort.direction.apply(field.compare(a, b)));
    }
    rows
}
