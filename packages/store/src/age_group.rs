//! Age buckets used by the athlete and result filters. Never persisted.

use std::ops::RangeInclusive;

/// One of the five fixed age ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    Children,
    Young,
    Junior,
    Adult,
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Children,
        AgeGroup::Young,
        AgeGroup::Junior,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];

    /// Minimum age accepted by the athlete form.
    pub const MIN_AGE: u32 = 6;

    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            AgeGroup::Children => 6..=9,
            AgeGroup::Young => 10..=13,
            AgeGroup::Junior => 14..=22,
            AgeGroup::Adult => 23..=40,
            AgeGroup::Senior => 41..=u32::MAX,
        }
    }

    /// Bucket for an age, `None` below [`Self::MIN_AGE`].
    pub fn for_age(age: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.range().contains(&age))
    }

    pub fn contains(&self, age: u32) -> bool {
        self.range().contains(&age)
    }

    /// Stable key used as the `<option>` value.
    pub fn key(&self) -> &'static str {
        match self {
            AgeGroup::Children => "children",
            AgeGroup::Young => "young",
            AgeGroup::Junior => "junior",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Children => "Children (6-9 years)",
            AgeGroup::Young => "Young (10-13 years)",
            AgeGroup::Junior => "Junior (14-22 years)",
            AgeGroup::Adult => "Adult (23-40 years)",
            AgeGroup::Senior => "Senior (41+ years)",
        }
    }
}
