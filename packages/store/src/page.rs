//! State owned by a page container.
//!
//! A page holds the authoritative in-memory list for its entity, the record
//! currently being edited, and whether a fetch is in flight:
//!
//! ```text
//! idle ──begin_fetch──▶ fetching ──finish_fetch──▶ idle
//! idle ──edit──▶ editing ──finish_edit──▶ idle
//! ```
//!
//! The list is a cache of the backend. It is replaced wholesale by each fetch
//! and only ever changed locally by [`PageState::remove`] after a successful
//! delete.

use crate::models::Record;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState<T> {
    records: Vec<T>,
    phase: Phase,
    selected: Option<T>,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            phase: Phase::Idle,
            selected: None,
        }
    }
}

impl<T: Record + Clone> PageState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == Phase::Fetching
    }

    pub fn begin_fetch(&mut self) {
        self.phase = Phase::Fetching;
    }

    /// Complete a fetch. A failed fetch keeps the previous list and hands the
    /// error back for logging.
    pub fn finish_fetch<E>(&mut self, outcome: Result<Vec<T>, E>) -> Result<(), E> {
        self.phase = Phase::Idle;
        let records = outcome?;
        self.records = records;
        Ok(())
    }

    /// Record handed to the form in edit mode.
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    pub fn edit(&mut self, record: T) {
        self.selected = Some(record);
    }

    pub fn finish_edit(&mut self) {
        self.selected = None;
    }

    /// Drop the record with `id` after the backend confirmed the delete.
    /// Returns whether a record was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != Some(id));
        if self.selected.as_ref().is_some_and(|s| s.id() == Some(id)) {
            self.selected = None;
        }
        self.records.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id: Some(id),
            name: name.to_string(),
            price: 10.0,
        }
    }

    fn loaded() -> PageState<Product> {
        let mut page = PageState::new();
        page.begin_fetch();
        page.finish_fetch::<()>(Ok(vec![product(1, "Cap"), product(2, "Shirt"), product(3, "Bag")]))
            .unwrap();
        page
    }

    #[test]
    fn test_fetch_cycle() {
        let mut page: PageState<Product> = PageState::new();
        assert_eq!(page.phase(), Phase::Idle);
        page.begin_fetch();
        assert!(page.is_fetching());
        page.finish_fetch::<()>(Ok(vec![product(1, "Cap")])).unwrap();
        assert_eq!(page.phase(), Phase::Idle);
        assert_eq!(page.records().len(), 1);
    }

    #[test]
    fn test_failed_fetch_keeps_list() {
        let mut page = loaded();
        page.begin_fetch();
        let outcome = page.finish_fetch(Err("backend down"));
        assert_eq!(outcome, Err("backend down"));
        assert_eq!(page.phase(), Phase::Idle);
        assert_eq!(page.records().len(), 3);
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut page = loaded();
        assert!(page.remove(2));
        let ids: Vec<_> = page.records().iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(!page.remove(2));
        assert_eq!(page.records().len(), 2);
    }

    #[test]
    fn test_edit_cycle() {
        let mut page = loaded();
        assert!(!page.is_editing());
        page.edit(product(3, "Bag"));
        assert_eq!(page.selected().map(|p| p.name.as_str()), Some("Bag"));
        page.finish_edit();
        assert!(page.selected().is_none());

        page.edit(product(1, "Cap"));
        page.remove(1);
        assert!(!page.is_editing());
    }
}
