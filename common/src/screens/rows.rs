//! Local mirror of remote rows with request sequencing.
//!
//! Every fetch gets a [`FetchTicket`] carrying the generation it was issued
//! under. Only the answer to the most recently issued fetch is applied;
//! anything older is dropped, so out-of-order responses cannot roll the
//! list back.

use super::Notice;
use crate::model::partner_site::PartnerSite;
use crate::model::submission::Submission;
use crate::store::StoreError;

pub trait Row {
    fn id(&self) -> &str;
}

impl Row for PartnerSite {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Row for Submission {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer fetch was issued after this one; the response was dropped.
    Stale,
    /// The fetch failed and the previous rows were kept.
    Failed(Notice),
}

#[derive(Debug, Clone)]
pub struct RowMirror<T> {
    rows: Vec<T>,
    generation: u64,
    loading: bool,
}

impl<T> Default for RowMirror<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            generation: 0,
            loading: false,
        }
    }
}

impl<T: Row> RowMirror<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(Row::id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    /// Replaces the rows with a fetch result unless a newer fetch is pending.
    /// `failure_title` is shown to the user when the fetch failed.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<T>, StoreError>,
        failure_title: &str,
    ) -> FetchOutcome {
        if ticket.0 != self.generation {
            log::debug!(
                "dropping stale fetch response (generation {} < {})",
                ticket.0,
                self.generation
            );
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                FetchOutcome::Applied
            }
            Err(e) => FetchOutcome::Failed(Notice::error(failure_title, &e)),
        }
    }

    /// Applies `f` to the row with `id`. Returns whether a row matched.
    pub fn patch<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.rows.iter_mut().find(|row| row.id() == id) {
            Some(row) => {
                f(row);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(String, u32);

    impl Row for Item {
        fn id(&self) -> &str {
            &self.0
        }
    }

    fn items(ids: &[&str]) -> Vec<Item> {
        ids.iter().map(|id| Item(id.to_string(), 0)).collect()
    }

    #[test]
    fn latest_fetch_wins_even_if_it_lands_first() {
        let mut mirror = RowMirror::<Item>::new();
        let first = mirror.begin_fetch();
        let second = mirror.begin_fetch();

        assert_eq!(
            mirror.apply_fetch(second, Ok(items(&["new"])), "err"),
            FetchOutcome::Applied
        );
        assert_eq!(
            mirror.apply_fetch(first, Ok(items(&["old-a", "old-b"])), "err"),
            FetchOutcome::Stale
        );
        assert_eq!(mirror.ids().collect::<Vec<_>>(), vec!["new"]);
        assert!(!mirror.is_loading());
    }

    #[test]
    fn failed_fetch_keeps_rows_and_reports() {
        let mut mirror = RowMirror::<Item>::new();
        let ticket = mirror.begin_fetch();
        mirror.apply_fetch(ticket, Ok(items(&["a"])), "err");

        let ticket = mirror.begin_fetch();
        let outcome = mirror.apply_fetch(
            ticket,
            Err(StoreError::Transport("offline".to_string())),
            "Error fetching items",
        );
        match outcome {
            FetchOutcome::Failed(notice) => {
                assert!(notice.is_error());
                assert_eq!(notice.title, "Error fetching items");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(mirror.len(), 1);
    }

    #[test]
    fn patch_and_remove_target_one_row() {
        let mut mirror = RowMirror::<Item>::new();
        let ticket = mirror.begin_fetch();
        mirror.apply_fetch(ticket, Ok(items(&["a", "b"])), "err");

        assert!(mirror.patch("b", |item| item.1 = 7));
        assert!(!mirror.patch("zz", |item| item.1 = 7));
        assert_eq!(mirror.get("b"), Some(&Item("b".to_string(), 7)));
        assert_eq!(mirror.get("a"), Some(&Item("a".to_string(), 0)));

        assert_eq!(mirror.remove("a").map(|i| i.0), Some("a".to_string()));
        assert_eq!(mirror.remove("a"), None);
        assert_eq!(mirror.len(), 1);
    }
}
