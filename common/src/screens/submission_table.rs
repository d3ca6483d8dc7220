//! The date-filtered submission table.
//!
//! Builds on [`SubmissionInbox`] with a date range, a selection set, bulk
//! delete, an inline contacted/pending toggle and CSV export. The selection
//! is a set of ids that does not depend on the current filter; "select all"
//! only ever looks at the rows currently loaded.

use super::rows::{FetchOutcome, FetchTicket};
use super::submission_inbox::{StatusChange, SubmissionInbox};
use super::{Followup, Notice};
use crate::export::{export_filtered, ExportError, StatusColumn};
use crate::filter::DateRange;
use crate::model::submission::Submission;
use crate::store::StoreError;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct SubmissionTable {
    inbox: SubmissionInbox,
    range: DateRange,
    selection: BTreeSet<String>,
    status_column: StatusColumn,
    deleting: bool,
}

impl SubmissionTable {
    pub fn new(status_column: StatusColumn) -> Self {
        Self {
            status_column,
            ..Self::default()
        }
    }

    pub fn inbox(&self) -> &SubmissionInbox {
        &self.inbox
    }

    pub fn inbox_mut(&mut self) -> &mut SubmissionInbox {
        &mut self.inbox
    }

    pub fn submissions(&self) -> &[Submission] {
        self.inbox.submissions()
    }

    pub fn status_column(&self) -> StatusColumn {
        self.status_column
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Stores the new range and starts a fetch for it. Every change fetches;
    /// older responses still in flight are dropped when they land.
    pub fn set_range(&mut self, range: DateRange) -> FetchTicket {
        self.range = range;
        self.begin_fetch()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.inbox.begin_fetch()
    }

    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Submission>, StoreError>,
    ) -> FetchOutcome {
        self.inbox.apply_fetch(ticket, result)
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn toggle_row(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// True when there are rows and every one of them is selected.
    pub fn all_selected(&self) -> bool {
        let rows = self.inbox.rows();
        !rows.is_empty() && rows.ids().all(|id| self.selection.contains(id))
    }

    /// Clears the selection if every loaded row is selected, otherwise
    /// selects every loaded row.
    pub fn select_all(&mut self) {
        if self.all_selected() {
            self.selection.clear();
        } else {
            self.selection = self.inbox.rows().ids().map(str::to_string).collect();
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Ids to send in one delete request, or `None` when nothing is selected
    /// or a bulk delete is already in flight (no call should be made).
    pub fn begin_bulk_delete(&mut self) -> Option<Vec<String>> {
        if self.deleting || self.selection.is_empty() {
            return None;
        }
        self.deleting = true;
        Some(self.selection.iter().cloned().collect())
    }

    /// Clears the selection and asks for a refetch on success. On failure the
    /// selection stays so the user can try again.
    pub fn finish_bulk_delete(&mut self, result: Result<usize, StoreError>) -> Followup {
        self.deleting = false;
        match result {
            Ok(deleted) => {
                self.selection.clear();
                Followup::refetch(Notice::success(format!(
                    "Deleted {} submission{}",
                    deleted,
                    if deleted == 1 { "" } else { "s" }
                )))
            }
            Err(e) => Followup::notice(Notice::error("Error deleting submissions", &e)),
        }
    }

    pub fn request_delete<F>(&self, id: &str, confirm: F) -> Option<String>
    where
        F: FnOnce(&Submission) -> bool,
    {
        let submission = self.inbox.get(id)?;
        confirm(submission).then(|| submission.id.clone())
    }

    pub fn finish_delete(&mut self, id: &str, result: Result<(), StoreError>) -> Notice {
        match result {
            Ok(()) => {
                self.inbox.rows_mut().remove(id);
                self.selection.remove(id);
                Notice::success("Submission deleted")
            }
            Err(e) => Notice::error("Error deleting submission", &e),
        }
    }

    /// The contacted/pending flip for one row.
    pub fn begin_toggle_status(&self, id: &str) -> Option<StatusChange> {
        self.inbox.get(id).map(|submission| StatusChange {
            id: id.to_string(),
            status: submission.status.toggled(),
        })
    }

    /// The list is not patched here; a refetch resynchronizes it.
    pub fn finish_toggle_status(
        &mut self,
        change: &StatusChange,
        result: Result<(), StoreError>,
    ) -> Followup {
        match result {
            Ok(()) => Followup::refetch(Notice::success(format!(
                "Status updated to {}",
                change.status
            ))),
            Err(e) => Followup::notice(Notice::error("Error updating status", &e)),
        }
    }

    /// CSV of the loaded rows that fall in the current range.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        export_filtered(self.submissions(), &self.range, self.status_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::submission::SubmissionStatus;
    use chrono::{DateTime, NaiveDate, Utc};

    fn submission(id: &str, status: SubmissionStatus, ts: &str) -> Submission {
        Submission {
            id: id.to_string(),
            name: format!("Name-{}", id),
            mobile_number: "9998887776".to_string(),
            selected_website: "SiteA".to_string(),
            submitted_at: ts.parse::<DateTime<Utc>>().unwrap(),
            status,
        }
    }

    fn rows() -> Vec<Submission> {
        vec![
            submission("a", SubmissionStatus::Pending, "2024-01-07T09:00:00Z"),
            submission("b", SubmissionStatus::Contacted, "2024-01-06T23:59:59Z"),
            submission("c", SubmissionStatus::Processed, "2024-01-02T12:00:00Z"),
        ]
    }

    fn loaded(status_column: StatusColumn) -> SubmissionTable {
        let mut table = SubmissionTable::new(status_column);
        let ticket = table.begin_fetch();
        assert_eq!(table.apply_fetch(ticket, Ok(rows())), FetchOutcome::Applied);
        table
    }

    fn ids(table: &SubmissionTable) -> Vec<&str> {
        table.submissions().iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn select_all_then_one_deselect_leaves_total_minus_one() {
        let mut table = loaded(StatusColumn::Literal);
        table.select_all();
        assert_eq!(table.selection().len(), 3);
        assert!(table.all_selected());

        table.toggle_row("b");
        assert_eq!(table.selection().len(), 2);
        assert!(!table.all_selected());
    }

    #[test]
    fn select_all_on_full_selection_clears_it() {
        let mut table = loaded(StatusColumn::Literal);
        table.select_all();
        table.select_all();
        assert!(table.selection().is_empty());
    }

    #[test]
    fn select_all_on_empty_table_selects_nothing() {
        let mut table = SubmissionTable::new(StatusColumn::Literal);
        table.select_all();
        assert!(table.selection().is_empty());
        assert!(!table.all_selected());
    }

    #[test]
    fn selection_survives_filter_changes() {
        let mut table = loaded(StatusColumn::Literal);
        table.toggle_row("c");
        let ticket = table.set_range(DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 6),
            NaiveDate::from_ymd_opt(2024, 1, 7),
        ));
        let narrowed: Vec<_> = rows().into_iter().filter(|s| s.id != "c").collect();
        table.apply_fetch(ticket, Ok(narrowed));
        assert!(table.is_selected("c"));
    }

    #[test]
    fn empty_selection_plans_no_delete() {
        let mut table = loaded(StatusColumn::Literal);
        assert_eq!(table.begin_bulk_delete(), None);
        assert_eq!(ids(&table), vec!["a", "b", "c"]);
    }

    #[test]
    fn bulk_delete_sends_selection_then_refetches() {
        let mut table = loaded(StatusColumn::Literal);
        table.toggle_row("a");
        table.toggle_row("c");
        let planned = table.begin_bulk_delete().unwrap();
        assert_eq!(planned, vec!["a".to_string(), "c".to_string()]);

        let followup = table.finish_bulk_delete(Ok(2));
        assert!(followup.refetch);
        assert_eq!(followup.notice.title, "Deleted 2 submissions");
        assert!(table.selection().is_empty());

        let ticket = table.begin_fetch();
        let remaining: Vec<_> = rows()
            .into_iter()
            .filter(|s| !planned.contains(&s.id))
            .collect();
        table.apply_fetch(ticket, Ok(remaining));
        assert_eq!(ids(&table), vec!["b"]);
    }

    #[test]
    fn failed_bulk_delete_keeps_selection() {
        let mut table = loaded(StatusColumn::Literal);
        table.toggle_row("a");
        let followup =
            table.finish_bulk_delete(Err(StoreError::Backend("disk full".to_string())));
        assert!(!followup.refetch);
        assert!(followup.notice.is_error());
        assert!(table.is_selected("a"));
    }

    #[test]
    fn bulk_delete_in_flight_blocks_a_second_one() {
        let mut table = loaded(StatusColumn::Literal);
        table.toggle_row("a");
        assert!(table.begin_bulk_delete().is_some());
        assert!(table.is_deleting());
        assert_eq!(table.begin_bulk_delete(), None);

        table.finish_bulk_delete(Err(StoreError::Transport("offline".to_string())));
        assert!(!table.is_deleting());
        assert_eq!(table.begin_bulk_delete(), Some(vec!["a".to_string()]));
    }

    #[test]
    fn single_delete_drops_row_and_selection() {
        let mut table = loaded(StatusColumn::Literal);
        table.toggle_row("b");
        assert_eq!(table.request_delete("b", |_| false), None);
        let id = table.request_delete("b", |_| true).unwrap();
        table.finish_delete(&id, Ok(()));
        assert_eq!(ids(&table), vec!["a", "c"]);
        assert!(table.selection().is_empty());
    }

    #[test]
    fn stale_range_response_is_dropped() {
        let mut table = loaded(StatusColumn::Literal);
        let wide = table.set_range(DateRange::default());
        let narrow = table.set_range(DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 7),
            NaiveDate::from_ymd_opt(2024, 1, 7),
        ));
        table.apply_fetch(narrow, Ok(vec![rows().remove(0)]));
        assert_eq!(table.apply_fetch(wide, Ok(rows())), FetchOutcome::Stale);
        assert_eq!(ids(&table), vec!["a"]);
    }

    #[test]
    fn toggle_status_twice_round_trips() {
        let mut table = loaded(StatusColumn::YesNo);
        let first = table.begin_toggle_status("b").unwrap();
        assert_eq!(first.status, SubmissionStatus::Pending);
        let followup = table.finish_toggle_status(&first, Ok(()));
        assert!(followup.refetch);

        let ticket = table.begin_fetch();
        let mut refreshed = rows();
        refreshed[1].status = first.status;
        table.apply_fetch(ticket, Ok(refreshed));

        let second = table.begin_toggle_status("b").unwrap();
        assert_eq!(second.status, SubmissionStatus::Contacted);
        assert_eq!(table.begin_toggle_status("missing"), None);
    }

    #[test]
    fn export_uses_current_range_over_loaded_rows() {
        let mut table = loaded(StatusColumn::YesNo);
        // Range changes without a fetch landing yet: export still filters
        // the rows already in memory.
        table.set_range(DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 6),
            NaiveDate::from_ymd_opt(2024, 1, 6),
        ));
        let csv = table.export_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name,Mobile,Website,Contacted,Submitted At",
                "Name-b,9998887776,SiteA,Yes,2024-01-06 23:59",
            ]
        );
    }
}
