//! Submission inbox: list, forward status changes and contact links.

use super::rows::{FetchOutcome, FetchTicket, RowMirror};
use super::Notice;
use crate::contact::compose_contact_link;
use crate::model::submission::{Submission, SubmissionStatus, TransitionError};
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxAction {
    MarkProcessed,
    MarkContacted,
}

impl InboxAction {
    pub fn target(&self) -> SubmissionStatus {
        match self {
            InboxAction::MarkProcessed => SubmissionStatus::Processed,
            InboxAction::MarkContacted => SubmissionStatus::Contacted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InboxAction::MarkProcessed => "Mark Processed",
            InboxAction::MarkContacted => "Mark Contacted",
        }
    }
}

/// Buttons offered for a submission in `status`.
pub fn available_actions(status: SubmissionStatus) -> Vec<InboxAction> {
    [InboxAction::MarkProcessed, InboxAction::MarkContacted]
        .into_iter()
        .filter(|action| status.can_advance_to(action.target()))
        .collect()
}

/// A status write to send to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub id: String,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InboxError {
    #[error("submission {0} is not loaded")]
    UnknownSubmission(String),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

#[derive(Debug, Default)]
pub struct SubmissionInbox {
    rows: RowMirror<Submission>,
}

impl SubmissionInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> &[Submission] {
        self.rows.rows()
    }

    pub fn get(&self, id: &str) -> Option<&Submission> {
        self.rows.get(id)
    }

    pub fn is_loading(&self) -> bool {
        self.rows.is_loading()
    }

    pub(crate) fn rows(&self) -> &RowMirror<Submission> {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut RowMirror<Submission> {
        &mut self.rows
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.rows.begin_fetch()
    }

    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Submission>, StoreError>,
    ) -> FetchOutcome {
        self.rows
            .apply_fetch(ticket, result, "Error fetching submissions")
    }

    /// Checks the transition against the loaded row before any call is made.
    pub fn begin_advance(
        &self,
        id: &str,
        next: SubmissionStatus,
    ) -> Result<StatusChange, InboxError> {
        let submission = self
            .rows
            .get(id)
            .ok_or_else(|| InboxError::UnknownSubmission(id.to_string()))?;
        let status = submission.status.advance_to(next)?;
        Ok(StatusChange {
            id: id.to_string(),
            status,
        })
    }

    /// Patches the row only once the store has accepted the change.
    pub fn finish_advance(
        &mut self,
        change: &StatusChange,
        result: Result<(), StoreError>,
    ) -> Notice {
        match result {
            Ok(()) => {
                self.rows
                    .patch(&change.id, |submission| submission.status = change.status);
                Notice::success(format!("Status updated to {}", change.status))
            }
            Err(e) => Notice::error("Error updating status", &e),
        }
    }

    pub fn contact_link(&self, id: &str) -> Option<String> {
        self.rows.get(id).map(|s| {
            compose_contact_link(&s.mobile_number, &s.name, &s.selected_website)
        })
    }
}
