use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An inbound lead (`user_submissions` table).
///
/// `selected_website` is the partner site's name copied as plain text at
/// submission time; it is not a reference into `betting_sites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub name: String,
    pub mobile_number: String,
    pub selected_website: String,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
}

/// Processing state of a submission.
///
/// New submissions start as `Pending`. The inbox only moves a submission
/// forward (see [`SubmissionStatus::can_advance_to`]); the table's inline
/// toggle flips between `Contacted` and `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Processed,
    Contacted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move a submission from {from} to {to}")]
pub struct TransitionError {
    pub from: SubmissionStatus,
    pub to: SubmissionStatus,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Processed => "processed",
            SubmissionStatus::Contacted => "contacted",
        }
    }

    pub fn is_contacted(&self) -> bool {
        matches!(self, SubmissionStatus::Contacted)
    }

    /// Forward transitions allowed from the inbox: pending→processed,
    /// pending→contacted and processed→contacted.
    pub fn can_advance_to(&self, next: SubmissionStatus) -> bool {
        matches!(
            (self, next),
            (SubmissionStatus::Pending, SubmissionStatus::Processed)
                | (SubmissionStatus::Pending, SubmissionStatus::Contacted)
                | (SubmissionStatus::Processed, SubmissionStatus::Contacted)
        )
    }

    pub fn advance_to(&self, next: SubmissionStatus) -> Result<SubmissionStatus, TransitionError> {
        if self.can_advance_to(next) {
            Ok(next)
        } else {
            Err(TransitionError { from: *self, to: next })
        }
    }

    /// Binary toggle used by the table: contacted goes back to pending,
    /// anything else becomes contacted.
    pub fn toggled(&self) -> SubmissionStatus {
        if self.is_contacted() {
            SubmissionStatus::Pending
        } else {
            SubmissionStatus::Contacted
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "processed" => Ok(SubmissionStatus::Processed),
            "contacted" => Ok(SubmissionStatus::Contacted),
            other => Err(format!("unknown submission status '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SubmissionStatus::*;
    use super::*;

    #[test]
    fn forward_transitions_only() {
        assert!(Pending.can_advance_to(Processed));
        assert!(Pending.can_advance_to(Contacted));
        assert!(Processed.can_advance_to(Contacted));

        assert!(!Processed.can_advance_to(Pending));
        assert!(!Contacted.can_advance_to(Pending));
        assert!(!Contacted.can_advance_to(Processed));
        assert!(!Contacted.can_advance_to(Contacted));
        assert!(!Pending.can_advance_to(Pending));
    }

    #[test]
    fn advance_reports_rejected_pair() {
        let err = Contacted.advance_to(Processed).unwrap_err();
        assert_eq!(err, TransitionError { from: Contacted, to: Processed });
        assert_eq!(err.to_string(), "cannot move a submission from contacted to processed");
    }

    #[test]
    fn toggle_twice_restores_binary_status() {
        for status in [Pending, Contacted] {
            assert_eq!(status.toggled().toggled(), status);
        }
        assert_eq!(Processed.toggled(), Contacted);
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [Pending, Processed, Contacted] {
            assert_eq!(status.as_str().parse::<SubmissionStatus>(), Ok(status));
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
        assert!("archived".parse::<SubmissionStatus>().is_err());
    }
}
