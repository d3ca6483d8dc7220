//! The record store gateway.
//!
//! Both tables go through [`RecordStore`]. The backend implements it over
//! SQLite and the dashboard implements it over the HTTP API, so screen logic
//! never knows which one it is talking to.

use crate::filter::DateRange;
use crate::model::partner_site::PartnerSite;
use crate::model::submission::{Submission, SubmissionStatus};
use crate::requests::{NewSubmission, SiteForm};
use thiserror::Error;

pub const SITES_TABLE: &str = "betting_sites";
pub const SUBMISSIONS_TABLE: &str = "user_submissions";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{table} row {id} not found")]
    NotFound { table: &'static str, id: String },
    #[error("record store error: {0}")]
    Backend(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Query, insert, update and delete over `betting_sites` and
/// `user_submissions`.
///
/// Listings are ordered newest first. Futures are not required to be `Send`
/// because the browser implementation runs on a single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn list_sites(&self) -> Result<Vec<PartnerSite>, StoreError>;

    async fn insert_site(&self, form: &SiteForm) -> Result<PartnerSite, StoreError>;

    async fn update_site(&self, id: &str, form: &SiteForm) -> Result<PartnerSite, StoreError>;

    async fn set_site_active(&self, id: &str, is_active: bool) -> Result<(), StoreError>;

    async fn delete_site(&self, id: &str) -> Result<(), StoreError>;

    /// Submissions inside `range` (all of them when the range is inactive).
    async fn list_submissions(&self, range: &DateRange) -> Result<Vec<Submission>, StoreError>;

    async fn insert_submission(&self, new: &NewSubmission) -> Result<Submission, StoreError>;

    async fn update_submission_status(
        &self,
        id: &str,
        status: SubmissionStatus,
    ) -> Result<(), StoreError>;

    async fn delete_submission(&self, id: &str) -> Result<(), StoreError>;

    /// Deletes every listed id in one request and returns how many rows went.
    async fn delete_submissions(&self, ids: &[String]) -> Result<usize, StoreError>;
}
