use common::model::submission::{Submission, SubmissionStatus};
use common::screens::rows::FetchTicket;
use common::screens::submission_inbox::StatusChange;
use common::store::StoreError;

pub enum Msg {
    Fetch,
    Fetched(FetchTicket, Result<Vec<Submission>, StoreError>),
    Advance(String, SubmissionStatus),
    Advanced(StatusChange, Result<(), StoreError>),
    /// Open the WhatsApp link for a submission in a new tab.
    Contact(String),
}
