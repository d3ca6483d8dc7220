use common::model::submission::Submission;
use common::screens::rows::FetchTicket;
use common::screens::submission_inbox::StatusChange;
use common::store::StoreError;

pub enum Msg {
    Fetch,
    Fetched(FetchTicket, Result<Vec<Submission>, StoreError>),
    SetFrom(String),
    SetTo(String),
    ClearRange,
    ToggleRow(String),
    SelectAll,
    BulkDelete,
    BulkDeleted(Result<usize, StoreError>),
    ToggleStatus(String),
    StatusToggled(StatusChange, Result<(), StoreError>),
    Contact(String),
    Delete(String),
    Deleted(String, Result<(), StoreError>),
    Export,
}
