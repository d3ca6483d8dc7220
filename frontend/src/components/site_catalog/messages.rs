use common::model::partner_site::{ButtonColor, PartnerSite};
use common::screens::rows::FetchTicket;
use common::screens::site_catalog::{ActiveToggle, SubmitPlan};
use common::store::StoreError;

/// Text inputs of the add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteField {
    Name,
    DisplayName,
    Url,
    LogoUrl,
}

pub enum Msg {
    Fetch,
    Fetched(FetchTicket, Result<Vec<PartnerSite>, StoreError>),
    OpenCreate,
    StartEdit(String),
    CancelForm,
    EditField(SiteField, String),
    PickColor(ButtonColor),
    Submit,
    Submitted(SubmitPlan, Result<PartnerSite, StoreError>),
    SetActive(String, bool),
    ActiveSet(ActiveToggle, Result<(), StoreError>),
    Delete(String),
    Deleted(String, Result<(), StoreError>),
}
