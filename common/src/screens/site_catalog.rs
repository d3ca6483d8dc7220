//! Partner site catalog: list, create/edit form, active toggle and delete.

use super::rows::{FetchOutcome, FetchTicket, RowMirror};
use super::{Followup, Notice};
use crate::model::partner_site::PartnerSite;
use crate::requests::{FormError, SiteForm};
use crate::store::StoreError;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteFormState {
    pub visible: bool,
    /// Id of the site being edited; `None` while adding a new one.
    pub editing: Option<String>,
    pub fields: SiteForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    Create(SiteForm),
    Update { id: String, form: SiteForm },
}

/// An active-flag change that has been applied locally and is waiting for
/// the store to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToggle {
    pub id: String,
    pub is_active: bool,
    /// Position among all toggles started by this catalog.
    pub seq: u64,
}

/// Toggles in flight for one site.
#[derive(Debug, Clone, Copy)]
struct PendingActive {
    /// Flag the store is known to hold.
    confirmed: bool,
    /// `seq` of the most recent toggle; only that one may settle the row.
    latest: u64,
}

#[derive(Debug, Default)]
pub struct SiteCatalog {
    sites: RowMirror<PartnerSite>,
    form: SiteFormState,
    saving: bool,
    pending_active: HashMap<String, PendingActive>,
    next_toggle: u64,
}

impl SiteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sites(&self) -> &[PartnerSite] {
        self.sites.rows()
    }

    pub fn is_loading(&self) -> bool {
        self.sites.is_loading()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.sites.begin_fetch()
    }

    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<PartnerSite>, StoreError>,
    ) -> FetchOutcome {
        self.sites.apply_fetch(ticket, result, "Error fetching sites")
    }

    pub fn form(&self) -> &SiteFormState {
        &self.form
    }

    pub fn form_fields_mut(&mut self) -> &mut SiteForm {
        &mut self.form.fields
    }

    pub fn open_create_form(&mut self) {
        self.form = SiteFormState {
            visible: true,
            editing: None,
            fields: SiteForm::default(),
        };
    }

    /// Loads an existing site into the form. Returns `false` if the id is not
    /// in the list.
    pub fn start_edit(&mut self, id: &str) -> bool {
        match self.sites.get(id) {
            Some(site) => {
                self.form = SiteFormState {
                    visible: true,
                    editing: Some(site.id.clone()),
                    fields: SiteForm::from_site(site),
                };
                true
            }
            None => false,
        }
    }

    pub fn cancel_form(&mut self) {
        self.form = SiteFormState::default();
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Validates the form and says which call to make. Nothing reaches the
    /// store when a required field is blank, and `Ok(None)` means a save is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Result<Option<SubmitPlan>, FormError> {
        if self.saving {
            return Ok(None);
        }
        self.form.fields.validate()?;
        let form = self.form.fields.clone();
        self.saving = true;
        Ok(Some(match &self.form.editing {
            Some(id) => SubmitPlan::Update {
                id: id.clone(),
                form,
            },
            None => SubmitPlan::Create(form),
        }))
    }

    /// On success the form is reset and a refetch is requested; on failure
    /// the form is left as typed so the user can retry.
    pub fn finish_submit(
        &mut self,
        plan: &SubmitPlan,
        result: Result<PartnerSite, StoreError>,
    ) -> Followup {
        self.saving = false;
        match result {
            Ok(_) => {
                self.cancel_form();
                let title = match plan {
                    SubmitPlan::Create(_) => "Site added successfully",
                    SubmitPlan::Update { .. } => "Site updated successfully",
                };
                Followup::refetch(Notice::success(title))
            }
            Err(e) => Followup::notice(Notice::error("Error saving site", &e)),
        }
    }

    /// Patches the flag locally right away and remembers the confirmed value
    /// so a failure can put it back.
    pub fn begin_set_active(&mut self, id: &str, is_active: bool) -> Option<ActiveToggle> {
        let mut previous = None;
        let found = self.sites.patch(id, |site| {
            previous = Some(site.is_active);
            site.is_active = is_active;
        });
        let previous = previous.filter(|_| found)?;

        self.next_toggle += 1;
        let seq = self.next_toggle;
        self.pending_active
            .entry(id.to_string())
            .and_modify(|pending| pending.latest = seq)
            .or_insert(PendingActive {
                confirmed: previous,
                latest: seq,
            });
        Some(ActiveToggle {
            id: id.to_string(),
            is_active,
            seq,
        })
    }

    /// Settles one toggle. Superseded toggles only update the confirmed
    /// flag; the latest one clears the pending entry and, on failure, puts
    /// the confirmed flag back on the row.
    pub fn finish_set_active(
        &mut self,
        toggle: &ActiveToggle,
        result: Result<(), StoreError>,
    ) -> Notice {
        let is_latest = self
            .pending_active
            .get(&toggle.id)
            .is_some_and(|pending| pending.latest == toggle.seq);
        match result {
            Ok(()) => {
                if is_latest {
                    self.pending_active.remove(&toggle.id);
                } else if let Some(pending) = self.pending_active.get_mut(&toggle.id) {
                    pending.confirmed = toggle.is_active;
                }
                Notice::success(if toggle.is_active {
                    "Site activated"
                } else {
                    "Site deactivated"
                })
            }
            Err(e) => {
                if is_latest {
                    if let Some(pending) = self.pending_active.remove(&toggle.id) {
                        self.sites
                            .patch(&toggle.id, |site| site.is_active = pending.confirmed);
                    }
                }
                Notice::error("Error updating site", &e)
            }
        }
    }

    pub fn has_pending_toggle(&self, id: &str) -> bool {
        self.pending_active.contains_key(id)
    }

    /// Asks `confirm` before deleting. Returns the id to delete, or `None`
    /// when the site is unknown or the user declined.
    pub fn request_delete<F>(&self, id: &str, confirm: F) -> Option<String>
    where
        F: FnOnce(&PartnerSite) -> bool,
    {
        let site = self.sites.get(id)?;
        confirm(site).then(|| site.id.clone())
    }

    /// Removes the row locally on success; no refetch.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), StoreError>) -> Notice {
        match result {
            Ok(()) => {
                self.sites.remove(id);
                self.pending_active.remove(id);
                Notice::success("Site deleted successfully")
            }
            Err(e) => Notice::error("Error deleting site", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::partner_site::ButtonColor;
    use chrono::{TimeZone, Utc};

    fn site(id: &str, active: bool) -> PartnerSite {
        PartnerSite {
            id: id.to_string(),
            name: format!("{}-name", id),
            display_name: format!("{} Display", id),
            url: format!("https://{}.test", id),
            logo_url: None,
            button_color: ButtonColor::Blue,
            is_active: active,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn loaded(sites: Vec<PartnerSite>) -> SiteCatalog {
        let mut catalog = SiteCatalog::new();
        let ticket = catalog.begin_fetch();
        assert_eq!(catalog.apply_fetch(ticket, Ok(sites)), FetchOutcome::Applied);
        catalog
    }

    fn offline() -> StoreError {
        StoreError::Transport("offline".to_string())
    }

    #[test]
    fn failed_first_fetch_leaves_list_empty() {
        let mut catalog = SiteCatalog::new();
        let ticket = catalog.begin_fetch();
        let outcome = catalog.apply_fetch(ticket, Err(offline()));
        assert!(matches!(outcome, FetchOutcome::Failed(ref n) if n.title == "Error fetching sites"));
        assert!(catalog.sites().is_empty());
    }

    #[test]
    fn blank_required_field_never_plans_a_call() {
        let mut catalog = SiteCatalog::new();
        catalog.open_create_form();
        catalog.form_fields_mut().name = "x".to_string();
        catalog.form_fields_mut().url = "https://x.test".to_string();
        assert_eq!(
            catalog.begin_submit(),
            Err(FormError::MissingField("display_name"))
        );
    }

    #[test]
    fn create_plan_defaults_to_green_and_resets_on_success() {
        let mut catalog = SiteCatalog::new();
        catalog.open_create_form();
        {
            let fields = catalog.form_fields_mut();
            fields.name = "a".to_string();
            fields.display_name = "A".to_string();
            fields.url = "https://a.test".to_string();
        }
        let plan = catalog.begin_submit().unwrap().unwrap();
        assert!(catalog.is_saving());
        match &plan {
            SubmitPlan::Create(form) => assert_eq!(form.button_color, ButtonColor::Green),
            other => panic!("expected create, got {:?}", other),
        }

        let followup = catalog.finish_submit(&plan, Ok(site("a", true)));
        assert!(!catalog.is_saving());
        assert!(followup.refetch);
        assert_eq!(followup.notice.title, "Site added successfully");
        assert_eq!(catalog.form(), &SiteFormState::default());
    }

    #[test]
    fn failed_save_keeps_form_for_retry() {
        let mut catalog = loaded(vec![site("a", true)]);
        assert!(catalog.start_edit("a"));
        catalog.form_fields_mut().display_name = "Renamed".to_string();
        let plan = catalog.begin_submit().unwrap().unwrap();
        assert!(matches!(plan, SubmitPlan::Update { ref id, .. } if id == "a"));

        let followup = catalog.finish_submit(&plan, Err(offline()));
        assert!(!followup.refetch);
        assert!(followup.notice.is_error());
        assert!(catalog.form().visible);
        assert_eq!(catalog.form().fields.display_name, "Renamed");
    }

    #[test]
    fn second_submit_while_saving_plans_nothing() {
        let mut catalog = SiteCatalog::new();
        catalog.open_create_form();
        {
            let fields = catalog.form_fields_mut();
            fields.name = "a".to_string();
            fields.display_name = "A".to_string();
            fields.url = "https://a.test".to_string();
        }
        let plan = catalog.begin_submit().unwrap().unwrap();
        assert_eq!(catalog.begin_submit(), Ok(None));

        catalog.finish_submit(&plan, Err(offline()));
        assert!(!catalog.is_saving());
        assert!(matches!(catalog.begin_submit(), Ok(Some(SubmitPlan::Create(_)))));
    }

    #[test]
    fn start_edit_unknown_site_is_rejected() {
        let mut catalog = loaded(vec![site("a", true)]);
        assert!(!catalog.start_edit("missing"));
        assert!(!catalog.form().visible);
    }

    #[test]
    fn active_toggle_applies_then_confirms() {
        let mut catalog = loaded(vec![site("a", true)]);
        let toggle = catalog.begin_set_active("a", false).unwrap();
        assert!(!catalog.sites()[0].is_active);
        assert!(catalog.has_pending_toggle("a"));

        let notice = catalog.finish_set_active(&toggle, Ok(()));
        assert_eq!(notice.title, "Site deactivated");
        assert!(!catalog.sites()[0].is_active);
        assert!(!catalog.has_pending_toggle("a"));
    }

    #[test]
    fn failed_active_toggle_reverts() {
        let mut catalog = loaded(vec![site("a", false)]);
        let toggle = catalog.begin_set_active("a", true).unwrap();
        assert!(catalog.sites()[0].is_active);

        let notice = catalog.finish_set_active(&toggle, Err(offline()));
        assert!(notice.is_error());
        assert!(!catalog.sites()[0].is_active);
        assert!(!catalog.has_pending_toggle("a"));
    }

    #[test]
    fn older_toggle_failure_does_not_clobber_newer_one() {
        let mut catalog = loaded(vec![site("a", true)]);
        let off = catalog.begin_set_active("a", false).unwrap();
        let on = catalog.begin_set_active("a", true).unwrap();

        catalog.finish_set_active(&off, Err(offline()));
        assert!(catalog.sites()[0].is_active);

        catalog.finish_set_active(&on, Ok(()));
        assert!(catalog.sites()[0].is_active);
        assert!(!catalog.has_pending_toggle("a"));
    }

    #[test]
    fn failed_first_toggle_leaves_later_same_direction_toggle_in_charge() {
        let mut catalog = loaded(vec![site("a", true)]);
        let off1 = catalog.begin_set_active("a", false).unwrap();
        let on2 = catalog.begin_set_active("a", true).unwrap();
        let off3 = catalog.begin_set_active("a", false).unwrap();
        assert!(off1.seq < on2.seq && on2.seq < off3.seq);

        catalog.finish_set_active(&off1, Err(offline()));
        assert!(!catalog.sites()[0].is_active);
        assert!(catalog.has_pending_toggle("a"));

        catalog.finish_set_active(&on2, Ok(()));
        assert!(!catalog.sites()[0].is_active);

        catalog.finish_set_active(&off3, Ok(()));
        assert!(!catalog.sites()[0].is_active);
        assert!(!catalog.has_pending_toggle("a"));
    }

    #[test]
    fn latest_toggle_failure_reverts_to_flag_confirmed_by_earlier_one() {
        let mut catalog = loaded(vec![site("a", true)]);
        let off = catalog.begin_set_active("a", false).unwrap();
        let on = catalog.begin_set_active("a", true).unwrap();
        let off_again = catalog.begin_set_active("a", false).unwrap();

        catalog.finish_set_active(&off, Ok(()));
        catalog.finish_set_active(&on, Ok(()));
        catalog.finish_set_active(&off_again, Err(offline()));
        assert!(catalog.sites()[0].is_active);
        assert!(!catalog.has_pending_toggle("a"));
    }

    #[test]
    fn declined_delete_leaves_list_unchanged() {
        let catalog = loaded(vec![site("a", true), site("b", true)]);
        let mut asked = None;
        let decision = catalog.request_delete("a", |s| {
            asked = Some(s.display_name.clone());
            false
        });
        assert_eq!(decision, None);
        assert_eq!(asked.as_deref(), Some("a Display"));
        assert_eq!(catalog.sites().len(), 2);
    }

    #[test]
    fn confirmed_delete_removes_row_locally() {
        let mut catalog = loaded(vec![site("a", true), site("b", true)]);
        let id = catalog.request_delete("a", |_| true).unwrap();
        let notice = catalog.finish_delete(&id, Ok(()));
        assert_eq!(notice.title, "Site deleted successfully");
        let ids: Vec<_> = catalog.sites().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn failed_delete_keeps_row() {
        let mut catalog = loaded(vec![site("a", true)]);
        let notice = catalog.finish_delete("a", Err(offline()));
        assert!(notice.is_error());
        assert_eq!(catalog.sites().len(), 1);
    }
}
