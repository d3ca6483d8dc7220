//! Update function for the site catalog (Elm-style).
//!
//! Remote calls run in `spawn_local` and report back with a `*ed` message;
//! the matching `finish_*` method on `SiteCatalog` decides what changes and
//! which toast to show.

use common::screens::rows::FetchOutcome;
use common::screens::site_catalog::SubmitPlan;
use common::screens::Notice;
use common::store::RecordStore;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::{Msg, SiteField};
use super::SiteCatalogComponent;
use crate::helpers::{confirm, show_notice};

/// Returns `true` when the view should re-render.
pub fn update(
    component: &mut SiteCatalogComponent,
    ctx: &Context<SiteCatalogComponent>,
    msg: Msg,
) -> bool {
    let store = component.store;
    match msg {
        Msg::Fetch => {
            let ticket = component.catalog.begin_fetch();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.list_sites().await;
                link.send_message(Msg::Fetched(ticket, result));
            });
            true
        }
        Msg::Fetched(ticket, result) => match component.catalog.apply_fetch(ticket, result) {
            FetchOutcome::Applied => true,
            FetchOutcome::Stale => false,
            FetchOutcome::Failed(notice) => {
                show_notice(&notice);
                true
            }
        },
        Msg::OpenCreate => {
            component.catalog.open_create_form();
            true
        }
        Msg::StartEdit(id) => component.catalog.start_edit(&id),
        Msg::CancelForm => {
            component.catalog.cancel_form();
            true
        }
        Msg::EditField(field, value) => {
            let fields = component.catalog.form_fields_mut();
            match field {
                SiteField::Name => fields.name = value,
                SiteField::DisplayName => fields.display_name = value,
                SiteField::Url => fields.url = value,
                SiteField::LogoUrl => fields.logo_url = value,
            }
            true
        }
        Msg::PickColor(color) => {
            component.catalog.form_fields_mut().button_color = color;
            true
        }
        Msg::Submit => {
            match component.catalog.begin_submit() {
                Ok(None) => false,
                Ok(Some(plan)) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = match &plan {
                            SubmitPlan::Create(form) => store.insert_site(form).await,
                            SubmitPlan::Update { id, form } => store.update_site(id, form).await,
                        };
                        link.send_message(Msg::Submitted(plan, result));
                    });
                    true
                }
                Err(e) => {
                    show_notice(&Notice::error("Please fill in all required fields", &e));
                    false
                }
            }
        }
        Msg::Submitted(plan, result) => {
            let followup = component.catalog.finish_submit(&plan, result);
            show_notice(&followup.notice);
            if followup.refetch {
                ctx.link().send_message(Msg::Fetch);
            }
            true
        }
        Msg::SetActive(id, is_active) => {
            let Some(toggle) = component.catalog.begin_set_active(&id, is_active) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.set_site_active(&toggle.id, toggle.is_active).await;
                link.send_message(Msg::ActiveSet(toggle, result));
            });
            true
        }
        Msg::ActiveSet(toggle, result) => {
            let notice = component.catalog.finish_set_active(&toggle, result);
            show_notice(&notice);
            true
        }
        Msg::Delete(id) => {
            let Some(id) = component
                .catalog
                .request_delete(&id, |_| confirm("Are you sure you want to delete this site?"))
            else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.delete_site(&id).await;
                link.send_message(Msg::Deleted(id, result));
            });
            false
        }
        Msg::Deleted(id, result) => {
            let notice = component.catalog.finish_delete(&id, result);
            show_notice(&notice);
            true
        }
    }
}
