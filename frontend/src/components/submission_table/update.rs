//! Update function for the submission table.
//!
//! Fetches always go through `SubmissionTable::begin_fetch`/`set_range` so a
//! response that arrives after a newer request is ignored.

use common::export::EXPORT_FILE_NAME;
use common::filter::DateRange;
use common::screens::rows::{FetchOutcome, FetchTicket};
use common::screens::{Followup, Notice};
use common::store::RecordStore;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::SubmissionTableComponent;
use crate::helpers::{confirm, download_text, open_in_new_tab, show_notice};

pub fn update(
    component: &mut SubmissionTableComponent,
    ctx: &Context<SubmissionTableComponent>,
    msg: Msg,
) -> bool {
    let store = component.store;
    match msg {
        Msg::Fetch => {
            let ticket = component.table.begin_fetch();
            fetch(component, ctx, ticket);
            true
        }
        Msg::Fetched(ticket, result) => match component.table.apply_fetch(ticket, result) {
            FetchOutcome::Applied => true,
            FetchOutcome::Stale => false,
            FetchOutcome::Failed(notice) => {
                show_notice(&notice);
                true
            }
        },
        Msg::SetFrom(value) => {
            component.from_input = value;
            apply_range(component, ctx);
            true
        }
        Msg::SetTo(value) => {
            component.to_input = value;
            apply_range(component, ctx);
            true
        }
        Msg::ClearRange => {
            component.from_input.clear();
            component.to_input.clear();
            apply_range(component, ctx);
            true
        }
        Msg::ToggleRow(id) => {
            component.table.toggle_row(&id);
            true
        }
        Msg::SelectAll => {
            component.table.select_all();
            true
        }
        Msg::BulkDelete => {
            let Some(ids) = component.table.begin_bulk_delete() else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.delete_submissions(&ids).await;
                link.send_message(Msg::BulkDeleted(result));
            });
            true
        }
        Msg::BulkDeleted(result) => {
            let followup = component.table.finish_bulk_delete(result);
            follow(ctx, followup);
            true
        }
        Msg::ToggleStatus(id) => {
            let Some(change) = component.table.begin_toggle_status(&id) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store
                    .update_submission_status(&change.id, change.status)
                    .await;
                link.send_message(Msg::StatusToggled(change, result));
            });
            false
        }
        Msg::StatusToggled(change, result) => {
            let followup = component.table.finish_toggle_status(&change, result);
            follow(ctx, followup);
            false
        }
        Msg::Contact(id) => {
            if let Some(url) = component.table.inbox().contact_link(&id) {
                open_in_new_tab(&url);
            }
            false
        }
        Msg::Delete(id) => {
            let Some(id) = component.table.request_delete(&id, |_| {
                confirm("Are you sure you want to delete this submission?")
            }) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.delete_submission(&id).await;
                link.send_message(Msg::Deleted(id, result));
            });
            false
        }
        Msg::Deleted(id, result) => {
            let notice = component.table.finish_delete(&id, result);
            show_notice(&notice);
            true
        }
        Msg::Export => {
            match component.table.export_csv() {
                Ok(csv) => download_text(&csv, EXPORT_FILE_NAME, "text/csv;charset=utf-8"),
                Err(e) => show_notice(&Notice::error("Error exporting submissions", &e)),
            }
            false
        }
    }
}

fn apply_range(component: &mut SubmissionTableComponent, ctx: &Context<SubmissionTableComponent>) {
    let range = DateRange::from_inputs(&component.from_input, &component.to_input);
    let ticket = component.table.set_range(range);
    fetch(component, ctx, ticket);
}

fn fetch(
    component: &SubmissionTableComponent,
    ctx: &Context<SubmissionTableComponent>,
    ticket: FetchTicket,
) {
    let store = component.store;
    let range = *component.table.range();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = store.list_submissions(&range).await;
        link.send_message(Msg::Fetched(ticket, result));
    });
}

fn follow(ctx: &Context<SubmissionTableComponent>, followup: Followup) {
    show_notice(&followup.notice);
    if followup.refetch {
        ctx.link().send_message(Msg::Fetch);
    }
}
