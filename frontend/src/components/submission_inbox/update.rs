use common::filter::DateRange;
use common::screens::rows::FetchOutcome;
use common::screens::Notice;
use common::store::RecordStore;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::SubmissionInboxComponent;
use crate::helpers::{open_in_new_tab, show_notice};

pub fn update(
    component: &mut SubmissionInboxComponent,
    ctx: &Context<SubmissionInboxComponent>,
    msg: Msg,
) -> bool {
    let store = component.store;
    match msg {
        Msg::Fetch => {
            let ticket = component.inbox.begin_fetch();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store.list_submissions(&DateRange::default()).await;
                link.send_message(Msg::Fetched(ticket, result));
            });
            true
        }
        Msg::Fetched(ticket, result) => match component.inbox.apply_fetch(ticket, result) {
            FetchOutcome::Applied => true,
            FetchOutcome::Stale => false,
            FetchOutcome::Failed(notice) => {
                show_notice(&notice);
                true
            }
        },
        Msg::Advance(id, next) => {
            // Moves the inbox does not offer are refused before any request.
            let change = match component.inbox.begin_advance(&id, next) {
                Ok(change) => change,
                Err(e) => {
                    show_notice(&Notice::error("Error updating status", &e));
                    return false;
                }
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = store
                    .update_submission_status(&change.id, change.status)
                    .await;
                link.send_message(Msg::Advanced(change, result));
            });
            false
        }
        Msg::Advanced(change, result) => {
            let notice = component.inbox.finish_advance(&change, result);
            show_notice(&notice);
            true
        }
        Msg::Contact(id) => {
            if let Some(link) = component.inbox.contact_link(&id) {
                open_in_new_tab(&link);
            }
            false
        }
    }
}
