//! Submission inbox screen: every lead as a card with forward-only status
//! buttons and a WhatsApp contact link.

use crate::api::HttpStore;
use common::screens::submission_inbox::SubmissionInbox;
use yew::prelude::*;

mod messages;
mod update;
mod view;

pub use messages::Msg;

pub struct SubmissionInboxComponent {
    pub inbox: SubmissionInbox,
    pub store: HttpStore,
}

impl Component for SubmissionInboxComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            inbox: SubmissionInbox::new(),
            store: HttpStore,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
