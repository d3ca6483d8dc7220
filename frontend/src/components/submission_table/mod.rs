//! Submission table screen: date filter, multi-select, bulk delete,
//! contacted/pending toggle and CSV export.
//!
//! Every date change issues a fresh fetch. The selection, the range and the
//! request sequencing all live in `common::screens::submission_table`.

use crate::api::HttpStore;
use common::screens::submission_table::SubmissionTable;
use yew::prelude::*;

mod messages;
mod props;
mod update;
mod view;

pub use messages::Msg;
pub use props::SubmissionTableProps;

pub struct SubmissionTableComponent {
    pub table: SubmissionTable,
    pub store: HttpStore,
    /// Raw values of the two date inputs, kept so a half-typed date does
    /// not clear the field.
    pub from_input: String,
    pub to_input: String,
}

impl Component for SubmissionTableComponent {
    type Message = Msg;
    type Properties = SubmissionTableProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            table: SubmissionTable::new(ctx.props().status_column),
            store: HttpStore,
            from_input: String::new(),
            to_input: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
