pub mod site_catalog;
pub mod submission_inbox;
pub mod submission_table;

use common::model::submission::SubmissionStatus;
use yew::prelude::*;

/// Colored status pill shared by the inbox and the table.
pub(crate) fn status_badge(status: SubmissionStatus) -> Html {
    let label = match status {
        SubmissionStatus::Pending => "Pending",
        SubmissionStatus::Processed => "Processed",
        SubmissionStatus::Contacted => "Contacted",
    };
    html! { <span class={classes!("badge", format!("status-{}", status))}>{ label }</span> }
}
