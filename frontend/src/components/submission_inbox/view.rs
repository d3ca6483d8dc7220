use common::model::submission::Submission;
use common::screens::submission_inbox::available_actions;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::SubmissionInboxComponent;
use crate::components::status_badge;
use crate::helpers::format_timestamp;

pub fn view(
    component: &SubmissionInboxComponent,
    ctx: &Context<SubmissionInboxComponent>,
) -> Html {
    let link = ctx.link();
    let inbox = &component.inbox;

    if inbox.is_loading() && inbox.submissions().is_empty() {
        return html! { <div class="card loading">{"Loading submissions..."}</div> };
    }

    html! {
        <div class="submission-inbox">
            <div class="screen-header">
                <h2>{ format!("User Submissions ({})", inbox.submissions().len()) }</h2>
                <button onclick={link.callback(|_| Msg::Fetch)}>{"Refresh"}</button>
            </div>
            {
                if inbox.submissions().is_empty() {
                    html! { <div class="card empty">{"No submissions found."}</div> }
                } else {
                    html! {
                        <div class="submission-list">
                            { for inbox.submissions().iter().map(|s| build_card(s, link)) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn build_card(submission: &Submission, link: &Scope<SubmissionInboxComponent>) -> Html {
    let contact = {
        let id = submission.id.clone();
        link.callback(move |_| Msg::Contact(id.clone()))
    };

    html! {
        <div class="card submission-card" key={submission.id.clone()}>
            <div class="submission-heading">
                <div>
                    <h3>{ submission.name.clone() }</h3>
                    <p class="muted">{ format_timestamp(&submission.submitted_at) }</p>
                </div>
                { status_badge(submission.status) }
            </div>
            <p><span class="muted">{"Mobile:"}</span>{" "}{ submission.mobile_number.clone() }</p>
            <p><span class="muted">{"Website:"}</span>{" "}{ submission.selected_website.clone() }</p>
            <div class="actions">
                <button onclick={contact}>{"WhatsApp"}</button>
                { for available_actions(submission.status).into_iter().map(|action| {
                    let id = submission.id.clone();
                    let target = action.target();
                    html! {
                        <button
                            class={classes!("primary", format!("to-{}", target))}
                            onclick={link.callback(move |_| Msg::Advance(id.clone(), target))}
                        >
                            { action.label() }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
