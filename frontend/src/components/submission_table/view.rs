//! View rendering for the submission table: filter bar, bulk actions and
//! one row per loaded submission.

use common::export::StatusColumn;
use common::model::submission::Submission;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::SubmissionTableComponent;
use crate::components::status_badge;
use crate::helpers::{format_count, format_timestamp};

pub fn view(component: &SubmissionTableComponent, ctx: &Context<SubmissionTableComponent>) -> Html {
    let link = ctx.link();
    let table = &component.table;
    let selected = table.selection().len();
    let status_header = match table.status_column() {
        StatusColumn::Literal => "Status",
        StatusColumn::YesNo => "Contacted",
    };

    html! {
        <div class="submission-table">
            <div class="screen-header">
                <h2>{ format!("Submissions ({})", format_count(table.submissions().len())) }</h2>
                <div class="actions">
                    <button onclick={link.callback(|_| Msg::Fetch)}>{"Refresh"}</button>
                    <button onclick={link.callback(|_| Msg::Export)}>{"Export CSV"}</button>
                    <button
                        class="danger"
                        disabled={selected == 0 || table.is_deleting()}
                        onclick={link.callback(|_| Msg::BulkDelete)}
                    >
                        { format!("Delete Selected ({})", format_count(selected)) }
                    </button>
                </div>
            </div>

            { build_filter_bar(component, link) }

            {
                if table.inbox().is_loading() && table.submissions().is_empty() {
                    html! { <div class="card loading">{"Loading submissions..."}</div> }
                } else if table.submissions().is_empty() {
                    html! { <div class="card empty">{"No submissions found."}</div> }
                } else {
                    html! {
                        <table>
                            <thead>
                                <tr>
                                    <th>
                                        <input
                                            type="checkbox"
                                            checked={table.all_selected()}
                                            onchange={link.callback(|_: Event| Msg::SelectAll)}
                                        />
                                    </th>
                                    <th>{"Name"}</th>
                                    <th>{"Mobile"}</th>
                                    <th>{"Website"}</th>
                                    <th>{ status_header }</th>
                                    <th>{"Submitted At"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for table.submissions().iter().map(|s| build_row(component, s, link)) }
                            </tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}

fn build_filter_bar(component: &SubmissionTableComponent, link: &Scope<SubmissionTableComponent>) -> Html {
    let on_from = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetFrom(input.value())
    });
    let on_to = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetTo(input.value())
    });

    html! {
        <div class="filter-bar">
            <label>
                {"From"}
                <input type="date" value={component.from_input.clone()} onchange={on_from} />
            </label>
            <label>
                {"To"}
                <input type="date" value={component.to_input.clone()} onchange={on_to} />
            </label>
            {
                if component.table.range().is_active() {
                    html! { <button onclick={link.callback(|_| Msg::ClearRange)}>{"Clear"}</button> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_row(
    component: &SubmissionTableComponent,
    submission: &Submission,
    link: &Scope<SubmissionTableComponent>,
) -> Html {
    let table = &component.table;
    let id = submission.id.clone();
    let on_select = {
        let id = id.clone();
        link.callback(move |_: Event| Msg::ToggleRow(id.clone()))
    };
    let on_toggle = {
        let id = id.clone();
        link.callback(move |_| Msg::ToggleStatus(id.clone()))
    };
    let on_contact = {
        let id = id.clone();
        link.callback(move |_| Msg::Contact(id.clone()))
    };
    let on_delete = link.callback(move |_| Msg::Delete(id.clone()));

    let contacted = submission.status.is_contacted();
    let status_cell = match table.status_column() {
        StatusColumn::Literal => status_badge(submission.status),
        StatusColumn::YesNo => html! { { if contacted { "Yes" } else { "No" } } },
    };

    html! {
        <tr key={submission.id.clone()} class={classes!(table.is_selected(&submission.id).then_some("selected"))}>
            <td>
                <input type="checkbox" checked={table.is_selected(&submission.id)} onchange={on_select} />
            </td>
            <td>{ submission.name.clone() }</td>
            <td>{ submission.mobile_number.clone() }</td>
            <td>{ submission.selected_website.clone() }</td>
            <td>{ status_cell }</td>
            <td>{ format_timestamp(&submission.submitted_at) }</td>
            <td class="actions">
                <button onclick={on_toggle}>
                    { if contacted { "Mark Pending" } else { "Mark Contacted" } }
                </button>
                <button onclick={on_contact}>{"WhatsApp"}</button>
                <button class="danger" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
