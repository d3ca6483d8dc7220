use crate::components::site_catalog::SiteCatalogComponent;
use crate::components::submission_inbox::SubmissionInboxComponent;
use crate::components::submission_table::SubmissionTableComponent;
use common::export::StatusColumn;
use yew::{classes, html, Component, Context, Html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sites,
    Inbox,
    Table,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Sites, Tab::Inbox, Tab::Table];

    fn label(&self) -> &'static str {
        match self {
            Tab::Sites => "Betting Sites",
            Tab::Inbox => "Inbox",
            Tab::Table => "Submissions",
        }
    }
}

pub enum Msg {
    SetTab(Tab),
    SetStatusColumn(StatusColumn),
}

/// Dashboard shell: a tab bar and the active screen. Each screen fetches its
/// own data when it is mounted.
pub struct App {
    tab: Tab,
    status_column: StatusColumn,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: Tab::Table,
            status_column: StatusColumn::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                let changed = self.tab != tab;
                self.tab = tab;
                changed
            }
            Msg::SetStatusColumn(column) => {
                self.status_column = column;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let yes_no = self.status_column == StatusColumn::YesNo;

        html! {
            <div class="leaddesk">
                <nav class="tab-bar">
                    { for Tab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        html! {
                            <button
                                class={classes!("tab", (tab == self.tab).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SetTab(tab))}
                            >
                                { tab.label() }
                            </button>
                        }
                    }) }
                </nav>
                {
                    match self.tab {
                        Tab::Sites => html! { <SiteCatalogComponent /> },
                        Tab::Inbox => html! { <SubmissionInboxComponent /> },
                        Tab::Table => html! {
                            <>
                                <label class="column-mode">
                                    <input
                                        type="checkbox"
                                        checked={yes_no}
                                        onchange={link.callback(move |_| Msg::SetStatusColumn(
                                            if yes_no { StatusColumn::Literal } else { StatusColumn::YesNo }
                                        ))}
                                    />
                                    {"Show Contacted (Yes/No) column"}
                                </label>
                                // Keyed so switching the column mode rebuilds the screen.
                                <SubmissionTableComponent
                                    key={self.status_column.as_str()}
                                    status_column={self.status_column}
                                />
                            </>
                        },
                    }
                }
            </div>
        }
    }
}
