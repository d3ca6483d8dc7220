//! View rendering for the site catalog: header with refresh/add buttons,
//! the add/edit form when open, then one card per site.

use common::model::partner_site::{ButtonColor, PartnerSite};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{Msg, SiteField};
use super::SiteCatalogComponent;

pub fn view(component: &SiteCatalogComponent, ctx: &Context<SiteCatalogComponent>) -> Html {
    let link = ctx.link();
    let catalog = &component.catalog;

    if catalog.is_loading() && catalog.sites().is_empty() {
        return html! { <div class="card loading">{"Loading betting sites..."}</div> };
    }

    html! {
        <div class="site-catalog">
            <div class="screen-header">
                <h2>{ format!("Betting Sites ({})", catalog.sites().len()) }</h2>
                <div class="actions">
                    <button onclick={link.callback(|_| Msg::Fetch)}>{"Refresh"}</button>
                    <button class="primary" onclick={link.callback(|_| Msg::OpenCreate)}>{"Add Site"}</button>
                </div>
            </div>

            { if catalog.form().visible { build_form(component, link) } else { html! {} } }

            {
                if catalog.sites().is_empty() {
                    html! { <div class="card empty">{"No betting sites found."}</div> }
                } else {
                    html! {
                        <div class="site-list">
                            { for catalog.sites().iter().map(|site| build_site_card(site, link)) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn build_form(component: &SiteCatalogComponent, link: &Scope<SiteCatalogComponent>) -> Html {
    let form = component.catalog.form();
    let editing = form.editing.is_some();
    let fields = &form.fields;

    html! {
        <div class="card site-form">
            <h3>{ if editing { "Edit Site" } else { "Add New Site" } }</h3>
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                { text_input(link, "Name", SiteField::Name, &fields.name, "e.g., cricindia99", true) }
                { text_input(link, "Display Name", SiteField::DisplayName, &fields.display_name, "e.g., cricindia99.com (CricBet99)", true) }
                { text_input(link, "URL", SiteField::Url, &fields.url, "https://example.com", true) }
                { text_input(link, "Logo URL (optional)", SiteField::LogoUrl, &fields.logo_url, "https://example.com/logo.png", false) }
                <label>
                    {"Button Color"}
                    <select onchange={link.batch_callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        select.value().parse::<ButtonColor>().ok().map(Msg::PickColor)
                    })}>
                        { for ButtonColor::ALL.iter().map(|color| html! {
                            <option value={color.as_str()} selected={*color == fields.button_color}>
                                { color.label() }
                            </option>
                        }) }
                    </select>
                </label>
                <div class="actions">
                    <button type="submit" class="primary" disabled={component.catalog.is_saving()}>
                        { if editing { "Update Site" } else { "Add Site" } }
                    </button>
                    <button type="button" onclick={link.callback(|_| Msg::CancelForm)}>{"Cancel"}</button>
                </div>
            </form>
        </div>
    }
}

fn text_input(
    link: &Scope<SiteCatalogComponent>,
    label: &'static str,
    field: SiteField,
    value: &str,
    placeholder: &'static str,
    required: bool,
) -> Html {
    html! {
        <label>
            { label }
            <input
                type="text"
                value={value.to_string()}
                placeholder={placeholder}
                required={required}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::EditField(field, input.value())
                })}
            />
        </label>
    }
}

fn build_site_card(site: &PartnerSite, link: &Scope<SiteCatalogComponent>) -> Html {
    let toggle = {
        let (id, next) = (site.id.clone(), !site.is_active);
        link.callback(move |_: Event| Msg::SetActive(id.clone(), next))
    };
    let edit = {
        let id = site.id.clone();
        link.callback(move |_| Msg::StartEdit(id.clone()))
    };
    let delete = {
        let id = site.id.clone();
        link.callback(move |_| Msg::Delete(id.clone()))
    };

    html! {
        <div class="card site-card" key={site.id.clone()}>
            <div class="site-heading">
                <div>
                    <h3>{ site.display_name.clone() }</h3>
                    <p class="muted">{ site.name.clone() }</p>
                    <a href={site.url.clone()} target="_blank" rel="noopener noreferrer">{ site.url.clone() }</a>
                </div>
                <div class="badges">
                    <span class={classes!("badge", format!("color-{}", site.button_color))}>
                        { site.button_color.as_str() }
                    </span>
                    {
                        if site.is_active {
                            html! { <span class="badge active">{"Active"}</span> }
                        } else {
                            html! { <span class="badge inactive">{"Inactive"}</span> }
                        }
                    }
                </div>
            </div>
            <div class="site-controls">
                <label>
                    <input type="checkbox" checked={site.is_active} onchange={toggle} />
                    {"Active"}
                </label>
                <div class="actions">
                    <button onclick={edit}>{"Edit"}</button>
                    <button class="danger" onclick={delete}>{"Delete"}</button>
                </div>
            </div>
        </div>
    }
}
