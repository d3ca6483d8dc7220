//! Partner site catalog screen: root module wiring the Yew `Component`
//! implementation with its messages, update logic and view.
//!
//! All list and form state lives in `common::screens::site_catalog::SiteCatalog`;
//! this component only performs the calls it asks for and renders the result.

use crate::api::HttpStore;
use common::screens::site_catalog::SiteCatalog;
use yew::prelude::*;

mod messages;
mod update;
mod view;

pub use messages::{Msg, SiteField};

pub struct SiteCatalogComponent {
    pub catalog: SiteCatalog,
    pub store: HttpStore,
}

impl Component for SiteCatalogComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            catalog: SiteCatalog::new(),
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
