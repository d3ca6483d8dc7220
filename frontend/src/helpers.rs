//! Browser-side helpers shared by the dashboard screens.
//!
//! - **Toasts**: `show_notice` renders a `Notice` at the bottom of the page
//!   for three seconds.
//! - **Prompts**: `confirm` wraps the blocking `window.confirm` dialog.
//! - **Navigation**: `open_in_new_tab` for outbound contact links.
//! - **Downloads**: `download_text` saves generated text (the CSV export)
//!   through a temporary object URL.
//! - **Formatting**: timestamps and counts as shown in the tables.

use chrono::{DateTime, Utc};
use common::screens::{Notice, NoticeKind};
use gloo_file::{Blob, ObjectUrl};
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement};

/// Displays a temporary notification at the bottom of the screen.
pub fn show_notice(notice: &Notice) {
    let background = match notice.kind {
        NoticeKind::Success => "rgba(0, 0, 0, 0.8)",
        NoticeKind::Error => "rgba(185, 28, 28, 0.9)",
    };
    if notice.is_error() {
        gloo_console::error!(notice.title.clone());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(&notice.title));
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", background).ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();
        style.set_property("font-family", "Arial, sans-serif").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Blocking yes/no prompt. Anything other than an explicit yes counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            gloo_console::error!("could not open", url.to_string(), e);
        }
    }
}

/// Offers `content` to the user as a file download named `file_name`.
pub fn download_text(content: &str, file_name: &str, mime_type: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let blob = Blob::new_with_options(content, Some(mime_type));
    let url = ObjectUrl::from(blob);

    let anchor = match document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    {
        Some(anchor) => anchor,
        None => {
            gloo_console::error!("could not create a download link");
            return;
        }
    };
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.style().set_property("display", "none").ok();

    if let Some(body) = document.body() {
        if body.append_child(&anchor).is_ok() {
            anchor.click();
            body.remove_child(&anchor).ok();
        }
    }
    // `url` is revoked when dropped here, after the click has started the download.
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}
