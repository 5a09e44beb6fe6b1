use super::Page;
use crate::dom;
use ferrara_core::scroll::{anchor_target, scroll_top};
use ferrara_core::Result;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Smooth scroll for in-page links, clearing the fixed navbar
pub fn init(page: &Page) -> Result<()> {
    let navbar_offset = page.config().scroll.navbar_offset_px;

    for link in dom::require_all(page.document(), ANCHOR_SELECTOR)? {
        let document = page.document().clone();
        let window = page.window().clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            // An href that is not a valid selector throws; leave such links alone.
            let Ok(Some(target)) = document.query_selector(selector) else {
                return;
            };
            let Ok(target) = target.dyn_into::<HtmlElement>() else {
                return;
            };

            event.prevent_default();
            let options = ScrollToOptions::new();
            options.set_top(scroll_top(f64::from(target.offset_top()), navbar_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}
