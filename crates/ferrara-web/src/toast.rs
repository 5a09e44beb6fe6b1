//! Transient notification popups

use crate::dom;
use ferrara_core::notify::{Notification, NotificationPhase, NotificationTiming};
use ferrara_core::{Result, SiteError};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Show `notification` and schedule its slide-in, slide-out and removal
pub fn show(document: &Document, notification: &Notification, timing: NotificationTiming) -> Result<()> {
    let body = document
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))?;

    let popup: HtmlElement = document
        .create_element("div")
        .map_err(dom::js_error)?
        .dyn_into()
        .map_err(|_| SiteError::Js("created element is not an HTML element".to_string()))?;
    popup.set_class_name(&notification.class_name());
    popup.set_text_content(Some(&notification.message));
    popup.style().set_css_text(&notification.css_text());
    body.append_child(&popup).map_err(dom::js_error)?;

    for delay in timing.schedule() {
        let popup = popup.clone();
        Timeout::new(delay, move || apply_phase(&popup, timing.phase_at(delay))).forget();
    }
    tracing::debug!(kind = %notification.kind, "Notification shown");
    Ok(())
}

fn apply_phase(popup: &HtmlElement, phase: NotificationPhase) {
    match phase.style() {
        Some((opacity, transform)) => {
            let style = popup.style();
            let result = style
                .set_property("opacity", opacity)
                .and_then(|_| style.set_property("transform", transform));
            if let Err(e) = result {
                tracing::warn!(error = %dom::js_error(e), "Failed to animate notification");
            }
        }
        None => popup.remove(),
    }
}
