//! Thin helpers over `web-sys`
//!
//! Every lookup returns `SiteError::MissingElement` instead of panicking so
//! a feature whose anchor is absent can be skipped.

use ferrara_core::media::StyleDecls;
use ferrara_core::{Result, SiteError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

/// Convert a thrown JavaScript value into a `SiteError`
pub fn js_error(value: JsValue) -> SiteError {
    let message = value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value));
    SiteError::Js(message)
}

/// The browser window
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::UnsupportedFacility("window".to_string()))
}

/// The page document
pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::UnsupportedFacility("document".to_string()))
}

/// Element by id, cast to the expected type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::MissingElement(format!("#{} has an unexpected element type", id)))
}

/// First element matching a selector
pub fn query(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))
}

/// All elements matching a selector; an empty match is not an error
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// All elements matching a selector, failing when there are none
pub fn require_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let elements = query_all(document, selector)?;
    if elements.is_empty() {
        return Err(SiteError::MissingElement(selector.to_string()));
    }
    Ok(elements)
}

/// Cast an element to `HtmlElement`
pub fn as_html(element: &Element) -> Result<HtmlElement> {
    element
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::MissingElement(format!("<{}> is not an HTML element", element.tag_name())))
}

/// Add or remove a class
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map_err(js_error)?;
    Ok(())
}

/// Apply inline style declarations
pub fn set_styles(element: &HtmlElement, decls: &StyleDecls) -> Result<()> {
    let style = element.style();
    for (property, value) in decls {
        style.set_property(property, value).map_err(js_error)?;
    }
    Ok(())
}

/// Attach an event listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Run `f` once the document has been parsed
pub fn on_ready<F>(document: &Document, f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let mut pending = Some(f);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}

/// Viewport width in CSS pixels
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Viewport height in CSS pixels
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}
