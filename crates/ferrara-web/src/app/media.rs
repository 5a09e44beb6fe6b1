use super::Page;
use crate::{dom, observer};
use ferrara_core::media::{
    LazyImage, FADE_IN_INITIAL, FADE_IN_SELECTOR, FADE_IN_VISIBLE, IMAGE_LOADED, IMAGE_LOADING,
    LAZY_CLASS, LAZY_IMAGE_SELECTOR, REMOTE_IMAGE_SELECTOR,
};
use ferrara_core::{Result, Threshold};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

/// Fade cards in as they scroll into view, once the page has settled
pub fn schedule_fade_in(page: &Page) -> Result<()> {
    observer::ensure_supported()?;
    let document = page.document().clone();
    let media = page.config().media.clone();

    Timeout::new(media.fade_in_delay_ms, move || {
        if let Err(e) = fade_in_cards(&document, media.fade_in_threshold) {
            tracing::warn!(error = %e, "Failed to set up card fade-in");
        }
    })
    .forget();
    Ok(())
}

fn fade_in_cards(document: &Document, threshold: Threshold) -> Result<()> {
    let cards = dom::query_all(document, FADE_IN_SELECTOR)?;
    for card in &cards {
        dom::set_styles(&dom::as_html(card)?, FADE_IN_INITIAL)?;
    }
    observer::observe_once(cards, threshold, |card| {
        if let Err(e) = dom::as_html(card).and_then(|card| dom::set_styles(&card, FADE_IN_VISIBLE)) {
            tracing::warn!(error = %e, "Failed to reveal card");
        }
    })?;
    Ok(())
}

/// Fade remote images in once they finish loading
pub fn init_image_loading(page: &Page) -> Result<()> {
    for element in dom::require_all(page.document(), REMOTE_IMAGE_SELECTOR)? {
        let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        // A cached image may already be decoded and will never fire `load`.
        if image.complete() {
            continue;
        }
        let loaded = image.clone();
        dom::listen(&image, "load", move |_| {
            if let Err(e) = dom::set_styles(&loaded, IMAGE_LOADED) {
                tracing::warn!(error = %e, "Failed to show loaded image");
            }
        })?;
        dom::set_styles(&image, IMAGE_LOADING)?;
    }
    Ok(())
}

/// Swap in deferred image sources as they scroll into view
pub fn init_lazy_images(page: &Page) -> Result<()> {
    let images = dom::require_all(page.document(), LAZY_IMAGE_SELECTOR)?;
    observer::observe_once(images, Threshold::ANY, |image| {
        let Some(lazy) = image
            .get_attribute("data-src")
            .and_then(|src| LazyImage::from_data_src(&src))
        else {
            return;
        };
        let result = image
            .set_attribute("src", lazy.src())
            .map_err(dom::js_error)
            .and_then(|_| dom::set_class(image, LAZY_CLASS, false));
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to load lazy image");
        }
    })?;
    Ok(())
}
