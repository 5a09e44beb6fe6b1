use super::Page;
use crate::dom;
use ferrara_core::Result;

const HERO_SECTION_SELECTOR: &str = ".hero-section";
const HERO_IMAGE_SELECTOR: &str = ".hero-image";

/// Hero image parallax on wide viewports
pub fn init(page: &Page) -> Result<()> {
    let effect = page.config().parallax.effect();
    let width = dom::viewport_width(page.window());
    if !effect.is_enabled_for(width) {
        tracing::debug!(width, "Parallax disabled for narrow viewport");
        return Ok(());
    }

    dom::query(page.document(), HERO_SECTION_SELECTOR)?;
    let image = dom::as_html(&dom::query(page.document(), HERO_IMAGE_SELECTOR)?)?;
    let window = page.window().clone();

    dom::listen(page.window(), "scroll", move |_| {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let Some(transform) = effect.transform(scroll_y, dom::viewport_height(&window)) else {
            return;
        };
        if let Err(e) = image.style().set_property("transform", &transform) {
            tracing::warn!(error = %dom::js_error(e), "Failed to move hero image");
        }
    })
}
