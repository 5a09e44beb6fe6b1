use super::Page;
use crate::dom;
use ferrara_core::review::{ControlState, RevealQueue, ReviewItem, ReviewRenderer, ReviewSink};
use ferrara_core::review::render::REVIEW_COLUMN_CLASS;
use ferrara_core::Result;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlElement};

/// The review grid and its "load more" button
struct DomReviewSection {
    document: Document,
    container: Element,
    button: HtmlElement,
    renderer: ReviewRenderer,
}

impl ReviewSink for DomReviewSection {
    /// Cards are built in a fragment, so a failure leaves the grid untouched
    fn append(&mut self, items: &[ReviewItem]) -> Result<()> {
        let fragment = self.document.create_document_fragment();
        for item in items {
            let column = self.document.create_element("div").map_err(dom::js_error)?;
            column.set_class_name(REVIEW_COLUMN_CLASS);
            column.set_inner_html(&self.renderer.card(item));
            fragment.append_child(&column).map_err(dom::js_error)?;
        }
        self.container.append_child(&fragment).map_err(dom::js_error)?;
        Ok(())
    }

    fn update_control(&mut self, control: &ControlState) {
        match self.renderer.control(control) {
            Some(markup) => self.button.set_inner_html(&markup),
            None => {
                if let Err(e) = self.button.style().set_property("display", "none") {
                    tracing::warn!(error = %dom::js_error(e), "Failed to hide review button");
                }
            }
        }
    }
}

/// "Load more" reviews
pub fn init(page: &Page) -> Result<()> {
    let reviews = &page.config().reviews;
    let button: HtmlElement = dom::by_id(page.document(), &reviews.button_id)?;
    let container: Element = dom::by_id(page.document(), &reviews.container_id)?;
    let mut queue = RevealQueue::new(reviews.items.clone(), reviews.batch_size)?;

    let mut section = DomReviewSection {
        document: page.document().clone(),
        container,
        button: button.clone(),
        renderer: ReviewRenderer::new(),
    };
    section.update_control(&queue.control());

    let section = Rc::new(RefCell::new(section));
    dom::listen(&button, "click", move |_| {
        match queue.reveal_into(&mut *section.borrow_mut()) {
            Ok(shown) => {
                tracing::debug!(shown, remaining = queue.remaining(), "Load more reviews clicked")
            }
            Err(e) => tracing::warn!(error = %e, "Failed to insert review cards"),
        }
    })
}
