//! HTML markup for review cards

use super::model::ReviewItem;
use super::queue::ControlState;

/// Class of the grid column wrapping each card
pub const REVIEW_COLUMN_CLASS: &str = "col-lg-4 col-md-6 mb-4";

/// Renders reviews into the markup the site stylesheet expects
#[derive(Debug, Clone, Default)]
pub struct ReviewRenderer;

impl ReviewRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Inner markup of a review column
    pub fn card(&self, review: &ReviewItem) -> String {
        let mut html = String::new();
        html.push_str("<div class=\"review-card\">");
        html.push_str("<div class=\"review-header\">");
        html.push_str(&self.stars(review));
        html.push_str("<div class=\"reviewer-info\">");
        html.push_str(&format!("<strong>{}</strong>", escape(review.name())));
        html.push_str(&format!(
            "<small class=\"text-muted\">{}</small>",
            escape(review.relative_time())
        ));
        html.push_str("</div></div>");
        html.push_str(&format!(
            "<p class=\"review-text\">\"{}\"</p>",
            escape(review.text())
        ));
        html.push_str("</div>");
        html
    }

    fn stars(&self, review: &ReviewItem) -> String {
        let mut html = String::from("<div class=\"stars\">");
        for _ in 0..review.rating().stars() {
            html.push_str("<i class=\"fas fa-star\"></i>");
        }
        html.push_str("</div>");
        html
    }

    /// Inner markup of the "load more" button, if it is still visible
    pub fn control(&self, control: &ControlState) -> Option<String> {
        control
            .label()
            .map(|label| format!("<i class=\"fas fa-plus-circle me-2\"></i>{}", escape(&label)))
    }
}

/// Escape text for HTML element content
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
