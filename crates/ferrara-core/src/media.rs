//! Image loading and fade-in effects

/// Class removed from lazy images once their real source is set
pub const LAZY_CLASS: &str = "lazy";

/// Selector of images whose real source waits in `data-src`
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Selector of remote photos faded in once loaded
pub const REMOTE_IMAGE_SELECTOR: &str = "img[src*=\"unsplash\"]";

/// Selector of cards that fade in on scroll
pub const FADE_IN_SELECTOR: &str = ".service-card, .review-card, .stat-card";

/// Inline style declarations, as `(property, value)` pairs
pub type StyleDecls = [(&'static str, &'static str)];

/// Style of a fade-in card before it has been seen
pub const FADE_IN_INITIAL: &StyleDecls = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Style of a fade-in card once visible
pub const FADE_IN_VISIBLE: &StyleDecls = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Style of a remote image while it downloads
pub const IMAGE_LOADING: &StyleDecls = &[("opacity", "0"), ("transition", "opacity 0.5s ease")];

/// Style of a remote image once loaded
pub const IMAGE_LOADED: &StyleDecls = &[("opacity", "1")];

/// Source swap for an image whose real URL waits in `data-src`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    data_src: String,
}

impl LazyImage {
    /// Read the deferred source; an empty `data-src` is not a lazy image
    pub fn from_data_src(data_src: &str) -> Option<Self> {
        let data_src = data_src.trim();
        (!data_src.is_empty()).then(|| Self {
            data_src: data_src.to_string(),
        })
    }

    /// URL to assign to `src`
    pub fn src(&self) -> &str {
        &self.data_src
    }
}
