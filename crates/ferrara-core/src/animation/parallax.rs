//! Hero image parallax

/// Parallax effect for the hero image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    speed: f64,
    min_viewport_width: f64,
}

impl Parallax {
    /// Create an effect moving the image at `speed` times the scroll distance
    pub fn new(speed: f64, min_viewport_width: f64) -> Self {
        Self {
            speed,
            min_viewport_width,
        }
    }

    /// The effect only runs on wide viewports
    pub fn is_enabled_for(&self, viewport_width: f64) -> bool {
        viewport_width > self.min_viewport_width
    }

    /// Vertical offset for the hero image, while the hero is still on screen
    pub fn offset(&self, scroll_y: f64, viewport_height: f64) -> Option<f64> {
        (scroll_y < viewport_height).then(|| scroll_y * self.speed)
    }

    /// CSS transform for a scroll position
    pub fn transform(&self, scroll_y: f64, viewport_height: f64) -> Option<String> {
        self.offset(scroll_y, viewport_height)
            .map(|y| format!("translateY({}px)", y))
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new(0.5, 768.0)
    }
}
