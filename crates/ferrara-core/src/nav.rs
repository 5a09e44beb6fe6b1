//! Mobile navigation menu and navbar scroll styling

use crate::theme::Palette;

/// Viewport width below which the menu collapses behind the toggler
pub const DEFAULT_COLLAPSE_BREAKPOINT_PX: f64 = 992.0;

/// Scroll distance after which the navbar turns solid
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Class toggled on the menu while it is open
pub const MENU_OPEN_CLASS: &str = "show";

/// Class carried by the toggler while the menu is closed
pub const TOGGLER_COLLAPSED_CLASS: &str = "collapsed";

/// Class state of the menu and its toggler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavClasses {
    /// Whether the menu carries `show`
    pub menu_shown: bool,
    /// Whether the toggler carries `collapsed`
    pub toggler_collapsed: bool,
}

/// Open/closed state of the collapsible menu
#[derive(Debug, Clone)]
pub struct NavMenu {
    open: bool,
    collapse_breakpoint: f64,
}

impl NavMenu {
    /// Create a closed menu
    pub fn new(collapse_breakpoint: f64) -> Self {
        Self::with_state(collapse_breakpoint, false)
    }

    /// Create a menu in the state the page rendered it in
    pub fn with_state(collapse_breakpoint: f64, open: bool) -> Self {
        Self {
            open,
            collapse_breakpoint,
        }
    }

    /// Toggler clicked
    pub fn toggle(&mut self) -> NavClasses {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Navigation toggled");
        self.classes()
    }

    /// A nav link was clicked; closes the menu on collapsed layouts
    pub fn on_link_click(&mut self, viewport_width: f64) -> Option<NavClasses> {
        (viewport_width < self.collapse_breakpoint).then(|| self.close())
    }

    /// A click landed somewhere on the document
    ///
    /// `inside` is true when it hit the toggler or the menu.
    pub fn on_document_click(&mut self, inside: bool) -> Option<NavClasses> {
        (!inside).then(|| self.close())
    }

    /// Close the menu
    pub fn close(&mut self) -> NavClasses {
        self.open = false;
        self.classes()
    }

    /// Check if the menu is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Classes matching the current state
    pub fn classes(&self) -> NavClasses {
        NavClasses {
            menu_shown: self.open,
            toggler_collapsed: !self.open,
        }
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(DEFAULT_COLLAPSE_BREAKPOINT_PX)
    }
}

/// Inline style of the fixed navbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarStyle {
    /// `background-color` value
    pub background_color: String,
    /// `backdrop-filter` value
    pub backdrop_filter: String,
}

impl NavbarStyle {
    /// Style for a scroll position
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        let palette = Palette::default();
        if scroll_y > threshold {
            Self {
                background_color: palette.background_rgba(0.98),
                backdrop_filter: "blur(15px)".to_string(),
            }
        } else {
            Self {
                background_color: palette.background_rgba(0.95),
                backdrop_filter: "blur(10px)".to_string(),
            }
        }
    }
}
