//! Smooth scrolling to in-page anchors

/// Height of the fixed navbar the scroll target must clear
pub const DEFAULT_NAVBAR_OFFSET_PX: f64 = 80.0;

/// Selector an anchor `href` points at, if it is an in-page link
///
/// A bare `"#"` is a placeholder and resolves to nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Document scroll position that puts the target just below the navbar
pub fn scroll_top(target_offset_top: f64, navbar_offset: f64) -> f64 {
    (target_offset_top - navbar_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#services"), Some("#services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn test_scroll_top_clears_navbar() {
        assert_eq!(scroll_top(1000.0, DEFAULT_NAVBAR_OFFSET_PX), 920.0);
        assert_eq!(scroll_top(40.0, DEFAULT_NAVBAR_OFFSET_PX), 0.0);
    }
}
