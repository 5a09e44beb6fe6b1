//! Site color palette

/// Colors shared by the chart, navbar, and notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Primary accent
    pub gold: &'static str,
    /// Light accent, also the body text color on dark backgrounds
    pub light_gold: &'static str,
    /// Dark accent
    pub dark_gold: &'static str,
    /// Muted gray
    pub gray: &'static str,
    /// Dark gray
    pub dark_gray: &'static str,
    /// Page background
    pub background: &'static str,
    /// Success notification background
    pub success: &'static str,
    /// Error notification background
    pub error: &'static str,
    /// Info notification background
    pub info: &'static str,
}

impl Palette {
    /// Background color at a given opacity
    pub fn background_rgba(&self, alpha: f64) -> String {
        format!("rgba(8, 8, 8, {})", alpha)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gold: "#FFD700",
            light_gold: "#E5E4E2",
            dark_gold: "#B8860B",
            gray: "#808080",
            dark_gray: "#404040",
            background: "#080808",
            success: "#28a745",
            error: "#dc3545",
            info: "#17a2b8",
        }
    }
}
