//! Transient toast notifications

use crate::theme::Palette;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// Background color
    pub fn color(&self) -> &'static str {
        let palette = Palette::default();
        match self {
            NotificationKind::Success => palette.success,
            NotificationKind::Error => palette.error,
            NotificationKind::Info => palette.info,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
            NotificationKind::Info => write!(f, "info"),
        }
    }
}

/// Lifecycle phase of a notification on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Inserted, still transparent and off to the right
    Entering,
    /// Fully visible
    Shown,
    /// Fading out
    Leaving,
    /// Detached from the document; terminal
    Removed,
}

impl NotificationPhase {
    /// `(opacity, transform)` for the phase, `None` once removed
    pub fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            NotificationPhase::Entering | NotificationPhase::Leaving => {
                Some(("0", "translateX(100%)"))
            }
            NotificationPhase::Shown => Some(("1", "translateX(0)")),
            NotificationPhase::Removed => None,
        }
    }
}

/// Phase durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTiming {
    /// Delay before sliding in
    pub enter_delay_ms: u32,
    /// Time from insertion until it starts leaving
    pub display_ms: u32,
    /// Fade-out length before removal
    pub exit_ms: u32,
}

impl NotificationTiming {
    /// Phase at a given time since insertion
    pub fn phase_at(&self, elapsed_ms: u32) -> NotificationPhase {
        if elapsed_ms >= self.display_ms.saturating_add(self.exit_ms) {
            NotificationPhase::Removed
        } else if elapsed_ms >= self.display_ms {
            NotificationPhase::Leaving
        } else if elapsed_ms >= self.enter_delay_ms {
            NotificationPhase::Shown
        } else {
            NotificationPhase::Entering
        }
    }

    /// Times since insertion at which the phase changes
    pub fn schedule(&self) -> [u32; 3] {
        [
            self.enter_delay_ms,
            self.display_ms,
            self.display_ms.saturating_add(self.exit_ms),
        ]
    }
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            display_ms: 5000,
            exit_ms: 300,
        }
    }
}

/// A message shown briefly in the corner of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text content
    pub message: String,
    /// Flavor
    pub kind: NotificationKind,
}

impl Notification {
    /// Create a notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Element class list
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind)
    }

    /// Inline style at insertion
    pub fn css_text(&self) -> String {
        let (opacity, transform) = NotificationPhase::Entering
            .style()
            .unwrap_or(("0", "translateX(100%)"));
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.3); \
             z-index: 9999; opacity: {}; transform: {}; transition: all 0.3s ease;",
            self.kind.color(),
            opacity,
            transform
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_class_and_color() {
        let n = Notification::error("Please fill in all required fields.");
        assert_eq!(n.class_name(), "notification notification-error");
        assert_eq!(n.kind.color(), "#dc3545");
        assert_eq!(Notification::success("ok").kind.color(), "#28a745");
        assert_eq!(Notification::new("hi", NotificationKind::Info).kind.color(), "#17a2b8");
    }

    #[test]
    fn test_css_text_starts_hidden() {
        let css = Notification::new("hi", NotificationKind::default()).css_text();
        assert!(css.contains("background: #17a2b8"));
        assert!(css.contains("opacity: 0"));
        assert!(css.contains("translateX(100%)"));
    }

    #[test]
    fn test_phase_timeline() {
        let timing = NotificationTiming::default();
        assert_eq!(timing.phase_at(0), NotificationPhase::Entering);
        assert_eq!(timing.phase_at(99), NotificationPhase::Entering);
        assert_eq!(timing.phase_at(100), NotificationPhase::Shown);
        assert_eq!(timing.phase_at(4999), NotificationPhase::Shown);
        assert_eq!(timing.phase_at(5000), NotificationPhase::Leaving);
        assert_eq!(timing.phase_at(5299), NotificationPhase::Leaving);
        assert_eq!(timing.phase_at(5300), NotificationPhase::Removed);
    }

    #[test]
    fn test_schedule_matches_phase_at() {
        let timing = NotificationTiming::default();
        let phases: Vec<_> = timing.schedule().iter().map(|&at| timing.phase_at(at)).collect();
        assert_eq!(
            phases,
            vec![
                NotificationPhase::Shown,
                NotificationPhase::Leaving,
                NotificationPhase::Removed
            ]
        );
    }

    #[test]
    fn test_phase_styles() {
        assert_eq!(NotificationPhase::Shown.style(), Some(("1", "translateX(0)")));
        assert_eq!(NotificationPhase::Removed.style(), None);
    }
}
