//! Configuration management for ferrara-site

use crate::animation::counter::{DEFAULT_DURATION_MS, DEFAULT_FRAME_INTERVAL_MS};
use crate::animation::Parallax;
use crate::chart::{validate_distribution, DEFAULT_DISTRIBUTION};
use crate::error::{Result, SiteError};
use crate::nav::{DEFAULT_COLLAPSE_BREAKPOINT_PX, DEFAULT_SCROLL_THRESHOLD_PX};
use crate::notify::NotificationTiming;
use crate::review::queue::DEFAULT_BATCH_SIZE;
use crate::review::ReviewItem;
use crate::scroll::DEFAULT_NAVBAR_OFFSET_PX;
use crate::types::Threshold;
use serde::{Deserialize, Serialize};

/// Configuration shipped with the site
const EMBEDDED_CONFIG: &str = include_str!("../assets/site.toml");

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Business details for the startup banner
    pub business: BusinessConfig,
    /// "Load more" review settings
    pub reviews: ReviewsConfig,
    /// Animated statistics settings
    pub stats: StatsConfig,
    /// Satisfaction chart settings
    pub chart: ChartSettings,
    /// Navigation settings
    pub navigation: NavigationConfig,
    /// Smooth scroll settings
    pub scroll: ScrollConfig,
    /// Notification timings
    pub notifications: NotificationTiming,
    /// Image and fade-in settings
    pub media: MediaConfig,
    /// Hero parallax settings
    pub parallax: ParallaxConfig,
}

impl SiteConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the site
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG).map_err(|e| e.with_context("Embedded site.toml"))
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SiteError::Toml(e.to_string()))
    }

    /// Check cross-field constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.reviews.batch_size == 0 {
            return Err(SiteError::Config(
                "reviews.batch_size must be at least 1".to_string(),
            ));
        }
        if self.stats.frame_interval_ms == 0 {
            return Err(SiteError::Config(
                "stats.frame_interval_ms must be at least 1".to_string(),
            ));
        }
        validate_distribution(&self.chart.distribution)
            .map_err(|e| e.with_context("chart.distribution"))?;
        Ok(())
    }
}

/// Business details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    /// Business name
    pub name: String,
    /// Service area
    pub location: String,
    /// Phone number
    pub phone: String,
    /// Contact email
    pub email: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "Ferrara's Auto Detailing".to_string(),
            location: "Centerville, OH".to_string(),
            phone: "+1 937-558-6934".to_string(),
            email: "nfferrara9@gmail.com".to_string(),
        }
    }
}

/// Review list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    /// Id of the "load more" button
    pub button_id: String,
    /// Id of the container cards are appended to
    pub container_id: String,
    /// Reviews revealed per click
    pub batch_size: usize,
    /// Reviews hidden behind the button, in display order
    pub items: Vec<ReviewItem>,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            button_id: "loadMoreReviews".to_string(),
            container_id: "reviewsContainer".to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            items: Vec::new(),
        }
    }
}

/// Animated statistics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Selector of the counter elements
    pub selector: String,
    /// Visible fraction that starts a counter
    pub threshold: Threshold,
    /// Count-up duration
    pub duration_ms: u32,
    /// Tick cadence
    pub frame_interval_ms: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            selector: ".stat-number".to_string(),
            threshold: Threshold::new(0.5).unwrap_or(Threshold::ANY),
            duration_ms: DEFAULT_DURATION_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

/// Satisfaction chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Id of the canvas element
    pub canvas_id: String,
    /// Visible fraction that creates the chart
    pub threshold: Threshold,
    /// Percentage per category, 5 stars first
    pub distribution: Vec<u32>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            canvas_id: "satisfactionChart".to_string(),
            threshold: Threshold::new(0.3).unwrap_or(Threshold::ANY),
            distribution: DEFAULT_DISTRIBUTION.to_vec(),
        }
    }
}

/// Navigation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Id of the hamburger button
    pub toggler_id: String,
    /// Id of the collapsible menu
    pub menu_id: String,
    /// Viewport width below which link clicks close the menu
    pub collapse_breakpoint_px: f64,
    /// Scroll distance after which the navbar turns solid
    pub scroll_threshold_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            toggler_id: "navToggler".to_string(),
            menu_id: "navbarNav".to_string(),
            collapse_breakpoint_px: DEFAULT_COLLAPSE_BREAKPOINT_PX,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

/// Smooth scroll configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Fixed navbar height subtracted from the target offset
    pub navbar_offset_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_offset_px: DEFAULT_NAVBAR_OFFSET_PX,
        }
    }
}

/// Image and fade-in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Delay after load before fade-in cards are hidden and observed
    pub fade_in_delay_ms: u32,
    /// Visible fraction that reveals a fade-in card
    pub fade_in_threshold: Threshold,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            fade_in_delay_ms: 500,
            fade_in_threshold: Threshold::new(0.1).unwrap_or(Threshold::ANY),
        }
    }
}

/// Hero parallax configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Image movement per scrolled pixel
    pub speed: f64,
    /// Viewport width the effect requires
    pub min_viewport_width_px: f64,
}

impl ParallaxConfig {
    /// Build the effect
    pub fn effect(&self) -> Parallax {
        Parallax::new(self.speed, self.min_viewport_width_px)
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed: 0.5,
            min_viewport_width_px: 768.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.reviews.batch_size, 3);
        assert_eq!(config.stats.threshold.value(), 0.5);
        assert_eq!(config.chart.threshold.value(), 0.3);
        assert_eq!(config.scroll.navbar_offset_px, 80.0);
        assert_eq!(config.notifications.display_ms, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_embedded_config() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.reviews.items.len(), 6);
        assert_eq!(config.reviews.items[0].name(), "Sarah Johnson");
        assert_eq!(config.reviews.items[5].name(), "Robert Taylor");
        assert_eq!(config.chart.distribution, vec![85, 12, 2, 1, 0]);
        assert_eq!(config.business.name, "Ferrara's Auto Detailing");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("[reviews]\nbatch_size = 2\n").unwrap();
        assert_eq!(config.reviews.batch_size, 2);
        assert_eq!(config.reviews.button_id, "loadMoreReviews");
        assert_eq!(config.stats.duration_ms, 2000);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(SiteConfig::from_toml_str("[reviews]\nbatch_size = 0\n").is_err());
        assert!(SiteConfig::from_toml_str("[stats]\nthreshold = 1.5\n").is_err());
        assert!(SiteConfig::from_toml_str("[chart]\ndistribution = [90, 20, 0, 0, 0]\n").is_err());
        assert!(SiteConfig::from_toml_str(
            "[[reviews.items]]\nname = \"A\"\ntime = \"now\"\ntext = \"B\"\nrating = 6\n"
        )
        .is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = SiteConfig::embedded().unwrap();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[reviews]"));
        assert!(toml.contains("[chart]"));

        let config2 = SiteConfig::from_toml_str(&toml).unwrap();
        assert_eq!(config.reviews.items, config2.reviews.items);
    }
}
