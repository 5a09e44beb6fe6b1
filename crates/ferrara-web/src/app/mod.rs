//! Page wiring
//!
//! Each submodule mounts one independent feature. A feature whose anchor
//! element or browser facility is missing is skipped; the rest still mount.

pub mod anchors;
pub mod forms;
pub mod media;
pub mod navigation;
pub mod parallax;
pub mod reviews;
pub mod satisfaction;
pub mod stats;

use crate::dom;
use ferrara_core::{Result, SiteConfig};
use tracing::{error, info, warn};
use web_sys::{Document, Window};

/// Outcome of mounting one feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    Skipped,
    Failed,
}

/// The page being enhanced
pub struct Page {
    config: SiteConfig,
    window: Window,
    document: Document,
}

impl Page {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;
        Ok(Self {
            config,
            window,
            document,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mount every feature
    pub fn mount(&self) -> Vec<(&'static str, MountOutcome)> {
        let mount = |feature: &'static str, result| (feature, report(feature, result));
        let outcomes = vec![
            mount("navbar", navigation::init_navbar_style(self)),
            mount("navigation", navigation::init_menu(self)),
            mount("stats", stats::init(self)),
            mount("reviews", reviews::init(self)),
            mount("chart", satisfaction::init(self)),
            mount("smooth-scroll", anchors::init(self)),
            mount("fade-in", media::schedule_fade_in(self)),
            mount("image-loading", media::init_image_loading(self)),
            mount("lazy-images", media::init_lazy_images(self)),
            mount("parallax", parallax::init(self)),
            mount("forms", forms::init(self)),
        ];

        let mounted = outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == MountOutcome::Mounted)
            .count();
        self.log_banner();
        info!(mounted, total = outcomes.len(), "Page features mounted");
        outcomes
    }

    fn log_banner(&self) {
        let business = &self.config.business;
        info!("{} website loaded", business.name);
        info!("Location: {}", business.location);
        info!("Phone: {}", business.phone);
        info!("Email: {}", business.email);
    }
}

fn report(feature: &'static str, result: Result<()>) -> MountOutcome {
    match result {
        Ok(()) => {
            info!(feature, "Feature mounted");
            MountOutcome::Mounted
        }
        Err(e) if e.is_absent_feature() => {
            warn!(feature, reason = %e, "Feature skipped");
            MountOutcome::Skipped
        }
        Err(e) => {
            error!(feature, error = %e, "Feature failed to mount");
            MountOutcome::Failed
        }
    }
}
