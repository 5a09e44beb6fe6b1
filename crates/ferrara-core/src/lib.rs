//! ferrara-core - Core library for ferrara-site
//!
//! This crate holds the page behavior of the Ferrara's Auto Detailing site as
//! host-independent state: the "load more" review queue, one-shot viewport
//! triggers, count-up counters, the satisfaction chart configuration,
//! navigation, notifications, and form validation. The browser glue lives in
//! `ferrara-web`.

pub mod error;
pub mod types;
pub mod config;
pub mod theme;
pub mod review;
pub mod viewport;
pub mod animation;
pub mod chart;
pub mod nav;
pub mod scroll;
pub mod notify;
pub mod form;
pub mod media;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use types::*;
