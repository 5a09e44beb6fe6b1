//! Viewport-triggered actions

pub mod trigger;

pub use trigger::{ObservedTarget, TriggerOutcome, ViewportTrigger};
