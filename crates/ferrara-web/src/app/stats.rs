use super::Page;
use crate::{dom, observer, timer};
use ferrara_core::animation::{parse_target, CounterAnimation};
use ferrara_core::Result;

/// Attribute holding the final value of a stat counter
const TARGET_ATTR: &str = "data-target";

/// Class marking a counter that has started
const STARTED_CLASS: &str = "animated";

/// Count each stat up to its target the first time it scrolls into view
pub fn init(page: &Page) -> Result<()> {
    let stats = page.config().stats.clone();
    let elements = dom::require_all(page.document(), &stats.selector)?;

    observer::observe_once(elements, stats.threshold, move |element| {
        let Some(target) = element.get_attribute(TARGET_ATTR).as_deref().and_then(parse_target) else {
            tracing::debug!("Stat without a usable {} left untouched", TARGET_ATTR);
            return;
        };
        if let Err(e) = dom::set_class(element, STARTED_CLASS, true) {
            tracing::warn!(error = %e, "Failed to mark stat as started");
        }
        match CounterAnimation::new(target, stats.duration_ms, stats.frame_interval_ms) {
            Ok(counter) => {
                timer::run_counter(element.clone(), counter);
            }
            Err(e) => tracing::warn!(value = target, error = %e, "Failed to start counter"),
        }
    })?;
    Ok(())
}
