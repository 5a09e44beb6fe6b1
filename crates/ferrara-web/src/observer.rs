//! IntersectionObserver binding for one-shot viewport triggers

use crate::dom;
use ferrara_core::viewport::{TriggerOutcome, ViewportTrigger};
use ferrara_core::{Result, SiteError, Threshold};
use js_sys::Array;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fail with `UnsupportedFacility` when the browser has no IntersectionObserver
pub fn ensure_supported() -> Result<()> {
    let window = dom::window()?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("IntersectionObserver"))
        .map_err(dom::js_error)?;
    if !ctor.is_function() {
        return Err(SiteError::UnsupportedFacility("IntersectionObserver".to_string()));
    }
    Ok(())
}

/// Visible fraction reported for an entry.
///
/// An intersecting entry never reports zero, even when the browser rounds its
/// ratio down, so a zero threshold still fires on first contact.
pub fn visible_fraction(is_intersecting: bool, ratio: f64) -> f64 {
    if is_intersecting {
        ratio.max(f64::MIN_POSITIVE)
    } else {
        0.0
    }
}

/// Progress of an [`observe_once`] registration
#[derive(Debug, Clone)]
pub struct VisibilityWatch {
    observed: usize,
    released: Rc<Cell<usize>>,
}

impl VisibilityWatch {
    /// Targets handed to the observer
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Targets that fired and were unobserved
    pub fn released(&self) -> usize {
        self.released.get()
    }

    /// Targets still being watched
    pub fn pending(&self) -> usize {
        self.observed - self.released()
    }
}

/// Run `action` once per element the first time it becomes visible enough.
///
/// Fired elements are unobserved so the browser stops reporting them.
pub fn observe_once<F>(targets: Vec<Element>, threshold: Threshold, action: F) -> Result<VisibilityWatch>
where
    F: FnMut(&Element) + 'static,
{
    ensure_supported()?;
    let released = Rc::new(Cell::new(0));
    if targets.is_empty() {
        return Ok(VisibilityWatch {
            observed: 0,
            released,
        });
    }

    let trigger = Rc::new(RefCell::new(ViewportTrigger::new(
        targets.iter().cloned(),
        threshold,
        action,
    )));
    let trigger_len = trigger.borrow().targets().len();

    let release = released.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let fraction = visible_fraction(entry.is_intersecting(), entry.intersection_ratio());
            let outcome = trigger.borrow_mut().notify(&target, fraction);
            if outcome == TriggerOutcome::Fired {
                observer.unobserve(&target);
                release.set(release.get() + 1);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.value()));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom::js_error)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!(count = targets.len(), threshold = threshold.value(), "Observing targets");
    Ok(VisibilityWatch {
        observed: trigger_len,
        released,
    })
}
