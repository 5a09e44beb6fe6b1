//! Interval driver for count-up counters

use crate::dom;
use ferrara_core::animation::CounterAnimation;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

/// Class added to a stat element on every frame
pub const FRAME_CLASS: &str = "animate";

/// Handle on a running counter; dropping it does not stop the counter
#[derive(Clone)]
pub struct CounterHandle {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl CounterHandle {
    /// Whether the interval is still scheduled
    pub fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

/// Tick `counter` on a repeating interval, writing each frame into `element`.
///
/// The interval is cancelled on the frame that reaches the target.
pub fn run_counter(element: Element, mut counter: CounterAnimation) -> CounterHandle {
    let interval_ms = counter.frame_interval_ms();
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let finish = slot.clone();
    let interval = Interval::new(interval_ms, move || {
        let frame = counter.tick();
        element.set_text_content(Some(&frame.value.to_string()));
        if let Err(e) = dom::set_class(&element, FRAME_CLASS, true) {
            tracing::warn!(error = %e, "Failed to mark counter frame");
        }
        if frame.done {
            // Dropping the Interval clears it and breaks the slot cycle.
            drop(finish.borrow_mut().take());
        }
    });
    *slot.borrow_mut() = Some(interval);

    CounterHandle { interval: slot }
}
