//! Plays a page visit against the core components with recording sinks.

use ferrara_core::animation::CounterAnimation;
use ferrara_core::chart::SatisfactionChart;
use ferrara_core::review::{ControlState, RevealQueue, ReviewItem, ReviewRenderer, ReviewSink};
use ferrara_core::viewport::{TriggerOutcome, ViewportTrigger};
use ferrara_core::SiteConfig;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
struct FakeReviewSection {
    cards: Vec<String>,
    button_label: Option<String>,
    button_hidden: bool,
}

impl ReviewSink for FakeReviewSection {
    fn append(&mut self, items: &[ReviewItem]) -> ferrara_core::Result<()> {
        let renderer = ReviewRenderer::new();
        self.cards.extend(items.iter().map(|item| renderer.card(item)));
        Ok(())
    }

    fn update_control(&mut self, control: &ControlState) {
        self.button_hidden = control.is_hidden();
        self.button_label = control.label();
    }
}

#[test]
fn load_more_reviews_until_exhausted() {
    let config = SiteConfig::embedded().unwrap();
    let mut queue = RevealQueue::new(config.reviews.items, config.reviews.batch_size).unwrap();
    let mut section = FakeReviewSection::default();
    section.update_control(&queue.control());
    assert_eq!(section.button_label.as_deref(), Some("View 6 More Reviews"));

    assert_eq!(queue.reveal_into(&mut section).unwrap(), 3);
    assert_eq!(section.cards.len(), 3);
    assert!(section.cards[0].contains("Sarah Johnson"));
    assert_eq!(section.button_label.as_deref(), Some("View 3 More Reviews"));

    assert_eq!(queue.reveal_into(&mut section).unwrap(), 3);
    assert!(section.cards[5].contains("Robert Taylor"));
    assert!(section.button_hidden);

    assert_eq!(queue.reveal_into(&mut section).unwrap(), 0);
    assert_eq!(section.cards.len(), 6);
}

#[test]
fn stats_counters_start_once_and_finish_on_target() {
    let config = SiteConfig::embedded().unwrap();
    let targets: HashMap<&str, u64> = [("years", 5), ("cars", 500), ("rating", 100)].into();
    let ids: Vec<&str> = targets.keys().copied().collect();
    let counters: Rc<RefCell<HashMap<String, CounterAnimation>>> = Rc::default();

    let started = counters.clone();
    let stats = config.stats.clone();
    let mut trigger = ViewportTrigger::new(
        ids,
        config.stats.threshold,
        move |id: &&str| {
            let counter =
                CounterAnimation::new(targets[id], stats.duration_ms, stats.frame_interval_ms)
                    .unwrap();
            started.borrow_mut().insert(id.to_string(), counter);
        },
    );

    assert_eq!(trigger.notify(&"years", 0.6), TriggerOutcome::Fired);
    assert_eq!(trigger.notify(&"cars", 0.2), TriggerOutcome::BelowThreshold);
    assert_eq!(trigger.notify(&"years", 0.0), TriggerOutcome::AlreadyDone);
    assert_eq!(trigger.notify(&"years", 1.0), TriggerOutcome::AlreadyDone);
    assert_eq!(trigger.notify(&"cars", 0.7), TriggerOutcome::Fired);
    assert_eq!(counters.borrow().len(), 2);

    for counter in counters.borrow_mut().values_mut() {
        let frame = counter.advance(2_100);
        assert!(frame.done);
    }
    assert_eq!(counters.borrow()["years"].display(), 5);
    assert_eq!(counters.borrow()["cars"].display(), 500);
    assert_eq!(trigger.pending(), 1);
}

#[test]
fn chart_is_built_once() {
    let config = SiteConfig::embedded().unwrap();
    let built = Rc::new(RefCell::new(Vec::new()));
    let sink = built.clone();
    let distribution = config.chart.distribution.clone();
    let mut trigger = ViewportTrigger::new(["satisfactionChart"], config.chart.threshold, move |_| {
        let chart = SatisfactionChart::new(distribution.clone()).unwrap();
        sink.borrow_mut().push(chart.config_json().unwrap());
    });

    for fraction in [0.1, 0.35, 0.0, 0.8] {
        trigger.notify(&"satisfactionChart", fraction);
    }
    assert_eq!(built.borrow().len(), 1);
    assert!(built.borrow()[0].contains("\"type\":\"doughnut\""));
}
