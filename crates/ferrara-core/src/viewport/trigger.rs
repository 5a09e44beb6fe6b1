//! One-shot, visibility-gated actions

use crate::types::Threshold;

/// Result of feeding one visibility notification to a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The action ran; the host should stop observing the target
    Fired,
    /// Not visible enough yet
    BelowThreshold,
    /// The action already ran for this target
    AlreadyDone,
    /// The target was never registered with this trigger
    Unobserved,
}

/// A target element and whether its action has run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedTarget<K> {
    target: K,
    done: bool,
}

impl<K> ObservedTarget<K> {
    /// The observed element
    pub fn target(&self) -> &K {
        &self.target
    }

    /// Whether the action has run; never reverts
    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Runs an action at most once per target, the first time the target is
/// sufficiently visible
///
/// `K` is whatever handle the host uses for an element. The trigger never
/// talks to the viewport itself: the host forwards visibility notifications
/// through [`ViewportTrigger::notify`] and stops observing a target when it
/// reports [`TriggerOutcome::Fired`].
pub struct ViewportTrigger<K, F> {
    targets: Vec<ObservedTarget<K>>,
    threshold: Threshold,
    action: F,
}

impl<K, F> ViewportTrigger<K, F>
where
    K: PartialEq,
    F: FnMut(&K),
{
    /// Create a trigger over a set of targets
    pub fn new(targets: impl IntoIterator<Item = K>, threshold: Threshold, action: F) -> Self {
        let mut trigger = Self {
            targets: Vec::new(),
            threshold,
            action,
        };
        for target in targets {
            trigger.observe(target);
        }
        trigger
    }

    /// Register another target; duplicates are ignored
    pub fn observe(&mut self, target: K) {
        if !self.targets.iter().any(|t| t.target == target) {
            self.targets.push(ObservedTarget { target, done: false });
        }
    }

    /// Feed a visibility notification for one target
    pub fn notify(&mut self, target: &K, fraction: f64) -> TriggerOutcome {
        let Some(entry) = self.targets.iter_mut().find(|t| &t.target == target) else {
            return TriggerOutcome::Unobserved;
        };

        if entry.done {
            return TriggerOutcome::AlreadyDone;
        }

        if !self.threshold.is_met_by(fraction) {
            return TriggerOutcome::BelowThreshold;
        }

        entry.done = true;
        (self.action)(&entry.target);
        tracing::debug!(fraction, threshold = %self.threshold, "Viewport trigger fired");
        TriggerOutcome::Fired
    }

    /// Feed one batch of notifications, returning the targets that fired
    pub fn notify_batch<'a, I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = (&'a K, f64)>,
        K: Clone + 'a,
    {
        entries
            .into_iter()
            .filter(|(target, fraction)| self.notify(target, *fraction) == TriggerOutcome::Fired)
            .map(|(target, _)| target.clone())
            .collect()
    }

    /// Check whether the action has already run for a target
    pub fn is_done(&self, target: &K) -> bool {
        self.targets.iter().any(|t| &t.target == target && t.done)
    }

    /// Targets still waiting to become visible
    pub fn observing(&self) -> impl Iterator<Item = &K> {
        self.targets.iter().filter(|t| !t.done).map(|t| &t.target)
    }

    /// Number of targets still waiting
    pub fn pending(&self) -> usize {
        self.targets.iter().filter(|t| !t.done).count()
    }

    /// Whether every registered target has fired
    pub fn is_complete(&self) -> bool {
        self.pending() == 0
    }

    /// All registered targets
    pub fn targets(&self) -> &[ObservedTarget<K>] {
        &self.targets
    }

    /// Visibility threshold
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}
