//! Progressive disclosure of pre-defined reviews

use super::model::ReviewItem;
use crate::error::{Result, SiteError};
use std::num::NonZeroUsize;

/// Reviews revealed per click by default
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Queue state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    /// Items remain to be revealed
    Active { remaining: usize },
    /// Every item has been revealed; terminal
    Exhausted,
}

/// What the "load more" control should look like
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlState {
    /// Visible, advertising the remaining count
    Label { remaining: usize },
    /// Permanently hidden
    Hidden,
}

impl ControlState {
    /// Human-readable label, if the control is visible
    pub fn label(&self) -> Option<String> {
        match self {
            ControlState::Label { remaining } => Some(format!("View {} More Reviews", remaining)),
            ControlState::Hidden => None,
        }
    }

    /// Check if the control is hidden
    pub fn is_hidden(&self) -> bool {
        matches!(self, ControlState::Hidden)
    }
}

/// One reveal step: the items to append and the resulting control state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealBatch<'a> {
    /// Newly revealed items, in declaration order
    pub items: &'a [ReviewItem],
    /// Control state after this batch
    pub control: ControlState,
}

/// Display collaborator receiving revealed reviews
pub trait ReviewSink {
    /// Append a batch of reviews to the display container
    ///
    /// On error none of the batch counts as revealed.
    fn append(&mut self, items: &[ReviewItem]) -> Result<()>;

    /// Update the "load more" control
    fn update_control(&mut self, control: &ControlState);
}

/// Fixed list of reviews revealed in batches
#[derive(Debug, Clone)]
pub struct RevealQueue {
    items: Vec<ReviewItem>,
    cursor: usize,
    batch_size: NonZeroUsize,
}

impl RevealQueue {
    /// Create a queue; a batch size of zero is rejected
    pub fn new(items: Vec<ReviewItem>, batch_size: usize) -> Result<Self> {
        let batch_size = NonZeroUsize::new(batch_size).ok_or_else(|| {
            SiteError::Validation("Review batch size must be at least 1".to_string())
        })?;

        Ok(Self {
            items,
            cursor: 0,
            batch_size,
        })
    }

    /// Items the next reveal would show, without revealing them
    pub fn next_batch(&self) -> &[ReviewItem] {
        let end = self.cursor + self.batch_size.get().min(self.remaining());
        &self.items[self.cursor..end]
    }

    fn commit(&mut self, n: usize) {
        self.cursor += n;
        tracing::debug!(
            revealed = n,
            cursor = self.cursor,
            remaining = self.remaining(),
            "Revealed review batch"
        );
    }

    /// Reveal the next batch
    ///
    /// Returns `None` once the queue is exhausted.
    pub fn reveal(&mut self) -> Option<RevealBatch<'_>> {
        if self.is_exhausted() {
            return None;
        }

        let start = self.cursor;
        let n = self.next_batch().len();
        self.commit(n);

        let control = self.control();
        Some(RevealBatch {
            items: &self.items[start..self.cursor],
            control,
        })
    }

    /// Reveal the next batch into a display sink
    ///
    /// Returns the number of items appended; the sink is untouched once the
    /// queue is exhausted. The cursor only moves once the sink accepted the
    /// batch, so a failed append leaves the same batch pending.
    pub fn reveal_into<S: ReviewSink + ?Sized>(&mut self, sink: &mut S) -> Result<usize> {
        let batch = self.next_batch();
        if batch.is_empty() {
            return Ok(0);
        }
        sink.append(batch)?;
        let n = batch.len();

        self.commit(n);
        sink.update_control(&self.control());
        Ok(n)
    }

    /// Current state
    pub fn state(&self) -> QueueState {
        if self.is_exhausted() {
            QueueState::Exhausted
        } else {
            QueueState::Active {
                remaining: self.remaining(),
            }
        }
    }

    /// Control state derived from the queue
    pub fn control(&self) -> ControlState {
        match self.state() {
            QueueState::Active { remaining } => ControlState::Label { remaining },
            QueueState::Exhausted => ControlState::Hidden,
        }
    }

    /// Check if every item has been revealed
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.items.len()
    }

    /// Number of items revealed so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of items still hidden
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    /// Total number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the queue holds no items at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Batch size
    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    /// Items revealed so far
    pub fn revealed(&self) -> &[ReviewItem] {
        &self.items[..self.cursor]
    }
}
