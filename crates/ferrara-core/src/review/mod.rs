//! Review list module
//!
//! Holds the static review data, the batch revealer behind the
//! "load more" button, and the card markup.

pub mod model;
pub mod queue;
pub mod render;

pub use model::{Rating, ReviewItem};
pub use queue::{ControlState, QueueState, RevealBatch, RevealQueue, ReviewSink};
pub use render::ReviewRenderer;
