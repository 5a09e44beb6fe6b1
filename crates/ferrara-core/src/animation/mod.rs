//! Time- and scroll-driven animations

pub mod counter;
pub mod parallax;

pub use counter::{parse_target, CounterAnimation, CounterFrame};
pub use parallax::Parallax;
