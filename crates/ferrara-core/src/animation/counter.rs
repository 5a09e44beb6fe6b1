//! Tick-driven count-up animation for statistic numbers

use crate::error::{Result, SiteError};

/// Frame cadence, roughly 60 frames per second
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 16;

/// Total animation time
pub const DEFAULT_DURATION_MS: u32 = 2000;

/// Displayed value after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    /// Value to display (`floor(current)`)
    pub value: u64,
    /// Whether the animation reached its target
    pub done: bool,
}

/// Counter animating from 0 to a target in fixed-width steps
///
/// The host schedules ticks; the counter only does arithmetic. Once the
/// target is reached further ticks are no-ops.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    current: f64,
    target: u64,
    increment: f64,
    frame_interval_ms: u32,
    pending_ms: u64,
    ticks: u32,
    done: bool,
}

impl CounterAnimation {
    /// Create a counter; a zero frame interval is rejected
    pub fn new(target: u64, duration_ms: u32, frame_interval_ms: u32) -> Result<Self> {
        if frame_interval_ms == 0 {
            return Err(SiteError::Validation(
                "Counter frame interval must be at least 1ms".to_string(),
            ));
        }

        let steps = f64::from(duration_ms) / f64::from(frame_interval_ms);
        let increment = if duration_ms == 0 {
            target as f64
        } else {
            target as f64 / steps
        };

        Ok(Self {
            current: 0.0,
            target,
            increment,
            frame_interval_ms,
            pending_ms: 0,
            ticks: 0,
            done: false,
        })
    }

    /// Advance one frame
    pub fn tick(&mut self) -> CounterFrame {
        if !self.done {
            self.ticks += 1;
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.done = true;
                tracing::debug!(value = self.target, ticks = self.ticks, "Counter finished");
            }
        }
        self.frame()
    }

    /// Advance by elapsed wall time, running every whole frame that fits
    ///
    /// Leftover time below one frame carries over to the next call.
    pub fn advance(&mut self, delta_ms: u64) -> CounterFrame {
        self.pending_ms += delta_ms;
        let frame = u64::from(self.frame_interval_ms);
        while !self.done && self.pending_ms >= frame {
            self.pending_ms -= frame;
            self.tick();
        }
        if self.done {
            self.pending_ms = 0;
        }
        self.frame()
    }

    /// Current displayed frame
    pub fn frame(&self) -> CounterFrame {
        CounterFrame {
            value: self.display(),
            done: self.done,
        }
    }

    /// Value to display
    ///
    /// Exactly the target once done; `current` is an `f64` and cannot hold
    /// every `u64`.
    pub fn display(&self) -> u64 {
        if self.done {
            self.target
        } else {
            (self.current.floor() as u64).min(self.target)
        }
    }

    /// Target value
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Whether the target was reached
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Frames run so far
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Frame cadence in milliseconds
    pub fn frame_interval_ms(&self) -> u32 {
        self.frame_interval_ms
    }

    /// Animated time so far
    pub fn elapsed_ms(&self) -> u64 {
        u64::from(self.ticks) * u64::from(self.frame_interval_ms)
    }
}

/// Parse a `data-target` attribute value
///
/// Leading digits are taken the way the page always read them
/// (`"250+"` is 250); anything without a positive number yields `None`.
pub fn parse_target(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u64>().ok().filter(|&n| n > 0)
}
