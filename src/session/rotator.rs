// SPDX-License-Identifier: MPL-2.0
//! Fact ticker rotation.
//!
//! The rotator only knows how many facts exist; it never sees the text.
//! The timer itself lives in the application subscription and is produced
//! only while [`FactRotator::is_running`] returns true, so `stop()` is what
//! cancels it.

use crate::domain::TickerInterval;
use std::num::NonZeroUsize;

/// Cyclic index into the fact catalog.
#[derive(Debug, Clone)]
pub struct FactRotator {
    index: usize,
    len: NonZeroUsize,
    interval: TickerInterval,
    running: bool,
}

impl FactRotator {
    /// Creates a stopped rotator positioned on the first fact.
    #[must_use]
    pub fn new(len: NonZeroUsize, interval: TickerInterval) -> Self {
        Self {
            index: 0,
            len,
            interval,
            running: false,
        }
    }

    /// Arms the rotation timer.
    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!(interval_ms = self.interval.millis(), "fact rotation started");
        }
        self.running = true;
    }

    /// Disarms the rotation timer. The current index is kept.
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(index = self.index, "fact rotation stopped");
        }
        self.running = false;
    }

    /// Moves to the next fact, wrapping after the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len.get();
    }

    /// Handles one timer tick. Ticks that arrive after `stop()` are ignored.
    ///
    /// Returns `true` if the index moved.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.advance();
        true
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    #[must_use]
    pub fn interval(&self) -> TickerInterval {
        self.interval
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
