//! Ticker port: a periodic timer.

use std::time::Duration;

/// Schedules a callback at a fixed period.
pub trait Ticker {
    /// Guard for a running timer. Dropping it cancels the timer.
    type Handle;

    /// Call `tick` every `period` until the returned handle is dropped.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}
