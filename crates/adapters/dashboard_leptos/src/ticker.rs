//! [`Ticker`] backed by the browser's `setInterval`.

use std::time::Duration;

use gloo_timers::callback::Interval;
use rebuilder_app::ports::Ticker;

/// Schedules ticks with [`Interval`]; dropping the handle clears the interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, tick)
    }
}
