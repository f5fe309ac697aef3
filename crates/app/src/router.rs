//! View router: which view is visible, and whether status is polled.

use std::time::Duration;

use tracing::{debug, info};

use crate::generation::{Generation, Ticket};
use crate::ports::Ticker;

/// The two views of the panel. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Run status and controls.
    #[default]
    Home,
    /// Settings form.
    Settings,
}

/// Owns the active view, the polling timer and the request generation.
///
/// At most one polling timer is alive at any time: every navigation drops
/// the previous timer before anything else happens.
pub struct ViewRouter<T: Ticker> {
    ticker: T,
    period: Duration,
    active: View,
    timer: Option<T::Handle>,
    generation: Generation,
}

impl<T: Ticker> ViewRouter<T> {
    /// Create a router showing [`View::Home`] with no timer running yet.
    pub fn new(ticker: T, period: Duration) -> Self {
        Self {
            ticker,
            period,
            active: View::Home,
            timer: None,
            generation: Generation::new(),
        }
    }

    /// The visible view.
    #[must_use]
    pub fn active(&self) -> View {
        self.active
    }

    /// Whether the status timer is running.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.timer.is_some()
    }

    /// Show the home view and (re)start status polling.
    ///
    /// `poll` runs on every tick with a ticket for the tick's generation.
    pub fn show_home<F>(&mut self, mut poll: F)
    where
        F: FnMut(Ticket) + 'static,
    {
        self.leave();
        self.active = View::Home;

        let generation = self.generation.clone();
        let handle = self
            .ticker
            .every(self.period, Box::new(move || poll(generation.ticket())));
        self.timer = Some(handle);
        info!(period_ms = self.period.as_millis(), "showing home, status polling started");
    }

    /// Show the settings view and stop status polling.
    ///
    /// Returns the ticket the settings load must present.
    pub fn show_settings(&mut self) -> Ticket {
        self.leave();
        self.active = View::Settings;
        info!("showing settings");
        self.generation.ticket()
    }

    fn leave(&mut self) {
        if self.timer.take().is_some() {
            debug!("status polling stopped");
        }
        self.generation.advance();
    }
}
