//! Status service: turning a status poll into the home display.

use chrono::TimeZone;
use rebuilder_domain::display::HomeDisplay;
use tracing::debug;

use crate::generation::Ticket;
use crate::ports::PanelApi;

/// Application service behind the home view's polling loop.
#[derive(Debug, Clone)]
pub struct StatusService<A, Tz> {
    api: A,
    zone: Tz,
}

impl<A, Tz> StatusService<A, Tz>
where
    A: PanelApi,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    /// Create a new service; wall-clock times are rendered in `zone`.
    pub fn new(api: A, zone: Tz) -> Self {
        Self { api, zone }
    }

    /// Fetch one status snapshot and build the home display from it.
    ///
    /// Returns `None` when the request failed (this cycle is skipped) or
    /// when `ticket` went stale while waiting.
    pub async fn poll(&self, ticket: &Ticket) -> Option<HomeDisplay> {
        let snapshot = self.api.fetch_status().await?;
        if !ticket.is_current() {
            debug!("discarding status received after leaving home");
            return None;
        }
        debug!(status = snapshot.status_text(), "status received");
        Some(HomeDisplay::from_snapshot(&snapshot, &self.zone))
    }
}
