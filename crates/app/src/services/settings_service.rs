//! Settings service: loading and saving the settings form.

use rebuilder_domain::settings::Settings;
use tracing::{debug, info, warn};

use crate::generation::Ticket;
use crate::ports::PanelApi;

/// Application service behind the settings view.
#[derive(Debug, Clone)]
pub struct SettingsService<A> {
    api: A,
}

impl<A: PanelApi> SettingsService<A> {
    /// Create a new service backed by the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch the current settings, with defaults applied to missing values.
    ///
    /// Returns `None` when the request failed or when `ticket` went stale
    /// while waiting, in which case the form must stay as it is.
    pub async fn load(&self, ticket: &Ticket) -> Option<Settings> {
        let payload = self.api.fetch_settings().await?;
        if !ticket.is_current() {
            debug!("discarding settings loaded for a view no longer shown");
            return None;
        }
        let settings = Settings::from(payload);
        debug!(?settings, "settings loaded");
        Some(settings)
    }

    /// Submit the form's settings.
    ///
    /// Settings the backend would reject are not sent. Returns the raw
    /// response text of the submission.
    pub async fn save(&self, settings: Settings) -> Option<String> {
        if let Err(err) = settings.validate() {
            warn!(?settings, error = %err, "refusing to submit invalid settings");
            return None;
        }
        info!(?settings, "submitting settings");
        self.api.submit_settings(settings).await
    }
}
