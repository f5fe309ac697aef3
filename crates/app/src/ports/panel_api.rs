//! Panel API port: the calls the panel makes against the backend.

use std::future::Future;
use std::rc::Rc;

use rebuilder_domain::action::ActionRequest;
use rebuilder_domain::settings::{Settings, SettingsPayload};
use rebuilder_domain::status::StatusSnapshot;

/// Access to the Re-Builder backend.
///
/// Implementations never fail past this boundary: every failure (transport,
/// non-2xx, undecodable body) is logged by the adapter and reported as
/// `None`, so callers need no error branches.
pub trait PanelApi {
    /// `GET /settings`.
    fn fetch_settings(&self) -> impl Future<Output = Option<SettingsPayload>>;

    /// `POST /settings`, returning the raw response text whatever its status.
    fn submit_settings(&self, settings: Settings) -> impl Future<Output = Option<String>>;

    /// `POST /action`, returning the raw response text whatever its status.
    fn submit_action(&self, request: ActionRequest) -> impl Future<Output = Option<String>>;

    /// `GET /status`.
    fn fetch_status(&self) -> impl Future<Output = Option<StatusSnapshot>>;
}

impl<T: PanelApi> PanelApi for Rc<T> {
    fn fetch_settings(&self) -> impl Future<Output = Option<SettingsPayload>> {
        (**self).fetch_settings()
    }

    fn submit_settings(&self, settings: Settings) -> impl Future<Output = Option<String>> {
        (**self).submit_settings(settings)
    }

    fn submit_action(&self, request: ActionRequest) -> impl Future<Output = Option<String>> {
        (**self).submit_action(request)
    }

    fn fetch_status(&self) -> impl Future<Output = Option<StatusSnapshot>> {
        (**self).fetch_status()
    }
}
