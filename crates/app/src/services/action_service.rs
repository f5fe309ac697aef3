//! Action service: sending device actions.

use rebuilder_domain::action::{Action, ActionRequest};
use tracing::info;

use crate::ports::PanelApi;

/// Application service behind the action buttons.
#[derive(Debug, Clone)]
pub struct ActionService<A> {
    api: A,
}

impl<A: PanelApi> ActionService<A> {
    /// Create a new service backed by the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Ask the device to perform `action`, returning the raw response text.
    pub async fn trigger(&self, action: Action) -> Option<String> {
        info!(%action, "sending action");
        self.api.submit_action(ActionRequest::from(action)).await
    }
}
