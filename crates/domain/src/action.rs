//! Action: a command the panel asks the device to perform.

use serde::{Deserialize, Serialize};

/// Commands accepted by `POST /action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Prime the magazine, raise the lift and start the camera stream.
    Init,
    /// Start a new run, or resume a paused one.
    Start,
    /// Pause the running build.
    Stop,
    /// Restart the backend service.
    Restart,
    /// Reboot the device's operating system.
    Reboot,
    /// Reset the building mechanism.
    Reset,
}

impl Action {
    /// Wire name of the action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Reboot => "reboot",
            Self::Reset => "reset",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: Action,
}

impl From<Action> for ActionRequest {
    fn from(action: Action) -> Self {
        Self { action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_request_body() {
        let body = serde_json::to_string(&ActionRequest::from(Action::Stop)).unwrap();
        assert_eq!(body, r#"{"action":"stop"}"#);
    }

    #[test]
    fn should_display_wire_name() {
        assert_eq!(Action::Reboot.to_string(), "reboot");
        assert_eq!(Action::Init.to_string(), "init");
    }

    #[test]
    fn should_reject_unknown_action() {
        let result: Result<ActionRequest, _> = serde_json::from_str(r#"{"action":"dance"}"#);
        assert!(result.is_err());
    }
}
