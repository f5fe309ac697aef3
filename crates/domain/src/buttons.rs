//! Which run-control buttons a status enables.

use crate::status::Status;

/// Enablement of the three run-control buttons on the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub init: bool,
    pub start: bool,
    pub pause: bool,
}

impl ButtonState {
    /// Only `init` is available.
    pub const INIT_ONLY: Self = Self {
        init: true,
        start: false,
        pause: false,
    };

    #[must_use]
    pub fn for_status(status: Status) -> Self {
        match status {
            Status::Ready | Status::Paused => Self {
                init: false,
                start: true,
                pause: false,
            },
            Status::Running => Self {
                init: false,
                start: false,
                pause: true,
            },
            Status::Idle | Status::Completed | Status::Unrecognized => Self::INIT_ONLY,
        }
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::INIT_ONLY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_enable_start_when_ready() {
        let state = ButtonState::for_status(Status::Ready);
        assert!(!state.init);
        assert!(state.start);
        assert!(!state.pause);
    }

    #[test]
    fn should_enable_pause_when_running() {
        let state = ButtonState::for_status(Status::Running);
        assert!(!state.init);
        assert!(!state.start);
        assert!(state.pause);
    }

    #[test]
    fn should_enable_start_when_paused() {
        assert_eq!(
            ButtonState::for_status(Status::Paused),
            ButtonState::for_status(Status::Ready)
        );
    }

    #[test]
    fn should_enable_only_init_for_every_other_status() {
        for raw in [None, Some(""), Some("idle"), Some("completed"), Some("bogus")] {
            let state = ButtonState::for_status(Status::parse(raw));
            assert_eq!(state, ButtonState::INIT_ONLY, "{raw:?}");
        }
    }

    #[test]
    fn should_be_idempotent() {
        let once = ButtonState::for_status(Status::Unrecognized);
        let twice = ButtonState::for_status(Status::Unrecognized);
        assert_eq!(once, twice);
    }
}
