//! Status: what `/status` reports about the current run.

use serde::{Deserialize, Serialize};

use crate::cube::CubeColor;
use crate::time::Nanos;

/// Text shown when the backend reports no status at all.
pub const IDLE_TEXT: &str = "idle";

/// Lifecycle state of the Re-Builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing initialised yet. Also used when the status is unset.
    #[default]
    Idle,
    /// Initialised and waiting for start.
    Ready,
    /// Recognising or building.
    Running,
    /// Build paused by the operator.
    Paused,
    /// Run finished.
    Completed,
    /// A status string this panel does not know about.
    Unrecognized,
}

impl Status {
    /// Interpret the raw status string; `None` and `""` read as [`Idle`](Self::Idle).
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or_default() {
            "" | "idle" => Self::Idle,
            "ready" => Self::Ready,
            "running" => Self::Running,
            "paused" => Self::Paused,
            "completed" => Self::Completed,
            _ => Self::Unrecognized,
        }
    }
}

/// One `/status` response. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    pub status: Option<String>,
    /// Colour per cube slot; index `i` is slot `i + 1`.
    pub config: Option<Vec<CubeColor>>,
    /// Energy consumed by the run, in Wh.
    pub energy: Option<f64>,
    pub steps_finished: Option<u32>,
    pub steps_total: Option<u32>,
    pub time_start: Option<Nanos>,
    pub time_config: Option<Nanos>,
    pub time_end: Option<Nanos>,
}

impl StatusSnapshot {
    /// Parsed lifecycle state.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::parse(self.status.as_deref())
    }

    /// Status as displayed: the raw string, or `"idle"` when absent.
    #[must_use]
    pub fn status_text(&self) -> &str {
        match self.status.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => IDLE_TEXT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_statuses() {
        assert_eq!(Status::parse(Some("ready")), Status::Ready);
        assert_eq!(Status::parse(Some("running")), Status::Running);
        assert_eq!(Status::parse(Some("paused")), Status::Paused);
        assert_eq!(Status::parse(Some("completed")), Status::Completed);
    }

    #[test]
    fn should_treat_missing_status_as_idle() {
        assert_eq!(Status::parse(None), Status::Idle);
        assert_eq!(Status::parse(Some("")), Status::Idle);
    }

    #[test]
    fn should_flag_unknown_status() {
        assert_eq!(Status::parse(Some("exploded")), Status::Unrecognized);
    }

    #[test]
    fn should_display_idle_when_status_absent() {
        let snapshot = StatusSnapshot::default();
        assert_eq!(snapshot.status_text(), "idle");
    }

    #[test]
    fn should_display_raw_status_text() {
        let snapshot = StatusSnapshot {
            status: Some("exploded".to_string()),
            ..StatusSnapshot::default()
        };
        assert_eq!(snapshot.status_text(), "exploded");
        assert_eq!(snapshot.status(), Status::Unrecognized);
    }

    #[test]
    fn should_parse_empty_object() {
        let snapshot: StatusSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, StatusSnapshot::default());
    }

    #[test]
    fn should_parse_full_snapshot() {
        let json = r#"{
            "status": "running",
            "config": ["red", "", null, "unknown", "blue"],
            "energy": 1.25,
            "steps_finished": 3,
            "steps_total": 8,
            "time_start": 1700000000000000000,
            "time_config": 1700000012500000000,
            "time_end": null
        }"#;
        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.status(), Status::Running);
        assert_eq!(
            snapshot.config.as_deref(),
            Some(
                &[
                    CubeColor::Red,
                    CubeColor::None,
                    CubeColor::Unknown,
                    CubeColor::Unknown,
                    CubeColor::Blue,
                ][..]
            )
        );
        assert_eq!(snapshot.steps_total, Some(8));
        assert_eq!(snapshot.time_end, None);
    }
}
