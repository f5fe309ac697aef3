//! Settings: operating flags and recognition tuning of the Re-Builder.

use serde::{Deserialize, Serialize};

use crate::error::{RebuilderError, ValidationError};

/// Frames a colour must be seen before it is accepted, when not set.
pub const DEFAULT_CONFIDENCE: u32 = 25;

/// Seconds before recognition gives up, when not set.
pub const DEFAULT_RECOGNITION_TIMEOUT: u32 = 180;

/// Settings as they arrive from `GET /settings`. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPayload {
    pub efficiency_mode: Option<bool>,
    pub fast_mode: Option<bool>,
    pub incremental_build: Option<bool>,
    pub confidence: Option<u32>,
    pub recognition_timeout: Option<u32>,
}

/// The five backend settings, with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub efficiency_mode: bool,
    pub fast_mode: bool,
    pub incremental_build: bool,
    /// Frames.
    pub confidence: u32,
    /// Seconds.
    pub recognition_timeout: u32,
}

impl Settings {
    /// Check the rules the backend enforces on submission.
    ///
    /// # Errors
    ///
    /// Returns [`RebuilderError::Validation`] when `confidence` or
    /// `recognition_timeout` is zero.
    pub fn validate(&self) -> Result<(), RebuilderError> {
        if self.confidence == 0 {
            return Err(ValidationError::NonPositiveConfidence.into());
        }
        if self.recognition_timeout == 0 {
            return Err(ValidationError::NonPositiveTimeout.into());
        }
        Ok(())
    }

    #[must_use]
    pub fn confidence_label(&self) -> String {
        confidence_label(self.confidence)
    }

    #[must_use]
    pub fn timeout_label(&self) -> String {
        timeout_label(self.recognition_timeout)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            efficiency_mode: false,
            fast_mode: false,
            incremental_build: false,
            confidence: DEFAULT_CONFIDENCE,
            recognition_timeout: DEFAULT_RECOGNITION_TIMEOUT,
        }
    }
}

/// Missing and zero values both fall back to the defaults; zero is not a
/// setting the backend accepts.
impl From<SettingsPayload> for Settings {
    fn from(payload: SettingsPayload) -> Self {
        Self {
            efficiency_mode: payload.efficiency_mode.unwrap_or(false),
            fast_mode: payload.fast_mode.unwrap_or(false),
            incremental_build: payload.incremental_build.unwrap_or(false),
            confidence: payload
                .confidence
                .filter(|&frames| frames != 0)
                .unwrap_or(DEFAULT_CONFIDENCE),
            recognition_timeout: payload
                .recognition_timeout
                .filter(|&seconds| seconds != 0)
                .unwrap_or(DEFAULT_RECOGNITION_TIMEOUT),
        }
    }
}

/// Label shown next to the confidence slider.
#[must_use]
pub fn confidence_label(frames: u32) -> String {
    format!("{frames} frames")
}

/// Label shown next to the recognition timeout slider.
#[must_use]
pub fn timeout_label(seconds: u32) -> String {
    format!("{seconds} seconds")
}

/// Parse a slider value as a base-10 integer, keeping `previous` when the
/// input is not a number.
#[must_use]
pub fn parse_slider(input: &str, previous: u32) -> u32 {
    input.trim().parse().unwrap_or(previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> Settings {
        serde_json::from_str::<SettingsPayload>(json).unwrap().into()
    }

    #[test]
    fn should_apply_defaults_when_fields_missing() {
        let settings = payload("{}");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.confidence_label(), "25 frames");
        assert_eq!(settings.timeout_label(), "180 seconds");
    }

    #[test]
    fn should_fall_back_to_default_when_confidence_is_zero() {
        let settings = payload(r#"{"confidence": 0, "recognition_timeout": 0}"#);
        assert_eq!(settings.confidence_label(), "25 frames");
        assert_eq!(settings.recognition_timeout, DEFAULT_RECOGNITION_TIMEOUT);
    }

    #[test]
    fn should_fall_back_to_default_when_fields_null() {
        let settings = payload(r#"{"confidence": null, "fast_mode": null}"#);
        assert_eq!(settings.confidence, DEFAULT_CONFIDENCE);
        assert!(!settings.fast_mode);
    }

    #[test]
    fn should_keep_reported_values() {
        let settings = payload(
            r#"{"efficiency_mode": true, "fast_mode": false, "incremental_build": true,
                "confidence": 40, "recognition_timeout": 90}"#,
        );
        assert!(settings.efficiency_mode);
        assert!(!settings.fast_mode);
        assert!(settings.incremental_build);
        assert_eq!(settings.confidence_label(), "40 frames");
        assert_eq!(settings.timeout_label(), "90 seconds");
    }

    #[test]
    fn should_serialize_all_five_fields() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "efficiency_mode": false,
                "fast_mode": false,
                "incremental_build": false,
                "confidence": 25,
                "recognition_timeout": 180,
            })
        );
    }

    #[test]
    fn should_reject_zero_confidence() {
        let settings = Settings {
            confidence: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(RebuilderError::Validation(
                ValidationError::NonPositiveConfidence
            ))
        ));
    }

    #[test]
    fn should_reject_zero_timeout() {
        let settings = Settings {
            recognition_timeout: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(RebuilderError::Validation(ValidationError::NonPositiveTimeout))
        ));
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn should_parse_slider_as_decimal() {
        assert_eq!(parse_slider("42", 25), 42);
        assert_eq!(parse_slider(" 010 ", 25), 10);
    }

    #[test]
    fn should_keep_previous_value_when_slider_unparsable() {
        assert_eq!(parse_slider("", 25), 25);
        assert_eq!(parse_slider("abc", 180), 180);
    }
}
