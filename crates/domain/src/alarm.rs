//! Alarm: the panel's single boolean alarm flag.

use serde::{Deserialize, Serialize};

/// Whether the alarm is raised. Starts off; serialized as a bare boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlarmState(bool);

impl AlarmState {
    /// Alarm raised when `on` is true.
    #[must_use]
    pub fn new(on: bool) -> Self {
        Self(on)
    }

    /// Whether the alarm is currently raised.
    #[must_use]
    pub fn is_on(self) -> bool {
        self.0
    }
}

impl std::fmt::Display for AlarmState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0 { "ON" } else { "OFF" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        assert!(!AlarmState::default().is_on());
    }

    #[test]
    fn should_display_upper_case_state() {
        assert_eq!(AlarmState::new(true).to_string(), "ON");
        assert_eq!(AlarmState::new(false).to_string(), "OFF");
    }

    #[test]
    fn should_serialize_as_plain_bool() {
        assert_eq!(serde_json::to_string(&AlarmState::new(true)).unwrap(), "true");
    }
}
