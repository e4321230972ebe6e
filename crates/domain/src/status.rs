//! Panel status: the snapshot served by the status query.

use serde::{Deserialize, Serialize};

use crate::alarm::AlarmState;
use crate::light::{LightBank, LightColor};

/// Point-in-time copy of every light and the alarm flag.
///
/// Serializes to `{"leds": {...}, "alarmOn": bool}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelStatus {
    pub leds: LightBank,
    #[serde(rename = "alarmOn")]
    pub alarm: AlarmState,
}

impl PanelStatus {
    /// Overwrite one light.
    pub fn set_light(&mut self, color: LightColor, on: bool) {
        self.leds.set(color, on);
    }

    /// Overwrite the alarm flag.
    pub fn set_alarm(&mut self, on: bool) {
        self.alarm = AlarmState::new(on);
    }
}
