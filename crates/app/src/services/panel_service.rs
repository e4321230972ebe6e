//! Panel service: use-cases for querying and driving the indicator panel.

use ledpanel_domain::alarm::AlarmState;
use ledpanel_domain::error::PanelError;
use ledpanel_domain::light::LightColor;
use ledpanel_domain::status::PanelStatus;

use crate::ports::PanelStore;

/// Application service for the light bank and the alarm flag.
pub struct PanelService<S> {
    store: S,
}

impl<S: PanelStore> PanelService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current state of every light and the alarm.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the store.
    pub async fn status(&self) -> Result<PanelStatus, PanelError> {
        self.store.status().await
    }

    /// Switch the light called `name` on or off.
    ///
    /// The name is checked against the fixed set of lights before the store
    /// is touched, so a rejected call leaves the bank unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Validation`] if `name` is not a panel light, or
    /// an error propagated from the store.
    pub async fn set_light(&self, name: &str, on: bool) -> Result<LightColor, PanelError> {
        let color: LightColor = name.parse()?;
        self.store.set_light(color, on).await?;
        tracing::info!(
            light = %color,
            state = on_off(on),
            "light state changed"
        );
        Ok(color)
    }

    /// Raise or clear the alarm.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the store.
    pub async fn set_alarm(&self, on: bool) -> Result<(), PanelError> {
        self.store.set_alarm(on).await?;
        tracing::info!(state = %AlarmState::new(on), "alarm state changed");
        Ok(())
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::InMemoryPanelStore;
    use ledpanel_domain::error::ValidationError;

    fn make_service() -> PanelService<InMemoryPanelStore> {
        PanelService::new(InMemoryPanelStore::new())
    }

    #[tokio::test]
    async fn should_report_everything_off_initially() {
        let svc = make_service();
        let status = svc.status().await.unwrap();

        assert!(status.leds.iter().all(|(_, on)| !on));
        assert!(!status.alarm.is_on());
    }

    #[tokio::test]
    async fn should_reflect_light_change_in_status() {
        let svc = make_service();
        for color in LightColor::ALL {
            for on in [true, false] {
                let changed = svc.set_light(color.as_str(), on).await.unwrap();
                assert_eq!(changed, color);

                let status = svc.status().await.unwrap();
                assert_eq!(status.leds.is_on(color), on);
            }
        }
    }

    #[tokio::test]
    async fn should_reject_unknown_light() {
        let svc = make_service();
        let result = svc.set_light("purple", true).await;

        assert!(matches!(
            result,
            Err(PanelError::Validation(ValidationError::UnknownLight { ref name })) if name == "purple"
        ));
    }

    #[tokio::test]
    async fn should_leave_bank_unchanged_when_light_unknown() {
        let svc = make_service();
        svc.set_light("green", true).await.unwrap();
        let before = svc.status().await.unwrap();

        let _ = svc.set_light("blue", false).await;

        assert_eq!(svc.status().await.unwrap(), before);
    }

    #[tokio::test]
    async fn should_not_affect_other_lights() {
        let svc = make_service();
        svc.set_light("red", true).await.unwrap();
        svc.set_light("green", true).await.unwrap();
        svc.set_light("red", false).await.unwrap();

        let status = svc.status().await.unwrap();
        assert!(!status.leds.is_on(LightColor::Red));
        assert!(!status.leds.is_on(LightColor::Yellow));
        assert!(status.leds.is_on(LightColor::Green));
    }

    #[tokio::test]
    async fn should_toggle_alarm() {
        let svc = make_service();

        svc.set_alarm(true).await.unwrap();
        assert!(svc.status().await.unwrap().alarm.is_on());

        svc.set_alarm(false).await.unwrap();
        assert!(!svc.status().await.unwrap().alarm.is_on());
    }

    #[tokio::test]
    async fn should_not_touch_lights_when_alarm_changes() {
        let svc = make_service();
        svc.set_light("yellow", true).await.unwrap();
        svc.set_alarm(true).await.unwrap();

        assert!(svc.status().await.unwrap().leds.is_on(LightColor::Yellow));
    }
}
