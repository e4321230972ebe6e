//! Storage port: where the panel state lives.

use std::future::Future;

use ledpanel_domain::error::PanelError;
use ledpanel_domain::light::LightColor;
use ledpanel_domain::status::PanelStatus;

/// Holds the light bank and the alarm flag.
///
/// Each method is a single read or a single write; implementations must make
/// concurrent callers observe them in some sequential order.
pub trait PanelStore {
    /// Snapshot of every light and the alarm.
    fn status(&self) -> impl Future<Output = Result<PanelStatus, PanelError>> + Send;

    /// Overwrite the state of one light.
    fn set_light(
        &self,
        color: LightColor,
        on: bool,
    ) -> impl Future<Output = Result<(), PanelError>> + Send;

    /// Overwrite the alarm flag.
    fn set_alarm(&self, on: bool) -> impl Future<Output = Result<(), PanelError>> + Send;
}

impl<T: PanelStore + Send + Sync> PanelStore for std::sync::Arc<T> {
    fn status(&self) -> impl Future<Output = Result<PanelStatus, PanelError>> + Send {
        (**self).status()
    }

    fn set_light(
        &self,
        color: LightColor,
        on: bool,
    ) -> impl Future<Output = Result<(), PanelError>> + Send {
        (**self).set_light(color, on)
    }

    fn set_alarm(&self, on: bool) -> impl Future<Output = Result<(), PanelError>> + Send {
        (**self).set_alarm(on)
    }
}
