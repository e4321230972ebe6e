//! In-process panel store backed by a [`Mutex`].

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use ledpanel_domain::error::PanelError;
use ledpanel_domain::light::LightColor;
use ledpanel_domain::status::PanelStatus;

use crate::ports::PanelStore;

/// Panel state kept in process memory for the lifetime of the store.
///
/// The lock is held for one read or one assignment and released before the
/// returned future is polled, so no guard ever crosses an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryPanelStore {
    state: Mutex<PanelStatus>,
}

impl InMemoryPanelStore {
    /// Create a store with every light off and the alarm cleared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PanelStatus> {
        // single-assignment writes cannot leave the state torn
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PanelStore for InMemoryPanelStore {
    fn status(&self) -> impl Future<Output = Result<PanelStatus, PanelError>> + Send {
        let snapshot = *self.lock();
        async move { Ok(snapshot) }
    }

    fn set_light(
        &self,
        color: LightColor,
        on: bool,
    ) -> impl Future<Output = Result<(), PanelError>> + Send {
        self.lock().set_light(color, on);
        async { Ok(()) }
    }

    fn set_alarm(&self, on: bool) -> impl Future<Output = Result<(), PanelError>> + Send {
        self.lock().set_alarm(on);
        async { Ok(()) }
    }
}
