//! Shared application state for axum handlers.

use std::sync::Arc;

use ledpanel_app::ports::PanelStore;
use ledpanel_app::services::panel_service::PanelService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Light and alarm use-cases.
    pub panel_service: Arc<PanelService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            panel_service: Arc::clone(&self.panel_service),
        }
    }
}

impl<S> AppState<S>
where
    S: PanelStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(panel_service: PanelService<S>) -> Self {
        Self {
            panel_service: Arc::new(panel_service),
        }
    }
}
