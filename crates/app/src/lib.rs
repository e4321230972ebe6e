//! # ledpanel-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `PanelStore`: read the panel snapshot, overwrite a light or the alarm
//! - Define the **driving/inbound** use-case struct:
//!   - `PanelService`: status query, light and alarm commands
//! - Provide **in-process infrastructure** (the mutex-guarded in-memory
//!   store) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `ledpanel-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory_store;
pub mod ports;
pub mod services;
