//! # ledpanel-domain
//!
//! Pure domain model for the ledpanel indicator service.
//!
//! ## Responsibilities
//! - Define **lights** (`red`, `yellow`, `green`) and the [`LightBank`](light::LightBank)
//!   holding their on/off state
//! - Define the [`AlarmState`](alarm::AlarmState) flag
//! - Define the [`PanelStatus`](status::PanelStatus) snapshot served to clients
//! - Enforce the closed set of light names
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod alarm;
pub mod light;
pub mod status;
