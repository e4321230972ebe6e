//! # ledpanel-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for the panel
//!   (`GET /status`, `POST /led/{color}`, `POST /alarm`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//! - Allow cross-origin requests from any origin
//!
//! ## Dependency rule
//! Depends on `ledpanel-app` (for port traits and services) and `ledpanel-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
