//! # voxbridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Accept smart-home directives on `POST /api/alexa/smart_home` and hand
//!   them to the [`SmartHome`](voxbridge_app::smart_home::SmartHome)
//!   dispatcher (driving adapter)
//! - Serialize the dispatcher's response envelope back as JSON
//! - Map envelope violations to `400 Bad Request`
//! - Serve `GET /health`
//!
//! The directive route is only mounted when the bridge is enabled, so a
//! disabled bridge answers `404`.
//!
//! ## Dependency rule
//! Depends on `voxbridge-app` (dispatcher and port traits) and
//! `voxbridge-domain` (protocol types). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
