//! # voxbridge-app
//!
//! Application layer: **port definitions** (traits) and the smart-home
//! directive dispatcher.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StateStore`: read snapshots of hub entities
//!   - `ServiceDispatcher`: hand a service call to the hub
//!   - `EventPublisher`: publish audit events
//! - Define the **driving/inbound port**: [`smart_home::SmartHome`], which
//!   parses directives, resolves endpoints, runs capability handlers and
//!   builds responses
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `voxbridge-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod smart_home;
