//! # voxbridge-domain
//!
//! Pure domain model for the voxbridge smart-home bridge.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Describe **hub entities** (`domain.object_id`, state string, typed attribute bag)
//! - Describe the **smart-home protocol**: directives, response envelopes,
//!   properties, capability interfaces, display categories, endpoints
//! - Describe **service calls** (the generic invocation handed to the hub)
//! - Hold the **exposure policy** (include/exclude filter)
//! - Hold all **unit conversion** logic (temperature scales, 0–255 ranges,
//!   mireds, HSB colors, fan speed steps)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod convert;
pub mod entity;
pub mod event;
pub mod feature;
pub mod filter;
pub mod protocol;
pub mod service;
pub mod temperature;
