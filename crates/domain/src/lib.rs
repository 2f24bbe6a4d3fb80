//! # devices-domain
//!
//! Pure domain model for the device catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (physical items with a name, a brand, and a lifecycle state)
//! - Define **Device states** (`AVAILABLE`, `IN_USE`, `INACTIVE`)
//! - Define **partial updates** and the in-use lock that guards them
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
