//! # devices-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for the device catalog under `/api/devices`
//! - Map HTTP requests (path, query, JSON body) into application service calls
//!   (driving adapter)
//! - Map application results into HTTP responses, and domain errors into
//!   status codes through a single dispatch table ([`error`])
//!
//! ## Dependency rule
//! Depends on `devices-app` (for port traits and services) and `devices-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
