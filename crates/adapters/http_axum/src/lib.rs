//! # listings-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for property listings
//!   (`POST /api/properties`, `GET /api/properties`, `POST /api/add-property`)
//! - Decode request bodies, including numeric fields sent as text
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `listings-app` (for port traits and services) and `listings-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
