//! # listings-domain
//!
//! Pure domain model for the listings property backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, timestamps and error conventions
//! - Define **Properties** (the listed real-estate records) and the
//!   **`NewProperty`** insert record accepted by the store
//! - Coerce numeric text (`"150000"`) into well-typed values
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod numeric;
pub mod property;
pub mod time;
