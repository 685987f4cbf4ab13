#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # tipjar-entities
//!
//! Reusable, agnostic domain entities for tipjar.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod id;
pub mod metrics;
pub mod report;
pub mod review;
pub mod time;
pub mod venue;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
