//! # tipjar-application
//!
//! Flows that orchestrate the core usecases with the error recovery
//! the pages rely on: duplicate resolution after a rejected venue
//! insert and the device-scoped guard around review submission.

mod add_venue;
mod submit_review;

pub mod prelude {
    pub use super::{add_venue::*, submit_review::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use tipjar_core::{gateways::device::DeviceMemory, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
