#![cfg_attr(test, deny(warnings))]

//! # tipjar-core
//!
//! Business logic of the tipjar review application: text
//! canonicalization, typo-tolerant city matching, duplicate venue
//! detection, review aggregation and the moderation usecases, all
//! expressed over abstract repository and gateway traits.

pub use tipjar_entities as entities;

pub mod gateways;
pub mod metrics;
pub mod repositories;
pub mod text;
pub mod usecases;
pub mod util;
