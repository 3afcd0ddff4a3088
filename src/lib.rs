//! Krishi Sakhi
//!
//! Multilingual farming advisor. This crate re-exports the orchestration layer
//! from `sakhi-core`; the `sakhi` binary lives in `sakhi-cli`.

pub use sakhi_core::*;
