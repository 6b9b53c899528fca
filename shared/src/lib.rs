//! Shared types and models for the EcoClime agricultural dashboard
//!
//! This crate contains the pure domain logic shared between the backend
//! server, the browser (via WASM), and tests.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
