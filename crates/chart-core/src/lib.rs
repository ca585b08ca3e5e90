//! chart-core
//!
//! Chart data shaping for budget breakdowns and projections.
//! Depends on chart-domain. No CLI, no terminal I/O, no rendering.

pub mod chart_service;
pub mod error;
pub mod flatten_service;
pub mod label_service;
pub mod projection_service;
pub mod public_api;

pub use chart_service::*;
pub use error::CoreError;
pub use flatten_service::*;
pub use label_service::*;
pub use projection_service::*;
