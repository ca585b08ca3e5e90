//! chart-domain
//!
//! Pure data models for budget chart shaping (categories, breakdowns, series, chart documents).
//! No I/O, no CLI, no rendering. Only data types and core enums.

pub mod breakdown;
pub mod category;
pub mod chart;
pub mod projection;
pub mod series;

pub use breakdown::*;
pub use category::*;
pub use chart::*;
pub use projection::*;
pub use series::*;
