#![doc(test(attr(deny(warnings))))]

//! Budget Chart turns budget breakdowns and expense projections into
//! render-ready chart documents, and ships a small CLI around them.

pub mod cli;
pub mod errors;
pub mod utils;

pub use chart_config;
pub use chart_core;
pub use chart_domain;

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    utils::init_tracing();
    tracing::info!("Budget Chart tracing initialized.");
}
