use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Malformed breakdown: {0}")]
    MalformedBreakdown(String),
    #[error("Malformed projection: {0}")]
    MalformedProjection(String),
}
