use std::{fs, path::Path};

use chart_domain::{BudgetBreakdown, ExpenseProjection};
use tracing::debug;

use crate::errors::AppError;

/// Loads a breakdown snapshot exported by the expense calculator.
pub fn load_breakdown_from_file(path: &Path) -> Result<BudgetBreakdown, AppError> {
    debug!(path = %path.display(), "loading breakdown snapshot");
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Loads a multi-year expense projection snapshot.
pub fn load_projection_from_file(path: &Path) -> Result<ExpenseProjection, AppError> {
    debug!(path = %path.display(), "loading projection snapshot");
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
