//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! Frontends (CLI, web bindings) call these instead of reaching into the
//! individual services. The user and recommended entry points of each chart
//! kind share one code path and differ only in their [`ChartVariant`].

use chart_domain::{
    BudgetBreakdown, ChartVariant, DonutChart, ExpenseProjection, FlattenedBreakdown, PieChart,
    ProjectionChart,
};

use crate::{CategoryFlattener, ChartService, CoreError, LabelPolicy, ProjectionService};

/// Flattens a breakdown into outer and inner series.
pub fn api_flatten(breakdown: &BudgetBreakdown) -> Result<FlattenedBreakdown, CoreError> {
    CategoryFlattener::flatten(breakdown)
}

/// Donut chart for the breakdown computed from the user's own expenses.
pub fn api_user_chart(
    breakdown: &BudgetBreakdown,
    policy: &LabelPolicy,
    surface_width: f64,
) -> Result<DonutChart, CoreError> {
    ChartService::build_donut(ChartVariant::Actual, breakdown, policy, surface_width)
}

/// Donut chart for the system-recommended breakdown.
pub fn api_recommended_chart(
    breakdown: &BudgetBreakdown,
    policy: &LabelPolicy,
    surface_width: f64,
) -> Result<DonutChart, CoreError> {
    ChartService::build_donut(ChartVariant::Recommended, breakdown, policy, surface_width)
}

/// Pie of category totals for the user's own breakdown.
pub fn api_user_pie(breakdown: &BudgetBreakdown) -> Result<PieChart, CoreError> {
    ChartService::build_pie(ChartVariant::Actual, breakdown)
}

/// Pie of category totals for the system-recommended breakdown.
pub fn api_recommended_pie(breakdown: &BudgetBreakdown) -> Result<PieChart, CoreError> {
    ChartService::build_pie(ChartVariant::Recommended, breakdown)
}

/// Line chart of the per-category expense forecast.
pub fn api_projection_chart(
    projection: &ExpenseProjection,
    start_year: i32,
) -> Result<ProjectionChart, CoreError> {
    ProjectionService::build(projection, start_year)
}
