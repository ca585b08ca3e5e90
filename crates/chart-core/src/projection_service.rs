//! Shapes multi-year expense forecasts into one line per category.

use chart_domain::{ExpenseProjection, LineSeries, ProjectionChart, CATEGORY_ORDER};
use tracing::{debug, warn};

use crate::CoreError;

const PROJECTION_TITLE: &str = "Your Expenses Over the Next 5 Years";
const PROJECTION_Y_AXIS: &str = "Expenses";

pub struct ProjectionService;

impl ProjectionService {
    /// Orders the forecast by [`CATEGORY_ORDER`], starting the x-axis at `start_year`.
    pub fn build(
        projection: &ExpenseProjection,
        start_year: i32,
    ) -> Result<ProjectionChart, CoreError> {
        Self::validate(projection).inspect_err(|err| warn!("{err}"))?;

        let mut series = Vec::with_capacity(CATEGORY_ORDER.len());
        for category in CATEGORY_ORDER {
            let entry = projection.get(category).ok_or_else(|| {
                CoreError::MalformedProjection(format!("category `{}` is missing", category))
            })?;
            series.push(LineSeries {
                name: category.label().to_string(),
                data: entry.yearly_totals.clone(),
            });
        }

        debug!(start_year, lines = series.len(), "built projection chart");
        Ok(ProjectionChart {
            title: PROJECTION_TITLE.to_string(),
            y_axis_title: PROJECTION_Y_AXIS.to_string(),
            point_start: start_year,
            series,
        })
    }

    fn validate(projection: &ExpenseProjection) -> Result<(), CoreError> {
        if projection.series.len() != CATEGORY_ORDER.len() {
            return Err(CoreError::MalformedProjection(format!(
                "expected {} categories, found {}",
                CATEGORY_ORDER.len(),
                projection.series.len()
            )));
        }
        for category in CATEGORY_ORDER {
            let count = projection
                .series
                .iter()
                .filter(|entry| entry.category == category)
                .count();
            if count != 1 {
                return Err(CoreError::MalformedProjection(format!(
                    "category `{}` appears {} times",
                    category, count
                )));
            }
        }
        if let Some(entry) = projection
            .series
            .iter()
            .find(|entry| entry.yearly_totals.iter().any(|total| !total.is_finite()))
        {
            return Err(CoreError::MalformedProjection(format!(
                "category `{}` has a non-finite yearly total",
                entry.category
            )));
        }
        Ok(())
    }
}
