//! Builds the declarative donut and pie chart documents.

use chart_domain::{
    BudgetBreakdown, ChartVariant, DonutChart, FlattenedBreakdown, PieChart, RenderedPoint,
    RingSeries,
};
use tracing::debug;

use crate::{CategoryFlattener, CoreError, LabelPolicy};

const OUTER_SERIES_NAME: &str = "Percentage of Total Expense";
const INNER_SERIES_NAME: &str = "Amount";
const OUTER_RING_SIZE: &str = "50%";
const INNER_RING_SIZE: &str = "80%";
const INNER_RING_HOLE: &str = "60%";
const Y_AXIS_TITLE: &str = "Total percent of budget";
const TOOLTIP_SUFFIX: &str = "%";
const TOOLTIP_DECIMALS: u8 = 2;
const PIE_HOLE: u32 = 100;
const PIE_DEPTH: u32 = 45;
const PIE_TILT: u32 = 45;

pub struct ChartService;

impl ChartService {
    /// Flattens `breakdown` and decorates every point with its label decision.
    pub fn build_donut(
        variant: ChartVariant,
        breakdown: &BudgetBreakdown,
        policy: &LabelPolicy,
        surface_width: f64,
    ) -> Result<DonutChart, CoreError> {
        let flattened = CategoryFlattener::flatten(breakdown)?;
        debug!(%variant, surface_width, "building donut chart");
        Ok(Self::decorate(variant, &flattened, policy, surface_width))
    }

    /// Single-ring pie of the category totals. Every slice carries its name as label.
    pub fn build_pie(
        variant: ChartVariant,
        breakdown: &BudgetBreakdown,
    ) -> Result<PieChart, CoreError> {
        let flattened = CategoryFlattener::flatten(breakdown)?;
        debug!(%variant, "building pie chart");

        let points = flattened
            .outer
            .into_iter()
            .map(|point| RenderedPoint {
                label: Some(point.name.clone()),
                name: point.name,
                value: point.value,
                drilldown: None,
            })
            .collect();

        Ok(PieChart {
            variant,
            title: variant.pie_title().to_string(),
            series_name: variant.pie_series_name().to_string(),
            inner_size: PIE_HOLE,
            depth: PIE_DEPTH,
            alpha: PIE_TILT,
            allow_point_select: variant == ChartVariant::Recommended,
            points,
        })
    }

    /// Applies label decisions to already-flattened series.
    pub fn decorate(
        variant: ChartVariant,
        flattened: &FlattenedBreakdown,
        policy: &LabelPolicy,
        surface_width: f64,
    ) -> DonutChart {
        let outer_points = flattened
            .outer
            .iter()
            .map(|point| RenderedPoint {
                name: point.name.clone(),
                value: point.value,
                label: policy.outer_label(point),
                drilldown: None,
            })
            .collect();

        let inner_points = flattened
            .inner
            .iter()
            .map(|point| RenderedPoint {
                name: point.name.clone(),
                value: point.value,
                label: policy.inner_label(point, surface_width),
                drilldown: Some(point.parent.drilldown_name()),
            })
            .collect();

        DonutChart {
            variant,
            title: variant.title().to_string(),
            y_axis_title: Y_AXIS_TITLE.to_string(),
            tooltip_suffix: TOOLTIP_SUFFIX.to_string(),
            tooltip_decimals: TOOLTIP_DECIMALS,
            surface_width,
            outer: RingSeries {
                name: OUTER_SERIES_NAME.to_string(),
                size: OUTER_RING_SIZE.to_string(),
                inner_size: None,
                points: outer_points,
            },
            inner: RingSeries {
                name: INNER_SERIES_NAME.to_string(),
                size: INNER_RING_SIZE.to_string(),
                inner_size: Some(INNER_RING_HOLE.to_string()),
                points: inner_points,
            },
        }
    }
}
