//! Declarative chart documents handed to the rendering sink.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which breakdown a donut chart was built from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    /// Computed from the expenses the user entered.
    #[default]
    Actual,
    /// Computed from the system-recommended allocation.
    Recommended,
}

impl ChartVariant {
    /// Title of the two-ring donut chart.
    pub fn title(self) -> &'static str {
        match self {
            ChartVariant::Actual => "Your Advanced Budget Plan",
            ChartVariant::Recommended => "Recommended Advanced Budget Plan",
        }
    }

    /// Title of the single-ring pie chart.
    pub fn pie_title(self) -> &'static str {
        match self {
            ChartVariant::Actual => "Your Budget Plan",
            ChartVariant::Recommended => "Recommended Budget Plan",
        }
    }

    pub fn pie_series_name(self) -> &'static str {
        match self {
            ChartVariant::Actual => "Delivered amount",
            ChartVariant::Recommended => "Expense amount",
        }
    }
}

impl fmt::Display for ChartVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChartVariant::Actual => "actual",
            ChartVariant::Recommended => "recommended",
        };
        f.write_str(label)
    }
}

/// A single slice with its label decision already made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedPoint {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Drill-down group of an inner-ring slice, e.g. `Home Expenses`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drilldown: Option<String>,
}

impl RenderedPoint {
    pub fn label_visible(&self) -> bool {
        self.label.is_some()
    }
}

/// One concentric ring of a donut chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RingSeries {
    pub name: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_size: Option<String>,
    pub points: Vec<RenderedPoint>,
}

/// Two-ring budget chart: categories outside, sub-categories inside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonutChart {
    pub variant: ChartVariant,
    pub title: String,
    pub y_axis_title: String,
    pub tooltip_suffix: String,
    pub tooltip_decimals: u8,
    pub surface_width: f64,
    pub outer: RingSeries,
    pub inner: RingSeries,
}

/// Single-ring, 3D-tilted pie of the category totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieChart {
    pub variant: ChartVariant,
    pub title: String,
    pub series_name: String,
    pub inner_size: u32,
    pub depth: u32,
    pub alpha: u32,
    pub allow_point_select: bool,
    pub points: Vec<RenderedPoint>,
}
