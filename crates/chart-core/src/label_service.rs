//! Data-label visibility and text for donut chart points.

use chart_domain::{InnerSeriesPoint, OuterSeriesPoint};

/// Outer-ring labels are shown only for values strictly above this.
pub const OUTER_LABEL_THRESHOLD: f64 = 5.0;
/// Inner-ring labels are shown only for values strictly above this.
pub const INNER_LABEL_THRESHOLD: f64 = 1.0;
/// Narrower rendering surfaces hide every inner-ring label.
pub const RESPONSIVE_BREAKPOINT: f64 = 400.0;

/// Decides which points get a data label, and what it says.
///
/// Inner labels pass two independent gates: the per-point value threshold and
/// the surface-width breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPolicy {
    pub outer_threshold: f64,
    pub inner_threshold: f64,
    pub responsive_breakpoint: f64,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            outer_threshold: OUTER_LABEL_THRESHOLD,
            inner_threshold: INNER_LABEL_THRESHOLD,
            responsive_breakpoint: RESPONSIVE_BREAKPOINT,
        }
    }
}

impl LabelPolicy {
    pub fn new(outer_threshold: f64, inner_threshold: f64, responsive_breakpoint: f64) -> Self {
        Self {
            outer_threshold,
            inner_threshold,
            responsive_breakpoint,
        }
    }

    pub fn outer_label_visible(&self, value: f64) -> bool {
        value > self.outer_threshold
    }

    pub fn inner_label_visible(&self, value: f64, surface_width: f64) -> bool {
        value > self.inner_threshold && surface_width >= self.responsive_breakpoint
    }

    /// The category name, or `None` when the slice is too small.
    pub fn outer_label(&self, point: &OuterSeriesPoint) -> Option<String> {
        self.outer_label_visible(point.value).then(|| point.name.clone())
    }

    /// `"<name>: <value>%"`, or `None` when either gate hides the label.
    pub fn inner_label(&self, point: &InnerSeriesPoint, surface_width: f64) -> Option<String> {
        self.inner_label_visible(point.value, surface_width)
            .then(|| format_inner_label(&point.name, point.value))
    }
}

/// Formats an inner-ring label without rounding the value.
pub fn format_inner_label(name: &str, value: f64) -> String {
    format!("{name}: {value}%")
}
