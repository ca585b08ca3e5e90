//! Render-ready series produced by flattening a breakdown.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One outer-ring point per top-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OuterSeriesPoint {
    pub category: Category,
    pub name: String,
    pub value: f64,
}

/// One inner-ring point per sub-category, tagged with its parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InnerSeriesPoint {
    pub parent: Category,
    pub name: String,
    pub value: f64,
}

pub type OuterSeries = Vec<OuterSeriesPoint>;
pub type InnerSeries = Vec<InnerSeriesPoint>;

/// Outer and inner series built from the same breakdown snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlattenedBreakdown {
    pub outer: OuterSeries,
    pub inner: InnerSeries,
}

impl FlattenedBreakdown {
    /// Inner points belonging to `parent`, in their original order.
    pub fn inner_for(&self, parent: Category) -> impl Iterator<Item = &InnerSeriesPoint> {
        self.inner.iter().filter(move |point| point.parent == parent)
    }
}
