//! Two-tier flattening of a category breakdown into outer and inner series.

use chart_domain::{
    BudgetBreakdown, Category, CategoryAllocation, FlattenedBreakdown, InnerSeriesPoint,
    OuterSeriesPoint, CATEGORY_ORDER,
};
use tracing::{debug, warn};

use crate::CoreError;

/// Flattens a [`BudgetBreakdown`] into render-ready series.
///
/// Used for both the user's own breakdown and the recommended one. The
/// operation is all-or-nothing: input is fully validated before any point is
/// produced.
pub struct CategoryFlattener;

impl CategoryFlattener {
    /// Builds the outer series (one point per category, in [`CATEGORY_ORDER`])
    /// and the inner series (every sub-category, grouped by parent in the same
    /// order). Values are passed through untouched.
    pub fn flatten(breakdown: &BudgetBreakdown) -> Result<FlattenedBreakdown, CoreError> {
        let ordered = Self::validate(breakdown).inspect_err(|err| warn!("{err}"))?;

        let mut flattened = FlattenedBreakdown {
            outer: Vec::with_capacity(ordered.len()),
            inner: Vec::with_capacity(breakdown.sub_count()),
        };

        for allocation in ordered {
            flattened.outer.push(OuterSeriesPoint {
                category: allocation.category,
                name: allocation.category.label().to_string(),
                value: allocation.percentage,
            });

            for (label, value) in allocation
                .sub_labels
                .iter()
                .zip(allocation.sub_percentages.iter())
            {
                flattened.inner.push(InnerSeriesPoint {
                    parent: allocation.category,
                    name: label.clone(),
                    value: *value,
                });
            }
        }

        debug!(
            outer = flattened.outer.len(),
            inner = flattened.inner.len(),
            "flattened budget breakdown"
        );
        Ok(flattened)
    }

    /// Checks the breakdown invariants and returns its allocations in
    /// [`CATEGORY_ORDER`].
    pub fn validate(breakdown: &BudgetBreakdown) -> Result<[&CategoryAllocation; 4], CoreError> {
        if breakdown.allocations.len() != CATEGORY_ORDER.len() {
            return Err(CoreError::MalformedBreakdown(format!(
                "expected {} categories, found {}",
                CATEGORY_ORDER.len(),
                breakdown.allocations.len()
            )));
        }

        let mut slots: [Option<&CategoryAllocation>; 4] = [None; 4];
        for allocation in &breakdown.allocations {
            let slot = &mut slots[allocation.category.position()];
            if slot.is_some() {
                return Err(CoreError::MalformedBreakdown(format!(
                    "category `{}` appears more than once",
                    allocation.category
                )));
            }
            Self::validate_allocation(allocation)?;
            *slot = Some(allocation);
        }

        let [home, car, health, discretionary] = slots;
        Ok([
            home.ok_or_else(|| missing(Category::Home))?,
            car.ok_or_else(|| missing(Category::Car))?,
            health.ok_or_else(|| missing(Category::Health))?,
            discretionary.ok_or_else(|| missing(Category::Discretionary))?,
        ])
    }

    fn validate_allocation(allocation: &CategoryAllocation) -> Result<(), CoreError> {
        let category = allocation.category;
        if !allocation.is_aligned() {
            return Err(CoreError::MalformedBreakdown(format!(
                "category `{}` has {} sub-labels for {} sub-percentages",
                category,
                allocation.sub_labels.len(),
                allocation.sub_percentages.len()
            )));
        }
        if !is_percentage(allocation.percentage) {
            return Err(CoreError::MalformedBreakdown(format!(
                "category `{}` percentage {} is outside 0..=100",
                category, allocation.percentage
            )));
        }
        if let Some(bad) = allocation
            .sub_percentages
            .iter()
            .find(|value| !is_percentage(**value))
        {
            return Err(CoreError::MalformedBreakdown(format!(
                "category `{}` sub-percentage {} is outside 0..=100",
                category, bad
            )));
        }
        Ok(())
    }
}

fn missing(category: Category) -> CoreError {
    CoreError::MalformedBreakdown(format!("category `{}` is missing", category))
}

fn is_percentage(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_category_is_reported_by_name() {
        let breakdown = BudgetBreakdown::new(vec![
            CategoryAllocation::new(Category::Home, 10.0),
            CategoryAllocation::new(Category::Car, 10.0),
            CategoryAllocation::new(Category::Car, 10.0),
            CategoryAllocation::new(Category::Health, 10.0),
        ]);

        let err = CategoryFlattener::flatten(&breakdown).unwrap_err();
        assert_eq!(
            err,
            CoreError::MalformedBreakdown("category `Car` appears more than once".into())
        );
    }

    #[test]
    fn nan_percentage_is_rejected() {
        let breakdown = BudgetBreakdown::new(vec![
            CategoryAllocation::new(Category::Home, f64::NAN),
            CategoryAllocation::new(Category::Car, 10.0),
            CategoryAllocation::new(Category::Health, 10.0),
            CategoryAllocation::new(Category::Discretionary, 10.0),
        ]);

        assert!(matches!(
            CategoryFlattener::flatten(&breakdown),
            Err(CoreError::MalformedBreakdown(_))
        ));
    }
}
