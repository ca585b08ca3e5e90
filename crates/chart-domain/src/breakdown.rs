//! Budget breakdown snapshots produced by the expense calculator.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Share of the total budget assigned to one category, plus its sub-categories.
///
/// `sub_percentages` and `sub_labels` are parallel: entry `i` of one describes
/// entry `i` of the other. Sub-percentages need not sum to `percentage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryAllocation {
    pub category: Category,
    pub percentage: f64,
    #[serde(default)]
    pub sub_percentages: Vec<f64>,
    #[serde(default)]
    pub sub_labels: Vec<String>,
}

impl CategoryAllocation {
    pub fn new(category: Category, percentage: f64) -> Self {
        Self {
            category,
            percentage,
            sub_percentages: Vec::new(),
            sub_labels: Vec::new(),
        }
    }

    /// Appends a labelled sub-category share.
    pub fn with_sub(mut self, label: impl Into<String>, percentage: f64) -> Self {
        self.sub_labels.push(label.into());
        self.sub_percentages.push(percentage);
        self
    }

    /// Returns `true` when labels and values line up one-to-one.
    pub fn is_aligned(&self) -> bool {
        self.sub_labels.len() == self.sub_percentages.len()
    }
}

/// Percentage allocations at category and sub-category granularity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetBreakdown {
    pub allocations: Vec<CategoryAllocation>,
}

impl BudgetBreakdown {
    pub fn new(allocations: Vec<CategoryAllocation>) -> Self {
        Self { allocations }
    }

    /// Looks up the first allocation recorded for `category`.
    pub fn allocation(&self, category: Category) -> Option<&CategoryAllocation> {
        self.allocations
            .iter()
            .find(|allocation| allocation.category == category)
    }

    /// Total number of sub-category entries across all categories.
    pub fn sub_count(&self) -> usize {
        self.allocations
            .iter()
            .map(|allocation| allocation.sub_percentages.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_snapshot_json() {
        let json = r#"{
            "allocations": [
                { "category": "Car", "percentage": 20.0,
                  "sub_percentages": [20.0], "sub_labels": ["Payment"] },
                { "category": "Home", "percentage": 40.0 }
            ]
        }"#;
        let breakdown: BudgetBreakdown = serde_json::from_str(json).expect("parse breakdown");

        assert_eq!(breakdown.allocations.len(), 2);
        let car = breakdown.allocation(Category::Car).expect("car present");
        assert_eq!(car.sub_labels, ["Payment"]);
        let home = breakdown.allocation(Category::Home).expect("home present");
        assert!(home.sub_percentages.is_empty());
        assert!(home.is_aligned());
        assert_eq!(breakdown.sub_count(), 1);
    }

    #[test]
    fn with_sub_keeps_labels_and_values_parallel() {
        let allocation = CategoryAllocation::new(Category::Home, 40.0)
            .with_sub("Rent", 30.0)
            .with_sub("Utilities", 10.0);

        assert_eq!(allocation.sub_labels, ["Rent", "Utilities"]);
        assert_eq!(allocation.sub_percentages, [30.0, 10.0]);
        assert!(allocation.is_aligned());
    }
}
