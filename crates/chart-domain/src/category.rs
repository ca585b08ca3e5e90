//! Top-level budget categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four fixed top-level budget groupings.
///
/// Outer and inner chart rings are both laid out in [`CATEGORY_ORDER`]; the
/// inner ring subdivides the same angular space as the outer one, so the two
/// must never disagree on order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Home,
    Car,
    Health,
    Discretionary,
}

/// Canonical category order shared by every series builder.
pub const CATEGORY_ORDER: [Category; 4] = [
    Category::Home,
    Category::Car,
    Category::Health,
    Category::Discretionary,
];

impl Category {
    /// Label used for the outer-ring point and line-series name.
    pub fn label(self) -> &'static str {
        match self {
            Category::Home => "Home",
            Category::Car => "Car",
            Category::Health => "Health",
            Category::Discretionary => "Discretionary",
        }
    }

    /// Name of the per-category drill-down, e.g. `Home Expenses`.
    pub fn drilldown_name(self) -> String {
        format!("{} Expenses", self.label())
    }

    /// Position of the category within [`CATEGORY_ORDER`].
    pub fn position(self) -> usize {
        match self {
            Category::Home => 0,
            Category::Car => 1,
            Category::Health => 2,
            Category::Discretionary => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_positions() {
        for (idx, category) in CATEGORY_ORDER.iter().enumerate() {
            assert_eq!(category.position(), idx);
        }
    }

    #[test]
    fn labels_and_drilldown_names() {
        let labels: Vec<_> = CATEGORY_ORDER.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["Home", "Car", "Health", "Discretionary"]);
        assert_eq!(Category::Health.drilldown_name(), "Health Expenses");
    }
}
