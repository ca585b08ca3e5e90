//! Multi-year expense projections and their line-chart shape.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Yearly expense totals forecast for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryProjection {
    pub category: Category,
    pub yearly_totals: Vec<f64>,
}

/// Forecast produced by the external expense calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpenseProjection {
    pub series: Vec<CategoryProjection>,
}

impl ExpenseProjection {
    pub fn new(series: Vec<CategoryProjection>) -> Self {
        Self { series }
    }

    pub fn get(&self, category: Category) -> Option<&CategoryProjection> {
        self.series.iter().find(|entry| entry.category == category)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub data: Vec<f64>,
}

/// Line chart of expenses per category over consecutive years.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionChart {
    pub title: String,
    pub y_axis_title: String,
    pub point_start: i32,
    pub series: Vec<LineSeries>,
}

impl ProjectionChart {
    /// X-axis years covering the longest series.
    pub fn years(&self) -> Vec<i32> {
        let span = self
            .series
            .iter()
            .map(|line| line.data.len())
            .max()
            .unwrap_or(0);
        (0..span as i32).map(|offset| self.point_start + offset).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_follow_longest_series() {
        let chart = ProjectionChart {
            title: "t".into(),
            y_axis_title: "y".into(),
            point_start: 2017,
            series: vec![
                LineSeries {
                    name: "Home".into(),
                    data: vec![1.0, 2.0],
                },
                LineSeries {
                    name: "Car".into(),
                    data: vec![1.0, 2.0, 3.0],
                },
            ],
        };

        assert_eq!(chart.years(), vec![2017, 2018, 2019]);
    }
}
