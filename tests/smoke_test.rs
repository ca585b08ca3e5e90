use budget_chart::{
    chart_core::{public_api, LabelPolicy},
    chart_domain::{BudgetBreakdown, Category, CategoryAllocation},
    init,
};
use std::thread;

fn breakdown(scale: f64) -> BudgetBreakdown {
    BudgetBreakdown::new(vec![
        CategoryAllocation::new(Category::Home, 40.0 * scale).with_sub("Rent", 30.0 * scale),
        CategoryAllocation::new(Category::Car, 20.0 * scale).with_sub("Payment", 20.0 * scale),
        CategoryAllocation::new(Category::Health, 15.0 * scale).with_sub("Insurance", 15.0 * scale),
        CategoryAllocation::new(Category::Discretionary, 25.0 * scale)
            .with_sub("Travel", 25.0 * scale),
    ])
}

#[test]
fn charts_build_for_user_and_recommended_breakdowns() {
    init();

    let policy = LabelPolicy::default();
    let user = public_api::api_user_chart(&breakdown(1.0), &policy, 800.0).expect("user");
    let recommended =
        public_api::api_recommended_chart(&breakdown(0.5), &policy, 800.0).expect("recommended");

    assert_eq!(user.outer.points.len(), 4);
    assert_eq!(recommended.outer.points.len(), 4);
    assert_eq!(recommended.outer.points[0].value, 20.0);
}

#[test]
fn concurrent_flattening_is_independent() {
    let handles: Vec<_> = (1..=4)
        .map(|step| {
            thread::spawn(move || {
                let scale = step as f64 / 4.0;
                public_api::api_flatten(&breakdown(scale)).expect("flatten")
            })
        })
        .collect();

    for (idx, handle) in handles.into_iter().enumerate() {
        let flattened = handle.join().expect("thread");
        let scale = (idx + 1) as f64 / 4.0;
        assert_eq!(flattened.outer[0].value, 40.0 * scale);
        assert_eq!(flattened.inner.len(), 4);
    }
}
