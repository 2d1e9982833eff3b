//! View models for the two results panels.
//!
//! Everything here is a pure function of a validated payload. Renderers
//! (the Yew components, the terminal printer) only lay the strings out.

use crate::format::{fixed2, grouped_integer, signed_fixed2};
use crate::nutrient::{unit_for, NutrientStatus};
use crate::payload::{Optimization, Prediction};

/// One labelled figure card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Metric {
    fn new(label: &'static str, value: String, unit: &'static str) -> Self {
        Self { label, value, unit }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    pub name: &'static str,
    pub amount: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutrientRow {
    pub nutrient: String,
    pub required: String,
    pub provided: String,
    pub balance: String,
    pub unit: &'static str,
    pub status: NutrientStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictView {
    pub metrics: Vec<Metric>,
}

impl PredictView {
    pub const TITLE: &'static str = "Prediction Results";
}

impl From<&Prediction> for PredictView {
    fn from(prediction: &Prediction) -> Self {
        Self {
            metrics: vec![
                Metric::new("Predicted Milk Yield", fixed2(prediction.milk_yield), "Liters"),
                Metric::new("Feed Efficiency", fixed2(prediction.feed_efficiency), "L/kg DM"),
                Metric::new("Total Dry Matter", fixed2(prediction.total_dm), "kg"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeView {
    pub feeds: Vec<FeedRow>,
    pub metrics: Vec<Metric>,
    pub nutrients: Vec<NutrientRow>,
}

impl OptimizeView {
    pub const TITLE: &'static str = "Optimal Feed Formulation";
    pub const NUTRIENT_HEADINGS: [&'static str; 5] =
        ["Nutrient", "Required", "Provided", "Balance", "Status"];
}

impl From<&Optimization> for OptimizeView {
    fn from(optimization: &Optimization) -> Self {
        let feeds = &optimization.feeds;
        let feed_row = |name, amount: f64| FeedRow { name, amount: fixed2(amount), unit: "kg" };

        let nutrients = optimization
            .nutrients
            .iter()
            .map(|(name, balance)| NutrientRow {
                nutrient: name.to_string(),
                required: fixed2(balance.required),
                provided: fixed2(balance.provided),
                balance: signed_fixed2(balance.balance),
                unit: unit_for(name),
                status: NutrientStatus::from_balance(balance.balance),
            })
            .collect();

        Self {
            feeds: vec![
                feed_row("Maize Bran", feeds.maize_bran),
                feed_row("Cottonseed", feeds.cottonseed),
                feed_row("Brewers Grain", feeds.brewers_grain),
                feed_row("Grass Silage", feeds.grass_silage),
            ],
            metrics: vec![
                Metric::new("Expected Milk Yield", fixed2(optimization.milk_yield), "Liters"),
                Metric::new("Total Cost", grouped_integer(optimization.total_cost), "UGX"),
                Metric::new("Cost per Liter", grouped_integer(optimization.cost_per_liter), "UGX/L"),
                Metric::new("Feed Efficiency", fixed2(optimization.feed_efficiency), "L/kg DM"),
            ],
            nutrients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{FeedAmounts, NutrientBalance, NutrientTable};

    fn optimization() -> Optimization {
        let nutrients: NutrientTable = vec![
            ("CP", NutrientBalance { required: 875.0, provided: 900.456, balance: 25.456 }),
            ("ME", NutrientBalance { required: 16.424, provided: 16.324, balance: -0.1 }),
            ("Lysine", NutrientBalance { required: 40.0, provided: 39.5, balance: -0.5 }),
        ]
        .into_iter()
        .collect();

        Optimization {
            feeds: FeedAmounts { maize_bran: 6.0, cottonseed: 0.5, brewers_grain: 0.5, grass_silage: 1.25 },
            milk_yield: 13.0,
            total_cost: 1234.6,
            cost_per_liter: 94.97,
            feed_efficiency: 1.6774,
            nutrients,
        }
    }

    #[test]
    fn test_predict_view_metrics() {
        let view = PredictView::from(&Prediction { milk_yield: 12.0, feed_efficiency: 1.456, total_dm: 11.0 });

        assert_eq!(
            view.metrics,
            vec![
                Metric::new("Predicted Milk Yield", "12.00".to_string(), "Liters"),
                Metric::new("Feed Efficiency", "1.46".to_string(), "L/kg DM"),
                Metric::new("Total Dry Matter", "11.00".to_string(), "kg"),
            ]
        );
    }

    #[test]
    fn test_optimize_view_feed_rows() {
        let view = OptimizeView::from(&optimization());

        let names: Vec<_> = view.feeds.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Maize Bran", "Cottonseed", "Brewers Grain", "Grass Silage"]);
        assert_eq!(view.feeds[3].amount, "1.25");
        assert!(view.feeds.iter().all(|f| f.unit == "kg"));
    }

    #[test]
    fn test_optimize_view_currency_metrics() {
        let view = OptimizeView::from(&optimization());

        assert_eq!(view.metrics[1], Metric::new("Total Cost", "1,235".to_string(), "UGX"));
        assert_eq!(view.metrics[2], Metric::new("Cost per Liter", "95".to_string(), "UGX/L"));
        assert_eq!(view.metrics[3].value, "1.68");
    }

    #[test]
    fn test_optimize_view_nutrient_rows_follow_payload_order() {
        let view = OptimizeView::from(&optimization());

        let names: Vec<_> = view.nutrients.iter().map(|n| n.nutrient.as_str()).collect();
        assert_eq!(names, vec!["CP", "ME", "Lysine"]);
    }

    #[test]
    fn test_optimize_view_nutrient_row_formatting() {
        let view = OptimizeView::from(&optimization());
        let cp = &view.nutrients[0];
        let me = &view.nutrients[1];
        let lysine = &view.nutrients[2];

        assert_eq!(cp.provided, "900.46");
        assert_eq!(cp.balance, "+25.46");
        assert_eq!(cp.unit, "g");
        assert_eq!(cp.status, NutrientStatus::Met);

        assert_eq!(me.unit, "Mcal");
        assert_eq!(me.balance, "-0.10");
        assert_eq!(me.status, NutrientStatus::Met);

        assert_eq!(lysine.status, NutrientStatus::Deficit);
    }
}
