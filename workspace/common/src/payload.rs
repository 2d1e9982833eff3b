//! Request and response bodies of the model service.
//!
//! Field names match the JSON the service speaks. Responses are decoded
//! leniently (numeric fields optional) and then checked by `into_result`,
//! so a `success: false` envelope never fails to decode.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use crate::error::ServiceError;

/// Ration and feed-quality inputs for a milk-yield prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictRequest {
    /// Maize bran offered per day (kg)
    pub maize_bran: f64,
    /// Cottonseed cake offered per day (kg)
    pub cottonseed: f64,
    /// Brewers grain offered per day (kg)
    pub brewers_grain: f64,
    /// Grass silage offered per day (kg)
    pub grass_silage: f64,
    /// Net energy for lactation (MJ/kg)
    pub nel: f64,
    /// Crude protein (%)
    pub cp: f64,
    /// Lysine (%)
    pub lysine: f64,
    /// Days since calving
    pub days_in_milk: f64,
}

/// Target yield and budget for a least-cost ration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OptimizeRequest {
    /// Desired milk yield (L/day)
    pub target_milk: f64,
    /// Maximum daily feed cost (UGX)
    pub max_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk_yield: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_dm: Option<f64>,
}

/// A successful prediction with every figure present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub milk_yield: f64,
    pub feed_efficiency: f64,
    pub total_dm: f64,
}

impl PredictResponse {
    pub fn into_result(self) -> Result<Prediction, ServiceError> {
        if !self.success {
            return Err(rejection(self.error));
        }
        Ok(Prediction {
            milk_yield: required(self.milk_yield, "milk_yield")?,
            feed_efficiency: required(self.feed_efficiency, "feed_efficiency")?,
            total_dm: required(self.total_dm, "total_dm")?,
        })
    }
}

/// Daily amount of each ingredient in kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedAmounts {
    pub maize_bran: f64,
    pub cottonseed: f64,
    pub brewers_grain: f64,
    pub grass_silage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientBalance {
    pub required: f64,
    pub provided: f64,
    /// provided - required
    pub balance: f64,
}

/// Nutrient name to balance, in the order the service sent them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NutrientTable(Vec<(String, NutrientBalance)>);

impl NutrientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry; a repeated name keeps its first position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, balance: NutrientBalance) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = balance,
            None => self.0.push((name, balance)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NutrientBalance> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, b)| b)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NutrientBalance)> {
        self.0.iter().map(|(name, balance)| (name.as_str(), balance))
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, NutrientBalance)> for NutrientTable {
    fn from_iter<I: IntoIterator<Item = (S, NutrientBalance)>>(iter: I) -> Self {
        let mut table = NutrientTable::new();
        for (name, balance) in iter {
            table.insert(name, balance);
        }
        table
    }
}

impl Serialize for NutrientTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, balance) in &self.0 {
            map.serialize_entry(name, balance)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NutrientTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = NutrientTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of nutrient name to {required, provided, balance}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = NutrientTable::new();
                while let Some((name, balance)) = access.next_entry::<String, NutrientBalance>()? {
                    table.insert(name, balance);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OptimizeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeds: Option<FeedAmounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk_yield: Option<f64>,
    /// Daily ration cost (UGX)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_liter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub nutrients: Option<NutrientTable>,
}

/// A successful least-cost ration with every figure present.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimization {
    pub feeds: FeedAmounts,
    pub milk_yield: f64,
    pub total_cost: f64,
    pub cost_per_liter: f64,
    pub feed_efficiency: f64,
    pub nutrients: NutrientTable,
}

impl OptimizeResponse {
    pub fn into_result(self) -> Result<Optimization, ServiceError> {
        if !self.success {
            return Err(rejection(self.error));
        }
        Ok(Optimization {
            feeds: required(self.feeds, "feeds")?,
            milk_yield: required(self.milk_yield, "milk_yield")?,
            total_cost: required(self.total_cost, "total_cost")?,
            cost_per_liter: required(self.cost_per_liter, "cost_per_liter")?,
            feed_efficiency: required(self.feed_efficiency, "feed_efficiency")?,
            nutrients: required(self.nutrients, "nutrients")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ServiceError> {
    value.ok_or(ServiceError::IncompletePayload(field))
}

fn rejection(error: Option<String>) -> ServiceError {
    ServiceError::Rejected(error.unwrap_or_else(|| "unknown error".to_string()))
}

/// Decodes a response body, falling back to the status code when a non-OK
/// answer carries no envelope.
pub fn decode_response<T>(status: u16, body: &str) -> Result<T, ServiceError>
where
    T: for<'de> Deserialize<'de>,
{
    match serde_json::from_str::<T>(body) {
        Ok(decoded) => Ok(decoded),
        Err(_) if !(200..300).contains(&status) => Err(ServiceError::Status(status)),
        Err(e) => Err(ServiceError::Decode(e.to_string())),
    }
}
