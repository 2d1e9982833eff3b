use std::fmt;

/// Balances at or above this count as met. Absolute, whatever the unit.
pub const DEFICIT_TOLERANCE: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientStatus {
    Met,
    Deficit,
}

impl NutrientStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance >= DEFICIT_TOLERANCE {
            NutrientStatus::Met
        } else {
            NutrientStatus::Deficit
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NutrientStatus::Met => "MET",
            NutrientStatus::Deficit => "DEFICIT",
        }
    }

    /// Badge class used by the results table.
    pub fn css_class(self) -> &'static str {
        match self {
            NutrientStatus::Met => "status-met",
            NutrientStatus::Deficit => "status-deficit",
        }
    }
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metabolizable energy is reported in Mcal, every other nutrient in grams.
pub fn unit_for(nutrient: &str) -> &'static str {
    if nutrient == "ME" { "Mcal" } else { "g" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundary_is_closed() {
        assert_eq!(NutrientStatus::from_balance(-0.1), NutrientStatus::Met);
        assert_eq!(NutrientStatus::from_balance(-0.1000001), NutrientStatus::Deficit);
        assert_eq!(NutrientStatus::from_balance(5.0), NutrientStatus::Met);
        assert_eq!(NutrientStatus::from_balance(-0.05), NutrientStatus::Met);
        assert_eq!(NutrientStatus::from_balance(-250.0), NutrientStatus::Deficit);
    }

    #[test]
    fn test_nan_balance_is_deficit() {
        assert_eq!(NutrientStatus::from_balance(f64::NAN), NutrientStatus::Deficit);
    }

    #[test]
    fn test_unit_selection() {
        assert_eq!(unit_for("ME"), "Mcal");
        assert_eq!(unit_for("CP"), "g");
        assert_eq!(unit_for("Ca"), "g");
        assert_eq!(unit_for("me"), "g");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(NutrientStatus::Met.to_string(), "MET");
        assert_eq!(NutrientStatus::Deficit.css_class(), "status-deficit");
    }
}
