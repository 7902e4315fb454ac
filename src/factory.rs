//! Type-tag dispatch for calculator construction
//!
//! Maps the wire-level type tag (`"dca"`, `"compound"`, `"retirement"`)
//! to the matching variant constructor, pulling each constructor's fields
//! from the raw request mapping in its fixed order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, CompoundInterestCalculator, DcaCalculator, RetirementPlanner};
use crate::error::CalcError;
use crate::inputs::CalculatorInputs;

/// The closed set of calculator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Dca,
    Compound,
    Retirement,
}

impl CalculatorKind {
    /// All valid type tags, in dispatch order
    pub const ALL: [CalculatorKind; 3] = [
        CalculatorKind::Dca,
        CalculatorKind::Compound,
        CalculatorKind::Retirement,
    ];

    /// The wire-level tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorKind::Dca => "dca",
            CalculatorKind::Compound => "compound",
            CalculatorKind::Retirement => "retirement",
        }
    }

    /// Resolve a wire-level tag, if it names a known kind
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "dca" => Some(CalculatorKind::Dca),
            "compound" => Some(CalculatorKind::Compound),
            "retirement" => Some(CalculatorKind::Retirement),
            _ => None,
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorKind::from_tag(s).ok_or_else(|| CalcError::UnknownType(s.to_string()))
    }
}

/// Whether a tag names a known calculator kind
pub fn is_valid_type(tag: &str) -> bool {
    CalculatorKind::from_tag(tag).is_some()
}

/// Construct the calculator variant matching `tag` from raw request fields
///
/// Field presence and numeric parsing are checked here via
/// [`CalculatorInputs::require`]; variant-specific bounds are checked by
/// the constructors. Fails with [`CalcError::UnknownType`] for any tag
/// outside the known set.
pub fn create_calculator(tag: &str, inputs: &CalculatorInputs) -> Result<Calculator, CalcError> {
    let kind: CalculatorKind = tag.parse()?;
    log::debug!("creating {kind} calculator");

    match kind {
        CalculatorKind::Dca => Ok(Calculator::Dca(DcaCalculator::new(
            inputs.require("monthly")?,
            inputs.require("years")?,
            inputs.require("returnRate")?,
        )?)),
        CalculatorKind::Compound => Ok(Calculator::Compound(CompoundInterestCalculator::new(
            inputs.require("principal")?,
            inputs.require("returnRate")?,
            inputs.require("years")?,
        )?)),
        CalculatorKind::Retirement => Ok(Calculator::Retirement(RetirementPlanner::new(
            inputs.require("currentAge")?,
            inputs.require("retirementAge")?,
            inputs.require("currentSavings")?,
            inputs.require("targetAmount")?,
            inputs.require("returnRate")?,
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalculationResult;

    #[test]
    fn test_unknown_type_rejected() {
        let err = create_calculator("unknown", &CalculatorInputs::new()).unwrap_err();
        assert_eq!(err, CalcError::UnknownType("unknown".to_string()));
    }

    #[test]
    fn test_valid_type_tags() {
        assert!(is_valid_type("dca"));
        assert!(is_valid_type("compound"));
        assert!(is_valid_type("retirement"));
        assert!(!is_valid_type("mortgage"));
        assert!(!is_valid_type("DCA")); // tags are case-sensitive

        for kind in CalculatorKind::ALL {
            assert_eq!(CalculatorKind::from_tag(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_dispatch_dca() {
        let inputs = CalculatorInputs::new()
            .with("monthly", 5000.0)
            .with("years", 10.0)
            .with("returnRate", 8.0);

        let calculator = create_calculator("dca", &inputs).unwrap();
        assert_eq!(calculator.kind(), CalculatorKind::Dca);

        match calculator.calculate() {
            CalculationResult::Dca(result) => assert_eq!(result.total_invested, 600_000.0),
            other => panic!("expected DCA result, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_compound_accepts_string_fields() {
        // Form fields arrive as strings from the HTTP collaborator
        let inputs = CalculatorInputs::new()
            .with("principal", "100000")
            .with("returnRate", "8")
            .with("years", "10");

        let calculator = create_calculator("compound", &inputs).unwrap();
        assert_eq!(calculator.kind(), CalculatorKind::Compound);
    }

    #[test]
    fn test_dispatch_retirement() {
        let inputs = CalculatorInputs::new()
            .with("currentAge", 30.0)
            .with("retirementAge", 60.0)
            .with("currentSavings", 500_000.0)
            .with("targetAmount", 10_000_000.0)
            .with("returnRate", 8.0);

        let calculator = create_calculator("retirement", &inputs).unwrap();
        assert_eq!(calculator.kind(), CalculatorKind::Retirement);
        assert_eq!(calculator.generate_chart_data().len(), 31);
    }

    #[test]
    fn test_missing_field_fails_before_construction() {
        let inputs = CalculatorInputs::new().with("monthly", 5000.0);
        let err = create_calculator("dca", &inputs).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: years");
    }

    #[test]
    fn test_bound_failure_propagates() {
        let inputs = CalculatorInputs::new()
            .with("monthly", 5000.0)
            .with("years", 51.0)
            .with("returnRate", 8.0);

        let err = create_calculator("dca", &inputs).unwrap_err();
        assert_eq!(err.to_string(), "Investment period cannot exceed 50 years");
    }
}
