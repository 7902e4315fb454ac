//! Calculator variants and the shared computation contract
//!
//! Each variant is an immutable value holding validated numeric fields,
//! constructed fresh per request and discarded after its compute and
//! chart-generation calls. Both derivations are pure functions of the
//! validated inputs.

mod compound;
mod dca;
mod retirement;

pub use compound::{CompoundInterestCalculator, CompoundPoint, CompoundResult, CompoundSummary};
pub use dca::{DcaCalculator, DcaPoint, DcaResult, DcaSummary};
pub use retirement::{RetirementPlanner, RetirementPoint, RetirementResult, RetirementSummary};

use serde::Serialize;

use crate::error::CalcError;
use crate::factory::CalculatorKind;

// ============================================================================
// Shared Validation Bounds
// ============================================================================

/// Maximum investment horizon in years (DCA and compound interest)
pub const MAX_INVESTMENT_YEARS: f64 = 50.0;

/// Maximum annual return assumption, in percent
pub const MAX_ANNUAL_RETURN_PCT: f64 = 50.0;

/// Validate that a field is a finite, strictly positive number
pub(crate) fn validate_positive(value: f64, field: &str) -> Result<f64, CalcError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::validation(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(value)
}

/// Validate an investment horizon: positive and at most 50 years
pub(crate) fn validate_years(value: f64) -> Result<f64, CalcError> {
    let years = validate_positive(value, "Years")?;
    if years > MAX_INVESTMENT_YEARS {
        return Err(CalcError::validation(
            "Investment period cannot exceed 50 years",
        ));
    }
    Ok(years)
}

/// Validate an annual return assumption: 0% to 50%
pub(crate) fn validate_annual_return(value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() || !(0.0..=MAX_ANNUAL_RETURN_PCT).contains(&value) {
        return Err(CalcError::validation(
            "Annual return must be between 0% and 50%",
        ));
    }
    Ok(value)
}

/// Round to `decimals` fractional digits, half-up on the scaled value
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Round money amounts and percentages to 2 decimals
pub(crate) fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

// ============================================================================
// The Calculator Sum Type
// ============================================================================

/// One validated calculator variant, ready to compute
///
/// A closed set: dispatch is a match over the tag, and no variant exists
/// without passing its constructor's validation.
#[derive(Debug, Clone)]
pub enum Calculator {
    Dca(DcaCalculator),
    Compound(CompoundInterestCalculator),
    Retirement(RetirementPlanner),
}

impl Calculator {
    /// Which kind of calculator this is
    pub fn kind(&self) -> CalculatorKind {
        match self {
            Calculator::Dca(_) => CalculatorKind::Dca,
            Calculator::Compound(_) => CalculatorKind::Compound,
            Calculator::Retirement(_) => CalculatorKind::Retirement,
        }
    }

    /// Compute the named numeric outputs for this variant
    pub fn calculate(&self) -> CalculationResult {
        match self {
            Calculator::Dca(c) => CalculationResult::Dca(c.calculate()),
            Calculator::Compound(c) => CalculationResult::Compound(c.calculate()),
            Calculator::Retirement(c) => CalculationResult::Retirement(c.calculate()),
        }
    }

    /// Generate the chart series for this variant, one point per year
    pub fn generate_chart_data(&self) -> ChartData {
        match self {
            Calculator::Dca(c) => ChartData::Dca(c.generate_chart_data()),
            Calculator::Compound(c) => ChartData::Compound(c.generate_chart_data()),
            Calculator::Retirement(c) => ChartData::Retirement(c.generate_chart_data()),
        }
    }

    /// Combined inputs-plus-results summary for persistence or display
    pub fn summary(&self) -> CalculationSummary {
        match self {
            Calculator::Dca(c) => CalculationSummary::Dca(c.summary()),
            Calculator::Compound(c) => CalculationSummary::Compound(c.summary()),
            Calculator::Retirement(c) => CalculationSummary::Retirement(c.summary()),
        }
    }
}

/// Computed outputs, shape specific to each variant
///
/// Untagged so the JSON matches the wire contract consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationResult {
    Dca(DcaResult),
    Compound(CompoundResult),
    Retirement(RetirementResult),
}

/// Ordered chart series, point shape specific to each variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartData {
    Dca(Vec<DcaPoint>),
    Compound(Vec<CompoundPoint>),
    Retirement(Vec<RetirementPoint>),
}

impl ChartData {
    /// Number of points in the series
    pub fn len(&self) -> usize {
        match self {
            ChartData::Dca(points) => points.len(),
            ChartData::Compound(points) => points.len(),
            ChartData::Retirement(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Inputs-plus-results summary, shape specific to each variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationSummary {
    Dca(DcaSummary),
    Compound(CompoundSummary),
    Retirement(RetirementSummary),
}
