//! Compound interest calculator
//!
//! Closed-form annual compounding of a lump sum: A = P(1 + r)^t.

use serde::Serialize;

use super::{round2, round_to, validate_annual_return, validate_positive, validate_years};
use crate::error::CalcError;

/// Validated inputs for a lump-sum compound interest calculation
#[derive(Debug, Clone)]
pub struct CompoundInterestCalculator {
    principal: f64,
    annual_return: f64,
    years: f64,
}

/// Computed compound interest outputs
///
/// `principal` is echoed back unrounded; the derived amounts are rounded
/// to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundResult {
    pub final_value: f64,
    pub principal: f64,
    pub total_return: f64,
    pub return_percentage: f64,
}

/// One yearly chart point: flat principal vs compounded value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundPoint {
    pub year: u32,
    pub principal: f64,
    /// Compounded value, nearest dollar
    pub value: f64,
}

/// Inputs-plus-results summary for persistence or display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundSummary {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub principal: f64,
    pub years: f64,
    pub annual_return: f64,
    /// Rule-of-72 doubling time; infinite (JSON null) at 0% return
    pub doubling_time: f64,
    #[serde(flatten)]
    pub results: CompoundResult,
}

impl CompoundInterestCalculator {
    /// Validate raw inputs and build the calculator
    pub fn new(principal: f64, annual_return: f64, years: f64) -> Result<Self, CalcError> {
        let principal = validate_positive(principal, "Principal amount")?;
        let years = validate_years(years)?;
        let annual_return = validate_annual_return(annual_return)?;

        Ok(Self {
            principal,
            annual_return,
            years,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_return(&self) -> f64 {
        self.annual_return
    }

    pub fn years(&self) -> f64 {
        self.years
    }

    /// Apply the closed form and derive the outputs
    pub fn calculate(&self) -> CompoundResult {
        let rate = self.annual_return / 100.0;
        let final_value = self.principal * (1.0 + rate).powf(self.years);
        let total_return = final_value - self.principal;
        let return_percentage = total_return / self.principal * 100.0;

        CompoundResult {
            final_value: round2(final_value),
            principal: self.principal,
            total_return: round2(total_return),
            return_percentage: round2(return_percentage),
        }
    }

    /// One point per year from 0 to the horizon inclusive
    pub fn generate_chart_data(&self) -> Vec<CompoundPoint> {
        let rate = self.annual_return / 100.0;
        let years = self.years as u32;

        (0..=years)
            .map(|year| CompoundPoint {
                year,
                principal: self.principal,
                value: (self.principal * (1.0 + rate).powi(year as i32)).round(),
            })
            .collect()
    }

    /// Rule of 72: approximate years for the principal to double
    ///
    /// Returns infinity at 0% return (no finite doubling time).
    pub fn doubling_time(&self) -> f64 {
        if self.annual_return == 0.0 {
            f64::INFINITY
        } else {
            round_to(72.0 / self.annual_return, 1)
        }
    }

    pub fn summary(&self) -> CompoundSummary {
        CompoundSummary {
            kind: "Compound Interest",
            principal: self.principal,
            years: self.years,
            annual_return: self.annual_return,
            doubling_time: self.doubling_time(),
            results: self.calculate(),
        }
    }
}
