//! Dollar-cost-averaging calculator
//!
//! Simulates a fixed monthly contribution compounding at a monthly rate.
//! The contribution is added at the start of each month, then the whole
//! balance grows for that month.

use serde::Serialize;

use super::{round2, round_to, validate_annual_return, validate_positive, validate_years};
use crate::error::CalcError;

/// Validated inputs for a DCA projection
#[derive(Debug, Clone)]
pub struct DcaCalculator {
    monthly_investment: f64,
    years: f64,
    annual_return: f64,
}

/// Computed DCA outputs, rounded to 2 decimals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DcaResult {
    pub final_value: f64,
    pub total_invested: f64,
    pub total_return: f64,
    pub return_percentage: f64,
}

/// One yearly chart point: contributions to date vs account value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DcaPoint {
    /// Elapsed years, to 1 decimal
    pub year: f64,
    /// Total contributed so far, nearest dollar
    pub invested: f64,
    /// Account value, nearest dollar
    pub value: f64,
}

/// Inputs-plus-results summary for persistence or display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DcaSummary {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub monthly_investment: f64,
    pub years: f64,
    pub annual_return: f64,
    #[serde(flatten)]
    pub results: DcaResult,
}

impl DcaCalculator {
    /// Validate raw inputs and build the calculator
    ///
    /// `monthly_investment` and `years` must be positive, `years` at most
    /// 50, `annual_return` between 0% and 50%.
    pub fn new(monthly_investment: f64, years: f64, annual_return: f64) -> Result<Self, CalcError> {
        let monthly_investment = validate_positive(monthly_investment, "Monthly investment")?;
        let years = validate_years(years)?;
        let annual_return = validate_annual_return(annual_return)?;

        Ok(Self {
            monthly_investment,
            years,
            annual_return,
        })
    }

    pub fn monthly_investment(&self) -> f64 {
        self.monthly_investment
    }

    pub fn years(&self) -> f64 {
        self.years
    }

    pub fn annual_return(&self) -> f64 {
        self.annual_return
    }

    /// Number of contribution months
    ///
    /// A fractional tail year counts as one final partial month, so any
    /// positive horizon yields at least one month.
    fn months(&self) -> u32 {
        (self.years * 12.0).ceil() as u32
    }

    fn monthly_rate(&self) -> f64 {
        self.annual_return / 100.0 / 12.0
    }

    /// Run the monthly accumulation and derive the outputs
    pub fn calculate(&self) -> DcaResult {
        let months = self.months();
        let monthly_rate = self.monthly_rate();

        let mut total_value = 0.0;
        for _month in 0..months {
            total_value = (total_value + self.monthly_investment) * (1.0 + monthly_rate);
        }

        let total_invested = self.monthly_investment * months as f64;
        let total_return = total_value - total_invested;
        let return_percentage = total_return / total_invested * 100.0;

        DcaResult {
            final_value: round2(total_value),
            total_invested: round2(total_invested),
            total_return: round2(total_return),
            return_percentage: round2(return_percentage),
        }
    }

    /// Re-simulate month by month, emitting one point per completed year
    /// plus a final point at the last month
    pub fn generate_chart_data(&self) -> Vec<DcaPoint> {
        let months = self.months();
        let monthly_rate = self.monthly_rate();

        let mut points = Vec::with_capacity((months / 12 + 2) as usize);
        let mut invested = 0.0;
        let mut value = 0.0;

        for month in 0..=months {
            if month > 0 {
                value = (value + self.monthly_investment) * (1.0 + monthly_rate);
                invested += self.monthly_investment;
            }

            if month % 12 == 0 || month == months {
                points.push(DcaPoint {
                    year: round_to(month as f64 / 12.0, 1),
                    invested: invested.round(),
                    value: value.round(),
                });
            }
        }

        points
    }

    pub fn summary(&self) -> DcaSummary {
        DcaSummary {
            kind: "DCA",
            monthly_investment: self.monthly_investment,
            years: self.years,
            annual_return: self.annual_return,
            results: self.calculate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> DcaCalculator {
        DcaCalculator::new(5000.0, 10.0, 8.0).unwrap()
    }

    #[test]
    fn test_total_invested_exact() {
        let result = calculator().calculate();

        // 5000/month for 10 years is exactly 600000 contributed
        assert_eq!(result.total_invested, 600_000.0);
        assert!(result.final_value > result.total_invested);
        assert_eq!(
            result.total_return,
            round2(result.final_value - result.total_invested)
        );
        assert!(result.return_percentage > 0.0);
    }

    #[test]
    fn test_zero_return_grows_nothing() {
        let result = DcaCalculator::new(1000.0, 5.0, 0.0).unwrap().calculate();

        assert_eq!(result.final_value, 60_000.0);
        assert_eq!(result.total_return, 0.0);
        assert_eq!(result.return_percentage, 0.0);
    }

    #[test]
    fn test_fractional_years_counts_partial_month() {
        // 10.04 years is 120.48 months; the tail fraction is charged as
        // one final full contribution, so 121 months are invested
        let calc = DcaCalculator::new(1000.0, 10.04, 0.0).unwrap();
        let result = calc.calculate();

        assert_eq!(result.total_invested, 121_000.0);
        assert_eq!(result.final_value, 121_000.0);

        let points = calc.generate_chart_data();
        assert_eq!(points.len(), 12); // 11 yearly points plus the final month
        assert_eq!(points.last().unwrap().invested, 121_000.0);
        assert_eq!(points.last().unwrap().year, 10.1);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let calc = calculator();
        assert_eq!(calc.calculate(), calc.calculate());
        assert_eq!(calc.generate_chart_data(), calc.generate_chart_data());
    }

    #[test]
    fn test_chart_one_point_per_year() {
        let points = calculator().generate_chart_data();

        assert_eq!(points.len(), 11);
        assert_eq!(points[0].year, 0.0);
        assert_eq!(points[0].invested, 0.0);
        assert_eq!(points[0].value, 0.0);
        assert_eq!(points[10].year, 10.0);
        assert_eq!(points[10].invested, 600_000.0);

        // Chart endpoint agrees with calculate() up to dollar rounding
        let result = calculator().calculate();
        assert!((points[10].value - result.final_value).abs() <= 0.5);
    }

    #[test]
    fn test_chart_invested_monotonic() {
        let points = calculator().generate_chart_data();
        for pair in points.windows(2) {
            assert!(pair[1].invested > pair[0].invested);
            assert!(pair[1].value > pair[0].value);
        }
    }

    #[test]
    fn test_validation_bounds() {
        let err = DcaCalculator::new(5000.0, 51.0, 8.0).unwrap_err();
        assert_eq!(err.to_string(), "Investment period cannot exceed 50 years");

        let err = DcaCalculator::new(5000.0, 10.0, 60.0).unwrap_err();
        assert_eq!(err.to_string(), "Annual return must be between 0% and 50%");

        let err = DcaCalculator::new(0.0, 10.0, 8.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Monthly investment must be a positive number"
        );

        // Boundary: exactly 50 years is accepted, just above is not
        assert!(DcaCalculator::new(5000.0, 50.0, 8.0).is_ok());
        assert!(DcaCalculator::new(5000.0, 50.0001, 8.0).is_err());
    }

    #[test]
    fn test_summary_carries_inputs_and_results() {
        let summary = calculator().summary();

        assert_eq!(summary.kind, "DCA");
        assert_eq!(summary.monthly_investment, 5000.0);
        assert_eq!(summary.results, calculator().calculate());
    }

    #[test]
    fn test_summary_wire_shape() {
        // The frontend consumes camelCase keys with the results flattened
        // alongside the inputs and the type tag
        let value = serde_json::to_value(calculator().summary()).unwrap();

        assert_eq!(value["type"], serde_json::json!("DCA"));
        assert_eq!(value["monthlyInvestment"], serde_json::json!(5000.0));
        assert_eq!(value["years"], serde_json::json!(10.0));
        assert_eq!(value["annualReturn"], serde_json::json!(8.0));
        assert_eq!(value["totalInvested"], serde_json::json!(600_000.0));
        assert!(value["finalValue"].is_number());
        assert!(value["totalReturn"].is_number());
        assert!(value["returnPercentage"].is_number());
    }

    #[test]
    fn test_chart_point_wire_shape() {
        let points = calculator().generate_chart_data();
        let value = serde_json::to_value(&points[10]).unwrap();

        assert_eq!(value["year"], serde_json::json!(10.0));
        assert_eq!(value["invested"], serde_json::json!(600_000.0));
        assert!(value["value"].is_number());
    }
}
