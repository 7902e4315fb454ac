//! Retirement planning calculator
//!
//! Solves the future-value-of-annuity equation for the monthly
//! contribution required to reach a target sum by a target age, after
//! growing existing savings at the same monthly rate.

use serde::Serialize;

use super::{round2, validate_annual_return, validate_positive};
use crate::error::CalcError;

/// Validated inputs for a retirement plan
#[derive(Debug, Clone)]
pub struct RetirementPlanner {
    current_age: f64,
    retirement_age: f64,
    current_savings: f64,
    target_amount: f64,
    annual_return: f64,
}

/// Computed retirement plan outputs
///
/// At most one of `shortfall` and `surplus` is positive: `surplus` when
/// existing savings alone overshoot the target, `shortfall` when the gap
/// is positive and no contribution schedule can close it (zero return).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementResult {
    pub years_to_retirement: f64,
    pub monthly_required: f64,
    pub total_to_invest: f64,
    pub projected_value: f64,
    pub shortfall: f64,
    pub surplus: f64,
}

/// One yearly chart point: projected value vs the flat target line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetirementPoint {
    pub age: u32,
    /// Projected account value, nearest dollar
    pub value: f64,
    pub target: f64,
}

/// Inputs-plus-results summary for persistence or display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementSummary {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub current_age: f64,
    pub retirement_age: f64,
    pub current_savings: f64,
    pub target_amount: f64,
    pub annual_return: f64,
    pub on_track: bool,
    #[serde(flatten)]
    pub results: RetirementResult,
}

impl RetirementPlanner {
    /// Validate raw inputs and build the planner
    ///
    /// Ages must fall in 18-80 (current) and 50-100 (retirement) with
    /// retirement strictly after current; savings may be zero but not
    /// negative; the target must be positive; the return 0% to 50%.
    pub fn new(
        current_age: f64,
        retirement_age: f64,
        current_savings: f64,
        target_amount: f64,
        annual_return: f64,
    ) -> Result<Self, CalcError> {
        let current_age = validate_positive(current_age, "Current age")?;
        let retirement_age = validate_positive(retirement_age, "Retirement age")?;
        let target_amount = validate_positive(target_amount, "Target amount")?;

        if current_age < 18.0 {
            return Err(CalcError::validation("Current age must be at least 18"));
        }
        if current_age > 80.0 {
            return Err(CalcError::validation("Current age cannot exceed 80"));
        }
        if retirement_age < 50.0 {
            return Err(CalcError::validation("Retirement age must be at least 50"));
        }
        if retirement_age > 100.0 {
            return Err(CalcError::validation("Retirement age cannot exceed 100"));
        }
        if retirement_age <= current_age {
            return Err(CalcError::validation(
                "Retirement age must be greater than current age",
            ));
        }
        if !current_savings.is_finite() || current_savings < 0.0 {
            return Err(CalcError::validation("Current savings cannot be negative"));
        }
        let annual_return = validate_annual_return(annual_return)?;

        Ok(Self {
            current_age,
            retirement_age,
            current_savings,
            target_amount,
            annual_return,
        })
    }

    pub fn current_age(&self) -> f64 {
        self.current_age
    }

    pub fn retirement_age(&self) -> f64 {
        self.retirement_age
    }

    pub fn current_savings(&self) -> f64 {
        self.current_savings
    }

    pub fn target_amount(&self) -> f64 {
        self.target_amount
    }

    pub fn annual_return(&self) -> f64 {
        self.annual_return
    }

    fn monthly_rate(&self) -> f64 {
        self.annual_return / 100.0 / 12.0
    }

    /// Solve for the required monthly contribution and derive the outputs
    pub fn calculate(&self) -> RetirementResult {
        let years_to_retirement = self.retirement_age - self.current_age;
        let months = years_to_retirement * 12.0;
        let monthly_rate = self.monthly_rate();

        let future_value_of_savings =
            self.current_savings * (1.0 + monthly_rate).powf(months);
        let remaining_amount = self.target_amount - future_value_of_savings;

        let monthly_required = if remaining_amount > 0.0 && monthly_rate > 0.0 {
            // Future value of an annuity, solved for the payment:
            // PMT = FV * r / ((1 + r)^n - 1)
            remaining_amount * monthly_rate / ((1.0 + monthly_rate).powf(months) - 1.0)
        } else {
            0.0
        };

        let total_to_invest = monthly_required * months;

        // A shortfall is reported only when a positive gap has no
        // contribution schedule that closes it (zero-rate case).
        let shortfall = if remaining_amount > 0.0 && monthly_required == 0.0 {
            round2(remaining_amount)
        } else {
            0.0
        };
        let surplus = if remaining_amount < 0.0 {
            round2(-remaining_amount)
        } else {
            0.0
        };

        RetirementResult {
            years_to_retirement,
            monthly_required: round2(monthly_required.max(0.0)),
            total_to_invest: round2(total_to_invest),
            projected_value: round2(self.target_amount),
            shortfall,
            surplus,
        }
    }

    /// Simulate the plan month by month with the solved contribution,
    /// emitting one point per year up to the retirement age
    pub fn generate_chart_data(&self) -> Vec<RetirementPoint> {
        let years_to_retirement = (self.retirement_age - self.current_age) as u32;
        let monthly_rate = self.monthly_rate();
        let monthly_required = self.calculate().monthly_required;

        let mut points = Vec::with_capacity(years_to_retirement as usize + 1);
        let mut value = self.current_savings;

        for year in 0..=years_to_retirement {
            if year > 0 {
                for _month in 0..12 {
                    value = (value + monthly_required) * (1.0 + monthly_rate);
                }
            }

            points.push(RetirementPoint {
                age: (self.current_age + year as f64).round() as u32,
                value: value.round(),
                target: self.target_amount,
            });
        }

        points
    }

    /// Heuristic 5%-of-target annual savings rule; informational only
    pub fn is_on_track(&self) -> bool {
        self.calculate().monthly_required <= self.target_amount * 0.05 / 12.0
    }

    pub fn summary(&self) -> RetirementSummary {
        RetirementSummary {
            kind: "Retirement Planning",
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            current_savings: self.current_savings,
            target_amount: self.target_amount,
            annual_return: self.annual_return,
            on_track: self.is_on_track(),
            results: self.calculate(),
        }
    }
}
