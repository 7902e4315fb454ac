//! Investment Calculator Engine - computation core for the savings calculator suite
//!
//! This library provides:
//! - Dollar-cost-averaging projections with monthly compounding
//! - Lump-sum compound interest calculations (with Rule-of-72 doubling time)
//! - Retirement planning (future-value annuity solve for the required contribution)
//! - Yearly chart series generation for each calculator
//! - Type-tag dispatch for constructing calculators from raw request fields

pub mod calculator;
pub mod error;
pub mod factory;
pub mod inputs;

// Re-export commonly used types
pub use calculator::{CalculationResult, CalculationSummary, Calculator, ChartData};
pub use error::CalcError;
pub use factory::{create_calculator, is_valid_type, CalculatorKind};
pub use inputs::CalculatorInputs;
