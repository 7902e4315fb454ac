//! Raw request fields for calculator construction
//!
//! The HTTP collaborator hands form fields through as JSON strings or
//! numbers. Every field a variant requires must be present and parse to a
//! finite number before the variant can exist.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CalcError;

/// Named raw fields as received from a request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculatorInputs(serde_json::Map<String, Value>);

impl CalculatorInputs {
    /// Create an empty field mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, builder style
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Look up a field and parse it to a finite number
    ///
    /// Accepts JSON numbers as well as numeric strings (form fields arrive
    /// as strings). Positivity and bound checks are the variant
    /// constructors' concern, not this layer's.
    pub fn require(&self, key: &str) -> Result<f64, CalcError> {
        let value = self
            .0
            .get(key)
            .ok_or_else(|| CalcError::validation(format!("Missing required field: {key}")))?;

        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match parsed {
            Some(n) if n.is_finite() => Ok(n),
            _ => Err(CalcError::validation(format!(
                "Field '{key}' must be a number"
            ))),
        }
    }
}
