//! Inheritance record assembly from JSON input.
//!
//! Checks that the required top-level fields are present, then reads the
//! record. Optional relationship lists default to empty and the spouse
//! defaults to none. No other structural validation is performed here;
//! person statuses outside the recognized set are a policy matter for the
//! rank cascade, not an input error.

use crate::types::{EvalError, InheritanceCase};

/// Required top-level fields, with the camelCase spelling also accepted.
const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("deceased_name", "deceasedName"),
    ("has_simultaneous_death", "hasSimultaneousDeath"),
];

/// Assemble an `InheritanceCase` from a JSON record.
pub fn assemble_case(input: &serde_json::Value) -> Result<InheritanceCase, EvalError> {
    let record = input.as_object().ok_or_else(|| EvalError::Malformed {
        message: "inheritance record must be a JSON object".to_string(),
    })?;

    for (field, alias) in REQUIRED_FIELDS {
        if !record.contains_key(*field) && !record.contains_key(*alias) {
            return Err(EvalError::MissingField {
                field: field.to_string(),
            });
        }
    }

    serde_json::from_value(input.clone()).map_err(|e| EvalError::Malformed {
        message: e.to_string(),
    })
}
