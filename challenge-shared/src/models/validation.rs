use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::models::errors::ValidationError;

/// Inclusive bounds on the character count of a string parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBound {
    pub min: usize,
    pub max: usize,
}

impl LengthBound {
    pub const fn new(min: usize, max: usize) -> Self {
        LengthBound { min, max }
    }

    /// Counts characters, not bytes, so multi-byte names get the same limit.
    pub fn check(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        let length = value.chars().count();
        if length < self.min {
            return Err(ValidationError::TooShort {
                field: field.to_string(),
                min: self.min,
                input: value.to_string(),
            });
        }
        if length > self.max {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max: self.max,
                input: value.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub rule: String,
    pub loc: Vec<String>,
    pub msg: String,
    pub input: String,
    pub ctx: BTreeMap<String, usize>,
}

impl ValidationIssue {
    pub fn from_error(location: &str, err: &ValidationError) -> Self {
        let (constraint, limit) = err.constraint();
        ValidationIssue {
            rule: err.rule().to_string(),
            loc: vec![location.to_string(), err.field().to_string()],
            msg: err.to_string(),
            input: err.input().to_string(),
            ctx: BTreeMap::from([(constraint.to_string(), limit)]),
        }
    }
}

/// Body of a 422 response: one entry per failing parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub detail: Vec<ValidationIssue>,
}

impl ValidationErrorBody {
    pub fn from_errors(location: &str, errors: &[ValidationError]) -> Self {
        ValidationErrorBody {
            detail: errors.iter().map(|err| ValidationIssue::from_error(location, err)).collect(),
        }
    }
}

/// Body for routing failures such as unknown paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        DetailResponse { detail: detail.into() }
    }
}
