use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection of a request parameter, raised before any handler logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("String should have at least {min} character{}", plural_suffix(.min))]
    TooShort { field: String, min: usize, input: String },

    #[error("String should have at most {max} character{}", plural_suffix(.max))]
    TooLong { field: String, max: usize, input: String },
}

fn plural_suffix(count: &usize) -> &'static str {
    if *count == 1 { "" } else { "s" }
}

impl ValidationError {
    /// Machine-readable rule name reported to clients.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::TooShort { .. } => "string_too_short",
            ValidationError::TooLong { .. } => "string_too_long",
        }
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::TooShort { field, .. } | ValidationError::TooLong { field, .. } => field,
        }
    }

    pub fn input(&self) -> &str {
        match self {
            ValidationError::TooShort { input, .. } | ValidationError::TooLong { input, .. } => input,
        }
    }

    /// The violated constraint as a (name, limit) pair.
    pub fn constraint(&self) -> (&'static str, usize) {
        match self {
            ValidationError::TooShort { min, .. } => ("min_length", *min),
            ValidationError::TooLong { max, .. } => ("max_length", *max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_message_is_singular() {
        let err = ValidationError::TooShort { field: "name".into(), min: 1, input: "".into() };
        assert_eq!(err.to_string(), "String should have at least 1 character");
        assert_eq!(err.rule(), "string_too_short");
        assert_eq!(err.constraint(), ("min_length", 1));
    }

    #[test]
    fn test_too_long_message_is_plural() {
        let err = ValidationError::TooLong { field: "name".into(), max: 50, input: "x".repeat(51) };
        assert_eq!(err.to_string(), "String should have at most 50 characters");
        assert_eq!(err.rule(), "string_too_long");
        assert_eq!(err.field(), "name");
        assert_eq!(err.input().len(), 51);
    }
}
