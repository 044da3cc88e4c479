use http::Response;
use lambda_http::{Body, Request};
use serde::{Deserialize, Serialize};
use serde_json::json;
use challenge_shared::models::errors::ValidationError;
use challenge_shared::models::validation::LengthBound;
use challenge_shared::utilities::fields::hello::{DEFAULT_NAME, NAME_MAX_LENGTH, NAME_MIN_LENGTH, NAME_PARAM};
use challenge_shared::utilities::logging::log_warn;
use challenge_shared::utilities::requests::query_param;
use challenge_shared::utilities::responses::{success_response, validation_error_response};

const NAME_BOUND: LengthBound = LengthBound::new(NAME_MIN_LENGTH, NAME_MAX_LENGTH);

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Validated query for `/hello`.
#[derive(Debug, Clone, PartialEq)]
pub struct HelloQuery {
    pub name: String,
}

impl HelloQuery {
    /// An absent `name` takes the default; a provided one must satisfy the
    /// length bound, including an explicitly empty value.
    pub fn parse(name: Option<String>) -> Result<Self, ValidationError> {
        let name = name.unwrap_or_else(|| DEFAULT_NAME.to_string());
        NAME_BOUND.check(NAME_PARAM, &name)?;
        Ok(HelloQuery { name })
    }

    pub fn from_request(event: &Request) -> Result<Self, ValidationError> {
        Self::parse(query_param(event, NAME_PARAM))
    }
}

pub async fn handler(event: &Request) -> Result<Response<Body>, lambda_http::Error> {
    match HelloQuery::from_request(event) {
        Ok(query) => success_response(handle(query).await),
        Err(err) => {
            log_warn("validation_failed", json!({
                "field": err.field(),
                "rule": err.rule(),
            }));
            validation_error_response(&[err])
        }
    }
}

pub async fn handle(query: HelloQuery) -> MessageResponse {
    MessageResponse { message: format!("Hello, {}!", query.name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_world() {
        assert_eq!(HelloQuery::parse(None).unwrap().name, "world");
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = HelloQuery::parse(Some(String::new())).unwrap_err();
        assert_eq!(err.field(), "name");
        assert_eq!(err.rule(), "string_too_short");
    }

    #[test]
    fn test_parse_length_limits() {
        assert!(HelloQuery::parse(Some("a".repeat(50))).is_ok());
        let err = HelloQuery::parse(Some("a".repeat(51))).unwrap_err();
        assert_eq!(err.rule(), "string_too_long");
    }

    #[tokio::test]
    async fn test_handle_substitutes_verbatim() {
        let query = HelloQuery::parse(Some("<Ada \"Lovelace\">".to_string())).unwrap();
        let response = handle(query).await;
        assert_eq!(response.message, "Hello, <Ada \"Lovelace\">!");
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"message":"Hello, <Ada \"Lovelace\">!"}"#
        );
    }
}
