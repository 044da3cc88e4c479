use http::{header, StatusCode};
use lambda_http::{Response, Body};
use serde::Serialize;
use crate::models::errors::ValidationError;
use crate::models::validation::{DetailResponse, ValidationErrorBody};
use crate::utilities::fields::location;

pub fn success_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(data, StatusCode::OK)
}

/// 422 carrying one issue per failing query parameter.
pub fn validation_error_response(errors: &[ValidationError]) -> Result<Response<Body>, lambda_http::Error> {
    let body = ValidationErrorBody::from_errors(location::QUERY, errors);
    response_with_code(body, StatusCode::UNPROCESSABLE_ENTITY)
}

pub fn not_found_response() -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(DetailResponse::new("Not Found"), StatusCode::NOT_FOUND)
}

pub fn method_not_allowed_response(allowed: &[&str]) -> Result<Response<Body>, lambda_http::Error> {
    let mut response = response_with_code(DetailResponse::new("Method Not Allowed"), StatusCode::METHOD_NOT_ALLOWED)?;
    let allow = allowed.join(", ")
        .parse()
        .map_err(|_| lambda_http::Error::from("Invalid Allow header"))?;
    response.headers_mut().insert(header::ALLOW, allow);
    Ok(response)
}

pub fn response_with_code<T: Serialize>(data: T, code: StatusCode) -> Result<Response<Body>, lambda_http::Error> {
    let body = serde_json::to_string(&data).map_err(|_| lambda_http::Error::from("Serialization error"))?;
    log::info!("Response Code:{} Body: {}", code, body);
    Response::builder()
        .status(code)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::Text(body))
        .map_err(|e| {
            log::error!("Failed to build response: {:?}", e);
            lambda_http::Error::from("Failed to construct HTTP response")
        })
}
