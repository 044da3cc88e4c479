use lambda_http::{Body, Request, Response};
use serde_json::json;
use crate::endpoints::{health, hello};
use challenge_shared::utilities::logging::log_info;
use challenge_shared::utilities::requests::extract_path;
use challenge_shared::utilities::responses::{method_not_allowed_response, not_found_response, success_response};

const GET: &str = "GET";

/// Every registered path. Each is GET-only.
pub const ROUTES: &[&str] = &["/health", "/health2", "/hello"];

pub async fn handle_lambda(event: Request) -> Result<Response<Body>, lambda_http::Error> {
    let path = extract_path(&event);
    log_info("request_received", json!({
        "method": event.method().as_str(),
        "path": path,
    }));

    match (event.method().as_str(), path.as_str()) {
        //Monitor
        (GET, "/health") => success_response(health::handle().await),
        (GET, "/health2") => success_response(health::handle().await),

        //Greeting
        (GET, "/hello") => hello::handler(&event).await,

        (_, known) if ROUTES.contains(&known) => method_not_allowed_response(&[GET]),

        //Not found
        _ => not_found_response(),
    }
}
