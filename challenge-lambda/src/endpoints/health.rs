use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Shared by `/health` and `/health2`.
pub async fn handle() -> StatusResponse {
    StatusResponse { status: "ok".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_is_ok() {
        assert_eq!(handle().await, StatusResponse { status: "ok".to_string() });
    }

    #[tokio::test]
    async fn test_health_serializes_compactly() {
        let body = serde_json::to_string(&handle().await).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }
}
