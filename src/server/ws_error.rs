/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Every error carries a code, a human-readable message and an optional context (e.g. round id).
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

/// Formats a WebSocket error frame: `{"action":"Error","data":{"code","message","context"}}`.
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    })
    .to_string()
}

/// Returns an HTTP error response with a JSON body.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_ws_error_is_escaped_json() {
        let text = ws_error_message("INVALID_ACTION", "Expected {\"action\"}", Some("round-1"));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["action"], "Error");
        assert_eq!(value["data"]["code"], "INVALID_ACTION");
        assert_eq!(value["data"]["message"], "Expected {\"action\"}");
        assert_eq!(value["data"]["context"], "round-1");
    }

    #[test]
    fn test_http_error_status() {
        let response = http_error_response("ROUND_NOT_FOUND", "Round not found", None, StatusCode::NOT_FOUND);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
