/// Helpers for WebSocket and HTTP error payloads.
///
/// Every error carries a stable code, an English message and an optional context
/// (game id, offending frame).
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

/// Formats a WebSocket error frame as a JSON string.
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

    #[test]
    fn ws_error_is_valid_json_even_with_quotes() {
        let frame = ws_error_message("INVALID_ACTION", "Invalid command", Some(r#"{"Move":"Sideways"}"#));
        let value: serde_json::Value = serde_json::from_str(&frame).expect("valid json");
        assert_eq!(value["action"], "Error");
        assert_eq!(value["data"]["code"], "INVALID_ACTION");
        assert_eq!(value["data"]["context"], r#"{"Move":"Sideways"}"#);
    }

    #[test]
    fn http_error_carries_status() {
        let response = http_error_response("GAME_NOT_FOUND", "Game session not found", None, StatusCode::NOT_FOUND);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
