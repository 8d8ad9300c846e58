//! Centralized helpers for WebSocket error replies.
//!
//! All errors sent to a display share one JSON shape with a code and context.

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_COMMAND").
/// - `message`: Human-readable error message.
/// - `context`: Optional context (e.g. the offending cell).
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    serde_json::json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_shape() {
        let text = ws_error_message("OUT_OF_BOUNDS", "Selected cell is outside the grid.", Some("5,0"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["action"], "Error");
        assert_eq!(value["data"]["code"], "OUT_OF_BOUNDS");
        assert_eq!(value["data"]["context"], "5,0");
    }
}
