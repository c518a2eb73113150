use chrono::{SecondsFormat, Utc};

pub fn json_error_response(err: impl std::error::Error) -> serde_json::Value {
    serde_json::json!({
        "error": err.to_string(),
        "help": "Please check the response headers for `x-request-id`, include the datetime and raise a support ticket.",
        "datetime": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    })
}
