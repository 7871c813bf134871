//! Data structures used between the frontend and backend of the Herald application.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Body of the message endpoints: `{"message": "..."}`.
///
/// Deserialization is lenient about the `message` field so that whatever the
/// backend sends can be displayed: strings are kept as-is, `null` or a missing
/// field become an empty string, and any other JSON value is rendered as its
/// compact JSON text. The body itself must be a JSON object.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MessagePayload {
    pub message: String,
}

impl MessagePayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<'de> Deserialize<'de> for MessagePayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;
        let message = match object.remove("message") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text,
            Some(other) => other.to_string(),
        };
        Ok(Self { message })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

/// Response of the backend health check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> serde_json::Result<MessagePayload> {
        serde_json::from_str(body)
    }

    #[test]
    fn string_message_is_kept() {
        assert_eq!(parse(r#"{"message":"hello"}"#).unwrap().message, "hello");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let payload = parse(r#"{"message":"hi","status":"ok"}"#).unwrap();
        assert_eq!(payload, MessagePayload::new("hi"));
    }

    #[test]
    fn missing_or_null_message_is_empty() {
        assert_eq!(parse("{}").unwrap().message, "");
        assert_eq!(parse(r#"{"message":null}"#).unwrap().message, "");
    }

    #[test]
    fn non_string_message_is_coerced() {
        assert_eq!(parse(r#"{"message":42}"#).unwrap().message, "42");
        assert_eq!(parse(r#"{"message":true}"#).unwrap().message, "true");
        assert_eq!(parse(r#"{"message":[1,2]}"#).unwrap().message, "[1,2]");
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(parse("not json").is_err());
        assert!(parse(r#"["hello"]"#).is_err());
        assert!(parse(r#""hello""#).is_err());
    }

    #[test]
    fn serializes_as_message_object() {
        let json = serde_json::to_string(&MessagePayload::new("Hello")).unwrap();
        assert_eq!(json, r#"{"message":"Hello"}"#);
    }

    #[test]
    fn health_status_is_lowercase() {
        let json = serde_json::to_value(HealthStatus::Ok).unwrap();
        assert_eq!(json, serde_json::json!("ok"));
    }
}
