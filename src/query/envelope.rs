use crate::session::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// Uniform response wrapper: exactly one of `data` or `errors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Data { data: Map<String, Value> },
    Errors { errors: Vec<ErrorMessage> },
}

impl QueryResponse {
    pub fn success(field: &str, value: Value) -> Self {
        let mut data = Map::new();
        data.insert(field.to_string(), value);
        QueryResponse::Data { data }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        QueryResponse::Errors {
            errors: vec![ErrorMessage {
                message: message.into(),
            }],
        }
    }

    /// Result for `field`, if this is a success envelope
    pub fn data(&self, field: &str) -> Option<&Value> {
        match self {
            QueryResponse::Data { data } => data.get(field),
            QueryResponse::Errors { .. } => None,
        }
    }

    /// First error message, if this is an error envelope
    pub fn error_message(&self) -> Option<&str> {
        match self {
            QueryResponse::Data { .. } => None,
            QueryResponse::Errors { errors } => errors.first().map(|e| e.message.as_str()),
        }
    }
}

impl From<QueryError> for QueryResponse {
    fn from(err: QueryError) -> Self {
        QueryResponse::failure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_data_only() {
        let response = QueryResponse::success("deleteSession", json!(true));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "data": { "deleteSession": true } })
        );
    }

    #[test]
    fn failure_serializes_errors_only() {
        let response: QueryResponse = QueryError::UnsupportedOperation.into();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "errors": [{ "message": "Query not supported" }] })
        );
    }

    #[test]
    fn null_result_is_still_data() {
        let response = QueryResponse::success("session", Value::Null);
        assert_eq!(response.data("session"), Some(&Value::Null));
        assert_eq!(response.error_message(), None);
    }
}
