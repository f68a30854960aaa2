use serde::{Deserialize, Serialize};

/// Error body returned by the support API, `{"detail": "..."}`.
///
/// Gateways in front of the API answer with `{"message": ..., "details": ...}`
/// instead; both shapes decode into this type.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(alias = "message")]
    pub detail: String,
    #[serde(default, alias = "details", skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{}: {context}", self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_detail() {
        let json = r#"{"detail":"Not authenticated"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.detail, "Not authenticated");
        assert_eq!(error.to_string(), "Not authenticated");
    }

    #[test]
    fn decodes_gateway_shape_with_context() {
        let json = r#"{"message":"Rate limited","details":"retry tomorrow"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.to_string(), "Rate limited: retry tomorrow");
    }

    #[test]
    fn rejects_bodies_without_a_message() {
        assert!(serde_json::from_str::<ErrorResponse>(r#"{"error":true}"#).is_err());
    }
}
