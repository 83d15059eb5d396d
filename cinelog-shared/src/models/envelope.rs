use serde::Deserialize;
use thiserror::Error;

/// Outcome discriminator the backend places on every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Generic response envelope: `{"status": ..., "message"?: ..., ...payload}`.
///
/// The payload fields sit at the top level of the body, so they are captured
/// through `flatten`; error bodies carry no payload and deserialize to
/// `None`. Older endpoints report the failure text under `error` instead of
/// `message`, hence the alias.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: ResponseStatus,
    #[serde(default, alias = "error")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

/// Payload for endpoints that acknowledge without returning data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Ack {}

/// The two failure kinds the client distinguishes: the request never
/// completed, or the backend answered and said no.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("connection error: {0}")]
    Transport(String),
    #[error("{0}")]
    Backend(String),
}

impl<T> Envelope<T> {
    /// Collapse the envelope into the payload or a backend error carrying
    /// the message field, falling back to a generic string.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self.status {
            ResponseStatus::Error => Err(ApiError::Backend(
                self.message
                    .unwrap_or_else(|| "Request failed".to_string()),
            )),
            ResponseStatus::Success => self
                .data
                .ok_or_else(|| ApiError::Backend("Malformed response payload".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TokenPayload {
        token: String,
    }

    #[test]
    fn success_envelope_yields_payload() {
        let body = r#"{"status":"success","token":"7:alice:0"}"#;
        let envelope: Envelope<TokenPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.into_result(),
            Ok(TokenPayload {
                token: "7:alice:0".to_string()
            })
        );
    }

    #[test]
    fn error_envelope_yields_backend_message() {
        let body = r#"{"status":"error","message":"Film not found"}"#;
        let envelope: Envelope<TokenPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(ApiError::Backend("Film not found".to_string()))
        );
    }

    #[test]
    fn error_key_alias_is_accepted() {
        let body = r#"{"status":"error","error":"Invalid credentials"}"#;
        let envelope: Envelope<TokenPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(ApiError::Backend("Invalid credentials".to_string()))
        );
    }

    #[test]
    fn error_without_message_falls_back_to_generic() {
        let body = r#"{"status":"error"}"#;
        let envelope: Envelope<TokenPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(ApiError::Backend("Request failed".to_string()))
        );
    }

    #[test]
    fn success_without_payload_is_rejected() {
        let body = r#"{"status":"success"}"#;
        let envelope: Envelope<TokenPayload> = serde_json::from_str(body).unwrap();
        assert!(matches!(envelope.into_result(), Err(ApiError::Backend(_))));
    }

    #[test]
    fn ack_accepts_bare_success() {
        let body = r#"{"status":"success","action":"added"}"#;
        let envelope: Envelope<Ack> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_result(), Ok(Ack {}));
    }
}
