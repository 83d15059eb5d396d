use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delimiter between the id, username, and admin-flag parts of a token.
pub const TOKEN_DELIMITER: char = ':';

/// Decoded identity of the logged-in user.
///
/// Derived once from the stored token string; the backend issues tokens of
/// the form `<user_id>:<username>:<0|1>` and the client trusts any string of
/// that shape without verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
}

/// Failure modes of [`Session::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,
    #[error("token must have three colon-delimited parts")]
    MissingParts,
    #[error("token user id is not an integer: {0:?}")]
    InvalidUserId(String),
}

impl Session {
    /// Decode a colon-delimited token into a session.
    ///
    /// Splits on the first two delimiters only, so the admin part is
    /// whatever follows the second colon. Anything other than `"1"` there
    /// means a regular user.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Empty);
        }
        let mut parts = token.splitn(3, TOKEN_DELIMITER);
        let id_part = parts.next().ok_or(TokenError::MissingParts)?;
        let username = parts.next().ok_or(TokenError::MissingParts)?;
        let admin_part = parts.next().ok_or(TokenError::MissingParts)?;

        let user_id = id_part
            .parse()
            .map_err(|_| TokenError::InvalidUserId(id_part.to_string()))?;

        Ok(Session {
            user_id,
            username: username.to_string(),
            is_admin: admin_part == "1",
        })
    }

    /// Encode the session back into token form. Round-trips with
    /// [`Session::decode`] for usernames that contain no colon.
    pub fn encode(&self) -> String {
        format!(
            "{}{TOKEN_DELIMITER}{}{TOKEN_DELIMITER}{}",
            self.user_id,
            self.username,
            u8::from(self.is_admin)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_regular_user() {
        let session = Session::decode("7:alice:0").expect("well-formed token");
        assert_eq!(
            session,
            Session {
                user_id: 7,
                username: "alice".to_string(),
                is_admin: false,
            }
        );
    }

    #[test]
    fn decodes_admin_flag() {
        let session = Session::decode("1:admin:1").expect("well-formed token");
        assert!(session.is_admin);
        assert_eq!(session.user_id, 1);
    }

    #[test]
    fn non_one_admin_part_is_regular_user() {
        let session = Session::decode("3:bob:2").expect("shape is valid");
        assert!(!session.is_admin);
    }

    #[test]
    fn round_trips_through_encode() {
        for token in ["7:alice:0", "1:admin:1", "42:film_buff:0"] {
            let session = Session::decode(token).expect("valid token");
            assert_eq!(session.encode(), token);
            assert_eq!(Session::decode(&session.encode()).unwrap(), session);
        }
    }

    #[test]
    fn rejects_empty_token() {
        assert_eq!(Session::decode(""), Err(TokenError::Empty));
    }

    #[test]
    fn rejects_missing_parts() {
        assert_eq!(Session::decode("7"), Err(TokenError::MissingParts));
        assert_eq!(Session::decode("7:alice"), Err(TokenError::MissingParts));
    }

    #[test]
    fn rejects_non_integer_id() {
        assert_eq!(
            Session::decode("abc:alice:0"),
            Err(TokenError::InvalidUserId("abc".to_string()))
        );
    }

    #[test]
    fn admin_part_is_everything_after_second_colon() {
        // The username may not contain colons, but a malformed trailer must
        // still parse as non-admin rather than fail.
        let session = Session::decode("5:eve:1:extra").expect("shape is valid");
        assert!(!session.is_admin);
    }
}
