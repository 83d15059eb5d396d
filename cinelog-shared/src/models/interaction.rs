use serde::{Deserialize, Serialize};

/// A like or watchlist mark recorded against a film. The backend stores the
/// kind as a small integer, so the enum serializes through `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum InteractionKind {
    Liked,
    Watchlisted,
}

impl From<InteractionKind> for u8 {
    fn from(kind: InteractionKind) -> Self {
        match kind {
            InteractionKind::Liked => 1,
            InteractionKind::Watchlisted => 2,
        }
    }
}

impl TryFrom<u8> for InteractionKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(InteractionKind::Liked),
            2 => Ok(InteractionKind::Watchlisted),
            other => Err(format!("unknown interaction type: {other}")),
        }
    }
}

/// Body of `POST /interaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleInteractionRequest {
    pub film_id: i64,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
}

/// What the toggle did. Toggling twice is an idempotent pair: an `Added`
/// followed by a `Removed` restores the original state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

/// Payload of `POST /interaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ToggleData {
    pub action: ToggleAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_wire_codes() {
        assert_eq!(u8::from(InteractionKind::Liked), 1);
        assert_eq!(u8::from(InteractionKind::Watchlisted), 2);
        assert_eq!(InteractionKind::try_from(2), Ok(InteractionKind::Watchlisted));
        assert!(InteractionKind::try_from(3).is_err());
    }

    #[test]
    fn request_serializes_kind_as_type_integer() {
        let request = ToggleInteractionRequest {
            film_id: 12,
            kind: InteractionKind::Watchlisted,
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"film_id":12,"type":2}"#);
    }

    #[test]
    fn toggle_responses_parse() {
        let added: ToggleData = serde_json::from_str(r#"{"action":"added"}"#).unwrap();
        let removed: ToggleData = serde_json::from_str(r#"{"action":"removed"}"#).unwrap();
        assert_eq!(added.action, ToggleAction::Added);
        assert_eq!(removed.action, ToggleAction::Removed);
    }
}
