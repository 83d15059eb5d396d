use crate::models::log::RecentLog;
use serde::{Deserialize, Serialize};

/// A user reference in follower/following lists and people search results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialUser {
    pub user_id: i64,
    pub username: String,
}

/// Payload of `GET /user/{id}/social`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SocialData {
    #[serde(default)]
    pub followers: Vec<SocialUser>,
    #[serde(default)]
    pub following: Vec<SocialUser>,
}

impl SocialData {
    /// Whether `user_id` appears among this profile's followers.
    pub fn is_followed_by(&self, user_id: i64) -> bool {
        self.followers.iter().any(|user| user.user_id == user_id)
    }
}

/// Body of `POST /social/follow` and `POST /social/unfollow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowRequest {
    pub user_id: i64,
}

/// Payload of `GET /user/{id}/network`: recent logs from followed users.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NetworkData {
    #[serde(default)]
    pub logs: Vec<RecentLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follower_lookup_matches_on_id() {
        let data: SocialData = serde_json::from_str(
            r#"{"followers":[{"user_id":7,"username":"alice"}],
                "following":[{"user_id":3,"username":"bob"}]}"#,
        )
        .unwrap();
        assert!(data.is_followed_by(7));
        assert!(!data.is_followed_by(3));
    }
}
