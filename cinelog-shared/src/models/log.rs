use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A diary entry as returned by `GET /user/{id}/logs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogEntry {
    pub log_id: i64,
    pub user_id: i64,
    pub film_id: i64,
    pub rating: f32,
    #[serde(default)]
    pub review_text: String,
    /// Epoch seconds.
    pub log_date: i64,
}

/// A community log line (home feed, network feed): joined with the username
/// and film title server-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentLog {
    pub username: String,
    pub film_title: String,
    pub rating: f32,
    /// Epoch seconds.
    pub date: i64,
}

/// Body of `POST /logs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitLogRequest {
    pub film_id: i64,
    pub rating: f32,
    pub review_text: String,
}

/// Payload of a successful `POST /logs`.
#[derive(Debug, Deserialize)]
pub struct LogCreatedData {
    pub log_id: i64,
}

/// Payload of `GET /user/{id}/logs`.
#[derive(Debug, Deserialize)]
pub struct UserLogsData {
    pub logs: Vec<LogEntry>,
}

/// Why a draft log cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogValidationError {
    #[error("Please select a rating")]
    MissingRating,
    #[error("Rating must be between 1 and 5 stars")]
    OutOfRange,
    #[error("Rating must land on a half-star step")]
    NotHalfStep,
}

/// A log the user is composing. Validated locally before any request is
/// issued: an unrated draft never reaches the network.
#[derive(Debug, Clone, PartialEq)]
pub struct LogDraft {
    pub film_id: i64,
    pub rating: f32,
    pub review_text: String,
}

impl LogDraft {
    pub fn validate(&self) -> Result<(), LogValidationError> {
        if self.rating <= 0.0 {
            return Err(LogValidationError::MissingRating);
        }
        if !(1.0..=5.0).contains(&self.rating) {
            return Err(LogValidationError::OutOfRange);
        }
        if (self.rating * 2.0).fract() != 0.0 {
            return Err(LogValidationError::NotHalfStep);
        }
        Ok(())
    }

    pub fn into_request(self) -> Result<SubmitLogRequest, LogValidationError> {
        self.validate()?;
        Ok(SubmitLogRequest {
            film_id: self.film_id,
            rating: self.rating,
            review_text: self.review_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: f32) -> LogDraft {
        LogDraft {
            film_id: 3,
            rating,
            review_text: "Great.".to_string(),
        }
    }

    #[test]
    fn zero_rating_is_rejected_before_submission() {
        assert_eq!(
            draft(0.0).validate(),
            Err(LogValidationError::MissingRating)
        );
        assert!(draft(0.0).into_request().is_err());
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        assert_eq!(draft(0.5).validate(), Err(LogValidationError::OutOfRange));
        assert_eq!(draft(5.5).validate(), Err(LogValidationError::OutOfRange));
    }

    #[test]
    fn half_star_granularity_is_enforced() {
        assert_eq!(draft(3.3).validate(), Err(LogValidationError::NotHalfStep));
        assert!(draft(3.5).validate().is_ok());
    }

    #[test]
    fn whole_star_ratings_pass() {
        for rating in [1.0, 2.0, 3.0, 4.0, 5.0] {
            assert!(draft(rating).validate().is_ok(), "rating {rating}");
        }
    }

    #[test]
    fn valid_draft_becomes_request() {
        let request = draft(4.5).into_request().unwrap();
        assert_eq!(request.film_id, 3);
        assert_eq!(request.rating, 4.5);
    }
}
