use crate::models::film::{Film, FilmCard};
use crate::models::log::RecentLog;
use serde::Deserialize;

/// Payload of `GET /home_data`: the featured hero film, a popular poster
/// rail, and the latest community activity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomeData {
    pub hero_movie: Film,
    #[serde(default)]
    pub popular: Vec<FilmCard>,
    #[serde(default)]
    pub recent_logs: Vec<RecentLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_payload_parses() {
        let body = r#"{
            "hero_movie": {"film_id": 2, "title": "Dune", "year": 2021,
                           "director": "Denis Villeneuve", "poster_path": "/d.jpg",
                           "backdrop_path": "/db.jpg", "tagline": "Fear is the mind-killer.",
                           "vote_average": 8.1},
            "popular": [{"film_id": 2, "title": "Dune", "poster_path": "/d.jpg"}],
            "recent_logs": [{"username": "alice", "film_title": "Dune",
                             "rating": 4.5, "date": 1735689600}]
        }"#;
        let data: HomeData = serde_json::from_str(body).unwrap();
        assert_eq!(data.hero_movie.title, "Dune");
        assert_eq!(data.popular.len(), 1);
        assert_eq!(data.recent_logs[0].rating, 4.5);
    }
}
