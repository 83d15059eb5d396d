use serde::Deserialize;

/// A film as the backend projects it to the client.
///
/// The catalogue listing and the detail endpoint share this shape; the
/// interaction flags are only present on the detail response (and only when
/// a token was attached), so they default to `false` everywhere else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Film {
    pub film_id: i64,
    #[serde(default)]
    pub tmdb_id: i64,
    pub title: String,
    #[serde(default, alias = "release_year")]
    pub year: i32,
    #[serde(default)]
    pub runtime: i32,
    #[serde(default)]
    pub cast_summary: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub poster_path: String,
    #[serde(default)]
    pub backdrop_path: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub watchlisted: bool,
}

/// Reduced film record used by search results, watchlists, favorites, and
/// the popular rail. Endpoints disagree on which extras they include, so
/// everything beyond id and title is defaulted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilmCard {
    pub film_id: i64,
    pub title: String,
    #[serde(default, alias = "release_year")]
    pub year: i32,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub poster_path: String,
    #[serde(default)]
    pub vote_average: f32,
}

/// Payload of `GET /films`.
#[derive(Debug, Deserialize)]
pub struct FilmsData {
    pub films: Vec<Film>,
}

/// Payload of `GET /film/{id}`.
#[derive(Debug, Deserialize)]
pub struct FilmData {
    pub film: Film,
}

/// Payload of the card-list endpoints (watchlist, favorites).
#[derive(Debug, Deserialize)]
pub struct FilmListData {
    pub films: Vec<FilmCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_response_carries_interaction_flags() {
        let body = r#"{
            "film_id": 3, "tmdb_id": 550, "title": "Fight Club", "year": 1999,
            "runtime": 139, "cast_summary": "Edward Norton, Brad Pitt",
            "director": "David Fincher", "poster_path": "/a.jpg",
            "backdrop_path": "/b.jpg", "tagline": "Mischief. Mayhem. Soap.",
            "vote_average": 8.4, "genre_ids": [18, 53, 35],
            "watched": true, "liked": true, "watchlisted": false
        }"#;
        let film: Film = serde_json::from_str(body).unwrap();
        assert!(film.watched);
        assert!(film.liked);
        assert!(!film.watchlisted);
        assert_eq!(film.year, 1999);
    }

    #[test]
    fn listing_without_flags_defaults_to_unmarked() {
        let body = r#"{"film_id": 1, "title": "Heat", "year": 1995}"#;
        let film: Film = serde_json::from_str(body).unwrap();
        assert!(!film.watched && !film.liked && !film.watchlisted);
        assert!(film.genre_ids.is_empty());
    }

    #[test]
    fn card_tolerates_sparse_fields() {
        let body = r#"{"film_id": 9, "title": "Ran", "poster_path": "/ran.jpg"}"#;
        let card: FilmCard = serde_json::from_str(body).unwrap();
        assert_eq!(card.year, 0);
        assert!(card.director.is_empty());
    }
}
