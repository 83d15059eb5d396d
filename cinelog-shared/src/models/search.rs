use crate::models::film::FilmCard;
use crate::models::social::SocialUser;
use serde::Deserialize;
use strum_macros::{Display, EnumIter};

/// Which index the search overlay queries. The mode name doubles as the
/// `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SearchMode {
    Films,
    People,
}

/// Payload of `GET /search`. Only the list matching the requested mode is
/// populated; the other defaults to empty.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub films: Vec<FilmCard>,
    #[serde(default)]
    pub users: Vec<SocialUser>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_renders_as_query_parameter_value() {
        assert_eq!(SearchMode::Films.to_string(), "films");
        assert_eq!(SearchMode::People.to_string(), "people");
    }

    #[test]
    fn film_results_parse_with_empty_people_list() {
        let body = r#"{"films":[{"film_id":1,"title":"Heat","year":1995,"director":"Michael Mann","poster_path":"/h.jpg"}]}"#;
        let data: SearchData = serde_json::from_str(body).unwrap();
        assert_eq!(data.films.len(), 1);
        assert!(data.users.is_empty());
    }
}
