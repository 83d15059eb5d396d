use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful `POST /login`: the colon-delimited session token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    pub token: String,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
}

/// Payload of a successful `POST /register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RegisterData {
    pub user_id: i64,
}

/// Payload of `GET /user/{id}/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_id: i32,
    #[serde(default)]
    pub total_films: i32,
    #[serde(default)]
    pub this_year: i32,
    #[serde(default)]
    pub watchlist_count: i32,
}

#[derive(Debug, Deserialize)]
pub struct ProfileData {
    pub profile: Profile,
}

/// A row in the admin user table. The backend spells the flag `isAdmin`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminUser {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

impl AdminUser {
    /// The seed admin account cannot be removed.
    pub fn is_deletable(&self) -> bool {
        self.user_id != 1
    }
}

/// Payload of `GET /admin/users`.
#[derive(Debug, Deserialize)]
pub struct UsersData {
    pub users: Vec<AdminUser>,
}

/// Body of `POST /admin/film`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NewFilmRequest {
    pub title: String,
    pub tmdb_id: i64,
    pub release_year: i32,
    pub runtime: i32,
    pub cast: String,
    pub director: String,
    pub genre_id_1: i32,
    pub genre_id_2: i32,
    pub genre_id_3: i32,
}

impl NewFilmRequest {
    /// Title, year, and director are required before submission.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && self.release_year > 0 && !self.director.trim().is_empty()
    }
}

/// Payload of a successful `POST /admin/film`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FilmCreatedData {
    pub film_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_user_flag_uses_backend_spelling() {
        let user: AdminUser = serde_json::from_str(
            r#"{"user_id":1,"username":"admin","email":"a@b.c","isAdmin":true}"#,
        )
        .unwrap();
        assert!(user.is_admin);
        assert!(!user.is_deletable());
    }

    #[test]
    fn regular_users_are_deletable() {
        let user: AdminUser = serde_json::from_str(
            r#"{"user_id":4,"username":"carol","email":"c@d.e","isAdmin":false}"#,
        )
        .unwrap();
        assert!(user.is_deletable());
    }

    #[test]
    fn new_film_requires_title_year_and_director() {
        let mut film = NewFilmRequest {
            title: "Stalker".to_string(),
            release_year: 1979,
            director: "Andrei Tarkovsky".to_string(),
            ..NewFilmRequest::default()
        };
        assert!(film.is_submittable());
        film.release_year = 0;
        assert!(!film.is_submittable());
        film.release_year = 1979;
        film.title = "  ".to_string();
        assert!(!film.is_submittable());
    }
}
