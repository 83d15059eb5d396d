use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::models::{
    Ack, ApiError, Envelope, Film, FilmCard, FilmCreatedData, FilmData, FilmListData, FilmsData,
    FollowRequest, HomeData, InteractionKind, LogCreatedData, LogEntry, LoginData, LoginRequest,
    NetworkData, NewFilmRequest, Profile, ProfileData, RecentLog, RegisterData, RegisterRequest,
    SearchData, SearchMode, SocialData, SubmitLogRequest, ToggleAction, ToggleData,
    ToggleInteractionRequest, UserLogsData, UsersData, AdminUser,
};
use std::sync::{Arc, Mutex};

thread_local! {
    static SHARED_CLIENT: OnceCell<CinelogClient> = const { OnceCell::new() };
}

/// Lightweight API client for the Cinelog backend.
///
/// Authenticated requests attach the raw stored token string as the
/// `Authorization` header value, no scheme prefix. Nothing is retried.
#[derive(Clone, Debug)]
pub struct CinelogClient {
    base_url: String,
    client: Client,
    auth_token: Arc<Mutex<Option<String>>>,
}

impl CinelogClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            auth_token: Arc::new(Mutex::new(None)),
        }
    }

    /// The one client instance shared across the tab.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn set_auth_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.auth_token.lock() {
            *guard = token;
        }
    }

    pub fn current_token(&self) -> Option<String> {
        self.auth_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_token() {
            request.header("Authorization", token)
        } else {
            request
        }
    }

    /// Send a request and decode the standard response envelope.
    async fn execute<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();

        match response.json::<Envelope<T>>().await {
            Ok(envelope) => envelope.into_result(),
            Err(_) if !status.is_success() => {
                Err(ApiError::Backend(format!("Request failed: {status}")))
            }
            Err(err) => Err(ApiError::Transport(err.to_string())),
        }
    }

    /// Authenticate with username/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginData, ApiError> {
        let url = self.api_url("login");
        self.execute(self.client.post(url).json(payload)).await
    }

    /// Create a new account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<RegisterData, ApiError> {
        let url = self.api_url("register");
        self.execute(self.client.post(url).json(payload)).await
    }

    /// Fetch the full film catalogue.
    pub async fn list_films(&self) -> Result<Vec<Film>, ApiError> {
        let url = self.api_url("films");
        let data: FilmsData = self.execute(self.client.get(url)).await?;
        Ok(data.films)
    }

    /// Fetch the home view payload (hero film, popular rail, recent logs).
    pub async fn home_data(&self) -> Result<HomeData, ApiError> {
        let url = self.api_url("home_data");
        self.execute(self.client.get(url)).await
    }

    /// Fetch one film. With a token attached the response carries the
    /// caller's watched/liked/watchlisted flags.
    pub async fn film(&self, film_id: i64) -> Result<Film, ApiError> {
        let url = self.api_url(&format!("film/{film_id}"));
        let data: FilmData = self.execute(self.apply_auth(self.client.get(url))).await?;
        Ok(data.film)
    }

    /// Log a viewing.
    pub async fn submit_log(&self, payload: &SubmitLogRequest) -> Result<LogCreatedData, ApiError> {
        let url = self.api_url("logs");
        self.execute(self.apply_auth(self.client.post(url)).json(payload))
            .await
    }

    /// Fetch a user's diary entries.
    pub async fn user_logs(&self, user_id: i64) -> Result<Vec<LogEntry>, ApiError> {
        let url = self.api_url(&format!("user/{user_id}/logs"));
        let data: UserLogsData = self.execute(self.client.get(url)).await?;
        Ok(data.logs)
    }

    /// Fetch a user's profile card and stats.
    pub async fn user_profile(&self, user_id: i64) -> Result<Profile, ApiError> {
        let url = self.api_url(&format!("user/{user_id}/profile"));
        let data: ProfileData = self.execute(self.client.get(url)).await?;
        Ok(data.profile)
    }

    /// Fetch a user's favorite films.
    pub async fn user_favorites(&self, user_id: i64) -> Result<Vec<FilmCard>, ApiError> {
        let url = self.api_url(&format!("user/{user_id}/favorites"));
        let data: FilmListData = self.execute(self.client.get(url)).await?;
        Ok(data.films)
    }

    /// Fetch a user's watchlist.
    pub async fn user_watchlist(&self, user_id: i64) -> Result<Vec<FilmCard>, ApiError> {
        let url = self.api_url(&format!("user/{user_id}/watchlist"));
        let data: FilmListData = self.execute(self.client.get(url)).await?;
        Ok(data.films)
    }

    /// Fetch a user's follower and following lists.
    pub async fn user_social(&self, user_id: i64) -> Result<SocialData, ApiError> {
        let url = self.api_url(&format!("user/{user_id}/social"));
        self.execute(self.client.get(url)).await
    }

    /// Fetch recent activity from the users this user follows.
    pub async fn user_network(&self, user_id: i64) -> Result<Vec<RecentLog>, ApiError> {
        let url = self.api_url(&format!("user/{user_id}/network"));
        let data: NetworkData = self.execute(self.client.get(url)).await?;
        Ok(data.logs)
    }

    /// Toggle a like or watchlist mark on a film.
    pub async fn toggle_interaction(
        &self,
        film_id: i64,
        kind: InteractionKind,
    ) -> Result<ToggleAction, ApiError> {
        let url = self.api_url("interaction");
        let payload = ToggleInteractionRequest { film_id, kind };
        let data: ToggleData = self
            .execute(self.apply_auth(self.client.post(url)).json(&payload))
            .await?;
        Ok(data.action)
    }

    /// Free-text search against the film or people index.
    pub async fn search(&self, query: &str, mode: SearchMode) -> Result<SearchData, ApiError> {
        let url = self.api_url("search");
        self.execute(
            self.client
                .get(url)
                .query(&[("q", query), ("type", &mode.to_string())]),
        )
        .await
    }

    /// Follow another user.
    pub async fn follow(&self, user_id: i64) -> Result<(), ApiError> {
        let url = self.api_url("social/follow");
        let payload = FollowRequest { user_id };
        let _: Ack = self
            .execute(self.apply_auth(self.client.post(url)).json(&payload))
            .await?;
        Ok(())
    }

    /// Unfollow a user.
    pub async fn unfollow(&self, user_id: i64) -> Result<(), ApiError> {
        let url = self.api_url("social/unfollow");
        let payload = FollowRequest { user_id };
        let _: Ack = self
            .execute(self.apply_auth(self.client.post(url)).json(&payload))
            .await?;
        Ok(())
    }

    /// List every account (admin only).
    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let url = self.api_url("admin/users");
        let data: UsersData = self.execute(self.apply_auth(self.client.get(url))).await?;
        Ok(data.users)
    }

    /// Add a film to the catalogue (admin only).
    pub async fn admin_add_film(
        &self,
        payload: &NewFilmRequest,
    ) -> Result<FilmCreatedData, ApiError> {
        let url = self.api_url("admin/film");
        self.execute(self.apply_auth(self.client.post(url)).json(payload))
            .await
    }

    /// Remove a film from the catalogue (admin only).
    pub async fn admin_delete_film(&self, film_id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("admin/film/{film_id}"));
        let _: Ack = self.execute(self.apply_auth(self.client.delete(url))).await?;
        Ok(())
    }

    /// Remove an account (admin only).
    pub async fn admin_delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("admin/users/{user_id}"));
        let _: Ack = self.execute(self.apply_auth(self.client.delete(url))).await?;
        Ok(())
    }
}
