use shared::models::Session;
use yewdux::Store;

/// Application-wide state: the decoded identity of the logged-in user.
///
/// `None` means logged out. The raw token string is not kept here; it lives
/// in local storage and in the API client.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Option<Session>,
}
