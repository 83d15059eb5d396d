pub mod envelope;
pub mod film;
pub mod home;
pub mod interaction;
pub mod log;
pub mod search;
pub mod session;
pub mod social;
pub mod user;

pub use envelope::{Ack, ApiError, Envelope, ResponseStatus};
pub use film::{Film, FilmCard, FilmData, FilmListData, FilmsData};
pub use home::HomeData;
pub use interaction::{InteractionKind, ToggleData, ToggleAction, ToggleInteractionRequest};
pub use log::{
    LogCreatedData, LogDraft, LogEntry, LogValidationError, RecentLog, SubmitLogRequest,
    UserLogsData,
};
pub use search::{SearchData, SearchMode};
pub use session::{Session, TokenError};
pub use social::{FollowRequest, NetworkData, SocialData, SocialUser};
pub use user::{
    AdminUser, FilmCreatedData, LoginRequest, LoginData, NewFilmRequest, Profile, ProfileData,
    RegisterData, RegisterRequest, UsersData,
};
