pub(crate) mod film_card;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod log_composer;
pub(crate) mod search_overlay;
pub(crate) mod star_rating;
pub(crate) mod toast;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use film_card::FilmPosterCard;
pub use log_composer::LogComposer;
pub use star_rating::{StarRating, star_string};
pub use toast::{Toast, ToastMessage};
