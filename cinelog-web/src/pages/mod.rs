mod admin;
mod diary;
mod error;
mod film_detail;
mod films;
mod home;
mod lists;
pub mod login;
mod profile;
mod register;

pub use admin::AdminPage;
pub use diary::DiaryPage;
pub use error::ErrorPage;
pub use film_detail::FilmDetailPage;
pub use films::FilmsPage;
pub use home::HomePage;
pub use lists::ListsPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
