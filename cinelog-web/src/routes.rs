use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/films")]
    Films,
    #[at("/diary")]
    Diary,
    #[at("/lists")]
    Lists,
    #[at("/profile")]
    Profile,
    #[at("/profile/:user_id")]
    ProfileUser { user_id: i64 },
    #[at("/film/:film_id")]
    FilmDetail { film_id: i64 },
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The routes shown in the navigation bar.
pub fn nav_routes() -> Vec<MainRoute> {
    MainRoute::iter()
        .filter(|route| {
            matches!(
                route,
                MainRoute::Home
                    | MainRoute::Films
                    | MainRoute::Diary
                    | MainRoute::Lists
                    | MainRoute::Profile
            )
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_login: Callback<String>,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let session_opt = (*session).clone();
    let is_authenticated = session_opt.is_some();
    let is_admin = session_opt
        .as_ref()
        .map(|session| session.is_admin)
        .unwrap_or(false);
    let on_logout = props.on_logout.clone();

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage on_success={props.on_login.clone()} /> }
            }
        }
        MainRoute::Register => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <RegisterPage /> }
            }
        }
        MainRoute::Admin => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            if !is_admin {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! {
                <Layout current_route={MainRoute::Admin} on_logout={Some(on_logout)}>
                    <AdminPage />
                </Layout>
            }
        }
        route => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            let page = match route.clone() {
                MainRoute::Home => html! { <HomePage /> },
                MainRoute::Films => html! { <FilmsPage /> },
                MainRoute::Diary => html! { <DiaryPage /> },
                MainRoute::Lists => html! { <ListsPage /> },
                MainRoute::Profile => html! { <ProfilePage /> },
                MainRoute::ProfileUser { user_id } => {
                    html! { <ProfilePage user_id={Some(user_id)} /> }
                }
                MainRoute::FilmDetail { film_id } => html! { <FilmDetailPage {film_id} /> },
                MainRoute::NotFound => html! { <ErrorPage /> },
                // Handled by the arms above.
                MainRoute::Login | MainRoute::Register | MainRoute::Admin => Html::default(),
            };
            html! {
                <Layout current_route={route} on_logout={Some(on_logout)}>
                    {page}
                </Layout>
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch_route(route: MainRoute, on_login: Callback<String>, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    html! { <MainRouteView {route} {on_login} {on_logout} /> }
}
