use crate::api::CinelogClient;
use crate::components::loading::Loading;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use shared::models::Session;
use wasm_bindgen::prelude::*;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let (_store_state, store_dispatch) = use_store::<AppState>();
    let ready = use_state(|| false);

    // Restore the persisted token once at startup. A malformed token is
    // cleared so the router lands on the login view.
    {
        let ready = ready.clone();
        let dispatch = store_dispatch.clone();
        use_effect_with((), move |_| {
            if let Some(token) = session::load() {
                match Session::decode(&token) {
                    Ok(session) => {
                        CinelogClient::shared().set_auth_token(Some(token));
                        dispatch.set(AppState {
                            session: Some(session),
                        });
                    }
                    Err(err) => {
                        log(std::format!("Discarding stored token: {err}").as_str());
                        session::clear();
                    }
                }
            }
            ready.set(true);
            || ()
        });
    }

    let login_callback = {
        let dispatch = store_dispatch.clone();
        Callback::from(move |token: String| match Session::decode(&token) {
            Ok(decoded) => {
                session::save(&token);
                CinelogClient::shared().set_auth_token(Some(token));
                dispatch.set(AppState {
                    session: Some(decoded),
                });
            }
            Err(err) => {
                log(std::format!("Rejecting login token: {err}").as_str());
            }
        })
    };

    let logout_callback = {
        let dispatch = store_dispatch;
        Callback::from(move |_| {
            session::clear();
            CinelogClient::shared().set_auth_token(None);
            dispatch.set(AppState::default());
        })
    };

    if !*ready {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| {
                crate::routes::switch_route(route, login_callback.clone(), logout_callback.clone())
            }} />
        </BrowserRouter>
    }
}
