use crate::api::CinelogClient;
use crate::routes::MainRoute;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    /// Receives the raw session token on a successful login.
    pub on_success: Callback<String>,
}

/// Username/password sign-in. On success the token is handed to the app
/// shell, which decodes it and establishes the session.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let navigator = use_navigator().expect("navigator available under BrowserRouter");
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let name = username.trim().to_string();
            let pass = (*password).clone();
            if name.is_empty() || pass.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }
            busy.set(true);
            let busy_reset = busy.clone();
            let error = error.clone();
            let on_success = on_success.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                let request = LoginRequest {
                    username: name,
                    password: pass,
                };
                match client.login(&request).await {
                    Ok(data) => {
                        on_success.emit(data.token);
                        navigator.push(&MainRoute::Home);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy_reset.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200">
            <div class="card w-full max-w-sm bg-base-100 shadow-xl">
                <form class="card-body space-y-3" onsubmit={on_submit}>
                    <h1 class="card-title text-2xl">{"Sign in to Cinelog"}</h1>
                    {
                        if let Some(message) = &*error {
                            html! { <div class="alert alert-error text-sm">{ message.clone() }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <label class="form-control">
                        <span class="label-text">{"Username"}</span>
                        <input
                            class="input input-bordered"
                            type="text"
                            value={(*username).clone()}
                            oninput={on_username}
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Password"}</span>
                        <input
                            class="input input-bordered"
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </label>
                    <button class="btn btn-primary" type="submit" disabled={*busy}>
                        { if *busy { "Signing in..." } else { "Sign in" } }
                    </button>
                    <p class="text-sm text-center">
                        {"New here? "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            {"Create an account"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
