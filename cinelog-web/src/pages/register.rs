use crate::api::CinelogClient;
use crate::routes::MainRoute;
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

/// Account creation. A successful registration does not sign the user in;
/// it routes to the login form.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator().expect("navigator available under BrowserRouter");
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let bio = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_username = bind_input(username.clone());
    let on_email = bind_input(email.clone());
    let on_password = bind_input(password.clone());

    let on_bio = {
        let bio = bio.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            bio.set(area.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let bio = bio.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let request = RegisterRequest {
                username: username.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
                bio: bio.trim().to_string(),
            };
            if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
                error.set(Some("Username, email, and password are required".to_string()));
                return;
            }
            busy.set(true);
            let busy_reset = busy.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                match client.register(&request).await {
                    Ok(_) => navigator.push(&MainRoute::Login),
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
                    <h1 class="card-title text-2xl">{"Join Cinelog"}</h1>
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
                        <span class="label-text">{"Email"}</span>
                        <input
                            class="input input-bordered"
                            type="email"
                            value={(*email).clone()}
                            oninput={on_email}
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
                    <label class="form-control">
                        <span class="label-text">{"Bio (optional)"}</span>
                        <textarea
                            class="textarea textarea-bordered"
                            value={(*bio).clone()}
                            oninput={on_bio}
                        />
                    </label>
                    <button class="btn btn-primary" type="submit" disabled={*busy}>
                        { if *busy { "Creating account..." } else { "Create account" } }
                    </button>
                    <p class="text-sm text-center">
                        {"Already registered? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
