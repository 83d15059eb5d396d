use crate::api::CinelogClient;
use crate::components::{Toast, ToastMessage};
use crate::fetch::FetchGuard;
use shared::models::{AdminUser, Film, NewFilmRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Admin console: user management, catalogue management, and the new-film
/// form. The router only mounts this for admin sessions.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let users = use_state(Vec::<AdminUser>::new);
    let films = use_state(Vec::<Film>::new);
    let draft = use_state(NewFilmRequest::default);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastMessage>);
    let busy = use_state(|| false);
    let refresh = use_state(|| 0u32);

    {
        let users = users.clone();
        let films = films.clone();
        let error = error.clone();
        use_effect_with(*refresh, move |_| {
            let guard = FetchGuard::new();
            let cleanup = guard.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                let users_result = client.admin_users().await;
                let films_result = client.list_films().await;
                if guard.is_stale() {
                    return;
                }
                match (users_result, films_result) {
                    (Ok(user_rows), Ok(film_rows)) => {
                        users.set(user_rows);
                        films.set(film_rows);
                        error.set(None);
                    }
                    (Err(err), _) | (_, Err(err)) => error.set(Some(err.to_string())),
                }
            });
            move || cleanup.cancel()
        });
    }

    let on_clear_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let delete_user = {
        let busy = busy.clone();
        let toast = toast.clone();
        let refresh = refresh.clone();
        Callback::from(move |(user_id, username): (i64, String)| {
            if *busy || !confirm(&format!("Delete user \"{username}\"? This cannot be undone.")) {
                return;
            }
            busy.set(true);
            let busy_reset = busy.clone();
            let toast = toast.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                match client.admin_delete_user(user_id).await {
                    Ok(()) => {
                        toast.set(Some(ToastMessage::success(format!("Deleted {username}"))));
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => toast.set(Some(ToastMessage::error(err.to_string()))),
                }
                busy_reset.set(false);
            });
        })
    };

    let delete_film = {
        let busy = busy.clone();
        let toast = toast.clone();
        let refresh = refresh.clone();
        Callback::from(move |(film_id, title): (i64, String)| {
            if *busy || !confirm(&format!("Remove \"{title}\" from the catalogue?")) {
                return;
            }
            busy.set(true);
            let busy_reset = busy.clone();
            let toast = toast.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                match client.admin_delete_film(film_id).await {
                    Ok(()) => {
                        toast.set(Some(ToastMessage::success(format!("Removed {title}"))));
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => toast.set(Some(ToastMessage::error(err.to_string()))),
                }
                busy_reset.set(false);
            });
        })
    };

    let edit_draft = {
        let draft = draft.clone();
        move |apply: fn(&mut NewFilmRequest, String)| {
            let draft = draft.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            })
        }
    };

    let on_title = edit_draft(|film, value| film.title = value);
    let on_tmdb = edit_draft(|film, value| film.tmdb_id = value.parse().unwrap_or(0));
    let on_year = edit_draft(|film, value| film.release_year = value.parse().unwrap_or(0));
    let on_runtime = edit_draft(|film, value| film.runtime = value.parse().unwrap_or(0));
    let on_cast = edit_draft(|film, value| film.cast = value);
    let on_director = edit_draft(|film, value| film.director = value);
    let on_genre_1 = edit_draft(|film, value| film.genre_id_1 = value.parse().unwrap_or(0));
    let on_genre_2 = edit_draft(|film, value| film.genre_id_2 = value.parse().unwrap_or(0));
    let on_genre_3 = edit_draft(|film, value| film.genre_id_3 = value.parse().unwrap_or(0));

    let on_add_film = {
        let draft = draft.clone();
        let busy = busy.clone();
        let toast = toast.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let request = (*draft).clone();
            if !request.is_submittable() {
                toast.set(Some(ToastMessage::error(
                    "Title, release year, and director are required",
                )));
                return;
            }
            busy.set(true);
            let busy_reset = busy.clone();
            let draft = draft.clone();
            let toast = toast.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                match client.admin_add_film(&request).await {
                    Ok(created) => {
                        toast.set(Some(ToastMessage::success(format!(
                            "Added {} (id {})",
                            request.title, created.film_id
                        ))));
                        draft.set(NewFilmRequest::default());
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => toast.set(Some(ToastMessage::error(err.to_string()))),
                }
                busy_reset.set(false);
            });
        })
    };

    if let Some(message) = &*error {
        return html! {
            <div class="p-8 text-center text-base-content/70">{ message.clone() }</div>
        };
    }

    html! {
        <div class="space-y-8">
            <Toast message={(*toast).clone()} on_clear={on_clear_toast} />
            <h1 class="text-2xl font-bold">{"Admin"}</h1>

            <section>
                <h2 class="text-xl font-semibold mb-3">{"Users"}</h2>
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{"Id"}</th>
                                <th>{"Username"}</th>
                                <th>{"Email"}</th>
                                <th>{"Role"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for users.iter().map(|user| {
                                let on_delete = {
                                    let delete_user = delete_user.clone();
                                    let user_id = user.user_id;
                                    let username = user.username.clone();
                                    Callback::from(move |_| {
                                        delete_user.emit((user_id, username.clone()));
                                    })
                                };
                                html! {
                                    <tr key={user.user_id.to_string()}>
                                        <td>{ user.user_id }</td>
                                        <td>{ &user.username }</td>
                                        <td>{ &user.email }</td>
                                        <td>{ if user.is_admin { "admin" } else { "member" } }</td>
                                        <td class="text-right">
                                            {
                                                if user.is_deletable() {
                                                    html! {
                                                        <button
                                                            class="btn btn-xs btn-error"
                                                            disabled={*busy}
                                                            onclick={on_delete}
                                                        >
                                                            {"Delete"}
                                                        </button>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-3">{"Catalogue"}</h2>
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{"Id"}</th>
                                <th>{"Title"}</th>
                                <th>{"Year"}</th>
                                <th>{"Director"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for films.iter().map(|film| {
                                let on_delete = {
                                    let delete_film = delete_film.clone();
                                    let film_id = film.film_id;
                                    let title = film.title.clone();
                                    Callback::from(move |_| {
                                        delete_film.emit((film_id, title.clone()));
                                    })
                                };
                                html! {
                                    <tr key={film.film_id.to_string()}>
                                        <td>{ film.film_id }</td>
                                        <td>{ &film.title }</td>
                                        <td>{ film.year }</td>
                                        <td>{ &film.director }</td>
                                        <td class="text-right">
                                            <button
                                                class="btn btn-xs btn-error"
                                                disabled={*busy}
                                                onclick={on_delete}
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-3">{"Add a film"}</h2>
                <form class="grid grid-cols-1 md:grid-cols-3 gap-3 max-w-3xl" onsubmit={on_add_film}>
                    <label class="form-control md:col-span-2">
                        <span class="label-text">{"Title"}</span>
                        <input class="input input-bordered" type="text"
                            value={draft.title.clone()} oninput={on_title} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"TMDB id"}</span>
                        <input class="input input-bordered" type="number"
                            value={draft.tmdb_id.to_string()} oninput={on_tmdb} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Release year"}</span>
                        <input class="input input-bordered" type="number"
                            value={draft.release_year.to_string()} oninput={on_year} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Runtime (minutes)"}</span>
                        <input class="input input-bordered" type="number"
                            value={draft.runtime.to_string()} oninput={on_runtime} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Director"}</span>
                        <input class="input input-bordered" type="text"
                            value={draft.director.clone()} oninput={on_director} />
                    </label>
                    <label class="form-control md:col-span-3">
                        <span class="label-text">{"Cast"}</span>
                        <input class="input input-bordered" type="text"
                            value={draft.cast.clone()} oninput={on_cast} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Genre id 1"}</span>
                        <input class="input input-bordered" type="number"
                            value={draft.genre_id_1.to_string()} oninput={on_genre_1} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Genre id 2"}</span>
                        <input class="input input-bordered" type="number"
                            value={draft.genre_id_2.to_string()} oninput={on_genre_2} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Genre id 3"}</span>
                        <input class="input input-bordered" type="number"
                            value={draft.genre_id_3.to_string()} oninput={on_genre_3} />
                    </label>
                    <div class="md:col-span-3">
                        <button class="btn btn-primary" type="submit" disabled={*busy}>
                            { if *busy { "Saving..." } else { "Add film" } }
                        </button>
                    </div>
                </form>
            </section>
        </div>
    }
}
