use crate::api::CinelogClient;
use crate::components::{LogComposer, Toast, ToastMessage};
use crate::config::FrontendConfig;
use crate::fetch::FetchGuard;
use shared::models::{ApiError, Film, InteractionKind};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

const DETAIL_POSTER_WIDTH: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct FilmDetailPageProps {
    pub film_id: i64,
}

/// Film detail: metadata, the caller's interaction flags, like/watchlist
/// toggles, and the log composer. An unknown id renders the not-found
/// empty state.
#[function_component(FilmDetailPage)]
pub fn film_detail_page(props: &FilmDetailPageProps) -> Html {
    let film = use_state(|| None::<Film>);
    let not_found = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastMessage>);
    let toggling = use_state(|| false);
    let refresh = use_state(|| 0u32);

    {
        let film = film.clone();
        let not_found = not_found.clone();
        let error = error.clone();
        use_effect_with((props.film_id, *refresh), move |(film_id, _)| {
            let guard = FetchGuard::new();
            let cleanup = guard.clone();
            let film_id = *film_id;
            spawn_local(async move {
                let client = CinelogClient::shared();
                let result = client.film(film_id).await;
                if guard.is_stale() {
                    return;
                }
                match result {
                    Ok(detail) => {
                        film.set(Some(detail));
                        not_found.set(None);
                        error.set(None);
                    }
                    Err(ApiError::Backend(message)) => not_found.set(Some(message)),
                    Err(ApiError::Transport(message)) => error.set(Some(message)),
                }
            });
            move || cleanup.cancel()
        });
    }

    let on_clear_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    if let Some(message) = &*not_found {
        return html! {
            <div class="p-8 text-center space-y-2">
                <h1 class="text-2xl font-bold">{"Film not found"}</h1>
                <p class="text-base-content/70">{ message.clone() }</p>
            </div>
        };
    }

    if let Some(message) = &*error {
        return html! {
            <div class="p-8 text-center text-base-content/70">{ message.clone() }</div>
        };
    }

    let Some(detail) = &*film else {
        return html! { <div class="p-8 text-center"><span class="loading loading-spinner"></span></div> };
    };

    let config = FrontendConfig::new();
    let poster = config.poster_url(&detail.poster_path, DETAIL_POSTER_WIDTH);

    let make_toggle = |kind: InteractionKind| {
        let film_id = detail.film_id;
        let toggling_handle = toggling.clone();
        let toast_handle = toast.clone();
        let refresh_handle = refresh.clone();
        Callback::from(move |_| {
            if *toggling_handle {
                return;
            }
            toggling_handle.set(true);
            let toggling_reset = toggling_handle.clone();
            let toast_handle = toast_handle.clone();
            let refresh_handle = refresh_handle.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                match client.toggle_interaction(film_id, kind).await {
                    // The detail view re-fetches so the flags reflect the
                    // backend's idea of the toggle, not an optimistic guess.
                    Ok(_) => refresh_handle.set(*refresh_handle + 1),
                    Err(err) => toast_handle.set(Some(ToastMessage::error(err.to_string()))),
                }
                toggling_reset.set(false);
            });
        })
    };

    let on_logged = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.set(*refresh + 1))
    };

    let on_notice = {
        let toast = toast.clone();
        Callback::from(move |message: ToastMessage| toast.set(Some(message)))
    };

    html! {
        <div class="space-y-6">
            <Toast message={(*toast).clone()} on_clear={on_clear_toast} />

            <div class="flex flex-col md:flex-row gap-6">
                <figure class="w-64 shrink-0">
                    <img class="rounded-box shadow" src={poster} alt={detail.title.clone()} />
                </figure>
                <div class="space-y-3">
                    <h1 class="text-3xl font-bold">
                        { format!("{} ({})", detail.title, detail.year) }
                    </h1>
                    {
                        if detail.tagline.is_empty() {
                            html! {}
                        } else {
                            html! { <p class="italic text-base-content/70">{ &detail.tagline }</p> }
                        }
                    }
                    <p><strong>{"Director: "}</strong>{ &detail.director }</p>
                    <p><strong>{"Cast: "}</strong>{ &detail.cast_summary }</p>
                    <p>
                        { format!("{} minutes · {:.1}/10", detail.runtime, detail.vote_average) }
                    </p>
                    {
                        if detail.watched {
                            html! { <div class="badge badge-success gap-1">
                                <Icon icon_id={IconId::HeroiconsOutlineEye} class="w-3 h-3" />
                                {"Watched"}
                            </div> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="flex gap-2">
                        <button
                            class={if detail.liked { "btn btn-sm btn-secondary" } else { "btn btn-sm btn-outline" }}
                            disabled={*toggling}
                            onclick={make_toggle(InteractionKind::Liked)}
                        >
                            <Icon icon_id={IconId::HeroiconsOutlineHeart} class="w-4 h-4" />
                            { if detail.liked { "Liked" } else { "Like" } }
                        </button>
                        <button
                            class={if detail.watchlisted { "btn btn-sm btn-secondary" } else { "btn btn-sm btn-outline" }}
                            disabled={*toggling}
                            onclick={make_toggle(InteractionKind::Watchlisted)}
                        >
                            <Icon icon_id={IconId::HeroiconsOutlineBookmark} class="w-4 h-4" />
                            { if detail.watchlisted { "On watchlist" } else { "Watchlist" } }
                        </button>
                    </div>
                </div>
            </div>

            <div class="max-w-lg">
                <LogComposer film_id={detail.film_id} {on_logged} {on_notice} />
            </div>
        </div>
    }
}
