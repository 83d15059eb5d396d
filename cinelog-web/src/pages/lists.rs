use crate::api::CinelogClient;
use crate::components::FilmPosterCard;
use crate::fetch::FetchGuard;
use crate::models::app_state::AppState;
use shared::models::FilmCard;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

fn card_grid(films: &[FilmCard], empty_message: &str) -> Html {
    if films.is_empty() {
        return html! { <p class="text-base-content/60">{ empty_message.to_string() }</p> };
    }
    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-4">
            { for films.iter().map(|card| html! {
                <FilmPosterCard
                    film_id={card.film_id}
                    title={card.title.clone()}
                    year={card.year}
                    poster_path={card.poster_path.clone()}
                />
            }) }
        </div>
    }
}

/// The session user's watchlist and favorites.
#[function_component(ListsPage)]
pub fn lists_page() -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let watchlist = use_state(|| None::<Vec<FilmCard>>);
    let favorites = use_state(|| None::<Vec<FilmCard>>);
    let error = use_state(|| None::<String>);
    let user_id = session.as_ref().as_ref().map(|s| s.user_id);

    {
        let watchlist = watchlist.clone();
        let favorites = favorites.clone();
        let error = error.clone();
        use_effect_with(user_id, move |user_id| {
            let guard = FetchGuard::new();
            let cleanup = guard.clone();
            if let Some(user_id) = *user_id {
                spawn_local(async move {
                    let client = CinelogClient::shared();
                    let watchlist_result = client.user_watchlist(user_id).await;
                    let favorites_result = client.user_favorites(user_id).await;
                    if guard.is_stale() {
                        return;
                    }
                    match (watchlist_result, favorites_result) {
                        (Ok(on_watchlist), Ok(favorite_films)) => {
                            watchlist.set(Some(on_watchlist));
                            favorites.set(Some(favorite_films));
                        }
                        (Err(err), _) | (_, Err(err)) => error.set(Some(err.to_string())),
                    }
                });
            }
            move || cleanup.cancel()
        });
    }

    if let Some(message) = &*error {
        return html! {
            <div class="p-8 text-center text-base-content/70">{ message.clone() }</div>
        };
    }

    let (Some(on_watchlist), Some(favorite_films)) = (&*watchlist, &*favorites) else {
        return html! { <div class="p-8 text-center"><span class="loading loading-spinner"></span></div> };
    };

    html! {
        <div class="space-y-8">
            <section>
                <h1 class="text-2xl font-bold mb-3">{"Watchlist"}</h1>
                { card_grid(on_watchlist, "Nothing on your watchlist yet.") }
            </section>
            <section>
                <h2 class="text-xl font-semibold mb-3">{"Favorites"}</h2>
                { card_grid(favorite_films, "Like films to collect favorites here.") }
            </section>
        </div>
    }
}
