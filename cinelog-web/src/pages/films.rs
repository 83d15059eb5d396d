use crate::api::CinelogClient;
use crate::components::FilmPosterCard;
use crate::fetch::FetchGuard;
use shared::models::Film;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Full catalogue as a poster grid.
#[function_component(FilmsPage)]
pub fn films_page() -> Html {
    let films = use_state(|| None::<Vec<Film>>);
    let error = use_state(|| None::<String>);

    {
        let films = films.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let guard = FetchGuard::new();
            let cleanup = guard.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                let result = client.list_films().await;
                if guard.is_stale() {
                    return;
                }
                match result {
                    Ok(list) => films.set(Some(list)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            move || cleanup.cancel()
        });
    }

    if let Some(message) = &*error {
        return html! {
            <div class="p-8 text-center text-base-content/70">{ message.clone() }</div>
        };
    }

    let Some(list) = &*films else {
        return html! { <div class="p-8 text-center"><span class="loading loading-spinner"></span></div> };
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{"Films"}</h1>
            {
                if list.is_empty() {
                    html! { <p class="text-base-content/60">{"The catalogue is empty."}</p> }
                } else {
                    html! {
                        <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-4">
                            { for list.iter().map(|film| html! {
                                <FilmPosterCard
                                    film_id={film.film_id}
                                    title={film.title.clone()}
                                    year={film.year}
                                    poster_path={film.poster_path.clone()}
                                />
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}
