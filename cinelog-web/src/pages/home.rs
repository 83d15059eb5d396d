use crate::api::CinelogClient;
use crate::components::{FilmPosterCard, star_string};
use crate::config::FrontendConfig;
use crate::fetch::FetchGuard;
use crate::routes::MainRoute;
use shared::models::HomeData;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

const BACKDROP_WIDTH: u32 = 1280;

/// Home page component: hero film, popular rail, recent community activity.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let data = use_state(|| None::<HomeData>);
    let error = use_state(|| None::<String>);

    {
        let data = data.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let guard = FetchGuard::new();
            let cleanup = guard.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                let result = client.home_data().await;
                if guard.is_stale() {
                    return;
                }
                match result {
                    Ok(payload) => data.set(Some(payload)),
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

    let Some(home) = &*data else {
        return html! { <div class="p-8 text-center"><span class="loading loading-spinner"></span></div> };
    };

    let config = FrontendConfig::new();
    let hero = &home.hero_movie;
    let backdrop = config.poster_url(&hero.backdrop_path, BACKDROP_WIDTH);

    html! {
        <div class="space-y-8">
            <div
                class="hero min-h-96 rounded-box bg-cover bg-center"
                style={format!("background-image: url({backdrop})")}
            >
                <div class="hero-overlay bg-opacity-70 rounded-box"></div>
                <div class="hero-content text-center text-neutral-content">
                    <div class="max-w-md">
                        <h1 class="text-4xl font-bold">{ &hero.title }</h1>
                        {
                            if hero.tagline.is_empty() {
                                html! {}
                            } else {
                                html! { <p class="py-2 italic">{ &hero.tagline }</p> }
                            }
                        }
                        <p class="text-sm">
                            { format!("{} · dir. {} · {:.1}/10", hero.year, hero.director, hero.vote_average) }
                        </p>
                        <Link<MainRoute>
                            to={MainRoute::FilmDetail { film_id: hero.film_id }}
                            classes="btn btn-primary btn-sm mt-4"
                        >
                            {"View film"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>

            <section>
                <h2 class="text-xl font-semibold mb-3">{"Popular this week"}</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-8 gap-4">
                    { for home.popular.iter().map(|card| html! {
                        <FilmPosterCard
                            film_id={card.film_id}
                            title={card.title.clone()}
                            year={card.year}
                            poster_path={card.poster_path.clone()}
                        />
                    }) }
                </div>
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-3">{"Recent activity"}</h2>
                {
                    if home.recent_logs.is_empty() {
                        html! { <p class="text-base-content/60">{"No one has logged a film yet."}</p> }
                    } else {
                        html! {
                            <ul class="divide-y divide-base-300">
                                { for home.recent_logs.iter().map(|entry| html! {
                                    <li class="py-2 flex items-center justify-between">
                                        <span>
                                            <span class="font-medium">{ &entry.username }</span>
                                            { " watched " }
                                            <span class="font-medium">{ &entry.film_title }</span>
                                        </span>
                                        <span class="text-warning">{ star_string(entry.rating) }</span>
                                    </li>
                                }) }
                            </ul>
                        }
                    }
                }
            </section>
        </div>
    }
}
