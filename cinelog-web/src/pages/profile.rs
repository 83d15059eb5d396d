use crate::api::CinelogClient;
use crate::components::{FilmPosterCard, ToastMessage, Toast, star_string};
use crate::fetch::FetchGuard;
use crate::models::app_state::AppState;
use shared::models::{FilmCard, Profile, RecentLog, SocialData};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Which profile to show: the requested user, or the session user when the
/// route carries no explicit id.
pub(crate) fn profile_target(session_user: i64, requested: Option<i64>) -> i64 {
    requested.unwrap_or(session_user)
}

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    #[prop_or_default]
    pub user_id: Option<i64>,
}

/// Profile page: stats, favorites, follower counts, and either a follow
/// toggle (someone else) or the followed-users activity feed (own profile).
#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let viewer_id = session.as_ref().as_ref().map(|s| s.user_id);
    let target = viewer_id.map(|viewer| profile_target(viewer, props.user_id));

    let profile = use_state(|| None::<Profile>);
    let favorites = use_state(Vec::<FilmCard>::new);
    let social = use_state(SocialData::default);
    let network = use_state(Vec::<RecentLog>::new);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastMessage>);
    let busy = use_state(|| false);
    let refresh = use_state(|| 0u32);

    {
        let profile = profile.clone();
        let favorites = favorites.clone();
        let social = social.clone();
        let network = network.clone();
        let error = error.clone();
        use_effect_with((target, viewer_id, *refresh), move |(target, viewer_id, _)| {
            let guard = FetchGuard::new();
            let cleanup = guard.clone();
            if let (Some(target), Some(viewer_id)) = (*target, *viewer_id) {
                let own_profile = target == viewer_id;
                spawn_local(async move {
                    let client = CinelogClient::shared();
                    let profile_result = client.user_profile(target).await;
                    let favorites_result = client.user_favorites(target).await;
                    let social_result = client.user_social(target).await;
                    let network_result = if own_profile {
                        client.user_network(target).await
                    } else {
                        Ok(Vec::new())
                    };
                    if guard.is_stale() {
                        return;
                    }
                    match profile_result {
                        Ok(card) => profile.set(Some(card)),
                        Err(err) => {
                            error.set(Some(err.to_string()));
                            return;
                        }
                    }
                    favorites.set(favorites_result.unwrap_or_default());
                    social.set(social_result.unwrap_or_default());
                    network.set(network_result.unwrap_or_default());
                });
            }
            move || cleanup.cancel()
        });
    }

    let on_clear_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    if let Some(message) = &*error {
        return html! {
            <div class="p-8 text-center text-base-content/70">{ message.clone() }</div>
        };
    }

    let (Some(card), Some(viewer)) = ((*profile).clone(), viewer_id) else {
        return html! { <div class="p-8 text-center"><span class="loading loading-spinner"></span></div> };
    };

    let own_profile = card.user_id == viewer;
    let is_following = social.is_followed_by(viewer);

    let follow_toggle = {
        let target_id = card.user_id;
        let busy_handle = busy.clone();
        let toast_handle = toast.clone();
        let refresh_handle = refresh.clone();
        Callback::from(move |_| {
            if *busy_handle {
                return;
            }
            busy_handle.set(true);
            let busy_reset = busy_handle.clone();
            let toast_handle = toast_handle.clone();
            let refresh_handle = refresh_handle.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                let result = if is_following {
                    client.unfollow(target_id).await
                } else {
                    client.follow(target_id).await
                };
                match result {
                    Ok(()) => refresh_handle.set(*refresh_handle + 1),
                    Err(err) => toast_handle.set(Some(ToastMessage::error(err.to_string()))),
                }
                busy_reset.set(false);
            });
        })
    };

    html! {
        <div class="space-y-8">
            <Toast message={(*toast).clone()} on_clear={on_clear_toast} />

            <section class="flex items-center gap-6">
                <div class="avatar placeholder">
                    <div class="bg-neutral text-neutral-content rounded-full w-20">
                        <span class="text-2xl">{ card.username.chars().next().unwrap_or('?') }</span>
                    </div>
                </div>
                <div class="space-y-1">
                    <h1 class="text-2xl font-bold">{ &card.username }</h1>
                    {
                        if card.bio.is_empty() {
                            html! {}
                        } else {
                            html! { <p class="text-base-content/70">{ &card.bio }</p> }
                        }
                    }
                    <p class="text-sm text-base-content/60">
                        { format!(
                            "{} films · {} this year · {} on watchlist · {} followers · {} following",
                            card.total_films,
                            card.this_year,
                            card.watchlist_count,
                            social.followers.len(),
                            social.following.len(),
                        ) }
                    </p>
                </div>
                {
                    if own_profile {
                        html! {}
                    } else {
                        html! {
                            <button
                                class={if is_following { "btn btn-outline btn-sm" } else { "btn btn-primary btn-sm" }}
                                disabled={*busy}
                                onclick={follow_toggle}
                            >
                                { if is_following { "Unfollow" } else { "Follow" } }
                            </button>
                        }
                    }
                }
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-3">{"Favorites"}</h2>
                {
                    if favorites.is_empty() {
                        html! { <p class="text-base-content/60">{"No favorites yet."}</p> }
                    } else {
                        html! {
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                                { for favorites.iter().map(|film| html! {
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
            </section>

            {
                if own_profile {
                    html! {
                        <section>
                            <h2 class="text-xl font-semibold mb-3">{"From people you follow"}</h2>
                            {
                                if network.is_empty() {
                                    html! { <p class="text-base-content/60">{"No activity from followed users yet."}</p> }
                                } else {
                                    html! {
                                        <ul class="divide-y divide-base-300">
                                            { for network.iter().map(|entry| html! {
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
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_user_param_defaults_to_session_user() {
        assert_eq!(profile_target(7, None), 7);
    }

    #[test]
    fn explicit_user_param_wins() {
        assert_eq!(profile_target(7, Some(3)), 3);
    }
}
