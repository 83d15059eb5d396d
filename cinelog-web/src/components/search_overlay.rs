use crate::api::CinelogClient;
use crate::routes::MainRoute;
use shared::models::{SearchData, SearchMode};
use std::cell::Cell;
use std::rc::Rc;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Minimum query length before a request is issued. This is the only
/// debounce: shorter inputs never reach the network.
const MIN_QUERY_LEN: usize = 2;

/// Header search box with a films/people mode tab.
///
/// Responses race on fast typing, so each request carries a generation
/// number; a response from an older generation is discarded.
#[function_component(SearchOverlay)]
pub fn search_overlay() -> Html {
    let query = use_state(String::new);
    let mode = use_state(|| SearchMode::Films);
    let results = use_state(SearchData::default);
    let open = use_state(|| false);
    let generation = use_mut_ref(|| Rc::new(Cell::new(0u64)));

    let run_search = {
        let results = results.clone();
        let open = open.clone();
        let generation = generation.clone();
        Callback::from(move |(text, search_mode): (String, SearchMode)| {
            if text.trim().len() < MIN_QUERY_LEN {
                results.set(SearchData::default());
                open.set(false);
                return;
            }
            let counter = generation.borrow().clone();
            let issued = counter.get() + 1;
            counter.set(issued);

            let results = results.clone();
            let open = open.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                let response = client.search(text.trim(), search_mode).await;
                if counter.get() != issued {
                    return; // a newer keystroke superseded this request
                }
                match response {
                    Ok(data) => {
                        results.set(data);
                        open.set(true);
                    }
                    Err(err) => {
                        log(std::format!("Search request failed: {err}").as_str());
                        results.set(SearchData::default());
                        open.set(false);
                    }
                }
            });
        })
    };

    let oninput = {
        let query = query.clone();
        let mode = mode.clone();
        let run_search = run_search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let text = input.value();
                query.set(text.clone());
                run_search.emit((text, *mode));
            }
        })
    };

    let on_pick = {
        let query = query.clone();
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            query.set(String::new());
            open.set(false);
        })
    };

    let mode_tabs = {
        let query = query.clone();
        let mode_handle = mode.clone();
        html! {
            <div class="tabs tabs-boxed tabs-xs">
                { for SearchMode::iter().map(|candidate| {
                    let mode_handle = mode_handle.clone();
                    let run_search = run_search.clone();
                    let query = query.clone();
                    let active = *mode_handle == candidate;
                    let class = if active { "tab tab-active" } else { "tab" };
                    html! {
                        <a {class} onclick={Callback::from(move |_| {
                            mode_handle.set(candidate);
                            run_search.emit(((*query).clone(), candidate));
                        })}>
                            { candidate.to_string() }
                        </a>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="relative">
            <label class="input input-bordered input-sm flex items-center gap-2">
                <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4" />
                <input
                    type="text"
                    class="grow"
                    placeholder="Search"
                    value={(*query).clone()}
                    {oninput}
                />
            </label>
            {
                if *open {
                    html! {
                        <div class="absolute right-0 mt-2 w-72 bg-base-200 rounded-box shadow z-40 p-2 space-y-2">
                            { mode_tabs }
                            <ul class="menu menu-sm">
                                { for results.films.iter().map(|film| {
                                    let on_pick = on_pick.clone();
                                    html! {
                                        <li onclick={on_pick}>
                                            <Link<MainRoute> to={MainRoute::FilmDetail { film_id: film.film_id }}>
                                                { format!("{} ({})", film.title, film.year) }
                                            </Link<MainRoute>>
                                        </li>
                                    }
                                }) }
                                { for results.users.iter().map(|user| {
                                    let on_pick = on_pick.clone();
                                    html! {
                                        <li onclick={on_pick}>
                                            <Link<MainRoute> to={MainRoute::ProfileUser { user_id: user.user_id }}>
                                                { user.username.clone() }
                                            </Link<MainRoute>>
                                        </li>
                                    }
                                }) }
                                {
                                    if results.films.is_empty() && results.users.is_empty() {
                                        html! { <li class="p-2 text-base-content/60">{"No results"}</li> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
