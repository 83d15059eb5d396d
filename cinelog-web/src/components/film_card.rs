use crate::config::FrontendConfig;
use crate::routes::MainRoute;
use yew::{AttrValue, Html, Properties, function_component, html};
use yew_router::prelude::Link;

const CARD_POSTER_WIDTH: u32 = 342;

#[derive(Properties, PartialEq)]
pub struct FilmPosterCardProps {
    pub film_id: i64,
    pub title: AttrValue,
    #[prop_or_default]
    pub year: i32,
    #[prop_or_default]
    pub poster_path: AttrValue,
}

/// Poster card linking to the film's detail view.
#[function_component(FilmPosterCard)]
pub fn film_poster_card(props: &FilmPosterCardProps) -> Html {
    let config = FrontendConfig::new();
    let poster = config.poster_url(&props.poster_path, CARD_POSTER_WIDTH);
    let caption = if props.year > 0 {
        format!("{} ({})", props.title, props.year)
    } else {
        props.title.to_string()
    };

    html! {
        <Link<MainRoute> to={MainRoute::FilmDetail { film_id: props.film_id }} classes="card bg-base-200 shadow hover:shadow-lg cursor-pointer">
            <figure>
                <img class="w-full" src={poster} alt={props.title.clone()} />
            </figure>
            <div class="card-body p-2">
                <span class="text-sm font-medium">{ caption }</span>
            </div>
        </Link<MainRoute>>
    }
}
