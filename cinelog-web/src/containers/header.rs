use crate::{
    components::{
        header_nav_item::HeaderNavItem, search_overlay::SearchOverlay, user_dropdown::UserDropdown,
    },
    models::app_state::AppState,
    routes::{MainRoute, nav_routes},
};
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

fn nav_icon(route: &MainRoute) -> IconId {
    match route {
        MainRoute::Films => IconId::HeroiconsOutlineFilm,
        MainRoute::Diary => IconId::HeroiconsOutlineBookOpen,
        MainRoute::Lists => IconId::HeroiconsOutlineQueueList,
        MainRoute::Profile => IconId::HeroiconsOutlineUser,
        _ => IconId::HeroiconsOutlineHome,
    }
}

fn nav_label(route: &MainRoute) -> &'static str {
    match route {
        MainRoute::Films => "Films",
        MainRoute::Diary => "Diary",
        MainRoute::Lists => "Lists",
        MainRoute::Profile => "Profile",
        _ => "Home",
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let session_opt = (*session).clone();
    let is_admin = session_opt
        .as_ref()
        .map(|session| session.is_admin)
        .unwrap_or(false);

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"Cinelog"}
                </Link<MainRoute>>
            </a>
            <ul class="menu menu-horizontal">
                { for nav_routes().iter().map(|route| html! {
                    <HeaderNavItem
                        current_route={props.current_route.clone()}
                        route={route.clone()}
                        icon={nav_icon(route)}
                        label={nav_label(route)}
                    />
                }) }
                {
                    if is_admin {
                        html! {
                            <HeaderNavItem
                                current_route={props.current_route.clone()}
                                route={MainRoute::Admin}
                                icon={IconId::HeroiconsOutlineCog6Tooth}
                                label={"Admin"}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </ul>
            <div class="flex items-center gap-2">
                <SearchOverlay />
                {
                    session_opt.as_ref().map_or_else(
                        || html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        },
                        |session| html! {
                            <>
                                <span class="text-sm text-base-content/80 mr-2">{ &session.username }</span>
                                <UserDropdown on_logout={props.on_logout.clone()} />
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}
