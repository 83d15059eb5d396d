use crate::routes::MainRoute;
use yew::{AttrValue, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    pub route: MainRoute,
    pub icon: IconId,
    pub label: AttrValue,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let is_active = props
        .current_route
        .as_ref()
        .is_some_and(|current| current == &props.route);
    let class = if is_active {
        classes!("active")
    } else {
        classes!()
    };

    html! {
        <li>
            <Link<MainRoute> to={props.route.clone()} classes={class}>
                <Icon icon_id={props.icon} class="w-4 h-4" />
                { props.label.clone() }
            </Link<MainRoute>>
        </li>
    }
}
