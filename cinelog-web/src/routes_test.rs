use crate::routes::{MainRoute, nav_routes};
use yew_router::Routable;

#[test]
fn static_routes_render_their_paths() {
    assert_eq!(MainRoute::Home.to_path(), "/");
    assert_eq!(MainRoute::Films.to_path(), "/films");
    assert_eq!(MainRoute::Diary.to_path(), "/diary");
    assert_eq!(MainRoute::Lists.to_path(), "/lists");
    assert_eq!(MainRoute::Admin.to_path(), "/admin");
}

#[test]
fn parameterized_routes_interpolate_ids() {
    assert_eq!(MainRoute::FilmDetail { film_id: 42 }.to_path(), "/film/42");
    assert_eq!(MainRoute::ProfileUser { user_id: 7 }.to_path(), "/profile/7");
}

#[test]
fn recognize_parses_route_params() {
    assert_eq!(
        MainRoute::recognize("/film/42"),
        Some(MainRoute::FilmDetail { film_id: 42 })
    );
    assert_eq!(
        MainRoute::recognize("/profile/7"),
        Some(MainRoute::ProfileUser { user_id: 7 })
    );
    assert_eq!(MainRoute::recognize("/profile"), Some(MainRoute::Profile));
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(
        MainRoute::recognize("/no/such/page"),
        Some(MainRoute::NotFound)
    );
}

#[test]
fn nav_shows_the_five_member_sections() {
    let routes = nav_routes();
    assert_eq!(
        routes,
        vec![
            MainRoute::Home,
            MainRoute::Films,
            MainRoute::Diary,
            MainRoute::Lists,
            MainRoute::Profile,
        ]
    );
}
