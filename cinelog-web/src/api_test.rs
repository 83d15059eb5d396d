use crate::api::CinelogClient;

#[test]
fn trailing_slash_in_base_url_is_normalized() {
    let client = CinelogClient::new("http://localhost:8080/api/");
    assert_eq!(client.api_url("films"), "http://localhost:8080/api/films");
}

#[test]
fn leading_slash_in_path_is_normalized() {
    let client = CinelogClient::new("/api");
    assert_eq!(client.api_url("/home_data"), "/api/home_data");
}

#[test]
fn parameterized_paths_interpolate_ids() {
    let client = CinelogClient::new("/api");
    assert_eq!(client.api_url("film/42"), "/api/film/42");
    assert_eq!(client.api_url("user/7/logs"), "/api/user/7/logs");
    assert_eq!(client.api_url("admin/users/3"), "/api/admin/users/3");
}

#[test]
fn auth_token_round_trips_through_the_client() {
    let client = CinelogClient::new("/api");
    assert_eq!(client.current_token(), None);

    client.set_auth_token(Some("7:alice:0".to_string()));
    assert_eq!(client.current_token(), Some("7:alice:0".to_string()));

    client.set_auth_token(None);
    assert_eq!(client.current_token(), None);
}

#[test]
fn clones_share_the_same_auth_token() {
    let client = CinelogClient::new("/api");
    let clone = client.clone();
    client.set_auth_token(Some("1:admin:1".to_string()));
    assert_eq!(clone.current_token(), Some("1:admin:1".to_string()));
}
