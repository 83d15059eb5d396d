//! Persistence of the raw session token in browser local storage.
//!
//! Only the opaque string is stored; the decoded [`shared::models::Session`]
//! is rebuilt from it on every page load.

use gloo_storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "cinelog.token";

pub fn load() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

pub fn save(token: &str) {
    let _ = LocalStorage::set(TOKEN_KEY, token);
}

pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trips_through_storage() {
        save("7:alice:0");
        assert_eq!(load().as_deref(), Some("7:alice:0"));
        clear();
        assert_eq!(load(), None);
    }

    #[wasm_bindgen_test]
    fn clear_is_idempotent() {
        clear();
        clear();
        assert_eq!(load(), None);
    }
}
