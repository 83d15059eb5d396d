#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared data model for the Cinelog web client: films, diary logs,
//! interactions, sessions, and the response envelope the backend wraps
//! every payload in.

pub mod models;
