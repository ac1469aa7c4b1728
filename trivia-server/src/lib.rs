//! trivia-server: HTTP service over a trivia question store
//!
//! Lists, searches, creates and deletes questions, lists categories, and
//! serves quiz questions without repeating ones a player has already seen.

pub mod db;
pub mod http;
pub mod models;
pub mod quiz;

pub use db::{MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ServerConfig};
