//! Database layer - connection pool, migrations, repositories and stores
//!
//! # Design Principles
//!
//! - Connection pool with explicit limits - no Arc<Mutex<Connection>>
//! - Rely on DB constraints (foreign keys) instead of check-then-insert
//! - Handlers talk to a `TriviaStore`, never to the pool directly

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use store::{PgStore, TriviaStore};
