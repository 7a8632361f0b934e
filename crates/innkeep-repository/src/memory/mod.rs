//! In-process stores.
//!
//! They evaluate the same predicates as the PostgreSQL stores and are used
//! by tests and by local runs without a database.

mod room_store;
mod user_store;

pub use room_store::InMemoryRoomStore;
pub use user_store::InMemoryUserStore;
