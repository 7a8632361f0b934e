//! # Innkeep Repository
//!
//! Store clients for the Innkeep data access layer.
//!
//! ```text
//! accessor
//!   ↓  Arc<dyn UserStore> / Arc<dyn RoomStore>
//! PgUserStore / PgRoomStore            (SQLx, PostgreSQL)
//! InMemoryUserStore / InMemoryRoomStore (in process)
//! ```
//!
//! Filtered user listings are built by [`UserQueryBuilder`], which emits a
//! count statement and a page statement from one [`UserFilter`].

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod query;
pub mod traits;

pub use memory::*;
pub use pool::*;
pub use postgres::*;
pub use query::*;
pub use traits::*;
