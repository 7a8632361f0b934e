//! PostgreSQL store implementations.

mod room_store;
mod user_store;

pub use room_store::PgRoomStore;
pub use user_store::PgUserStore;

use crate::QueryArg;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// Binds builder arguments onto a query in `$n` order.
fn bind_args<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    args: &'q [QueryArg],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for arg in args {
        query = match arg {
            QueryArg::Text(value) => query.bind(value.as_str()),
            QueryArg::Bool(value) => query.bind(*value),
            QueryArg::Int(value) => query.bind(*value),
        };
    }
    query
}
