//! Filtered user queries.
//!
//! [`UserFilter`] is the predicate set; [`UserQueryBuilder`] turns it into a
//! count statement and a page statement sharing one WHERE clause, and
//! [`UserFilter::matches`] evaluates the same predicates in process.

mod builder;
mod filter;

pub use builder::*;
pub use filter::*;
