//! Domain records owned by the relational store.

mod role;
mod room;
mod user;

pub use role::UserRole;
pub use room::{NewRoom, Room};
pub use user::{NewUser, User, UserPage};

/// Produces a copy with secret fields stripped.
///
/// Anything written to a shared cache goes through this first.
pub trait Redact: Sized {
    /// Returns the copy that is safe to serialize outside the store.
    #[must_use]
    fn redacted(&self) -> Self;
}

impl<T: Redact> Redact for Vec<T> {
    fn redacted(&self) -> Self {
        self.iter().map(Redact::redacted).collect()
    }
}
