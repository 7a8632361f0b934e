//! User predicate set.

use innkeep_core::{User, UserRole};
use serde::{Deserialize, Serialize};

/// Optional conditions on a user listing, AND-ed together.
///
/// An absent predicate places no constraint on the result. `is_active`
/// distinguishes "not provided" (`None`) from "explicitly inactive"
/// (`Some(false)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Exact role match.
    pub role: Option<UserRole>,
    /// Exact active-flag match.
    pub is_active: Option<bool>,
    /// Case-insensitive substring of name or e-mail.
    pub search: Option<String>,
}

impl UserFilter {
    /// A filter with no predicates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The normalized search term: trimmed and lowercased.
    ///
    /// A blank search counts as no search at all.
    #[must_use]
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns true if no predicate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.is_active.is_none() && self.search_term().is_none()
    }

    /// Evaluates the predicate set against one user, in process.
    ///
    /// Agrees with the WHERE clause built by
    /// [`UserQueryBuilder`](crate::UserQueryBuilder).
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        if self.role.is_some_and(|role| role != user.role) {
            return false;
        }
        if self.is_active.is_some_and(|active| active != user.is_active) {
            return false;
        }
        match self.search_term() {
            Some(term) => {
                user.name.to_lowercase().contains(&term)
                    || user.email.to_lowercase().contains(&term)
            }
            None => true,
        }
    }
}
