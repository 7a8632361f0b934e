//! In-memory user store.

use crate::{traits::UserStore, UserFilter};
use async_trait::async_trait;
use chrono::Utc;
use innkeep_core::{InnkeepError, InnkeepResult, NewUser, PageWindow, User, UserId};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// User store backed by a map.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<UserId, User>>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `users`, keyed by their ids.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::new();
        {
            let mut map = store.users.write();
            for user in users {
                map.insert(user.id, user);
            }
        }
        store
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    // Newest first, id breaking ties, as the SQL ORDER BY does.
    fn filtered(&self, filter: &UserFilter) -> Vec<User> {
        let mut users: Vec<User> = self
            .users
            .read()
            .values()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        users
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> InnkeepResult<Option<User>> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> InnkeepResult<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn count_filtered(&self, filter: &UserFilter) -> InnkeepResult<u64> {
        let users = self.users.read();
        Ok(users.values().filter(|user| filter.matches(user)).count() as u64)
    }

    async fn find_filtered(&self, filter: &UserFilter, window: PageWindow) -> InnkeepResult<Vec<User>> {
        let users = self.filtered(filter);
        if window.is_unbounded() {
            return Ok(users);
        }
        let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        Ok(users
            .into_iter()
            .skip(offset)
            .take(window.limit as usize)
            .collect())
    }

    async fn update_status(&self, id: UserId, is_active: bool) -> InnkeepResult<Option<User>> {
        let mut users = self.users.write();
        Ok(users.get_mut(&id).map(|user| {
            user.is_active = is_active;
            user.updated_at = Utc::now();
            user.clone()
        }))
    }

    async fn insert(&self, new_user: &NewUser) -> InnkeepResult<User> {
        let mut users = self.users.write();
        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&new_user.email))
        {
            return Err(InnkeepError::conflict(format!(
                "email {} is already registered",
                new_user.email
            )));
        }

        let id = users.keys().next_back().map_or(1, |last| last.into_inner() + 1);
        let now = Utc::now();
        let user = User {
            id: UserId::new(id),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            phone: new_user.phone.clone(),
            password_hash: new_user.password_hash.clone(),
            role: new_user.role,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
