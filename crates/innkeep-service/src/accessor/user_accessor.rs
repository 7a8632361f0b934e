//! Cached user access.

use super::{CacheAside, UserAccess};
use crate::cache::cache_keys;
use async_trait::async_trait;
use innkeep_core::{InnkeepError, InnkeepResult, NewUser, Page, PageWindow, Redact, ValidateExt};
use innkeep_core::{User, UserId, UserPage};
use innkeep_repository::{UserFilter, UserStore};
use std::sync::Arc;
use tracing::{debug, info};

/// User accessor over any [`UserStore`].
pub struct UserAccessor<S: UserStore + ?Sized> {
    store: Arc<S>,
    cache: CacheAside,
}

impl<S: UserStore + ?Sized> UserAccessor<S> {
    #[must_use]
    pub fn new(store: Arc<S>, cache: CacheAside) -> Self {
        Self { store, cache }
    }

    // Existence check shared by the write paths.
    async fn require(&self, id: UserId) -> InnkeepResult<User> {
        self.cache
            .read_through("user", &cache_keys::user_by_id(id), || self.store.find_by_id(id))
            .await?
            .ok_or_else(|| InnkeepError::not_found("User", id))
    }
}

#[async_trait]
impl<S: UserStore + ?Sized + 'static> UserAccess for UserAccessor<S> {
    async fn get_by_id(&self, id: UserId) -> InnkeepResult<User> {
        debug!("Getting user: {}", id);
        self.require(id).await
    }

    async fn get_filtered(&self, filter: &UserFilter, page: u32, limit: u32) -> InnkeepResult<UserPage> {
        let window = PageWindow::new(page, limit);
        debug!(?filter, page = window.page, limit = window.limit, "Listing users");

        // Count first so the page is read against a known total.
        let total = self.store.count_filtered(filter).await?;
        let users = self.store.find_filtered(filter, window).await?;

        Ok(Page::new(users.redacted(), window, total))
    }

    async fn update_status(&self, id: UserId, is_active: bool) -> InnkeepResult<User> {
        debug!("Updating user status: {} -> {}", id, is_active);

        self.require(id).await?;

        let updated = self
            .store
            .update_status(id, is_active)
            .await?
            .ok_or_else(|| InnkeepError::not_found("User", id))?;

        let key = cache_keys::user_by_id(id);
        self.cache.invalidate_all(&[key.as_str(), cache_keys::USERS_LIST]).await;

        info!("User status updated: {}", id);
        Ok(updated.redacted())
    }

    async fn create_user(&self, new_user: NewUser) -> InnkeepResult<User> {
        debug!("Creating user: {}", new_user.email);

        new_user.validate_request()?;

        if self.store.find_by_email(&new_user.email).await?.is_some() {
            return Err(InnkeepError::Conflict(format!(
                "Email '{}' already exists",
                new_user.email
            )));
        }

        let user = self.store.insert(&new_user).await?;
        self.cache.invalidate(cache_keys::USERS_LIST).await;

        info!("User created: {}", user.id);
        Ok(user.redacted())
    }

    async fn invalidate(&self, key: &str) {
        self.cache.invalidate(key).await;
    }
}
