//! PostgreSQL user store.

use super::bind_args;
use crate::{traits::UserStore, DatabasePool, UserFilter, UserQueryBuilder, USER_COLUMNS};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use innkeep_core::{InnkeepResult, NewUser, PageWindow, User, UserId, UserRole};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL user store.
#[derive(Clone)]
pub struct PgUserStore {
    pool: Arc<DatabasePool>,
}

impl PgUserStore {
    /// Creates a new PostgreSQL user store.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    password_hash: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            password_hash: row.password_hash,
            role: UserRole::from_db(&row.role),
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: UserId) -> InnkeepResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> InnkeepResult<Option<User>> {
        debug!("Finding user by email: {}", email);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn count_filtered(&self, filter: &UserFilter) -> InnkeepResult<u64> {
        let statement = UserQueryBuilder::new(filter).count_statement();
        debug!(sql = %statement.sql, "Counting users");

        let (total,) = bind_args(sqlx::query_as::<_, (i64,)>(&statement.sql), &statement.args)
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn find_filtered(&self, filter: &UserFilter, window: PageWindow) -> InnkeepResult<Vec<User>> {
        let statement = UserQueryBuilder::new(filter).select_statement(window);
        debug!(sql = %statement.sql, page = window.page, limit = window.limit, "Finding users");

        let rows = bind_args(sqlx::query_as::<_, UserRow>(&statement.sql), &statement.args)
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update_status(&self, id: UserId, is_active: bool) -> InnkeepResult<Option<User>> {
        debug!("Setting user {} active = {}", id, is_active);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET is_active = $1, updated_at = NOW() WHERE id = $2 RETURNING {USER_COLUMNS}"
        ))
        .bind(is_active)
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, user: &NewUser) -> InnkeepResult<User> {
        debug!("Inserting user: {}", user.email);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (name, email, phone, password_hash, role, is_active) \
             VALUES ($1, $2, $3, $4, $5, TRUE) RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(self.pool.inner())
        .await?;

        Ok(User::from(row))
    }
}
