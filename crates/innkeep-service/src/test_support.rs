//! Fakes shared by the accessor tests.

use crate::cache::{CacheFailureSink, CacheInterface, CacheOp};
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use innkeep_core::{InnkeepError, InnkeepResult, NewRoom, NewUser, PageWindow, Room, RoomId, User, UserId, UserRole};
use innkeep_repository::{InMemoryRoomStore, InMemoryUserStore, RoomStore, UserFilter, UserStore};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Five users: three staff (one inactive), one admin, one guest.
pub fn five_users() -> Vec<User> {
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    [
        (1, "Ana Souza", "ana@hotel.io", UserRole::Staff, true),
        (2, "Brian Lane", "brian@hotel.io", UserRole::Staff, true),
        (3, "Joana Reis", "joana@hotel.io", UserRole::Staff, false),
        (4, "Dmitri Ivanov", "dmitri@hotel.io", UserRole::Admin, true),
        (5, "Evan Chan", "evan@hotel.io", UserRole::Guest, true),
    ]
    .into_iter()
    .map(|(id, name, email, role, is_active)| User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: "5551234567".to_string(),
        password_hash: format!("$argon2id$v=19$user{id}"),
        role,
        is_active,
        created_at: base + ChronoDuration::minutes(id),
        updated_at: base + ChronoDuration::minutes(id),
    })
    .collect()
}

pub fn two_rooms() -> Vec<Room> {
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    [(1, "101", true), (2, "102", false)]
        .into_iter()
        .map(|(id, number, is_available)| Room {
            id: RoomId::new(id),
            room_number: number.to_string(),
            room_type: "double".to_string(),
            description: "Sea view".to_string(),
            price_per_night: 120.0,
            capacity: 2,
            floor: 1,
            amenities: vec!["wifi".to_string()],
            is_available,
            created_at: base,
            updated_at: base,
        })
        .collect()
}

/// In-memory user store that counts reads.
#[derive(Default)]
pub struct CountingUserStore {
    inner: InMemoryUserStore,
    pub point_reads: AtomicUsize,
    pub counts: AtomicUsize,
    pub filtered_reads: AtomicUsize,
}

impl CountingUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            inner: InMemoryUserStore::with_users(users),
            ..Self::default()
        }
    }

    pub fn point_reads(&self) -> usize {
        self.point_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for CountingUserStore {
    async fn find_by_id(&self, id: UserId) -> InnkeepResult<Option<User>> {
        self.point_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> InnkeepResult<Option<User>> {
        self.inner.find_by_email(email).await
    }

    async fn count_filtered(&self, filter: &UserFilter) -> InnkeepResult<u64> {
        self.counts.fetch_add(1, Ordering::SeqCst);
        self.inner.count_filtered(filter).await
    }

    async fn find_filtered(&self, filter: &UserFilter, window: PageWindow) -> InnkeepResult<Vec<User>> {
        self.filtered_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_filtered(filter, window).await
    }

    async fn update_status(&self, id: UserId, is_active: bool) -> InnkeepResult<Option<User>> {
        self.inner.update_status(id, is_active).await
    }

    async fn insert(&self, user: &NewUser) -> InnkeepResult<User> {
        self.inner.insert(user).await
    }
}

/// In-memory room store that counts reads.
#[derive(Default)]
pub struct CountingRoomStore {
    inner: InMemoryRoomStore,
    pub point_reads: AtomicUsize,
    pub available_reads: AtomicUsize,
}

impl CountingRoomStore {
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            inner: InMemoryRoomStore::with_rooms(rooms),
            ..Self::default()
        }
    }
}

#[async_trait]
impl RoomStore for CountingRoomStore {
    async fn find_by_id(&self, id: RoomId) -> InnkeepResult<Option<Room>> {
        self.point_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn list_all(&self) -> InnkeepResult<Vec<Room>> {
        self.inner.list_all().await
    }

    async fn list_available(&self) -> InnkeepResult<Vec<Room>> {
        self.available_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.list_available().await
    }

    async fn insert(&self, room: &NewRoom) -> InnkeepResult<Room> {
        self.inner.insert(room).await
    }

    async fn set_availability(&self, id: RoomId, is_available: bool) -> InnkeepResult<Option<Room>> {
        self.inner.set_availability(id, is_available).await
    }
}

/// Sink that keeps every report.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<(CacheOp, String)>>,
}

impl RecordingSink {
    pub fn reports(&self) -> Vec<(CacheOp, String)> {
        self.reports.lock().clone()
    }

    pub fn ops(&self) -> Vec<CacheOp> {
        self.reports.lock().iter().map(|(op, _)| *op).collect()
    }
}

impl CacheFailureSink for RecordingSink {
    fn report(&self, op: CacheOp, key: &str, _error: &InnkeepError) {
        self.reports.lock().push((op, key.to_string()));
    }
}

/// Cache whose chosen operations always fail.
pub struct FailingCache {
    failing: HashSet<CacheOp>,
}

impl FailingCache {
    pub fn failing(ops: &[CacheOp]) -> Self {
        Self {
            failing: ops.iter().copied().collect(),
        }
    }

    fn check(&self, op: CacheOp) -> InnkeepResult<()> {
        if self.failing.contains(&op) {
            return Err(InnkeepError::cache("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheInterface for FailingCache {
    async fn get_raw(&self, _key: &str) -> InnkeepResult<Option<String>> {
        self.check(CacheOp::Get)?;
        Ok(None)
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> InnkeepResult<()> {
        self.check(CacheOp::Set)
    }

    async fn delete(&self, _key: &str) -> InnkeepResult<bool> {
        self.check(CacheOp::Delete)?;
        Ok(false)
    }
}

/// Cache that never answers in time.
pub struct StalledCache;

#[async_trait]
impl CacheInterface for StalledCache {
    async fn get_raw(&self, _key: &str) -> InnkeepResult<Option<String>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(None)
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> InnkeepResult<()> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(())
    }

    async fn delete(&self, _key: &str) -> InnkeepResult<bool> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(false)
    }
}
