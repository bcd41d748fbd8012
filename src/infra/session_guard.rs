//! Аренда (lease) единственной активной игровой сессии.
//!
//! Гарантирует, что одновременно идёт не больше одной игры. Каждая
//! аренда получает новую эпоху, по ней движок отсеивает тики от
//! прерванных или завершённых сессий.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::domain::Epoch;

/// Ошибки захвата сессии.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GuardError {
    #[error("Игровая сессия уже активна")]
    SessionAlreadyActive,
}

#[derive(Debug, Default)]
struct GuardInner {
    active: AtomicBool,
    /// Эпоха активной аренды, 0 означает, что аренды нет.
    active_epoch: AtomicU64,
    epoch_counter: AtomicU64,
}

/// Охранник сессий. Клонируется дёшево: все клоны делят одно состояние.
#[derive(Clone, Debug, Default)]
pub struct SessionGuard {
    inner: Arc<GuardInner>,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Попытаться занять сессию.
    pub fn try_acquire(&self) -> Result<SessionLease, GuardError> {
        if self
            .inner
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("session guard contention: a game is already active");
            return Err(GuardError::SessionAlreadyActive);
        }

        let epoch = self.inner.epoch_counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.inner.active_epoch.store(epoch, Ordering::Release);

        Ok(SessionLease {
            inner: Arc::clone(&self.inner),
            epoch,
            released: false,
        })
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.load(Ordering::Acquire)
    }

    /// Эпоха текущей аренды (если сессия активна).
    pub fn active_epoch(&self) -> Option<Epoch> {
        match self.inner.active_epoch.load(Ordering::Acquire) {
            0 => None,
            epoch => Some(epoch),
        }
    }
}

/// Аренда активной сессии. Освобождается явно через `release` или при drop.
#[derive(Debug)]
pub struct SessionLease {
    inner: Arc<GuardInner>,
    epoch: Epoch,
    released: bool,
}

impl SessionLease {
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Освободить сессию. Повторный вызов ничего не делает.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.inner.active_epoch.store(0, Ordering::Release);
        self.inner.active.store(false, Ordering::Release);
    }
}

impl Drop for SessionLease {
    fn drop(&mut self) {
        self.release();
    }
}
