//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для сдачи карт;
//! - аренда единственной активной сессии.

pub mod rng;
pub mod session_guard;

pub use rng::*;
pub use session_guard::{GuardError, SessionGuard, SessionLease};
