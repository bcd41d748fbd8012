//! Движок карточной игры "старшая карта": игрок против компьютера.
//!
//! Каждый раунд обеим сторонам сдаётся по карте, старшая выигрывает раунд,
//! по итогам заданного числа раундов побеждает тот, у кого больше побед.
//! Отрисовка, звук и анимации живут снаружи: движок только отдаёт события.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod time_ctrl;

pub use domain::{Card, Epoch, GameSession, GameSummary, Phase, Rank, RoundOutcome, RoundResult, Winner};
pub use engine::{EngineError, Presenter, RandomSource, RoundEngine, RoundEvent, Step};
pub use infra::{GuardError, SessionGuard, SessionLease};
pub use time_ctrl::{RoundRules, VirtualClock, Wakeup, WakeupKind};
