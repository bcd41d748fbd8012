//! Движок раундов: сдача, подсчёт очков, таймер раунда, конец игры.
//!
//! Высокоуровневый объект: `RoundEngine`
//! Основные операции:
//!   - `start` – начать игру (занимает аренду сессии)
//!   - `tick` – посекундный тик таймера раунда
//!   - `deal_due` – истекла пауза между раундами
//!   - `abort` – прервать игру

pub mod errors;
pub mod events;
pub mod game_loop;

pub use errors::EngineError;
pub use events::{EventLog, LoggedEvent, Presenter, RoundEvent};
pub use game_loop::{RoundEngine, Step};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand` и скриптованная колода).
pub trait RandomSource {
    /// Равновероятный индекс в диапазоне `0..upper`.
    fn index_below(&mut self, upper: usize) -> usize;
}
