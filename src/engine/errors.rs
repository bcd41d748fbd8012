use crate::domain::Epoch;
use crate::infra::GuardError;

use thiserror::Error;

/// Ошибки движка раундов.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Игра уже идёт")]
    AlreadyRunning,

    #[error(transparent)]
    Session(#[from] GuardError),

    #[error("Не указано имя игрока")]
    MissingPlayerName,

    #[error("Некорректные правила: {0}")]
    InvalidRules(String),

    /// Тик от устаревшей/прерванной сессии. Наружу не отдаётся, только в лог.
    #[error("Устаревший тик: эпоха {got}, текущая {current:?}")]
    StaleTick { got: Epoch, current: Option<Epoch> },
}
