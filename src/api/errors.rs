use serde::{Deserialize, Serialize};

use crate::engine::EngineError;
use crate::infra::GuardError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON или пустое имя).
    BadRequest(String),

    /// Игра уже идёт, повторный старт отклонён.
    AlreadyRunning,

    /// Другая игровая сессия уже активна. Автоматически не ретраим.
    SessionAlreadyActive,

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Прочие ошибки движка.
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::AlreadyRunning => ApiError::AlreadyRunning,
            EngineError::Session(GuardError::SessionAlreadyActive) => ApiError::SessionAlreadyActive,
            EngineError::MissingPlayerName | EngineError::InvalidRules(_) => {
                ApiError::BadRequest(err.to_string())
            }
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
