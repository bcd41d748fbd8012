use serde::{Deserialize, Serialize};

use crate::domain::Epoch;
use crate::engine::{RandomSource, RoundEngine};
use crate::time_ctrl::RoundRules;

use super::dto::{map_step_to_response, CommandResponse};
use super::errors::ApiError;
use super::queries::build_session_view;

/// Команда верхнего уровня от UI-оболочки или планировщика.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новую игру.
    StartGame(StartGameCommand),

    /// Посекундный тик таймера (от планировщика).
    Tick { epoch: Epoch },

    /// Истекла пауза между раундами (от планировщика).
    DealDue { epoch: Epoch },

    /// Пользователь вышел из игры.
    Abort,
}

/// Команда старта игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartGameCommand {
    /// Имя игрока (приходит с экрана ввода имени).
    pub player_name: String,
    /// Правила; при `None` берём стандартный профиль.
    #[serde(default)]
    pub rules: Option<RoundRules>,
}

/// Выполнить команду над движком.
pub fn execute<R: RandomSource>(
    engine: &mut RoundEngine<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let step = match command {
        Command::StartGame(cmd) => {
            let rules = cmd.rules.unwrap_or_default();
            engine.start(&cmd.player_name, rules)?
        }
        Command::Tick { epoch } => engine.tick(epoch),
        Command::DealDue { epoch } => engine.deal_due(epoch),
        Command::Abort => engine.abort(),
    };

    let session = engine.session().map(build_session_view);
    Ok(map_step_to_response(step, session))
}

/// Разобрать команду из JSON (формат обмена с UI-оболочкой).
pub fn parse_command(raw: &str) -> Result<Command, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}
