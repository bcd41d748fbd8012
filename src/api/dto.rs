use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::session::{GameSummary, Phase, Winner};
use crate::domain::Epoch;
use crate::engine::{RoundEvent, Step};
use crate::time_ctrl::Wakeup;

/// DTO текущей сессии (то, что рисует игровой экран).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub epoch: Epoch,
    pub player_name: String,
    pub player_score: u32,
    pub computer_score: u32,
    pub rounds_played: u32,
    pub max_rounds: u32,
    pub phase: Phase,
    /// Текст таймера.
    pub seconds_left: u32,
    /// Карты лицом вверх (только в фазе Revealed).
    pub cards_face_up: bool,
    /// Карты раунда, только пока они открыты.
    pub player_card: Option<Card>,
    pub computer_card: Option<Card>,
    pub aborted: bool,
}

/// DTO финального экрана.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResultDto {
    pub winner: Winner,
    /// Имя игрока, "PC" или "Tie".
    pub winner_label: String,
    pub player_name: String,
    pub player_score: u32,
    pub computer_score: u32,
}

impl From<&GameSummary> for GameResultDto {
    fn from(summary: &GameSummary) -> Self {
        Self {
            winner: summary.winner,
            winner_label: summary.winner_label().to_string(),
            player_name: summary.player_name.clone(),
            player_score: summary.player_score,
            computer_score: summary.computer_score,
        }
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Команда ничего не изменила (устаревший тик, abort без игры).
    Ok,

    /// События шага + что запланировать + актуальное состояние.
    Advanced {
        events: Vec<RoundEvent>,
        wakeup: Option<Wakeup>,
        session: Option<SessionViewDto>,
    },
}

/// Помощник: преобразование `Step` движка в ответ.
pub fn map_step_to_response(step: Step, session: Option<SessionViewDto>) -> CommandResponse {
    if step.is_empty() {
        return CommandResponse::Ok;
    }
    CommandResponse::Advanced {
        events: step.events,
        wakeup: step.wakeup,
        session,
    }
}
