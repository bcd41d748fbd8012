use serde::{Deserialize, Serialize};

use crate::domain::session::{GameSession, Phase};
use crate::engine::{RandomSource, RoundEngine};

use super::dto::{GameResultDto, SessionViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Текущее состояние сессии.
    GetSession,

    /// Итог завершённой игры.
    GetResult,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Session(Option<SessionViewDto>),
    Result(Option<GameResultDto>),
}

/// Сформировать DTO сессии. Карты показываем, только пока они открыты.
pub fn build_session_view(session: &GameSession) -> SessionViewDto {
    let face_up = session.phase == Phase::Revealed;
    let (player_card, computer_card) = match (face_up, session.last_round) {
        (true, Some(round)) => (Some(round.player_card), Some(round.computer_card)),
        _ => (None, None),
    };

    SessionViewDto {
        epoch: session.epoch,
        player_name: session.player_name.clone(),
        player_score: session.player_score,
        computer_score: session.computer_score,
        rounds_played: session.rounds_played,
        max_rounds: session.max_rounds,
        phase: session.phase,
        seconds_left: session.time_remaining_in_phase,
        cards_face_up: face_up,
        player_card,
        computer_card,
        aborted: session.aborted,
    }
}

/// Ответить на запрос по состоянию движка.
pub fn answer<R: RandomSource>(engine: &RoundEngine<R>, query: &Query) -> QueryResponse {
    match query {
        Query::GetSession => QueryResponse::Session(engine.session().map(build_session_view)),
        Query::GetResult => {
            QueryResponse::Result(engine.summary().as_ref().map(GameResultDto::from))
        }
    }
}
