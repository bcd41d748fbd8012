use serde::{Deserialize, Serialize};

use crate::domain::round::{RoundOutcome, RoundResult};
use crate::domain::Epoch;

/// Фаза конечного автомата движка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Игра ещё не начиналась.
    Idle,
    /// Сдача карт (или ожидание паузы перед следующей сдачей).
    Dealing,
    /// Карты открыты, идёт отсчёт.
    Revealed,
    /// Карты снова рубашкой вверх, отсчёт продолжается.
    Hidden,
    /// Терминальное состояние.
    Finished,
}

impl Phase {
    /// Идёт ли сейчас сессия (между `Idle` и `Finished`).
    pub fn is_running(self) -> bool {
        !matches!(self, Phase::Idle | Phase::Finished)
    }
}

/// Победитель всей игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Winner {
    Player,
    Computer,
    Tie,
}

impl Winner {
    pub fn from_scores(player_score: u32, computer_score: u32) -> Self {
        match player_score.cmp(&computer_score) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Computer,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}

/// Состояние одной игровой сессии (агрегат).
///
/// Меняется только движком (`RoundEngine`) в обработчиках тиков.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSession {
    pub epoch: Epoch,
    pub player_name: String,
    pub player_score: u32,
    pub computer_score: u32,
    pub rounds_played: u32,
    pub max_rounds: u32,
    pub phase: Phase,
    /// Сколько секунд осталось в текущей таймированной фазе.
    pub time_remaining_in_phase: u32,
    /// Результат последнего раунда (для отрисовки).
    pub last_round: Option<RoundResult>,
    /// Сессия прервана, счёт недействителен.
    pub aborted: bool,
}

impl GameSession {
    pub fn new(epoch: Epoch, player_name: String, max_rounds: u32) -> Self {
        Self {
            epoch,
            player_name,
            player_score: 0,
            computer_score: 0,
            rounds_played: 0,
            max_rounds,
            phase: Phase::Idle,
            time_remaining_in_phase: 0,
            last_round: None,
            aborted: false,
        }
    }

    /// Остались ли ещё несыгранные раунды.
    pub fn has_rounds_left(&self) -> bool {
        self.rounds_played < self.max_rounds
    }

    /// Записать результат раунда: +1 раунд, +1 очко победителю раунда.
    pub fn record_round(&mut self, result: RoundResult) {
        self.rounds_played += 1;
        match result.outcome {
            RoundOutcome::PlayerWins => self.player_score += 1,
            RoundOutcome::ComputerWins => self.computer_score += 1,
            RoundOutcome::Push => {}
        }
        self.last_round = Some(result);
    }

    pub fn winner(&self) -> Winner {
        Winner::from_scores(self.player_score, self.computer_score)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            winner: self.winner(),
            player_name: self.player_name.clone(),
            player_score: self.player_score,
            computer_score: self.computer_score,
            rounds_played: self.rounds_played,
        }
    }
}

/// Итог игры для финального экрана.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    pub winner: Winner,
    pub player_name: String,
    pub player_score: u32,
    pub computer_score: u32,
    pub rounds_played: u32,
}

impl GameSummary {
    /// Подпись победителя: имя игрока, "PC" или "Tie".
    pub fn winner_label(&self) -> &str {
        match self.winner {
            Winner::Player => &self.player_name,
            Winner::Computer => "PC",
            Winner::Tie => "Tie",
        }
    }

    /// Очки победителя и проигравшего (при ничьей первым идёт игрок).
    pub fn score_line(&self) -> (u32, u32) {
        match self.winner {
            Winner::Computer => (self.computer_score, self.player_score),
            _ => (self.player_score, self.computer_score),
        }
    }
}
