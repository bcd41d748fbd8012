use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Исход одного раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    PlayerWins,
    ComputerWins,
    /// Равные ранги, очко никому.
    Push,
}

/// Результат раунда: обе карты и исход.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub player_card: Card,
    pub computer_card: Card,
    pub outcome: RoundOutcome,
}

impl RoundResult {
    /// Сравнить две карты по стоимости. Старшая выигрывает раунд.
    pub fn compare(player_card: Card, computer_card: Card) -> Self {
        let outcome = match player_card.value().cmp(&computer_card.value()) {
            std::cmp::Ordering::Greater => RoundOutcome::PlayerWins,
            std::cmp::Ordering::Less => RoundOutcome::ComputerWins,
            std::cmp::Ordering::Equal => RoundOutcome::Push,
        };
        Self {
            player_card,
            computer_card,
            outcome,
        }
    }

    pub fn is_push(&self) -> bool {
        self.outcome == RoundOutcome::Push
    }
}
