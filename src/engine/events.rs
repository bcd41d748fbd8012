use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::round::RoundResult;
use crate::domain::session::Winner;
use crate::domain::Epoch;

/// Событие движка для слоя представления. Только данные, без отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEvent {
    /// Сессия началась.
    SessionStarted {
        epoch: Epoch,
        player_name: String,
        max_rounds: u32,
    },

    /// Карты сданы и открыты.
    CardsDealt {
        round: u32,
        player_card: Card,
        computer_card: Card,
        result: RoundResult,
        player_score: u32,
        computer_score: u32,
    },

    /// Прошла секунда раунда.
    TimerTick {
        seconds_left: u32,
        /// Осталась последняя секунда (или меньше), фронт может подсветить таймер.
        urgent: bool,
    },

    /// Карты перевёрнуты рубашкой вверх.
    CardsHidden,

    /// Игра завершена. Отдаётся ровно один раз за сессию.
    GameOver {
        winner: Winner,
        player_score: u32,
        computer_score: u32,
    },

    /// Сессия прервана пользователем. Счёт недействителен.
    Aborted { rounds_played: u32 },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggedEvent {
    pub index: u32,
    pub event: RoundEvent,
}

/// Журнал событий (для реплея и тестов).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<LoggedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: RoundEvent) {
        let idx = self.events.len() as u32;
        self.events.push(LoggedEvent { index: idx, event });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoundEvent> {
        self.events.iter().map(|e| &e.event)
    }
}

/// Получатель событий движка (экран, звук, анимации живут снаружи).
pub trait Presenter {
    fn present(&mut self, event: &RoundEvent);
}

impl Presenter for EventLog {
    fn present(&mut self, event: &RoundEvent) {
        self.push(event.clone());
    }
}

impl Presenter for Vec<RoundEvent> {
    fn present(&mut self, event: &RoundEvent) {
        self.push(event.clone());
    }
}
