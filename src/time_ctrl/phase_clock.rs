// src/time_ctrl/phase_clock.rs
//! Посекундный отсчёт внутри раунда (Revealed → Hidden → конец раунда).

use serde::{Deserialize, Serialize};

use super::RoundRules;

/// Состояние таймера текущего раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseClock {
    /// Сколько секунд осталось до конца раунда.
    pub remaining_secs: u32,
    /// На каком остатке прячем карты.
    pub hide_at_secs: u32,
    /// Отсчёт запущен.
    pub running: bool,
    /// Карты уже спрятаны в этом раунде.
    pub cards_hidden: bool,
}

/// Что произошло за одну секунду.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockTick {
    pub seconds_left: u32,
    /// На этой секунде нужно спрятать карты.
    pub hide_cards: bool,
    /// Раунд закончился.
    pub expired: bool,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запустить отсчёт нового раунда согласно правилам.
    pub fn start_round(&mut self, rules: &RoundRules) {
        self.remaining_secs = rules.reveal_secs;
        self.hide_at_secs = rules.hide_lead_secs;
        self.running = true;
        self.cards_hidden = false;
    }

    /// Остановить отсчёт (конец раунда, abort).
    pub fn clear(&mut self) {
        self.remaining_secs = 0;
        self.running = false;
        self.cards_hidden = false;
    }

    /// Протекание одной секунды.
    ///
    /// Сначала уменьшаем остаток, потом смотрим порог "спрятать карты",
    /// потом истечение раунда. Карты прячутся не позже истечения,
    /// даже если порог равен нулю.
    ///
    /// Возвращает `None`, если отсчёт не запущен.
    pub fn elapse_second(&mut self) -> Option<ClockTick> {
        if !self.running {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);

        let hide_cards = !self.cards_hidden && self.remaining_secs <= self.hide_at_secs;
        if hide_cards {
            self.cards_hidden = true;
        }

        let expired = self.remaining_secs == 0;
        if expired {
            self.running = false;
        }

        Some(ClockTick {
            seconds_left: self.remaining_secs,
            hide_cards,
            expired,
        })
    }
}
