// src/time_ctrl/round_rules.rs
//! Конфигурация игры и тайминга раундов.
//!
//! Здесь только "правила", без состояния и без привязки к конкретной сессии.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Профиль тайминга.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeProfile {
    /// Как в мобильной версии: 2 раунда, 4 сек на раунд, карты прячутся за 2 сек, пауза 1.2 сек.
    Standard,
    /// Без паузы между раундами (удобно для симуляций и реплеев).
    NoPause,
}

/// Правила одной игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRules {
    /// Сколько раундов в игре (при 0 игра сразу завершается ничьей).
    pub max_rounds: u32,
    /// Длительность раунда после сдачи, в секундах (>= 1).
    pub reveal_secs: u32,
    /// За сколько секунд до конца раунда карты переворачиваются обратно (< reveal_secs).
    pub hide_lead_secs: u32,
    /// Пауза между концом раунда и следующей сдачей, мс.
    #[serde(default)]
    pub inter_round_pause_ms: u64,
}

impl RoundRules {
    /// Строгий конструктор.
    pub const fn new(
        max_rounds: u32,
        reveal_secs: u32,
        hide_lead_secs: u32,
        inter_round_pause_ms: u64,
    ) -> Self {
        Self {
            max_rounds,
            reveal_secs,
            hide_lead_secs,
            inter_round_pause_ms,
        }
    }

    /// Стандартный профиль.
    pub const fn standard() -> Self {
        Self {
            max_rounds: 2,
            reveal_secs: 4,
            hide_lead_secs: 2,
            inter_round_pause_ms: 1200,
        }
    }

    /// Получить правила по профилю.
    pub const fn from_profile(profile: TimeProfile) -> Self {
        match profile {
            TimeProfile::Standard => Self::standard(),
            TimeProfile::NoPause => Self {
                inter_round_pause_ms: 0,
                ..Self::standard()
            },
        }
    }

    /// Задать количество раундов, остальное не трогаем.
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn inter_round_pause(&self) -> Duration {
        Duration::from_millis(self.inter_round_pause_ms)
    }

    /// Проверка ограничений: reveal_secs >= 1, hide_lead_secs < reveal_secs.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.reveal_secs == 0 {
            return Err(EngineError::InvalidRules(
                "reveal_secs должен быть >= 1".into(),
            ));
        }
        if self.hide_lead_secs >= self.reveal_secs {
            return Err(EngineError::InvalidRules(format!(
                "hide_lead_secs ({}) должен быть меньше reveal_secs ({})",
                self.hide_lead_secs, self.reveal_secs
            )));
        }
        Ok(())
    }

    /// Загрузить правила из JSON и сразу проверить.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let rules: RoundRules =
            serde_json::from_str(raw).map_err(|e| EngineError::InvalidRules(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }
}

impl Default for RoundRules {
    fn default() -> Self {
        Self::standard()
    }
}
