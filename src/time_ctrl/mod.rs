// src/time_ctrl/mod.rs
//! Контроль времени раунда.
//!
//! Здесь собираем:
//! - правила игры и тайминга (`RoundRules`);
//! - посекундный таймер раунда (`PhaseClock`);
//! - контракт планировщика (`Wakeup`) и виртуальные часы (`VirtualClock`).

pub mod phase_clock;
pub mod round_rules;
pub mod scheduler;

pub use phase_clock::{ClockTick, PhaseClock};
pub use round_rules::{RoundRules, TimeProfile};
pub use scheduler::{deliver, VirtualClock, Wakeup, WakeupKind};
