// src/time_ctrl/scheduler.rs
//! Контракт планировщика и виртуальные часы.
//!
//! Движок сам ничего не ждёт: каждая операция возвращает `Step`, в котором
//! может лежать `Wakeup`: просьба "позвать меня через `after`".
//! Планировщик (реальный таймер, tokio, тестовые часы) обязан вызвать
//! `tick(epoch)` или `deal_due(epoch)` в нужный момент.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::Epoch;
use crate::engine::{Presenter, RandomSource, RoundEngine, Step};

/// Что именно нужно доставить движку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WakeupKind {
    /// Посекундный тик → `RoundEngine::tick`.
    Second,
    /// Пауза между раундами истекла → `RoundEngine::deal_due`.
    DealDue,
}

/// Запрос движка на отложенный вызов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wakeup {
    pub epoch: Epoch,
    pub after: Duration,
    pub kind: WakeupKind,
}

impl Wakeup {
    pub const fn second(epoch: Epoch) -> Self {
        Self {
            epoch,
            after: Duration::from_secs(1),
            kind: WakeupKind::Second,
        }
    }

    pub const fn deal_due(epoch: Epoch, after: Duration) -> Self {
        Self {
            epoch,
            after,
            kind: WakeupKind::DealDue,
        }
    }
}

/// Доставить один wakeup движку.
pub fn deliver<R: RandomSource>(engine: &mut RoundEngine<R>, wakeup: Wakeup) -> Step {
    match wakeup.kind {
        WakeupKind::Second => engine.tick(wakeup.epoch),
        WakeupKind::DealDue => engine.deal_due(wakeup.epoch),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    due: Duration,
    seq: u64,
    wakeup: Wakeup,
}

/// Детерминированные виртуальные часы: очередь wakeup'ов по виртуальному времени.
///
/// Время двигается только при доставке, поэтому тесты идут без реальных задержек.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<Pending>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Текущее виртуальное время с момента создания часов.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Поставить wakeup в очередь относительно текущего времени.
    pub fn schedule(&mut self, wakeup: Wakeup) {
        self.seq += 1;
        self.queue.push(Reverse(Pending {
            due: self.now + wakeup.after,
            seq: self.seq,
            wakeup,
        }));
    }

    /// Поставить в очередь wakeup из шага движка (если он есть).
    pub fn schedule_step(&mut self, step: &Step) {
        if let Some(wakeup) = step.wakeup {
            self.schedule(wakeup);
        }
    }

    /// Снять ближайший wakeup и перевести часы на его время.
    pub fn pop_next(&mut self) -> Option<Wakeup> {
        let Reverse(next) = self.queue.pop()?;
        if next.due > self.now {
            self.now = next.due;
        }
        Some(next.wakeup)
    }

    /// Доставить всё, что должно сработать в течение `span`, и сдвинуть часы на `span`.
    ///
    /// Возвращает количество доставленных wakeup'ов.
    pub fn advance<R, P>(&mut self, span: Duration, engine: &mut RoundEngine<R>, presenter: &mut P) -> usize
    where
        R: RandomSource,
        P: Presenter + ?Sized,
    {
        let deadline = self.now + span;
        let mut delivered = 0;

        while let Some(Reverse(next)) = self.queue.peek() {
            if next.due > deadline {
                break;
            }
            let Some(wakeup) = self.pop_next() else { break };
            self.dispatch(wakeup, engine, presenter);
            delivered += 1;
        }

        self.now = deadline;
        delivered
    }

    /// Крутить часы, пока очередь не опустеет (или пока не кончится лимит шагов).
    pub fn run_until_idle<R, P>(&mut self, engine: &mut RoundEngine<R>, presenter: &mut P, max_steps: usize) -> usize
    where
        R: RandomSource,
        P: Presenter + ?Sized,
    {
        let mut delivered = 0;
        while delivered < max_steps {
            let Some(wakeup) = self.pop_next() else { break };
            self.dispatch(wakeup, engine, presenter);
            delivered += 1;
        }
        delivered
    }

    fn dispatch<R, P>(&mut self, wakeup: Wakeup, engine: &mut RoundEngine<R>, presenter: &mut P)
    where
        R: RandomSource,
        P: Presenter + ?Sized,
    {
        let step = deliver(engine, wakeup);
        step.present_to(presenter);
        self.schedule_step(&step);
    }
}
