use tracing::{debug, info};

use crate::domain::card::{Card, Rank};
use crate::domain::round::RoundResult;
use crate::domain::session::{GameSession, GameSummary, Phase};
use crate::domain::Epoch;
use crate::engine::errors::EngineError;
use crate::engine::events::{EventLog, Presenter, RoundEvent};
use crate::engine::RandomSource;
use crate::infra::{SessionGuard, SessionLease, SystemRng};
use crate::time_ctrl::{PhaseClock, RoundRules, Wakeup};

/// Результат одной операции движка: события для фронта и (опционально)
/// просьба к планировщику позвать движок ещё раз.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    pub events: Vec<RoundEvent>,
    pub wakeup: Option<Wakeup>,
}

impl Step {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.wakeup.is_none()
    }

    /// Отдать события получателю в порядке генерации.
    pub fn present_to<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        for event in &self.events {
            presenter.present(event);
        }
    }
}

/// Движок раундов: владеет сессией и крутит автомат
/// `Idle → Dealing → Revealed → Hidden → (Dealing | Finished)`.
///
/// Сам ничего не ждёт и не спит: время приносит планировщик через
/// `tick` / `deal_due`, каждый вызов помечен эпохой сессии.
pub struct RoundEngine<R: RandomSource> {
    guard: SessionGuard,
    rng: R,
    rules: RoundRules,
    session: Option<GameSession>,
    clock: PhaseClock,
    lease: Option<SessionLease>,
    history: EventLog,
}

impl RoundEngine<SystemRng> {
    pub fn with_system_rng(guard: SessionGuard) -> Self {
        Self::new(guard, SystemRng)
    }
}

impl<R: RandomSource> RoundEngine<R> {
    pub fn new(guard: SessionGuard, rng: R) -> Self {
        Self {
            guard,
            rng,
            rules: RoundRules::standard(),
            session: None,
            clock: PhaseClock::new(),
            lease: None,
            history: EventLog::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.as_ref().map(|s| s.phase).unwrap_or(Phase::Idle)
    }

    pub fn is_running(&self) -> bool {
        self.phase().is_running()
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn epoch(&self) -> Option<Epoch> {
        self.session.as_ref().map(|s| s.epoch)
    }

    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// Все события текущей (или последней) сессии.
    pub fn history(&self) -> &EventLog {
        &self.history
    }

    /// Удерживает ли движок аренду сессии.
    pub fn holds_lease(&self) -> bool {
        self.lease.is_some()
    }

    /// Итог игры. Есть только у нормально завершённой (не прерванной) сессии.
    pub fn summary(&self) -> Option<GameSummary> {
        let session = self.session.as_ref()?;
        if session.phase != Phase::Finished || session.aborted {
            return None;
        }
        Some(session.summary())
    }

    /// Старт новой игры.
    ///
    /// - занимает аренду сессии (новая эпоха);
    /// - сразу сдаёт первый раунд;
    /// - при `max_rounds == 0` сразу завершает игру ничьей 0:0.
    pub fn start(&mut self, player_name: &str, rules: RoundRules) -> Result<Step, EngineError> {
        if self.is_running() {
            return Err(EngineError::AlreadyRunning);
        }
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(EngineError::MissingPlayerName);
        }
        rules.validate()?;

        let lease = self.guard.try_acquire()?;
        let epoch = lease.epoch();

        self.rules = rules;
        self.lease = Some(lease);
        self.clock.clear();
        self.history = EventLog::new();
        self.session = Some(GameSession::new(
            epoch,
            player_name.to_string(),
            self.rules.max_rounds,
        ));

        info!(epoch, player = player_name, max_rounds = self.rules.max_rounds, "session started");

        let mut step = Step::default();
        self.emit(
            &mut step,
            RoundEvent::SessionStarted {
                epoch,
                player_name: player_name.to_string(),
                max_rounds: self.rules.max_rounds,
            },
        );

        if self.rules.max_rounds == 0 {
            self.finish(&mut step);
        } else {
            self.deal(&mut step);
        }

        Ok(step)
    }

    /// Посекундный тик.
    ///
    /// Тики с чужой эпохой, тики вне отсчёта и тики после `Finished`
    /// игнорируются.
    pub fn tick(&mut self, epoch: Epoch) -> Step {
        let mut step = Step::default();

        if let Err(err) = self.check_epoch(epoch) {
            debug!(%err, "tick ignored");
            return step;
        }
        if !matches!(self.phase(), Phase::Revealed | Phase::Hidden) {
            debug!(epoch, phase = ?self.phase(), "tick outside of countdown ignored");
            return step;
        }
        let Some(t) = self.clock.elapse_second() else {
            return step;
        };

        if let Some(session) = self.session.as_mut() {
            session.time_remaining_in_phase = t.seconds_left;
        }
        self.emit(
            &mut step,
            RoundEvent::TimerTick {
                seconds_left: t.seconds_left,
                urgent: t.seconds_left <= 1,
            },
        );

        if t.hide_cards {
            self.set_phase(Phase::Hidden);
            self.emit(&mut step, RoundEvent::CardsHidden);
        }

        if t.expired {
            self.end_round(&mut step);
        } else {
            step.wakeup = Some(Wakeup::second(epoch));
        }

        step
    }

    /// Пауза между раундами истекла: сдаём следующий раунд.
    pub fn deal_due(&mut self, epoch: Epoch) -> Step {
        let mut step = Step::default();

        if let Err(err) = self.check_epoch(epoch) {
            debug!(%err, "deal wakeup ignored");
            return step;
        }
        let waiting_for_deal = self.phase() == Phase::Dealing
            && !self.clock.running
            && self.session.as_ref().is_some_and(|s| s.has_rounds_left());
        if !waiting_for_deal {
            debug!(epoch, phase = ?self.phase(), "unexpected deal wakeup ignored");
            return step;
        }

        self.deal(&mut step);
        step
    }

    /// Прервать игру (пользователь вышел). `GameOver` не отправляется,
    /// аренда освобождается, все запланированные тики становятся no-op.
    pub fn abort(&mut self) -> Step {
        let mut step = Step::default();
        if !self.is_running() {
            return step;
        }

        self.clock.clear();
        let rounds_played = match self.session.as_mut() {
            Some(session) => {
                session.phase = Phase::Finished;
                session.time_remaining_in_phase = 0;
                session.aborted = true;
                session.rounds_played
            }
            None => 0,
        };
        self.release_lease();

        info!(epoch = ?self.epoch(), rounds_played, "session aborted");
        self.emit(&mut step, RoundEvent::Aborted { rounds_played });
        step
    }

    fn check_epoch(&self, epoch: Epoch) -> Result<(), EngineError> {
        let current = self.epoch();
        if current != Some(epoch) {
            return Err(EngineError::StaleTick { got: epoch, current });
        }
        Ok(())
    }

    /// Сдача: по одной карте каждой стороне, независимо и с возвращением.
    fn deal(&mut self, step: &mut Step) {
        self.set_phase(Phase::Dealing);

        let player_card = Card::new(Rank::draw(&mut self.rng));
        let computer_card = Card::new(Rank::draw(&mut self.rng));
        let result = RoundResult::compare(player_card, computer_card);

        self.clock.start_round(&self.rules);
        let reveal_secs = self.rules.reveal_secs;

        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.record_round(result);
        session.phase = Phase::Revealed;
        session.time_remaining_in_phase = reveal_secs;

        let event = RoundEvent::CardsDealt {
            round: session.rounds_played,
            player_card,
            computer_card,
            result,
            player_score: session.player_score,
            computer_score: session.computer_score,
        };
        let epoch = session.epoch;

        self.emit(step, event);
        step.wakeup = Some(Wakeup::second(epoch));
    }

    fn end_round(&mut self, step: &mut Step) {
        self.clock.clear();

        let Some((epoch, rounds_left)) = self
            .session
            .as_ref()
            .map(|s| (s.epoch, s.has_rounds_left()))
        else {
            return;
        };
        if !rounds_left {
            self.finish(step);
            return;
        }

        self.set_phase(Phase::Dealing);

        let pause = self.rules.inter_round_pause();
        if pause.is_zero() {
            self.deal(step);
        } else {
            step.wakeup = Some(Wakeup::deal_due(epoch, pause));
        }
    }

    fn finish(&mut self, step: &mut Step) {
        self.clock.clear();

        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.phase = Phase::Finished;
        session.time_remaining_in_phase = 0;

        let winner = session.winner();
        let event = RoundEvent::GameOver {
            winner,
            player_score: session.player_score,
            computer_score: session.computer_score,
        };
        info!(
            epoch = session.epoch,
            ?winner,
            player_score = session.player_score,
            computer_score = session.computer_score,
            "game over"
        );

        self.emit(step, event);
        step.wakeup = None;
        self.release_lease();
    }

    fn set_phase(&mut self, phase: Phase) {
        if let Some(session) = self.session.as_mut() {
            session.phase = phase;
        }
    }

    fn release_lease(&mut self) {
        if let Some(mut lease) = self.lease.take() {
            lease.release();
        }
    }

    fn emit(&mut self, step: &mut Step, event: RoundEvent) {
        self.history.push(event.clone());
        step.events.push(event);
    }
}
