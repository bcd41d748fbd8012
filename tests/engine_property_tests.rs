//! Property-тесты движка: произвольные последовательности тиков,
//! wakeup'ов, abort'ов и рестартов не ломают инварианты сессии.

use proptest::prelude::*;

use highcard_engine::domain::Phase;
use highcard_engine::engine::{RoundEngine, RoundEvent};
use highcard_engine::infra::{DeterministicRng, SessionGuard};
use highcard_engine::time_ctrl::RoundRules;

#[derive(Clone, Debug)]
enum Op {
    Tick,
    DealDue,
    StaleTick,
    Abort,
    Start,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => Just(Op::Tick),
        3 => Just(Op::DealDue),
        1 => Just(Op::StaleTick),
        1 => Just(Op::Abort),
        1 => Just(Op::Start),
    ]
}

fn rules_strategy() -> impl Strategy<Value = RoundRules> {
    (0u32..6, 1u32..6, 0u32..6, 0u64..2_000).prop_map(|(max_rounds, reveal, lead, pause)| {
        RoundRules::new(max_rounds, reveal, lead % reveal, pause)
    })
}

proptest! {
    #[test]
    fn invariants_hold_for_any_op_sequence(
        seed in any::<u64>(),
        rules in rules_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..200),
    ) {
        let guard = SessionGuard::new();
        let mut engine = RoundEngine::new(guard.clone(), DeterministicRng::from_seed(seed));
        engine.start("Alice", rules.clone()).unwrap();

        for op in ops {
            let epoch = engine.epoch().unwrap();
            match op {
                Op::Tick => { engine.tick(epoch); }
                Op::DealDue => { engine.deal_due(epoch); }
                Op::StaleTick => {
                    let before = engine.session().cloned();
                    prop_assert!(engine.tick(epoch.wrapping_add(1)).is_empty());
                    prop_assert!(engine.deal_due(epoch.wrapping_sub(1)).is_empty());
                    prop_assert_eq!(engine.session().cloned(), before);
                }
                Op::Abort => { engine.abort(); }
                Op::Start => {
                    let running = engine.is_running();
                    let res = engine.start("Alice", rules.clone());
                    prop_assert_eq!(res.is_err(), running);
                }
            }

            let s = engine.session().unwrap();
            prop_assert!(s.player_score + s.computer_score <= s.rounds_played);
            prop_assert!(s.rounds_played <= s.max_rounds);
            prop_assert!(s.time_remaining_in_phase <= rules.reveal_secs);
            prop_assert_eq!(guard.is_active(), engine.is_running());
            prop_assert_eq!(engine.holds_lease(), engine.is_running());

            let game_overs = engine
                .history()
                .iter()
                .filter(|e| matches!(e, RoundEvent::GameOver { .. }))
                .count();
            prop_assert!(game_overs <= 1);
            if s.aborted {
                prop_assert_eq!(game_overs, 0);
            }
        }
    }

    #[test]
    fn every_round_lasts_exactly_reveal_ticks(
        seed in any::<u64>(),
        rules in rules_strategy(),
    ) {
        let mut engine = RoundEngine::new(SessionGuard::new(), DeterministicRng::from_seed(seed));
        let mut step = engine.start("Alice", rules.clone()).unwrap();
        let epoch = engine.epoch().unwrap();

        // Считаем TimerTick между сдачей и концом раунда.
        let mut ticks_in_round: Option<u32> = None;
        let mut ticks_before_hide = 0u32;
        let mut hidden = false;
        let mut rounds_seen = 0u32;
        let mut guard_steps = 0;

        loop {
            for ev in &step.events {
                match ev {
                    RoundEvent::CardsDealt { .. } => {
                        prop_assert!(ticks_in_round.is_none() || ticks_in_round == Some(rules.reveal_secs));
                        ticks_in_round = Some(0);
                        ticks_before_hide = 0;
                        hidden = false;
                        rounds_seen += 1;
                    }
                    RoundEvent::TimerTick { .. } => {
                        if let Some(n) = ticks_in_round.as_mut() { *n += 1; }
                        if !hidden { ticks_before_hide += 1; }
                    }
                    RoundEvent::CardsHidden => {
                        hidden = true;
                        prop_assert_eq!(ticks_before_hide, rules.reveal_secs - rules.hide_lead_secs);
                    }
                    RoundEvent::GameOver { .. } => {
                        if rules.max_rounds > 0 {
                            prop_assert_eq!(ticks_in_round, Some(rules.reveal_secs));
                        }
                    }
                    _ => {}
                }
            }

            let Some(wakeup) = step.wakeup else { break };
            step = highcard_engine::time_ctrl::deliver(&mut engine, wakeup);
            prop_assert_eq!(wakeup.epoch, epoch);

            guard_steps += 1;
            prop_assert!(guard_steps < 1_000);
        }

        prop_assert_eq!(rounds_seen, rules.max_rounds);
        prop_assert_eq!(engine.phase(), Phase::Finished);
    }
}
