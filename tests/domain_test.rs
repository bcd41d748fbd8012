//! Интеграционные тесты для доменной модели (crate::domain).

use highcard_engine::domain::*;

/// Стоимости рангов: 2..10, туз = 11.
#[test]
fn rank_values_and_order() {
    let values: Vec<u8> = Rank::ALL.iter().map(|r| r.value()).collect();
    assert_eq!(values, vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

    assert!(Rank::Ace > Rank::Ten);
    assert!(Rank::Ten > Rank::Nine);
    assert!(Rank::Three > Rank::Two);

    for (i, r) in Rank::ALL.iter().enumerate() {
        assert_eq!(r.index(), i);
    }
}

/// Парсинг и отображение рангов.
#[test]
fn rank_parse_and_display() {
    assert_eq!("A".parse::<Rank>().unwrap(), Rank::Ace);
    assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
    assert_eq!("T".parse::<Rank>().unwrap(), Rank::Ten);
    assert_eq!("7".parse::<Card>().unwrap(), Card::new(Rank::Seven));

    assert!("K".parse::<Rank>().is_err(), "no kings in this deck");
    assert!("1".parse::<Rank>().is_err());

    assert_eq!(Card::new(Rank::Ace).to_string(), "A");
    assert_eq!(Card::new(Rank::Ten).to_string(), "10");
    assert_eq!(Card::new(Rank::Two).to_string(), "2");
}

/// Старшая карта выигрывает, равные дают push.
#[test]
fn round_result_compare() {
    let r = RoundResult::compare(Card::new(Rank::Ace), Card::new(Rank::Ten));
    assert_eq!(r.outcome, RoundOutcome::PlayerWins);

    let r = RoundResult::compare(Card::new(Rank::Four), Card::new(Rank::Nine));
    assert_eq!(r.outcome, RoundOutcome::ComputerWins);

    let r = RoundResult::compare(Card::new(Rank::Two), Card::new(Rank::Two));
    assert_eq!(r.outcome, RoundOutcome::Push);
    assert!(r.is_push());
}

/// Push увеличивает счётчик раундов, но не очки.
#[test]
fn session_record_round_scores() {
    let mut s = GameSession::new(1, "Alice".into(), 3);

    s.record_round(RoundResult::compare(Card::new(Rank::Ace), Card::new(Rank::Ten)));
    s.record_round(RoundResult::compare(Card::new(Rank::Two), Card::new(Rank::Two)));
    s.record_round(RoundResult::compare(Card::new(Rank::Five), Card::new(Rank::Six)));

    assert_eq!(s.rounds_played, 3);
    assert_eq!(s.player_score, 1);
    assert_eq!(s.computer_score, 1);
    assert!(!s.has_rounds_left());
    assert_eq!(s.winner(), Winner::Tie);
    assert_eq!(
        s.last_round.map(|r| r.outcome),
        Some(RoundOutcome::ComputerWins)
    );
}

#[test]
fn winner_from_scores() {
    assert_eq!(Winner::from_scores(2, 1), Winner::Player);
    assert_eq!(Winner::from_scores(0, 1), Winner::Computer);
    assert_eq!(Winner::from_scores(0, 0), Winner::Tie);
}

/// Подпись победителя для финального экрана.
#[test]
fn summary_winner_label() {
    let mut s = GameSession::new(7, "Dana".into(), 2);
    s.record_round(RoundResult::compare(Card::new(Rank::Ace), Card::new(Rank::Two)));
    assert_eq!(s.summary().winner_label(), "Dana");
    assert_eq!(s.summary().score_line(), (1, 0));

    let mut s = GameSession::new(8, "Dana".into(), 2);
    s.record_round(RoundResult::compare(Card::new(Rank::Two), Card::new(Rank::Ace)));
    assert_eq!(s.summary().winner_label(), "PC");
    assert_eq!(s.summary().score_line(), (1, 0));

    let s = GameSession::new(9, "Dana".into(), 0);
    assert_eq!(s.summary().winner_label(), "Tie");
}

#[test]
fn phase_is_running() {
    assert!(!Phase::Idle.is_running());
    assert!(Phase::Dealing.is_running());
    assert!(Phase::Revealed.is_running());
    assert!(Phase::Hidden.is_running());
    assert!(!Phase::Finished.is_running());
}
