// src/bin/highcard_dev_cli.rs
//
// Dev-CLI: одна игра в реальном времени в терминале.
//
//   highcard_dev_cli [ИМЯ] [rules.json]
//
// Переменные окружения:
//   RUST_LOG:       фильтр логов (по умолчанию info);
//   HIGHCARD_SEED:  seed для воспроизводимой сдачи.

use tracing_subscriber::EnvFilter;

use highcard_engine::domain::Winner;
use highcard_engine::engine::{RoundEngine, RoundEvent};
use highcard_engine::infra::{DeterministicRng, SessionGuard};
use highcard_engine::time_ctrl::{deliver, RoundRules};

/// Лимит шагов, чтобы dev-CLI не зациклился при баге в движке.
const MAX_STEPS: usize = 10_000;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let player_name = args.next().unwrap_or_else(|| "Player".to_string());

    let rules = match args.next() {
        Some(path) => match load_rules(&path) {
            Ok(rules) => rules,
            Err(err) => {
                eprintln!("[CLI] Не удалось загрузить правила из {path}: {err}");
                std::process::exit(2);
            }
        },
        None => RoundRules::standard(),
    };

    let seed = std::env::var("HIGHCARD_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);

    println!("highcard_dev_cli: {player_name} против PC, seed={seed}, правила={rules:?}");

    let mut engine = RoundEngine::new(SessionGuard::new(), DeterministicRng::from_seed(seed));
    let mut step = match engine.start(&player_name, rules) {
        Ok(step) => step,
        Err(err) => {
            eprintln!("[CLI] Не удалось начать игру: {err}");
            std::process::exit(1);
        }
    };

    for _ in 0..MAX_STEPS {
        for event in &step.events {
            print_event(&player_name, event);
        }
        let Some(wakeup) = step.wakeup else {
            break;
        };
        std::thread::sleep(wakeup.after);
        step = deliver(&mut engine, wakeup);
    }

    if let Some(summary) = engine.summary() {
        println!(
            "Победитель: {} ({}:{})",
            summary.winner_label(),
            summary.player_score,
            summary.computer_score
        );
    }
}

fn load_rules(path: &str) -> Result<RoundRules, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    RoundRules::from_json(&raw).map_err(|e| e.to_string())
}

fn print_event(player_name: &str, event: &RoundEvent) {
    match event {
        RoundEvent::SessionStarted { max_rounds, .. } => {
            println!("================ GAME ({max_rounds} раунд.) ================");
        }
        RoundEvent::CardsDealt {
            round,
            player_card,
            computer_card,
            result,
            player_score,
            computer_score,
        } => {
            println!(
                "[раунд {round}] {player_name}: {player_card} | PC: {computer_card} -> {:?} (счёт {player_score}:{computer_score})",
                result.outcome
            );
        }
        RoundEvent::TimerTick { seconds_left, urgent } => {
            let mark = if *urgent { "!" } else { "" };
            println!("  таймер: {seconds_left}{mark}");
        }
        RoundEvent::CardsHidden => println!("  карты закрыты"),
        RoundEvent::GameOver {
            winner,
            player_score,
            computer_score,
        } => {
            let who = match winner {
                Winner::Player => player_name,
                Winner::Computer => "PC",
                Winner::Tie => "ничья",
            };
            println!("============ GAME OVER: {who} ({player_score}:{computer_score}) ============");
        }
        RoundEvent::Aborted { rounds_played } => {
            println!("[CLI] игра прервана после {rounds_played} раунд.");
        }
    }
}
