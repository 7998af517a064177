// src/bin/tripoli_dev_cli.rs

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use tripoli_engine::engine::{Game, RandomSource, RoundOutcome, RoundSummary};
use tripoli_engine::infra::{DeterministicRng, SystemRng};
use tripoli_engine::{ConfigError, GameConfig};

#[derive(Parser)]
#[command(name = "tripoli_dev_cli")]
#[command(about = "Прогон нескольких раундов Триполи с готовыми игроками")]
struct Args {
    /// JSON-конфиг игры (без него – четыре готовых игрока)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Число раундов (перекрывает конфиг)
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Seed RNG (перекрывает конфиг)
    #[arg(long)]
    seed: Option<u64>,

    /// Подробный лог (каждая карта)
    #[arg(short, long)]
    verbose: bool,

    /// Печатать итог каждого раунда в JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut cfg = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(r) = args.rounds {
        cfg.rounds = r;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }

    let mut game = cfg.build_game()?;
    info!(players = cfg.players.len(), rounds = cfg.rounds, "starting");

    match cfg.seed {
        Some(seed) => run(&mut game, &cfg, &mut DeterministicRng::from_seed(seed), args.json)?,
        None => run(&mut game, &cfg, &mut SystemRng, args.json)?,
    }

    println!();
    println!("================ FINAL LEDGER =================");
    print_ledger(&game);
    Ok(())
}

fn run<R: RandomSource>(
    game: &mut Game,
    cfg: &GameConfig,
    rng: &mut R,
    json: bool,
) -> Result<(), ConfigError> {
    for _ in 0..cfg.rounds {
        let summary = game.play_round(rng)?;
        if json {
            match serde_json::to_string(&summary) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("не удалось сериализовать раунд: {e}"),
            }
        } else {
            print_round(game, &summary);
        }
    }
    Ok(())
}

fn name_of(game: &Game, id: u64) -> String {
    game.players()
        .find(|p| p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}

fn print_round(game: &Game, summary: &RoundSummary) {
    println!();
    println!("================ ROUND {} =================", game.rounds_played());
    let seating: Vec<String> = summary.seating.iter().map(|&id| name_of(game, id)).collect();
    println!("seating: {}", seating.join(", "));
    println!("cards played: {}", summary.history.plays().len());
    match &summary.outcome {
        RoundOutcome::Won {
            player_id, kitty, ..
        } => println!("winner: {} (kitty {})", name_of(game, *player_id), kitty),
        RoundOutcome::NoWinner { kitty } => println!("no winner, kitty stays at {kitty}"),
    }
    print_ledger(game);
}

fn print_ledger(game: &Game) {
    let ledger = game.ledger();
    for (id, score) in ledger.scores() {
        println!("  {:>10} | score={}", name_of(game, id), score);
    }
    let stakes: Vec<String> = ledger
        .stakes()
        .iter()
        .map(|(card, v)| format!("{card}={v}"))
        .collect();
    println!("  stakes: {}", stakes.join(" "));
    println!("  kitty: {}", ledger.kitty());
}
