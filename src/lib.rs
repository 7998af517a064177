//! Движок раунда Триполи (мичиганская часть).
//!
//! - `domain` – карты, очки, раскладка колоды, леджер;
//! - `engine` – раунд и игра из нескольких раундов;
//! - `infra` – реализации RNG;
//! - `ai` – готовые игроки;
//! - `config` – JSON-конфиг для dev-CLI.

pub mod ai;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;

pub use config::{ConfigError, GameConfig, PlayerConfig};
pub use domain::{Card, Color, Ledger, PlayerId, Points, Rank, SeatIndex, Suit};
pub use engine::{EngineError, Game, Player, PlayerEntry, RandomSource, Round, RoundOutcome, RoundSummary};
