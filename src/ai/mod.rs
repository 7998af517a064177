//! Готовые игроки: простые стратегии выбора масти для первого хода серии.

pub mod basic;
pub mod longest_suit;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::engine::Player;

pub use basic::{MajorFirst, MinorFirst, RandomChoice};
pub use longest_suit::LongestSuit;

/// Тип готового игрока (для конфига и CLI).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Minor,
    Major,
    LongestSuit,
    Random,
}

/// Создать игрока по типу. `seed` нужен только случайному игроку.
pub fn create_player(kind: PlayerKind, seed: u64) -> Box<dyn Player> {
    match kind {
        PlayerKind::Minor => Box::new(MinorFirst),
        PlayerKind::Major => Box::new(MajorFirst),
        PlayerKind::LongestSuit => Box::new(LongestSuit::default()),
        PlayerKind::Random => Box::new(RandomChoice::new(seed)),
    }
}
