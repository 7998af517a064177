//! Конфиг игры: состав игроков, число раундов, seed.
//!
//! Хранится как JSON, например:
//! ```json
//! {
//!   "rounds": 20,
//!   "seed": 7,
//!   "players": [
//!     { "id": 1, "name": "Alice", "kind": "longest_suit" },
//!     { "id": 2, "name": "Bob", "kind": "minor" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::{create_player, PlayerKind};
use crate::domain::{PlayerId, PlayerProfile};
use crate::engine::{EngineError, Game, PlayerEntry, MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Битый JSON в конфиге: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerConfig {
    pub id: PlayerId,
    pub name: String,
    pub kind: PlayerKind,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub players: Vec<PlayerConfig>,
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    /// Без seed – системный RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_rounds() -> u32 {
    10
}

impl Default for GameConfig {
    /// Четыре готовых игрока разных типов, 10 раундов.
    fn default() -> Self {
        let kinds = [
            ("North", PlayerKind::LongestSuit),
            ("East", PlayerKind::Minor),
            ("South", PlayerKind::Major),
            ("West", PlayerKind::Random),
        ];
        let players = kinds
            .iter()
            .enumerate()
            .map(|(i, (name, kind))| PlayerConfig {
                id: i as PlayerId + 1,
                name: (*name).to_string(),
                kind: *kind,
            })
            .collect();
        Self {
            players,
            rounds: default_rounds(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
            return Err(ConfigError::Invalid(format!(
                "нужно от {MIN_PLAYERS} до {MAX_PLAYERS} игроков, указано {n}"
            )));
        }
        let mut ids = HashSet::new();
        for p in &self.players {
            if !ids.insert(p.id) {
                return Err(ConfigError::Invalid(format!("повторный id игрока {}", p.id)));
            }
        }
        Ok(())
    }

    /// Собрать игру. Seed случайных игроков выводится из общего seed и id игрока.
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        self.validate()?;
        let base = self.seed.unwrap_or_else(rand::random);
        let players = self
            .players
            .iter()
            .map(|p| {
                PlayerEntry::new(
                    PlayerProfile::new(p.id, p.name.clone()),
                    create_player(p.kind, base ^ p.id),
                )
            })
            .collect();
        Ok(Game::new(players)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.players.len(), 4);
        assert_eq!(cfg.rounds, 10);
    }

    #[test]
    fn rounds_default_when_missing() {
        let cfg = GameConfig::from_json(
            r#"{"players":[{"id":1,"name":"a","kind":"minor"},{"id":2,"name":"b","kind":"longest_suit"}]}"#,
        )
        .unwrap();
        assert_eq!(cfg.rounds, 10);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.players[1].kind, PlayerKind::LongestSuit);
    }

    #[test]
    fn seeded_config_builds_reproducible_games() {
        let cfg = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        let mut a = cfg.build_game().unwrap();
        let mut b = cfg.build_game().unwrap();
        let mut ra = crate::infra::DeterministicRng::from_seed(11);
        let mut rb = crate::infra::DeterministicRng::from_seed(11);

        assert_eq!(a.play(3, &mut ra).unwrap(), b.play(3, &mut rb).unwrap());
        assert_eq!(a.ledger(), b.ledger());
        assert_eq!(a.ledger().total(), crate::domain::Points::ZERO);
    }

    #[test]
    fn single_player_rejected() {
        let err = GameConfig::from_json(r#"{"players":[{"id":1,"name":"a","kind":"minor"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
