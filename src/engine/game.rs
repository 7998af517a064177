use tracing::info;

use crate::domain::ledger::Ledger;
use crate::domain::player::PlayerProfile;
use crate::engine::errors::EngineError;
use crate::engine::round::{check_players, Round, RoundSummary};
use crate::engine::{Player, RandomSource};

/// Игрок за столом: профиль + тот, кто принимает решения.
pub struct PlayerEntry {
    pub profile: PlayerProfile,
    pub agent: Box<dyn Player>,
}

impl PlayerEntry {
    pub fn new(profile: PlayerProfile, agent: Box<dyn Player>) -> Self {
        Self { profile, agent }
    }
}

/// Игра: игроки и общий леджер, который переживает раунды.
///
/// Раунды на одном леджере идут строго по очереди – `play_round`
/// берёт `&mut self` на всё время раунда.
pub struct Game {
    players: Vec<PlayerEntry>,
    ledger: Ledger,
    rounds_played: u64,
}

impl Game {
    pub fn new(players: Vec<PlayerEntry>) -> Result<Self, EngineError> {
        check_players(&players)?;
        let ledger = Ledger::new(players.iter().map(|p| p.profile.id))?;
        Ok(Self {
            players,
            ledger,
            rounds_played: 0,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerProfile> {
        self.players.iter().map(|p| &p.profile)
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Сыграть один раунд на общем леджере.
    pub fn play_round<R: RandomSource>(&mut self, rng: &mut R) -> Result<RoundSummary, EngineError> {
        let round = Round::deal(&mut self.ledger, &mut self.players, rng)?;
        let summary = round.play()?;
        self.rounds_played += 1;
        info!(
            round = self.rounds_played,
            winner = ?summary.winner(),
            kitty = self.ledger.kitty().0,
            "round complete"
        );
        Ok(summary)
    }

    /// Сыграть несколько раундов подряд.
    pub fn play<R: RandomSource>(
        &mut self,
        rounds: u32,
        rng: &mut R,
    ) -> Result<Vec<RoundSummary>, EngineError> {
        (0..rounds).map(|_| self.play_round(rng)).collect()
    }
}
