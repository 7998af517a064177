use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Card, Color, Points, SeatIndex};
use crate::engine::Player;

/// Всегда ходит с младшей масти.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinorFirst;

impl Player for MinorFirst {
    fn init(&mut self, _: usize, _: SeatIndex, _: &[Card], _: &BTreeMap<Card, Points>, _: Points) {}

    fn note(&mut self, _: SeatIndex, _: Card) {}

    fn play_major(&mut self, _: Color) -> bool {
        false
    }
}

/// Всегда ходит со старшей масти.
#[derive(Clone, Copy, Debug, Default)]
pub struct MajorFirst;

impl Player for MajorFirst {
    fn init(&mut self, _: usize, _: SeatIndex, _: &[Card], _: &BTreeMap<Card, Points>, _: Points) {}

    fn note(&mut self, _: SeatIndex, _: Card) {}

    fn play_major(&mut self, _: Color) -> bool {
        true
    }
}

/// Выбирает масть подбрасыванием монетки. С seed – воспроизводимо.
#[derive(Clone, Debug)]
pub struct RandomChoice {
    rng: StdRng,
}

impl RandomChoice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomChoice {
    fn init(&mut self, _: usize, _: SeatIndex, _: &[Card], _: &BTreeMap<Card, Points>, _: Points) {}

    fn note(&mut self, _: SeatIndex, _: Card) {}

    fn play_major(&mut self, _: Color) -> bool {
        self.rng.gen_bool(0.5)
    }
}
