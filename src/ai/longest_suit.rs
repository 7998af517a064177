use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Card, Color, Points, SeatIndex, Suit};
use crate::engine::Player;

/// Следит за своей рукой и начинает серию с той масти, где карт больше.
/// При равенстве – со старшей: в ней счётные карты.
#[derive(Clone, Debug, Default)]
pub struct LongestSuit {
    seat: SeatIndex,
    hand: BTreeSet<Card>,
}

impl LongestSuit {
    pub fn hand(&self) -> &BTreeSet<Card> {
        &self.hand
    }

    fn held(&self, suit: Suit) -> usize {
        self.hand.iter().filter(|c| c.suit() == suit).count()
    }
}

impl Player for LongestSuit {
    fn init(
        &mut self,
        _players: usize,
        seat: SeatIndex,
        hand: &[Card],
        _stake: &BTreeMap<Card, Points>,
        _kitty: Points,
    ) {
        self.seat = seat;
        self.hand = hand.iter().copied().collect();
    }

    fn note(&mut self, seat: SeatIndex, card: Card) {
        if seat == self.seat {
            self.hand.remove(&card);
        }
    }

    fn play_major(&mut self, color: Color) -> bool {
        self.held(color.major()) >= self.held(color.minor())
    }
}
