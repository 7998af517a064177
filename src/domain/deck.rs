use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Suit, DECK_SIZE};
use crate::domain::SeatIndex;

/// Где сейчас лежит карта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Location {
    /// У игрока на этом месте.
    Seat(SeatIndex),
    /// Уже сыграна или ушла в лишнюю руку.
    Out,
}

/// Раскладка колоды: для каждой из 52 карт – место, где она лежит.
///
/// Индексируется номером карты. Переход `Seat -> Out` происходит
/// ровно один раз и никогда не откатывается.
/// В JSON – список из 52 мест; другая длина не десериализуется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<Location>", into = "Vec<Location>")]
pub struct Deck {
    cards: [Location; DECK_SIZE],
}

/// Длина раскладки не равна 52.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("в раскладке должно быть 52 карты, получено {0}")]
pub struct DeckSizeError(pub usize);

impl TryFrom<Vec<Location>> for Deck {
    type Error = DeckSizeError;

    fn try_from(cards: Vec<Location>) -> Result<Self, Self::Error> {
        let len = cards.len();
        let cards: [Location; DECK_SIZE] = cards.try_into().map_err(|_| DeckSizeError(len))?;
        Ok(Deck { cards })
    }
}

impl From<Deck> for Vec<Location> {
    fn from(deck: Deck) -> Self {
        deck.cards.to_vec()
    }
}

impl Deck {
    /// Все карты вне игры.
    pub fn empty() -> Self {
        Deck {
            cards: [Location::Out; DECK_SIZE],
        }
    }

    /// Раскладка из списка владельцев: `None` – карта вне игры.
    /// Длина должна быть ровно 52.
    pub fn from_holders(holders: &[Option<SeatIndex>]) -> Option<Self> {
        if holders.len() != DECK_SIZE {
            return None;
        }
        let mut deck = Deck::empty();
        for (slot, h) in deck.cards.iter_mut().zip(holders) {
            *slot = h.map_or(Location::Out, Location::Seat);
        }
        Some(deck)
    }

    /// Раздать перемешанную колоду: `order[i]` – позиция карты `i` после
    /// перемешивания. Карта уходит на место `order[i] % (seats + 1)`;
    /// последняя цель – лишняя рука, её карты сразу вне игры.
    pub fn deal(order: &[u8; DECK_SIZE], seats: usize) -> Self {
        let targets = seats + 1;
        let mut deck = Deck::empty();
        for (slot, &v) in deck.cards.iter_mut().zip(order) {
            let target = v as usize % targets;
            if target < seats {
                *slot = Location::Seat(target as SeatIndex);
            }
        }
        deck
    }

    pub fn location(&self, card: Card) -> Location {
        self.cards[card.index() as usize]
    }

    /// Кто держит карту (если кто-то держит).
    pub fn holder(&self, card: Card) -> Option<SeatIndex> {
        match self.location(card) {
            Location::Seat(s) => Some(s),
            Location::Out => None,
        }
    }

    /// Убрать карту из игры. Возвращает прежнего владельца.
    pub fn remove(&mut self, card: Card) -> Option<SeatIndex> {
        let prev = self.holder(card);
        self.cards[card.index() as usize] = Location::Out;
        prev
    }

    /// Рука игрока по возрастанию номеров карт.
    pub fn hand(&self, seat: SeatIndex) -> Vec<Card> {
        Card::all().filter(|&c| self.holder(c) == Some(seat)).collect()
    }

    pub fn count(&self, seat: SeatIndex) -> usize {
        self.cards
            .iter()
            .filter(|&&l| l == Location::Seat(seat))
            .count()
    }

    /// Младшая карта масти у игрока.
    pub fn lowest(&self, seat: SeatIndex, suit: Suit) -> Option<Card> {
        suit.cards().find(|&c| self.holder(c) == Some(seat))
    }

    /// Сколько карт вне игры (сыграны + лишняя рука).
    pub fn out_count(&self) -> usize {
        self.cards.iter().filter(|&&l| l == Location::Out).count()
    }

    /// Младшая карта колоды, которая ещё у кого-то на руках.
    pub fn lowest_held(&self) -> Option<Card> {
        Card::all().find(|&c| self.holder(c).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Rank;

    #[test]
    fn deal_identity_order_balances_hands() {
        let order: [u8; DECK_SIZE] = std::array::from_fn(|i| i as u8);
        let deck = Deck::deal(&order, 4);
        let counts: Vec<usize> = (0..4).map(|s| deck.count(s)).collect();
        assert_eq!(counts, vec![11, 11, 10, 10]);
        assert_eq!(deck.out_count(), 10);
    }

    #[test]
    fn lowest_scans_upwards() {
        let mut holders = vec![None; DECK_SIZE];
        holders[Suit::Spades.rank(Rank::Five).index() as usize] = Some(1);
        holders[Suit::Spades.rank(Rank::Nine).index() as usize] = Some(1);
        let deck = Deck::from_holders(&holders).unwrap();

        assert_eq!(deck.lowest(1, Suit::Spades), Some(Suit::Spades.rank(Rank::Five)));
        assert_eq!(deck.lowest(1, Suit::Clubs), None);
        assert_eq!(deck.lowest(0, Suit::Spades), None);
    }

    #[test]
    fn remove_is_one_way() {
        let mut deck = Deck::from_holders(&[Some(0); DECK_SIZE]).unwrap();
        let c = Suit::Hearts.rank(Rank::Ace);
        assert_eq!(deck.remove(c), Some(0));
        assert_eq!(deck.remove(c), None);
        assert_eq!(deck.out_count(), 1);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(Deck::from_holders(&[Some(0); 3]), None);
        assert_eq!(Deck::try_from(vec![Location::Out; 3]), Err(DeckSizeError(3)));
        assert!(serde_json::from_str::<Deck>(r#"["Out","Out"]"#).is_err());
    }

    #[test]
    fn json_keeps_all_slots() {
        let order: [u8; DECK_SIZE] = std::array::from_fn(|i| i as u8);
        let deck = Deck::deal(&order, 2);
        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deck);
        assert_eq!(back.count(0), deck.count(0));
    }
}
