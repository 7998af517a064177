use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Количество карт в колоде.
pub const DECK_SIZE: usize = 52;

/// Количество рангов в масти.
pub const RANKS_PER_SUIT: u8 = 13;

/// Масть карты. Порядок важен: он задаёт порядковый номер карты.
/// Трефы и бубны — «младшие» масти, пики и червы — «старшие».
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Spades,   // ♠
    Hearts,   // ♥
}

/// Ранг карты. Туз старший.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// Цвет масти: чётные масти чёрные, нечётные красные.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    pub const fn is_major(self) -> bool {
        matches!(self, Suit::Spades | Suit::Hearts)
    }

    /// Карта этой масти заданного ранга.
    pub const fn rank(self, rank: Rank) -> Card {
        Card::new(self, rank)
    }

    /// Все карты масти по возрастанию ранга.
    pub fn cards(self) -> impl Iterator<Item = Card> {
        Rank::ALL.into_iter().map(move |r| Card::new(self, r))
    }
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// Карта этого ранга в заданной масти.
    pub const fn suit(self, suit: Suit) -> Card {
        Card::new(suit, self)
    }
}

impl Color {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Color::Black),
            1 => Some(Color::Red),
            _ => None,
        }
    }

    /// Младшая масть цвета (трефы или бубны).
    pub const fn minor(self) -> Suit {
        match self {
            Color::Black => Suit::Clubs,
            Color::Red => Suit::Diamonds,
        }
    }

    /// Старшая масть цвета (пики или червы).
    pub const fn major(self) -> Suit {
        match self {
            Color::Black => Suit::Spades,
            Color::Red => Suit::Hearts,
        }
    }

    pub const fn opp(self) -> Color {
        match self {
            Color::Black => Color::Red,
            Color::Red => Color::Black,
        }
    }
}

/// Карта как порядковый номер `suit * 13 + rank` в диапазоне 0..52.
///
/// Внутри масти номера растут вместе с рангом, поэтому «младшую карту масти»
/// можно искать простым подъёмом по номерам.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card(suit.index() * RANKS_PER_SUIT + rank.index())
    }

    pub fn from_index(i: u8) -> Option<Self> {
        ((i as usize) < DECK_SIZE).then_some(Card(i))
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANKS_PER_SUIT) as usize]
    }

    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 % RANKS_PER_SUIT) as usize]
    }

    pub fn color(self) -> Color {
        self.suit().color()
    }

    /// Следующая карта той же масти (на ранг выше), если она есть.
    pub fn next_in_suit(self) -> Option<Card> {
        (self.rank() != Rank::Ace).then_some(Card(self.0 + 1))
    }

    /// Вся колода в порядке номеров: ♣2..♣A, ♦2..♦A, ♠2..♠A, ♥2..♥A.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).map(Card)
    }
}

impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

impl TryFrom<u8> for Card {
    type Error = String;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Card::from_index(i).ok_or_else(|| format!("Card index out of range: {i}"))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Spades => 's',
            Suit::Hearts => 'h',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];
        write!(f, "{}", CHARS[self.index() as usize])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::Red => write!(f, "red"),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// Парсинг строки вида "Ah", "Td", "7c".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r_ch), Some(s_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err("Card string must have length 2".into());
        };

        let rank = match r_ch.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(format!("Invalid rank: {r_ch}")),
        };

        let suit = match s_ch.to_ascii_lowercase() {
            'c' => Suit::Clubs,
            'd' => Suit::Diamonds,
            's' => Suit::Spades,
            'h' => Suit::Hearts,
            _ => return Err(format!("Invalid suit: {s_ch}")),
        };

        Ok(Card::new(suit, rank))
    }
}

/// Ранги «счётных» карт, на которые ставятся ставки.
pub const COUNTER_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Счётные карты: десятка, валет, дама, король и туз старшей красной масти.
pub fn counters() -> [Card; 5] {
    COUNTER_RANKS.map(|r| Color::Red.major().rank(r))
}
