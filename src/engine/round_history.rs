use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color};
use crate::domain::points::Points;
use crate::domain::{PlayerId, SeatIndex};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Игроки рассажены (индекс вектора = место).
    RoundStarted { seating: Vec<PlayerId> },

    /// Игрок внёс анте.
    Anted { player_id: PlayerId, paid: Points },

    /// Игрок получил карты.
    Dealt { seat: SeatIndex, count: usize },

    /// Сыграна карта (и, возможно, снята ставка с неё).
    CardPlayed {
        seat: SeatIndex,
        card: Card,
        collected: Points,
    },

    /// У игрока нет карт нужного цвета – пас и очко в котёл.
    LeadPassed { seat: SeatIndex, color: Color },

    /// Игрок начинает новую серию с этой карты.
    LeadChosen { seat: SeatIndex, card: Card },

    /// Расчёт в конце раунда: оставшиеся карты в котёл.
    Settled { seat: SeatIndex, paid: Points },

    /// Победитель забрал котёл.
    KittyCollected { seat: SeatIndex, amount: Points },

    /// Раунд завершён.
    RoundFinished { winner: Option<SeatIndex> },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn kinds(&self) -> impl Iterator<Item = &RoundEventKind> {
        self.events.iter().map(|e| &e.kind)
    }

    /// Сыгранные карты в порядке розыгрыша.
    pub fn plays(&self) -> Vec<(SeatIndex, Card)> {
        self.kinds()
            .filter_map(|k| match k {
                RoundEventKind::CardPlayed { seat, card, .. } => Some((*seat, *card)),
                _ => None,
            })
            .collect()
    }
}
