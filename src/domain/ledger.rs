use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{counters, Card};
use crate::domain::points::Points;
use crate::domain::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Игрок {0} не зарегистрирован в игре")]
    UnknownPlayer(PlayerId),

    #[error("Игрок {0} уже зарегистрирован в игре")]
    DuplicatePlayer(PlayerId),
}

/// Сквозное состояние игры между раундами: счёт игроков, ставки на
/// счётных картах и котёл.
///
/// Каждая операция — отдельный перевод очков. Фишки не создаются и не
/// исчезают, поэтому `total()` у свежего леджера всегда равен нулю.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledger {
    score: BTreeMap<PlayerId, Points>,
    stake: BTreeMap<Card, Points>,
    kitty: Points,
}

impl Ledger {
    /// Открыть нулевой счёт каждому игроку и нулевую ставку на каждой счётной карте.
    pub fn new<I>(players: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = PlayerId>,
    {
        let mut score = BTreeMap::new();
        for id in players {
            if score.insert(id, Points::ZERO).is_some() {
                return Err(LedgerError::DuplicatePlayer(id));
            }
        }
        let stake = counters().into_iter().map(|c| (c, Points::ZERO)).collect();
        Ok(Self {
            score,
            stake,
            kitty: Points::ZERO,
        })
    }

    pub fn score(&self, player: PlayerId) -> Option<Points> {
        self.score.get(&player).copied()
    }

    /// Копия счёта всех игроков.
    pub fn scores(&self) -> BTreeMap<PlayerId, Points> {
        self.score.clone()
    }

    /// Ставка на карте (ноль для не-счётных карт).
    pub fn stake(&self, card: Card) -> Points {
        self.stake.get(&card).copied().unwrap_or_default()
    }

    /// Копия всех ставок – её получают игроки в `init`.
    pub fn stakes(&self) -> BTreeMap<Card, Points> {
        self.stake.clone()
    }

    pub fn kitty(&self) -> Points {
        self.kitty
    }

    /// Сумма всех счетов, ставок и котла.
    pub fn total(&self) -> Points {
        self.score.values().sum::<Points>() + self.stake.values().sum::<Points>() + self.kitty
    }

    fn account(&mut self, player: PlayerId) -> Result<&mut Points, LedgerError> {
        self.score
            .get_mut(&player)
            .ok_or(LedgerError::UnknownPlayer(player))
    }

    /// Анте: по одному очку в каждую ставку и ещё одно в котёл.
    pub fn ante(&mut self, player: PlayerId) -> Result<(), LedgerError> {
        let pots = Points::from_count(self.stake.len());
        *self.account(player)? -= pots + Points::ONE;
        for pot in self.stake.values_mut() {
            *pot += Points::ONE;
        }
        self.kitty += Points::ONE;
        Ok(())
    }

    /// Забрать ставку с сыгранной карты. Для обычных карт и пустых ставок – no-op.
    /// Возвращает, сколько забрано.
    pub fn collect(&mut self, player: PlayerId, card: Card) -> Result<Points, LedgerError> {
        let amount = self.stake(card);
        if amount.is_zero() {
            // Проверяем игрока даже при пустой ставке.
            self.account(player)?;
            return Ok(Points::ZERO);
        }
        *self.account(player)? += amount;
        self.stake.insert(card, Points::ZERO);
        Ok(amount)
    }

    pub fn pay_kitty(&mut self, player: PlayerId, n: Points) -> Result<(), LedgerError> {
        *self.account(player)? -= n;
        self.kitty += n;
        Ok(())
    }

    /// Победитель забирает весь котёл. Возвращает выплаченную сумму.
    pub fn collect_kitty(&mut self, player: PlayerId) -> Result<Points, LedgerError> {
        let kitty = self.kitty;
        *self.account(player)? += kitty;
        self.kitty = Points::ZERO;
        Ok(kitty)
    }
}
