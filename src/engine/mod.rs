//! Движок Триполи (мичиганская часть): раунд как детерминированный автомат.
//!
//! Высокоуровневые объекты:
//!   - `Round` – один раунд: анте, раздача, серии, пасы, расчёт котла;
//!   - `Game` – набор игроков и общий леджер на несколько раундов.
//!
//! Решения игроков и случайность приходят снаружи через трейты
//! `Player` и `RandomSource`.

pub mod errors;
pub mod game;
pub mod positions;
pub mod round;
pub mod round_history;

use std::collections::BTreeMap;

use crate::domain::{Card, Color, Points, SeatIndex};

pub use errors::EngineError;
pub use game::{Game, PlayerEntry};
pub use round::{Round, RoundOutcome, RoundSummary, MAX_PLAYERS, MIN_PLAYERS};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Участник игры с точки зрения движка.
///
/// Все методы вызываются синхронно: движок ждёт ответа, прежде чем
/// двигаться дальше.
pub trait Player {
    /// Сообщает число игроков, место игрока (от дилера), его карты,
    /// ставки на счётных картах и котёл. Вызывается раз за раунд,
    /// после анте и до начала игры.
    fn init(
        &mut self,
        players: usize,
        seat: SeatIndex,
        hand: &[Card],
        stake: &BTreeMap<Card, Points>,
        kitty: Points,
    );

    /// Вызывается у всех игроков (включая сыгравшего) на каждую сыгранную карту.
    fn note(&mut self, seat: SeatIndex, card: Card);

    /// Ходить ли со старшей масти цвета. Вызывается только если у игрока
    /// есть карты и в младшей, и в старшей масти.
    fn play_major(&mut self, color: Color) -> bool;
}
