//! Доменная модель Триполи: карты, очки, раскладка колоды, леджер.

pub mod card;
pub mod deck;
pub mod ledger;
pub mod player;
pub mod points;

// Базовые идентификаторы
pub type PlayerId = u64;

/// Индекс места в раздаче (0..игроков-1), считая от дилера.
pub type SeatIndex = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use ledger::*;
pub use player::*;
pub use points::*;
