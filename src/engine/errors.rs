use crate::domain::{Card, LedgerError, PlayerId};

use thiserror::Error;

/// Ошибки движка раунда.
///
/// Сама игра ошибок не знает: колода и рассадка строятся движком.
/// Ошибки возможны только на входе (неправильный состав игроков,
/// неправильная ручная раскладка) и при рассинхроне с леджером.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недостаточно игроков для раунда: {0}")]
    NotEnoughPlayers(usize),

    #[error("Слишком много игроков для раунда: {0}")]
    TooManyPlayers(usize),

    #[error("Игрок {0} указан дважды")]
    DuplicatePlayer(PlayerId),

    #[error("Рассадка не соответствует списку игроков")]
    SeatingMismatch,

    #[error("Ни у кого нет карт на руках")]
    EmptyDeal,

    #[error("Карту {0} никто не держит")]
    CardNotHeld(Card),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
