use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::{Card, Color, DECK_SIZE};
use crate::domain::deck::{Deck, Location};
use crate::domain::ledger::{Ledger, LedgerError};
use crate::domain::points::Points;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::errors::EngineError;
use crate::engine::game::PlayerEntry;
use crate::engine::positions::seats_from;
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::RandomSource;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 9;

/// Чем закончился раунд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Игрок сбросил последнюю карту и забрал котёл.
    Won {
        seat: SeatIndex,
        player_id: PlayerId,
        kitty: Points,
    },
    /// Ни у кого не нашлось карт нужного цвета; котёл остаётся на следующий раунд.
    NoWinner { kitty: Points },
}

/// Краткое описание завершённого раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundSummary {
    /// Рассадка: индекс = место.
    pub seating: Vec<PlayerId>,
    pub outcome: RoundOutcome,
    /// Сколько карт осталось у каждого места к концу игры (до расчёта).
    pub remaining: Vec<usize>,
    pub history: RoundHistory,
}

impl RoundSummary {
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            RoundOutcome::Won { player_id, .. } => Some(player_id),
            RoundOutcome::NoWinner { .. } => None,
        }
    }
}

/// Проверка состава игроков: 2..=9 без повторов.
pub(crate) fn check_players(players: &[PlayerEntry]) -> Result<(), EngineError> {
    let n = players.len();
    if n < MIN_PLAYERS {
        return Err(EngineError::NotEnoughPlayers(n));
    }
    if n > MAX_PLAYERS {
        return Err(EngineError::TooManyPlayers(n));
    }
    let mut seen = HashSet::with_capacity(n);
    for p in players {
        if !seen.insert(p.profile.id) {
            return Err(EngineError::DuplicatePlayer(p.profile.id));
        }
    }
    Ok(())
}

/// Все игроки должны быть заведены в леджере до первого списания.
fn check_registered(ledger: &Ledger, players: &[PlayerEntry]) -> Result<(), EngineError> {
    match players.iter().find(|p| ledger.score(p.profile.id).is_none()) {
        Some(p) => Err(LedgerError::UnknownPlayer(p.profile.id).into()),
        None => Ok(()),
    }
}

/// Один раунд. Живёт от раздачи до расчёта; после него остаются только
/// изменения в леджере и `RoundSummary`.
pub struct Round<'a> {
    ledger: &'a mut Ledger,
    players: &'a mut [PlayerEntry],
    /// Место -> индекс в `players`.
    seating: Vec<usize>,
    /// Сколько карт на руках у каждого места.
    counts: Vec<usize>,
    deck: Deck,
    history: RoundHistory,
}

impl<'a> Round<'a> {
    /// Старт раунда:
    /// - анте за каждого игрока;
    /// - случайная рассадка;
    /// - раздача на `n + 1` рук (лишняя рука сразу уходит из игры);
    /// - `init` у каждого игрока.
    pub fn deal<R: RandomSource>(
        ledger: &'a mut Ledger,
        players: &'a mut [PlayerEntry],
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        check_players(players)?;
        check_registered(ledger, players)?;
        let n = players.len();

        let mut history = RoundHistory::new();
        let ante = Points::from_count(ledger.stakes().len()) + Points::ONE;
        for p in players.iter() {
            ledger.ante(p.profile.id)?;
            history.push(RoundEventKind::Anted {
                player_id: p.profile.id,
                paid: ante,
            });
        }

        let mut seating: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut seating);

        let mut order: [u8; DECK_SIZE] = std::array::from_fn(|i| i as u8);
        rng.shuffle(&mut order);
        let deck = Deck::deal(&order, n);

        let mut round = Self::assemble(ledger, players, seating, deck, history);
        round.notify_init();
        Ok(round)
    }

    /// Раунд с заданной рассадкой и раскладкой (реплей, тесты).
    /// Анте не берётся и `init` не вызывается.
    pub fn from_layout(
        ledger: &'a mut Ledger,
        players: &'a mut [PlayerEntry],
        seating: Vec<usize>,
        deck: Deck,
    ) -> Result<Self, EngineError> {
        check_players(players)?;
        check_registered(ledger, players)?;
        let n = players.len();

        let mut sorted = seating.clone();
        sorted.sort_unstable();
        if sorted != (0..n).collect::<Vec<_>>() {
            return Err(EngineError::SeatingMismatch);
        }
        let stray = Card::all().any(|c| matches!(deck.location(c), Location::Seat(s) if s as usize >= n));
        if stray {
            return Err(EngineError::SeatingMismatch);
        }

        Ok(Self::assemble(ledger, players, seating, deck, RoundHistory::new()))
    }

    fn assemble(
        ledger: &'a mut Ledger,
        players: &'a mut [PlayerEntry],
        seating: Vec<usize>,
        deck: Deck,
        mut history: RoundHistory,
    ) -> Self {
        let counts: Vec<usize> = (0..seating.len())
            .map(|s| deck.count(s as SeatIndex))
            .collect();

        history.push(RoundEventKind::RoundStarted {
            seating: seating.iter().map(|&i| players[i].profile.id).collect(),
        });
        for (seat, &count) in counts.iter().enumerate() {
            history.push(RoundEventKind::Dealt {
                seat: seat as SeatIndex,
                count,
            });
        }

        Self {
            ledger,
            players,
            seating,
            counts,
            deck,
            history,
        }
    }

    fn notify_init(&mut self) {
        let n = self.seating.len();
        let stake = self.ledger.stakes();
        let kitty = self.ledger.kitty();
        for seat in 0..n {
            let hand = self.deck.hand(seat as SeatIndex);
            let idx = self.seating[seat];
            self.players[idx]
                .agent
                .init(n, seat as SeatIndex, &hand, &stake, kitty);
        }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn ledger(&self) -> &Ledger {
        self.ledger
    }

    /// ID игрока на месте.
    pub fn player_id(&self, seat: SeatIndex) -> PlayerId {
        self.players[self.seating[seat as usize]].profile.id
    }

    pub fn seating(&self) -> Vec<PlayerId> {
        (0..self.seating.len())
            .map(|s| self.player_id(s as SeatIndex))
            .collect()
    }

    /// Все 52 карты либо на руках, либо вне игры.
    fn is_consistent(&self) -> bool {
        self.counts.iter().sum::<usize>() + self.deck.out_count() == DECK_SIZE
    }

    /// Первый ход – младшая трефа на руках. Если двойка треф ушла в лишнюю
    /// руку, ходит следующая по старшинству и т.д.
    pub fn first_lead(&self) -> Option<Card> {
        self.deck.lowest_held()
    }

    /// Сыграть карту: убрать из раскладки, снять ставку, оповестить всех.
    fn play_card(&mut self, card: Card) -> Result<SeatIndex, EngineError> {
        let seat = self.deck.holder(card).ok_or(EngineError::CardNotHeld(card))?;
        let player_id = self.player_id(seat);
        let collected = self.ledger.collect(player_id, card)?;

        self.deck.remove(card);
        self.counts[seat as usize] -= 1;
        debug!(seat, player_id, %card, collected = collected.0, "card played");

        self.history.push(RoundEventKind::CardPlayed {
            seat,
            card,
            collected,
        });

        for s in 0..self.seating.len() {
            let idx = self.seating[s];
            self.players[idx].agent.note(seat, card);
        }

        debug_assert!(self.is_consistent());
        Ok(seat)
    }

    /// Серия: карты масти подряд от `lead`, пока следующая карта у кого-то
    /// на руках и пока у сыгравшего остаются карты.
    ///
    /// Возвращает место сыгравшего последнюю карту и флаг победы
    /// (он сбросил последнюю карту).
    pub fn play_run(&mut self, lead: Card) -> Result<(SeatIndex, bool), EngineError> {
        let mut card = lead;
        let mut last = self.play_card(card)?;
        loop {
            if self.counts[last as usize] == 0 {
                return Ok((last, true));
            }
            match card.next_in_suit() {
                Some(next) if self.deck.holder(next).is_some() => {
                    last = self.play_card(next)?;
                    card = next;
                }
                _ => return Ok((last, false)),
            }
        }
    }

    /// Передача хода после серии: начиная с `pos` по кругу ищем игрока
    /// с картами цвета `color`. Игрок без таких карт пасует и платит очко
    /// в котёл. Если при обходе никто не нашёлся – `None`, раунд без победителя.
    pub fn next_lead(
        &mut self,
        pos: SeatIndex,
        color: Color,
    ) -> Result<Option<Card>, EngineError> {
        for seat in seats_from(pos, self.seating.len()) {
            let minor = self.deck.lowest(seat, color.minor());
            let major = self.deck.lowest(seat, color.major());

            let lead = match (minor, major) {
                (Some(minor), Some(major)) => {
                    let idx = self.seating[seat as usize];
                    if self.players[idx].agent.play_major(color) {
                        major
                    } else {
                        minor
                    }
                }
                (None, Some(major)) => major,
                (Some(minor), None) => minor,
                (None, None) => {
                    let player_id = self.player_id(seat);
                    self.ledger.pay_kitty(player_id, Points::ONE)?;
                    debug!(seat, player_id, %color, "passed");
                    self.history
                        .push(RoundEventKind::LeadPassed { seat, color });
                    continue;
                }
            };

            debug!(seat, %lead, "lead");
            self.history
                .push(RoundEventKind::LeadChosen { seat, card: lead });
            return Ok(Some(lead));
        }
        Ok(None)
    }

    /// Каждый платит в котёл по очку за оставшуюся на руках карту.
    fn settle(&mut self) -> Result<(), EngineError> {
        for seat in 0..self.seating.len() {
            let paid = Points::from_count(self.counts[seat]);
            let seat = seat as SeatIndex;
            self.ledger.pay_kitty(self.player_id(seat), paid)?;
            self.history.push(RoundEventKind::Settled { seat, paid });
        }
        Ok(())
    }

    /// Сыграть раунд до конца: серии и передачи хода чередуются, пока кто-то
    /// не сбросит все карты или пока никто не сможет начать новую серию.
    pub fn play(mut self) -> Result<RoundSummary, EngineError> {
        let mut lead = self.first_lead().ok_or(EngineError::EmptyDeal)?;

        let (pos, won) = loop {
            let (pos, won) = self.play_run(lead)?;
            if won {
                break (pos, true);
            }
            match self.next_lead(pos, lead.color().opp())? {
                Some(next) => lead = next,
                None => break (pos, false),
            }
        };

        let remaining = self.counts.clone();
        self.settle()?;

        let outcome = if won {
            let player_id = self.player_id(pos);
            let kitty = self.ledger.collect_kitty(player_id)?;
            self.history.push(RoundEventKind::KittyCollected {
                seat: pos,
                amount: kitty,
            });
            info!(seat = pos, player_id, kitty = kitty.0, "round won");
            RoundOutcome::Won {
                seat: pos,
                player_id,
                kitty,
            }
        } else {
            let kitty = self.ledger.kitty();
            info!(kitty = kitty.0, "round finished without a winner");
            RoundOutcome::NoWinner { kitty }
        };

        self.history.push(RoundEventKind::RoundFinished {
            winner: won.then_some(pos),
        });

        Ok(RoundSummary {
            seating: self.seating(),
            outcome,
            remaining,
            history: self.history,
        })
    }
}
