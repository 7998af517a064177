//! Тесты игры целиком: раздача, уведомления игроков, сохранение фишек.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use proptest::prelude::*;
use tripoli_engine::ai::{LongestSuit, MajorFirst, MinorFirst};
use tripoli_engine::domain::*;
use tripoli_engine::engine::{
    EngineError, Game, Player, PlayerEntry, RoundEventKind, RoundOutcome,
};
use tripoli_engine::infra::{DeterministicRng, IdentityRng};

/// Что игрок узнал за раунд.
#[derive(Default, Debug)]
struct Log {
    players: usize,
    seat: SeatIndex,
    hand: Vec<Card>,
    stake: BTreeMap<Card, Points>,
    kitty: Points,
    inits: usize,
    notes: Vec<(SeatIndex, Card)>,
}

/// Игрок, который всё записывает и всегда ходит с младшей масти.
struct Recorder(Rc<RefCell<Log>>);

impl Player for Recorder {
    fn init(
        &mut self,
        players: usize,
        seat: SeatIndex,
        hand: &[Card],
        stake: &BTreeMap<Card, Points>,
        kitty: Points,
    ) {
        let mut log = self.0.borrow_mut();
        log.players = players;
        log.seat = seat;
        log.hand = hand.to_vec();
        log.stake = stake.clone();
        log.kitty = kitty;
        log.inits += 1;
        log.notes.clear();
    }

    fn note(&mut self, seat: SeatIndex, card: Card) {
        self.0.borrow_mut().notes.push((seat, card));
    }

    fn play_major(&mut self, _: Color) -> bool {
        false
    }
}

fn recorders(n: u64) -> (Vec<PlayerEntry>, Vec<Rc<RefCell<Log>>>) {
    let logs: Vec<_> = (0..n).map(|_| Rc::new(RefCell::new(Log::default()))).collect();
    let entries = logs
        .iter()
        .enumerate()
        .map(|(i, log)| {
            PlayerEntry::new(
                PlayerProfile::new(i as u64 + 1, format!("p{i}")),
                Box::new(Recorder(Rc::clone(log))),
            )
        })
        .collect();
    (entries, logs)
}

#[test]
fn init_reports_hand_stakes_and_kitty() {
    let expected_counts: [(u64, Vec<usize>); 3] = [
        (2, vec![18, 17]),
        (3, vec![13, 13, 13]),
        (4, vec![11, 11, 10, 10]),
    ];

    for (n, counts) in expected_counts {
        let (entries, logs) = recorders(n);
        let mut game = Game::new(entries).unwrap();
        let summary = game.play_round(&mut IdentityRng).unwrap();

        for (i, log) in logs.iter().enumerate() {
            let log = log.borrow();
            assert_eq!(log.inits, 1);
            assert_eq!(log.players, n as usize);
            // IdentityRng не перемешивает: место = порядок в списке.
            assert_eq!(log.seat as usize, i);
            assert_eq!(log.hand.len(), counts[i]);
            assert!(log.hand.windows(2).all(|w| w[0] < w[1]));
            assert!(log.stake.values().all(|&v| v == Points(n as i64)));
            assert_eq!(log.kitty, Points(n as i64));
            // Каждый видит каждую сыгранную карту.
            assert_eq!(log.notes, summary.history.plays());
        }
    }
}

#[test]
fn hands_partition_the_held_cards() {
    let (entries, logs) = recorders(5);
    let mut game = Game::new(entries).unwrap();
    game.play_round(&mut DeterministicRng::from_seed(42)).unwrap();

    let mut seen = HashSet::new();
    let mut total = 0;
    for log in &logs {
        for &c in &log.borrow().hand {
            assert!(seen.insert(c), "card {c} dealt twice");
            total += 1;
        }
    }
    // Пять игроков + лишняя рука: 52 / 6, лишней руке достаётся 8 карт.
    assert_eq!(total, 52 - 8);
}

#[test]
fn only_own_cards_are_played_by_seat() {
    let (entries, logs) = recorders(3);
    let mut game = Game::new(entries).unwrap();
    let summary = game.play_round(&mut DeterministicRng::from_seed(7)).unwrap();

    for log in &logs {
        let log = log.borrow();
        for (seat, card) in summary.history.plays() {
            if seat == log.seat {
                assert!(log.hand.contains(&card));
            }
        }
    }
}

#[test]
fn game_rejects_bad_player_lists() {
    let one = vec![PlayerEntry::new(PlayerProfile::new(1, "solo"), Box::new(MinorFirst))];
    assert_eq!(Game::new(one).err(), Some(EngineError::NotEnoughPlayers(1)));

    let dup = vec![
        PlayerEntry::new(PlayerProfile::new(1, "a"), Box::new(MinorFirst)),
        PlayerEntry::new(PlayerProfile::new(1, "b"), Box::new(MajorFirst)),
    ];
    assert_eq!(Game::new(dup).err(), Some(EngineError::DuplicatePlayer(1)));

    let (ten, _) = recorders(10);
    assert_eq!(Game::new(ten).err(), Some(EngineError::TooManyPlayers(10)));
}

fn stock_game(n: usize) -> Game {
    let entries = (0..n)
        .map(|i| {
            let agent: Box<dyn Player> = match i % 3 {
                0 => Box::new(MinorFirst),
                1 => Box::new(MajorFirst),
                _ => Box::new(LongestSuit::default()),
            };
            PlayerEntry::new(PlayerProfile::new(i as u64 + 100, format!("p{i}")), agent)
        })
        .collect();
    Game::new(entries).unwrap()
}

#[test]
fn same_seed_same_rounds() {
    let mut a = stock_game(4);
    let mut b = stock_game(4);
    let ra = a.play(5, &mut DeterministicRng::from_seed(2024)).unwrap();
    let rb = b.play(5, &mut DeterministicRng::from_seed(2024)).unwrap();
    assert_eq!(ra, rb);
    assert_eq!(a.ledger(), b.ledger());
    assert_eq!(a.rounds_played(), 5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn chips_are_conserved(seed in any::<u64>(), n in 2usize..=9, rounds in 1u32..4) {
        let mut game = stock_game(n);
        let mut rng = DeterministicRng::from_seed(seed);

        for _ in 0..rounds {
            let summary = game.play_round(&mut rng).unwrap();
            prop_assert_eq!(game.ledger().total(), Points::ZERO);

            // Ни одна карта не сыграна дважды.
            let plays = summary.history.plays();
            let unique: HashSet<Card> = plays.iter().map(|&(_, c)| c).collect();
            prop_assert_eq!(unique.len(), plays.len());

            let settled = summary
                .history
                .kinds()
                .filter(|k| matches!(k, RoundEventKind::Settled { .. }))
                .count();
            prop_assert_eq!(settled, n);

            match summary.outcome {
                RoundOutcome::Won { seat, .. } => {
                    prop_assert_eq!(summary.remaining[seat as usize], 0);
                    prop_assert_eq!(game.ledger().kitty(), Points::ZERO);
                }
                RoundOutcome::NoWinner { kitty } => {
                    prop_assert!(summary.remaining.iter().all(|&r| r > 0));
                    prop_assert_eq!(game.ledger().kitty(), kitty);
                }
            }
        }
    }
}
