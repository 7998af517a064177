//! Тесты леджера: анте, ставки, котёл.

use tripoli_engine::domain::*;

fn heart(rank: Rank) -> Card {
    Suit::Hearts.rank(rank)
}

#[test]
fn new_ledger_has_five_counter_pots() {
    let l = Ledger::new([10, 20]).unwrap();
    let pots: Vec<Card> = l.stakes().keys().copied().collect();
    assert_eq!(pots, counters().to_vec());
    assert_eq!(l.score(10), Some(Points::ZERO));
    assert_eq!(l.score(30), None);
}

#[test]
fn ante_moves_k_plus_one_points() {
    let mut l = Ledger::new([1, 2, 3]).unwrap();
    l.ante(1).unwrap();

    assert_eq!(l.score(1), Some(Points(-6)));
    assert_eq!(l.score(2), Some(Points::ZERO));
    assert!(l.stakes().values().all(|&v| v == Points(1)));
    assert_eq!(l.kitty(), Points(1));

    l.ante(2).unwrap();
    l.ante(3).unwrap();
    assert!(l.stakes().values().all(|&v| v == Points(3)));
    assert_eq!(l.kitty(), Points(3));
    assert_eq!(l.total(), Points::ZERO);
}

#[test]
fn collect_takes_whole_pot_once() {
    let mut l = Ledger::new([1, 2]).unwrap();
    l.ante(1).unwrap();
    l.ante(2).unwrap();

    assert_eq!(l.collect(2, heart(Rank::King)).unwrap(), Points(2));
    assert_eq!(l.score(2), Some(Points(-4)));
    assert_eq!(l.stake(heart(Rank::King)), Points::ZERO);

    // Второй раз – no-op.
    assert_eq!(l.collect(2, heart(Rank::King)).unwrap(), Points::ZERO);
    assert_eq!(l.score(2), Some(Points(-4)));

    // Не-счётная карта – no-op.
    assert_eq!(l.collect(1, heart(Rank::Nine)).unwrap(), Points::ZERO);
    assert_eq!(l.score(1), Some(Points(-6)));
    assert_eq!(l.total(), Points::ZERO);
}

#[test]
fn pay_and_collect_kitty() {
    let mut l = Ledger::new([1, 2, 3]).unwrap();
    l.pay_kitty(2, Points(4)).unwrap();
    l.pay_kitty(3, Points(1)).unwrap();
    assert_eq!(l.kitty(), Points(5));
    assert_eq!(l.score(2), Some(Points(-4)));

    assert_eq!(l.collect_kitty(1).unwrap(), Points(5));
    assert_eq!(l.score(1), Some(Points(5)));
    assert_eq!(l.kitty(), Points::ZERO);
    assert_eq!(l.total(), Points::ZERO);
}

#[test]
fn ledger_round_trips_through_json() {
    let mut l = Ledger::new([1, 2]).unwrap();
    l.ante(1).unwrap();
    l.pay_kitty(2, Points(3)).unwrap();

    let json = serde_json::to_string(&l).unwrap();
    let back: Ledger = serde_json::from_str(&json).unwrap();
    assert_eq!(back, l);
}
