use super::*;
use crate::Position;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

#[test]
fn random_mover_returns_legal_move() {
    let mut mover = RandomMover::new();
    let pos = Position::startpos();

    let mv = mover.select_move(&pos);

    assert!(mv.is_some());
    assert!(pos.legal_moves().contains(&mv.unwrap()));
}

#[test]
fn random_mover_handles_checkmate() {
    let mut mover = RandomMover::new();
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();

    assert!(mover.select_move(&pos).is_none());
}

#[test]
fn random_mover_handles_stalemate() {
    let mut mover = RandomMover::new();
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    assert!(mover.select_move(&pos).is_none());
}

#[test]
fn random_mover_is_close_to_uniform() {
    let mut mover = RandomMover::with_rng(StdRng::seed_from_u64(7));
    let pos = Position::startpos();
    let legal = pos.legal_moves();
    let trials = 4000;

    let mut counts = HashMap::new();
    for _ in 0..trials {
        let mv = mover.select_move(&pos).unwrap();
        *counts.entry(pos.to_uci(mv)).or_insert(0u32) += 1;
    }

    // 20 moves, 200 expected each; the band is about six standard deviations
    assert_eq!(counts.len(), legal.len());
    for (mv, count) in counts {
        assert!((120..=280).contains(&count), "{mv} chosen {count} times");
    }
}

#[test]
fn seeded_movers_agree() {
    let pos = Position::startpos();
    let mut a = RandomMover::with_rng(StdRng::seed_from_u64(42));
    let mut b = RandomMover::with_rng(StdRng::seed_from_u64(42));
    for _ in 0..10 {
        assert_eq!(a.select_move(&pos), b.select_move(&pos));
    }
}
