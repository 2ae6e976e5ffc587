use knightfall::perft::{divide, perft};
use knightfall::Position;

#[test]
fn perft_startpos_small_depths() {
    let mut p = Position::startpos();
    assert_eq!(perft(&mut p, 1).unwrap(), 20);
    assert_eq!(perft(&mut p, 2).unwrap(), 400);
    assert_eq!(perft(&mut p, 3).unwrap(), 8902);
    assert_eq!(perft(&mut p, 4).unwrap(), 197281);
    assert_eq!(p.ply(), 0);
}

#[test]
fn perft_kiwipete_exercises_special_moves() {
    // castling, en passant and promotions all appear within two plies
    let mut p = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    let before = p.to_string();
    assert_eq!(perft(&mut p, 1).unwrap(), 48);
    assert_eq!(perft(&mut p, 2).unwrap(), 2039);
    assert_eq!(perft(&mut p, 3).unwrap(), 97862);
    assert_eq!(p.to_string(), before);
}

#[test]
fn divide_sums_to_perft() {
    let mut p = Position::startpos();
    let split = divide(&mut p, 3).unwrap();
    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8902);
}
