use knightfall::search::ordering::{move_priority, order_moves};
use knightfall::Position;

fn priority(fen: &str, uci: &str) -> i32 {
    let pos = Position::from_fen(fen).expect("valid fen");
    let mv = pos.parse_uci(uci).expect("legal move");
    move_priority(&pos, mv)
}

#[test]
fn captures_come_first() {
    let fen = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1";
    assert_eq!(priority(fen, "e4d5"), 10);
    assert_eq!(priority(fen, "e4e5"), 2);
    assert_eq!(priority(fen, "e1d1"), 0);
}

#[test]
fn capture_with_check_counts_as_capture() {
    assert_eq!(priority("4k3/8/8/8/4r3/8/8/4RK2 w - - 0 1", "e1e4"), 10);
}

#[test]
fn checking_moves() {
    let fen = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1";
    assert_eq!(priority(fen, "a1a8"), 5);
    assert_eq!(priority(fen, "a1a2"), 0);
}

#[test]
fn central_pawn_origins_and_central_landings() {
    let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    assert_eq!(priority(start, "e2e4"), 3);
    assert_eq!(priority(start, "d2d3"), 3);
    assert_eq!(priority(start, "g1f3"), 0);
    assert_eq!(priority(start, "c2c4"), 0);

    let black = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
    assert_eq!(priority(black, "e7e5"), 3);
    assert_eq!(priority(black, "d7d6"), 3);

    let knight = "4k3/8/8/8/8/2N5/8/4K3 w - - 0 1";
    assert_eq!(priority(knight, "c3d5"), 2);
    assert_eq!(priority(knight, "c3e4"), 2);
    assert_eq!(priority(knight, "c3b5"), 0);
}

#[test]
fn order_direction_follows_maximizing_flag() {
    let pos = Position::from_fen("4k3/8/8/3p4/4P3/2N5/8/4K3 w - - 0 1").unwrap();
    let mut desc = pos.legal_moves();
    order_moves(&pos, &mut desc, true);
    let pri: Vec<i32> = desc.iter().map(|&m| move_priority(&pos, m)).collect();
    assert!(pri.windows(2).all(|w| w[0] >= w[1]), "{pri:?}");
    assert_eq!(pri[0], 10);

    let mut asc = pos.legal_moves();
    order_moves(&pos, &mut asc, false);
    let pri: Vec<i32> = asc.iter().map(|&m| move_priority(&pos, m)).collect();
    assert!(pri.windows(2).all(|w| w[0] <= w[1]), "{pri:?}");
    assert_eq!(*pri.last().unwrap(), 10);
}
