use crate::board::cozy::Position;
use crate::error::Result;

/// Leaf count at `depth`, walking the tree with push/pop on a single position.
pub fn perft(pos: &mut Position, depth: u32) -> Result<u64> {
    if depth == 0 { return Ok(1); }
    let moves = pos.legal_moves();
    if depth == 1 { return Ok(moves.len() as u64); }
    let mut nodes = 0u64;
    for mv in moves {
        pos.push(mv)?;
        let sub = perft(pos, depth - 1);
        pos.pop()?;
        nodes += sub?;
    }
    Ok(nodes)
}

/// Per-root-move leaf counts, in generation order.
pub fn divide(pos: &mut Position, depth: u32) -> Result<Vec<(String, u64)>> {
    let mut out = Vec::new();
    for mv in pos.legal_moves() {
        let uci = pos.to_uci(mv);
        pos.push(mv)?;
        let sub = perft(pos, depth.saturating_sub(1));
        pos.pop()?;
        out.push((uci, sub?));
    }
    Ok(out)
}
