use cozy_chess::Move;
use log::{debug, info, trace};

use crate::board::cozy::Position;
use crate::config::{EngineConfig, DEFAULT_DEPTH};
use crate::error::{EngineError, Result};
use crate::search::eval::{Evaluator, Score, MAXIMIZING};
use crate::search::ordering::order_moves;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    pub nodes: u64,
}

/// Fixed-depth minimax with alpha-beta pruning over a shared, mutable position.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    depth: u32,
    pub(crate) nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(DEFAULT_DEPTH) }
}

impl Searcher {
    pub fn new(depth: u32) -> Self {
        Self::with_evaluator(depth, Evaluator::default())
    }

    pub fn with_evaluator(depth: u32, evaluator: Evaluator) -> Self {
        Self { evaluator, depth: depth.max(1), nodes: 0 }
    }

    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self::with_evaluator(cfg.depth, Evaluator::new(cfg.eval.clone()))
    }

    pub fn depth(&self) -> u32 { self.depth }

    pub fn set_depth(&mut self, depth: u32) { self.depth = depth.max(1); }

    pub fn evaluator(&self) -> &Evaluator { &self.evaluator }

    /// Nodes visited by the last `search_root` (or accumulated by direct `search` calls).
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Minimax value of `pos` searched `depth` plies deep inside the `(alpha, beta)` window.
    ///
    /// Every move pushed here is popped before returning, including on a cutoff or
    /// when a deeper call fails.
    pub fn search(&mut self, pos: &mut Position, depth: u32, mut alpha: Score, mut beta: Score, maximizing: bool) -> Result<Score> {
        self.nodes += 1;
        if depth == 0 || pos.is_game_over() {
            return Ok(self.evaluator.evaluate(pos));
        }

        let mut moves = pos.legal_moves();
        order_moves(pos, &mut moves, maximizing);

        let mut best = if maximizing { Score::NEG_INFINITY } else { Score::INFINITY };
        for (idx, mv) in moves.iter().copied().enumerate() {
            pos.push(mv)?;
            let child = self.search(pos, depth - 1, alpha, beta, !maximizing);
            pos.pop()?;
            let score = child?;
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                trace!("cutoff at depth {} after {}/{} moves", depth, idx + 1, moves.len());
                break;
            }
        }
        Ok(best)
    }

    /// Search every root move and return the best one with its score.
    pub fn search_root(&mut self, pos: &mut Position) -> Result<SearchResult> {
        self.nodes = 0;
        let legal = pos.legal_moves();
        let Some(&first) = legal.first() else { return Err(EngineError::NoLegalMoves) };

        if legal.len() == 1 {
            pos.push(first)?;
            let score = self.evaluator.evaluate(pos);
            pos.pop()?;
            info!("only move {} score {:.1}", pos.to_uci(first), score);
            return Ok(SearchResult { best_move: first, score, nodes: 0 });
        }

        let maximizing = pos.side_to_move() == MAXIMIZING;
        let mut moves = legal;
        order_moves(pos, &mut moves, maximizing);

        let mut best_move: Option<Move> = None;
        let mut best_score = if maximizing { Score::NEG_INFINITY } else { Score::INFINITY };
        // One window for all root siblings, as in a single minimax call.
        let mut alpha = Score::NEG_INFINITY;
        let mut beta = Score::INFINITY;
        for mv in moves {
            pos.push(mv)?;
            let child = self.search(pos, self.depth - 1, alpha, beta, !maximizing);
            pos.pop()?;
            let score = child?;
            debug!("root move {} score {:.1}", pos.to_uci(mv), score);
            let improves = if maximizing { score > best_score } else { score < best_score };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
            if maximizing { alpha = alpha.max(score); } else { beta = beta.min(score); }
        }

        let best_move = best_move.unwrap_or(first);
        info!("bestmove {} score {:.1} depth {} nodes {}", pos.to_uci(best_move), best_score, self.depth, self.nodes);
        Ok(SearchResult { best_move, score: best_score, nodes: self.nodes })
    }

    /// Select the engine's move for the side to move in `pos`.
    pub fn select_best_move(&mut self, pos: &mut Position) -> Result<Move> {
        Ok(self.search_root(pos)?.best_move)
    }
}
