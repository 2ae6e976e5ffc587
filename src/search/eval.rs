use cozy_chess::{Color, Square};

use crate::board::cozy::Position;
use crate::config::{EvalConfig, PieceValues};
use crate::search::pst::PieceSquareTables;

/// Evaluation score; positive favours White.
pub type Score = f64;

// Mate scoring helpers
pub const MATE_SCORE: Score = 9999.0;
pub const DRAW_SCORE: Score = 0.0;

/// The side whose gains count positively.
pub const MAXIMIZING: Color = Color::White;

const ENDGAME_MATERIAL: i32 = 3000;
const OPENING_MATERIAL: i32 = 5000;
const PST_WEIGHT: Score = 0.1;
const MOBILITY_WEIGHT: Score = 0.1;
const CHECK_PENALTY: Score = 50.0;
const CASTLING_BONUS: Score = 30.0;
const CENTER_BONUS: Score = 10.0;

#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    values: PieceValues,
    tables: PieceSquareTables,
}

impl Evaluator {
    pub fn new(cfg: EvalConfig) -> Self {
        Self { values: cfg.piece_values, tables: cfg.tables }
    }

    pub fn values(&self) -> &PieceValues { &self.values }

    pub fn tables(&self) -> &PieceSquareTables { &self.tables }

    /// Static score of `pos` from White's point of view. Does not touch the position.
    pub fn evaluate(&self, pos: &Position) -> Score {
        let white_to_move = pos.side_to_move() == MAXIMIZING;
        if pos.is_checkmate() {
            // the side to move is the one that got mated
            return if white_to_move { -MATE_SCORE } else { MATE_SCORE };
        }
        if pos.is_stalemate() || pos.is_insufficient_material() {
            return DRAW_SCORE;
        }

        let mut score: Score = 0.0;
        let mut material_count = 0i32;
        for sq in Square::ALL {
            let Some((piece, color)) = pos.piece_at(sq) else { continue };
            let value = self.values.of(piece);
            material_count += value;
            // Phase signal is the running total so far, not the final count.
            let bonus = self.tables.bonus(piece, color, sq, material_count < ENDGAME_MATERIAL);
            let term = value as Score + bonus as Score * PST_WEIGHT;
            if color == MAXIMIZING { score += term; } else { score -= term; }
        }

        // Only the side to move's mobility is counted.
        let mobility = pos.legal_moves_count() as Score * MOBILITY_WEIGHT;
        if white_to_move { score += mobility; } else { score -= mobility; }

        if pos.is_check() {
            if white_to_move { score -= CHECK_PENALTY; } else { score += CHECK_PENALTY; }
        }

        if pos.has_castling_rights(Color::White) { score += CASTLING_BONUS; }
        if pos.has_castling_rights(Color::Black) { score -= CASTLING_BONUS; }

        if material_count > OPENING_MATERIAL {
            let occupied = |sq: Square| pos.piece_at(sq).is_some();
            if occupied(Square::E4) || occupied(Square::D4) { score += CENTER_BONUS; }
            if occupied(Square::E5) || occupied(Square::D5) { score -= CENTER_BONUS; }
        }

        score
    }
}
