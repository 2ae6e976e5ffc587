use cozy_chess::{Color, Piece, Square};
use serde::Deserialize;

use crate::error::EngineError;

/// Tables are written for White and indexed by square (a1 = 0). Black reads the
/// rotated square `63 - sq`.
pub const PAWN: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

pub const KNIGHT: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

pub const BISHOP: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

pub const ROOK: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

pub const QUEEN: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

pub const KING_MIDDLEGAME: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

/// Square seen from the other side of the board.
#[inline]
pub fn mirror(sq: Square) -> Square {
    Square::index(63 - sq as usize)
}

/// One 64-entry table per piece type, immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TableFile")]
pub struct PieceSquareTables {
    tables: [[i32; 64]; Piece::NUM],
}

impl Default for PieceSquareTables {
    fn default() -> Self {
        Self { tables: [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING_MIDDLEGAME] }
    }
}

impl PieceSquareTables {
    pub fn table(&self, piece: Piece) -> &[i32; 64] { &self.tables[piece as usize] }

    /// Positional bonus for `piece` of `color` on `sq`.
    ///
    /// `is_endgame` is accepted for a future endgame king table; only the
    /// middlegame table exists, so the flag does not change the result.
    pub fn bonus(&self, piece: Piece, color: Color, sq: Square, _is_endgame: bool) -> i32 {
        let idx = match color {
            Color::White => sq,
            Color::Black => mirror(sq),
        };
        self.tables[piece as usize][idx as usize]
    }
}

/// On-disk form of the tables; every field must hold exactly 64 entries.
#[derive(Deserialize)]
struct TableFile {
    pawn: Vec<i32>,
    knight: Vec<i32>,
    bishop: Vec<i32>,
    rook: Vec<i32>,
    queen: Vec<i32>,
    king: Vec<i32>,
}

fn to_table(name: &str, v: Vec<i32>) -> Result<[i32; 64], EngineError> {
    let len = v.len();
    v.try_into().map_err(|_| EngineError::Config(format!("{name} table has {len} entries, expected 64")))
}

impl TryFrom<TableFile> for PieceSquareTables {
    type Error = EngineError;

    fn try_from(f: TableFile) -> Result<Self, Self::Error> {
        Ok(Self {
            tables: [
                to_table("pawn", f.pawn)?,
                to_table("knight", f.knight)?,
                to_table("bishop", f.bishop)?,
                to_table("rook", f.rook)?,
                to_table("queen", f.queen)?,
                to_table("king", f.king)?,
            ],
        })
    }
}
