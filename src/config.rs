use std::path::Path;

use cozy_chess::Piece;
use serde::Deserialize;

use crate::error::{EngineError, Result};
use crate::search::pst::PieceSquareTables;

pub const DEFAULT_DEPTH: u32 = 3;

/// Material values in centipawns. The king value only feeds the game-phase signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self { pawn: 100, knight: 320, bishop: 330, rook: 500, queen: 900, king: 20000 }
    }
}

impl PieceValues {
    pub fn of(&self, piece: Piece) -> i32 {
        match piece {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => self.king,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub piece_values: PieceValues,
    pub tables: PieceSquareTables,
}

/// Engine settings fixed at construction: search depth plus evaluation weights.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: u32,
    pub eval: EvalConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, eval: EvalConfig::default() }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded engine config from {}", path.display());
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(EngineError::Config("search depth must be at least 1".to_string()));
        }
        Ok(())
    }
}
