use cozy_chess::{Board as CozyBoard, Color, File, Move, Piece, Square};
use std::fmt;

use crate::error::{EngineError, Result};

/// Halfmove clock at which the seventy-five-move rule ends the game.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;
const FIVEFOLD: usize = 5;

/// Mutable game position over a cozy-chess board with an exact undo stack.
///
/// `push` and `pop` form the apply/revert discipline used by the search: every
/// `pop` restores the board saved by the matching `push`, so castling rights, en
/// passant state, clocks and side to move come back bit-for-bit.
///
/// The reversible-ply count is kept here rather than on the board because
/// cozy-chess saturates its own halfmove clock at 100.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    halfmoves: u32,
    undo: Vec<Undo>,
}

#[derive(Clone, Debug)]
struct Undo {
    board: CozyBoard,
    halfmoves: u32,
    mv: Move,
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), halfmoves: 0, undo: Vec::new() }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        CozyBoard::from_fen(fen.trim(), false)
            .map(|b| Self { halfmoves: b.halfmove_clock() as u32, board: b, undo: Vec::new() })
            .map_err(|e| EngineError::Fen(format!("{fen}: {e:?}")))
    }

    pub fn board(&self) -> &CozyBoard { &self.board }

    /// Number of moves currently applied on top of the root board.
    pub fn ply(&self) -> usize { self.undo.len() }

    /// Plies since the last capture or pawn move, uncapped.
    pub fn halfmove_clock(&self) -> u32 { self.halfmoves }

    pub fn side_to_move(&self) -> Color { self.board.side_to_move() }

    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        match (self.board.piece_on(sq), self.board.color_on(sq)) {
            (Some(p), Some(c)) => Some((p, c)),
            _ => None,
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { moves.extend(ml); false });
        moves
    }

    pub fn legal_moves_count(&self) -> usize {
        let mut ct = 0usize;
        self.board.generate_moves(|moves| { ct += moves.len(); false });
        ct
    }

    fn has_legal_moves(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|_| { any = true; true });
        any
    }

    /// Apply a legal move, remembering the current board for `pop`.
    pub fn push(&mut self, mv: Move) -> Result<()> {
        if !self.board.is_legal(mv) {
            return Err(EngineError::InvalidMove(format!("{mv} is not legal in {}", self.board)));
        }
        let reversible = !self.is_capture(mv) && self.board.piece_on(mv.from) != Some(Piece::Pawn);
        self.undo.push(Undo { board: self.board.clone(), halfmoves: self.halfmoves, mv });
        self.board.play_unchecked(mv);
        self.halfmoves = if reversible { self.halfmoves + 1 } else { 0 };
        Ok(())
    }

    /// Revert the most recently pushed move and return it.
    pub fn pop(&mut self) -> Result<Move> {
        let prev = self.undo.pop()
            .ok_or_else(|| EngineError::InvalidMove("no move to revert".to_string()))?;
        self.board = prev.board;
        self.halfmoves = prev.halfmoves;
        Ok(prev.mv)
    }

    pub fn is_capture(&self, mv: Move) -> bool {
        if self.board.color_on(mv.to) == Some(!self.side_to_move()) { return true; }
        // en passant: a pawn changing file onto an empty square
        self.board.piece_on(mv.from) == Some(Piece::Pawn) && mv.from.file() != mv.to.file()
    }

    pub fn gives_check(&self, mv: Move) -> bool {
        if !self.board.is_legal(mv) { return false; }
        let mut child = self.board.clone();
        child.play_unchecked(mv);
        !child.checkers().is_empty()
    }

    pub fn is_check(&self) -> bool { !self.board.checkers().is_empty() }

    pub fn is_checkmate(&self) -> bool { self.is_check() && !self.has_legal_moves() }

    pub fn is_stalemate(&self) -> bool { !self.is_check() && !self.has_legal_moves() }

    /// Neither side has enough material left to ever deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        self.has_insufficient_material(Color::White) && self.has_insufficient_material(Color::Black)
    }

    fn has_insufficient_material(&self, color: Color) -> bool {
        let b = &self.board;
        let ours = b.colors(color);
        let mating = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !(ours & mating).is_empty() { return false; }
        if !(ours & b.pieces(Piece::Knight)).is_empty() {
            // A lone knight mates only with help from something other than a queen.
            let helpers = b.colors(!color) & !b.pieces(Piece::King) & !b.pieces(Piece::Queen);
            return ours.len() <= 2 && helpers.is_empty();
        }
        if !(ours & b.pieces(Piece::Bishop)).is_empty() {
            let bishops = b.pieces(Piece::Bishop);
            let on_light = bishops.into_iter().any(is_light_square);
            let on_dark = bishops.into_iter().any(|sq| !is_light_square(sq));
            return !(on_light && on_dark) && b.pieces(Piece::Pawn).is_empty() && b.pieces(Piece::Knight).is_empty();
        }
        true
    }

    pub fn has_castling_rights(&self, color: Color) -> bool {
        let rights = self.board.castle_rights(color);
        rights.short.is_some() || rights.long.is_some()
    }

    pub fn is_seventy_five_moves(&self) -> bool {
        self.halfmoves >= SEVENTY_FIVE_MOVE_PLIES
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        let key = self.board.hash();
        let seen = self.undo.iter().filter(|u| u.board.hash() == key).count();
        seen + 1 >= FIVEFOLD
    }

    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves()
            || self.is_insufficient_material()
            || self.is_seventy_five_moves()
            || self.is_fivefold_repetition()
    }

    /// Render a move in UCI notation, with castling as the king's two-square step.
    pub fn to_uci(&self, mv: Move) -> String {
        // cozy-chess encodes castling as the king capturing its own rook
        if self.board.piece_on(mv.from) == Some(Piece::King) && self.board.color_on(mv.to) == Some(self.side_to_move()) {
            let file = if (mv.to.file() as u8) > (mv.from.file() as u8) { File::G } else { File::C };
            return format!("{}{}", mv.from, Square::new(file, mv.from.rank()));
        }
        format!("{}", mv)
    }

    /// Find the legal move matching a UCI string (standard or king-takes-rook castling).
    pub fn parse_uci(&self, text: &str) -> Result<Move> {
        let text = text.trim();
        self.legal_moves()
            .into_iter()
            .find(|&m| self.to_uci(m) == text || format!("{}", m) == text)
            .ok_or_else(|| EngineError::InvalidMove(format!("Illegal move: {}", text)))
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<()> {
        let mv = self.parse_uci(mv_uci)?;
        self.push(mv)
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    pub fn set_from_fen_and_moves(fen: &str, moves: &[String]) -> Result<Self> {
        let mut pos = Self::from_fen(fen)?;
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

fn is_light_square(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 1
}
