use std::io::{self, BufRead, Write};

use log::warn;

use crate::board::cozy::Position;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::search::alphabeta::Searcher;

const MAX_DEPTH: u32 = 8;

pub struct UciEngine {
    pos: Position,
    searcher: Searcher,
    default_depth: u32,
}

impl Default for UciEngine {
    fn default() -> Self { Self::new(&EngineConfig::default()) }
}

impl UciEngine {
    pub fn new(cfg: &EngineConfig) -> Self {
        Self { pos: Position::startpos(), searcher: Searcher::from_config(cfg), default_depth: cfg.depth }
    }

    pub fn position(&self) -> &Position { &self.pos }

    fn cmd_uci(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "id name Knightfall")?;
        writeln!(out, "id author Knightfall Team")?;
        writeln!(out, "option name Depth type spin default {} min 1 max {}", self.default_depth, MAX_DEPTH)?;
        writeln!(out, "uciok")
    }

    fn cmd_ucinewgame(&mut self) { self.pos = Position::startpos(); }

    fn cmd_setoption(&mut self, args: &str) {
        // setoption name <id> [value <x>]
        let mut tokens = args.split_whitespace();
        if tokens.next() != Some("name") { warn!("malformed setoption: {}", args); return; }
        let name: Vec<&str> = tokens.by_ref().take_while(|&t| t != "value").collect();
        let value = tokens.next();
        match (name.join(" ").to_ascii_lowercase().as_str(), value.and_then(|v| v.parse::<u32>().ok())) {
            ("depth", Some(d)) if (1..=MAX_DEPTH).contains(&d) => self.default_depth = d,
            _ => warn!("unsupported option: {}", args),
        }
    }

    fn cmd_position(&mut self, args: &str) -> Result<()> {
        // Supports: 'position startpos [moves ...]' and 'position fen <fen> [moves ...]'
        let mut tokens = args.split_whitespace();
        match tokens.next() {
            Some("startpos") => {
                let moves: Vec<String> = match tokens.next() {
                    Some("moves") => tokens.map(|s| s.to_string()).collect(),
                    _ => Vec::new(),
                };
                self.pos = Position::set_from_start_and_moves(&moves)?;
            }
            Some("fen") => {
                // FEN is 6 fields; collect them
                let fen_fields: Vec<&str> = tokens.by_ref().take_while(|&t| t != "moves").collect();
                let fen = fen_fields.join(" ");
                let moves: Vec<String> = tokens.map(|s| s.to_string()).collect();
                self.pos = Position::set_from_fen_and_moves(&fen, &moves)?;
            }
            other => warn!("unsupported position command: {:?}", other),
        }
        Ok(())
    }

    fn cmd_go(&mut self, args: &str, out: &mut impl Write) -> io::Result<()> {
        let mut depth = self.default_depth;
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            if tok == "depth" {
                if let Some(d) = tokens.next().and_then(|s| s.parse::<u32>().ok()) { depth = d; }
            }
        }
        self.searcher.set_depth(depth);
        match self.searcher.search_root(&mut self.pos) {
            Ok(res) => {
                writeln!(out, "info depth {} score cp {} nodes {}", self.searcher.depth(), res.score.round() as i64, res.nodes)?;
                writeln!(out, "bestmove {}", self.pos.to_uci(res.best_move))
            }
            Err(e) => {
                warn!("search failed: {}", e);
                writeln!(out, "bestmove 0000")
            }
        }
    }

    /// Handle one command line; returns false on `quit`.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() { return Ok(true); }
        match line {
            "uci" => self.cmd_uci(out)?,
            "isready" => writeln!(out, "readyok")?,
            "ucinewgame" => self.cmd_ucinewgame(),
            "quit" => return Ok(false),
            "stop" => {}
            "go" => self.cmd_go("", out)?,
            _ => {
                if let Some(rest) = line.strip_prefix("setoption ") {
                    self.cmd_setoption(rest);
                } else if let Some(rest) = line.strip_prefix("position ") {
                    if let Err(e) = self.cmd_position(rest) { warn!("{}", e); }
                } else if let Some(rest) = line.strip_prefix("go ") {
                    self.cmd_go(rest, out)?;
                } else {
                    warn!("unknown command: {}", line);
                }
            }
        }
        out.flush()?;
        Ok(true)
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in stdin.lock().lines() {
            let line = line?;
            if !self.handle_line(&line, &mut out)? { break; }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(engine: &mut UciEngine, cmds: &[&str]) -> String {
        let mut out = Vec::new();
        for c in cmds { engine.handle_line(c, &mut out).unwrap(); }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn handshake() {
        let mut e = UciEngine::default();
        let out = run(&mut e, &["uci", "isready"]);
        assert!(out.contains("uciok"));
        assert!(out.ends_with("readyok\n"));
    }

    #[test]
    fn position_fen_with_moves_applies_to_fen() {
        let mut e = UciEngine::default();
        run(&mut e, &["position fen 6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1 moves g1f1"]);
        assert_eq!(e.position().ply(), 1);
        assert_eq!(e.position().side_to_move(), cozy_chess::Color::Black);
    }

    #[test]
    fn setoption_depth_sets_search_depth() {
        let mut e = UciEngine::default();
        let out = run(&mut e, &["setoption name Depth value 1", "go"]);
        assert!(out.contains("info depth 1 "), "{out}");
        let out = run(&mut e, &["setoption name Depth value 0", "go"]);
        assert!(out.contains("info depth 1 "), "{out}");
        let out = run(&mut e, &["setoption name Depth value 2", "go"]);
        assert!(out.contains("info depth 2 "), "{out}");
    }

    #[test]
    fn go_depth_reports_mate() {
        let mut e = UciEngine::default();
        let out = run(&mut e, &["position fen 6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "go depth 2"]);
        assert!(out.contains("bestmove a1a8"), "{out}");
    }
}
