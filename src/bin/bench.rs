use anyhow::Result;
use clap::Parser;
use knightfall::{EngineConfig, Position, Searcher};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "knightfall-bench", version, about = "Benchmark Knightfall fixed-depth search")]
struct Args {
    /// FEN string or 'startpos'
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// JSON engine config (piece values and tables)
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut pos = if args.fen == "startpos" { Position::startpos() } else { Position::from_fen(&args.fen)? };
    let mut cfg = match args.config.as_deref() {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    cfg.depth = args.depth;
    cfg.validate()?;

    let mut s = Searcher::from_config(&cfg);
    let t0 = Instant::now();
    let res = s.search_root(&mut pos)?;
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    println!("bestmove={} score={:.1} nodes={} elapsed={:.3}s nps={:.1}", pos.to_uci(res.best_move), res.score, res.nodes, dt.as_secs_f64(), nps);
    Ok(())
}
