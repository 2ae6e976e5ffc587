use anyhow::Result;
use clap::Parser;
use knightfall::perft::{divide, perft};
use knightfall::Position;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for Knightfall")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Print per-move leaf counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut pos = if args.fen == "startpos" { Position::startpos() } else { Position::from_fen(&args.fen)? };

    let t0 = Instant::now();
    let nodes = if args.divide {
        let split = divide(&mut pos, args.depth)?;
        for (mv, n) in &split { println!("{}: {}", mv, n); }
        split.iter().map(|(_, n)| n).sum()
    } else {
        perft(&mut pos, args.depth)?
    };
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
