use anyhow::Result;
use clap::Parser;
use cozy_chess::{Color, Piece, Rank, File, Square};
use knightfall::uci::UciEngine;
use knightfall::{EngineConfig, Position, Searcher};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the Knightfall alpha-beta engine", long_about = None)]
struct Args {
    /// Operation mode: 'h' for human vs engine, 's' for self play, 'u' for UCI
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Search depth in plies (overrides the config file)
    #[arg(long)]
    depth: Option<u32>,

    /// JSON engine config (depth, piece values, piece-square tables)
    #[arg(long)]
    config: Option<String>,

    /// Stop self play after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn piece_char(piece: Piece, color: Color) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    if color == Color::White { c.to_ascii_uppercase() } else { c }
}

fn print_board(pos: &Position) {
    println!();
    for rank in Rank::ALL.iter().rev() {
        print!("{} ", *rank as usize + 1);
        for file in File::ALL {
            let ch = pos.piece_at(Square::new(file, *rank)).map_or('.', |(p, c)| piece_char(p, c));
            print!(" {}", ch);
        }
        println!();
    }
    println!("\n   a b c d e f g h");
    println!("{}", pos);
}

/// Message for a finished game, or None while play continues.
fn game_over_message(pos: &Position) -> Option<String> {
    if pos.is_checkmate() {
        let winner = if pos.side_to_move() == Color::White { "Black" } else { "White" };
        Some(format!("Checkmate! {} wins!", winner))
    } else if pos.is_stalemate() {
        Some("Stalemate!".to_string())
    } else if pos.is_insufficient_material() {
        Some("Draw by insufficient material!".to_string())
    } else if pos.is_seventy_five_moves() {
        Some("Draw by the seventy-five-move rule!".to_string())
    } else if pos.is_fivefold_repetition() {
        Some("Draw by fivefold repetition!".to_string())
    } else {
        None
    }
}

fn get_human_move(pos: &Position) -> Result<cozy_chess::Move> {
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            anyhow::bail!("stdin closed");
        }
        match pos.parse_uci(input.trim()) {
            Ok(mv) => return Ok(mv),
            Err(_) => println!("Illegal move! Use format like 'e2e4'"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('h');
    let human_color = parse_color(&args.color)?;

    let mut cfg = match args.config.as_deref() {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(d) = args.depth { cfg.depth = d; }
    cfg.validate()?;

    if mode == 'u' {
        UciEngine::new(&cfg).run_loop()?;
        return Ok(());
    }

    let mut pos = match args.fen.as_deref() {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::startpos(),
    };
    let mut searcher = Searcher::from_config(&cfg);

    loop {
        if let Some(msg) = game_over_message(&pos) {
            print_board(&pos);
            println!("\n{}", msg);
            break;
        }
        if mode == 's' && pos.ply() >= args.max_plies {
            println!("\nStopping self play after {} plies", pos.ply());
            break;
        }

        println!("\n{}'s turn", if pos.side_to_move() == Color::White { "White" } else { "Black" });
        print_board(&pos);

        if mode == 'h' && pos.side_to_move() == human_color {
            let mv = get_human_move(&pos)?;
            pos.push(mv)?;
            continue;
        }

        if args.verbose { println!("AI is thinking..."); }
        let start_time = Instant::now();
        let res = searcher.search_root(&mut pos)?;
        let elapsed = start_time.elapsed();
        if args.verbose {
            println!("score: {:.1}, nodes: {}, elapsed: {:.2}s", res.score, res.nodes, elapsed.as_secs_f32());
        }
        println!("Computer plays: {}", pos.to_uci(res.best_move));
        pos.push(res.best_move)?;
    }

    Ok(())
}
