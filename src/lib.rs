// Alpha-beta engine over cozy-chess with a handcrafted PST evaluation
pub mod board;
pub mod config;
pub mod error;
pub mod perft;
pub mod search;
pub mod uci;

pub use board::cozy::Position;
pub use config::EngineConfig;
pub use error::EngineError;
pub use search::alphabeta::{SearchResult, Searcher};
pub use search::eval::{Evaluator, Score};
