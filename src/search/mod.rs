pub mod alphabeta;
pub mod eval;
pub mod ordering;
pub mod pst;
