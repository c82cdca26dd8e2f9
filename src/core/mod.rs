//! Search core for the FIFA scout CLI
//!
//! - `normalize`: accent folding used by every text comparison
//! - `filters`: player predicates, search, refinement and ranking

pub mod filters;
pub mod normalize;

// Re-export commonly used items for convenience
pub use filters::{
    rank, rankable, refine, search, search_any, FilterKind, PlayerFilter, TextQuery,
};
pub use normalize::{contains_folded, display_text, fold, normalize};
