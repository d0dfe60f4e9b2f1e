/// Immutable grid state and placement history
pub mod board;
/// Exact-cover verification and cell-count feasibility
pub mod coverage;
/// Tiling deduplication by shape sequence
pub mod dedup;
/// Backtracking tiling enumeration
pub mod search;
