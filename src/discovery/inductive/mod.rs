//!
//! Module for the Inductive Miner (directly-follows variant) process
//! discovery algorithm
//!
/// Activity cut detection (exclusive, sequential, parallel, loop)
pub mod cuts;
/// Full discovery algorithm
pub mod full;
/// Reachability queries over per-cluster activity relations
pub mod reachability;

#[doc(inline)]
pub use full::{
    discover_process_tree, discover_process_tree_from_projection, InductiveMinerError,
};
