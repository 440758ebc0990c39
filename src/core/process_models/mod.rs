//! Process Models
//!
//! Model representations that process discovery algorithms produce or
//! consume: directly-follows graphs and process trees.
pub mod dfg;
pub mod process_tree;
