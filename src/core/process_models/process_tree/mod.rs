//!
//! Process trees
//!
/// [`ProcessTree`] struct and sub-structs
pub mod process_tree_struct;

#[doc(inline)]
pub use process_tree_struct::{Leaf, LeafLabel, Node, Operator, OperatorType, ProcessTree};
