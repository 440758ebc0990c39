#![warn(
    clippy::doc_markdown,
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs
)]
//! Process discovery with the __Inductive Miner — Directly-Follows__ variant.
//!
//! The crate mines a [`ProcessTree`] from an [`EventLog`]: the log is first
//! projected onto activity indices ([`EventLogActivityProjection`]), a
//! [`DirectlyFollowsGraph`] is built from the projection, and the miner then
//! recursively partitions the activity set with exclusive, sequential,
//! parallel, and loop cuts until only single activities remain.
//!
//! ```rust
//! use inductive_miner::{discover_process_tree, event_log};
//!
//! let log = event_log!(["a", "b", "d"], ["a", "c", "d"]);
//! let tree = discover_process_tree(&log).unwrap();
//! assert_eq!(tree.to_string(), "->('a', X('b', 'c'), 'd')");
//! ```

pub mod core;

pub mod discovery;

#[doc(inline)]
pub use crate::core::event_data::activity_projection::EventLogActivityProjection;
#[doc(inline)]
pub use crate::core::event_data::{Event, EventLog, Trace};
#[doc(inline)]
pub use crate::core::process_models::dfg::DirectlyFollowsGraph;
#[doc(inline)]
pub use crate::core::process_models::process_tree::ProcessTree;
#[doc(inline)]
pub use crate::discovery::inductive::{discover_process_tree, InductiveMinerError};
