//! Core data structures for process mining

pub mod event_data;

pub mod process_models;

pub use event_data::EventLog;
pub use process_models::dfg::DirectlyFollowsGraph;
pub use process_models::process_tree::ProcessTree;
