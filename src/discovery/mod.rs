//! Process Discovery
//!
//! Process discovery algorithms learn process model representations from
//! input event data.
pub mod inductive;
