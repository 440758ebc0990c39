//! Event Data
//!
//! Fundamental structs and adjacent utilities for event logs
pub mod activity_projection;
pub mod event_log_struct;
/// Event log creation macros
pub mod macros;

#[doc(inline)]
pub use event_log_struct::{Event, EventLog, Trace};

#[doc(inline)]
pub use activity_projection::EventLogActivityProjection;
