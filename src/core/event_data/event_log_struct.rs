use serde::{Deserialize, Serialize};

///
/// An event: a single occurrence of an activity within a [`Trace`]
///
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Event {
    /// The activity name of the event
    pub activity: String,
}

impl Event {
    ///
    /// Creates a new [`Event`] with the given activity name
    ///
    pub fn new<S: Into<String>>(activity: S) -> Self {
        Self {
            activity: activity.into(),
        }
    }
}

///
/// A trace: the ordered sequence of [`Event`]s of one case
///
/// Activities may repeat within a trace; the order of events is significant.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Trace {
    /// The events of the trace, in execution order
    pub events: Vec<Event>,
}

impl Trace {
    /// Creates a new [`Trace`] with no events
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the activity names of the trace in execution order
    pub fn activities(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().map(|e| e.activity.as_str())
    }
}

///
/// An event log: a collection of [`Trace`]s
///
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct EventLog {
    /// The traces of the event log
    pub traces: Vec<Trace>,
}

impl EventLog {
    /// Creates a new [`EventLog`] with no traces
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}
