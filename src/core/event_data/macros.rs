/// Create an [`Event`].
///
/// # Examples
///
/// ```rust
/// use inductive_miner::event;
///
/// let evt = event!("Approve");
/// assert_eq!(evt.activity, "Approve");
/// ```
///
/// [`Event`]: crate::core::event_data::Event
#[macro_export]
macro_rules! event {
    ($activity:expr) => {
        $crate::core::event_data::Event::new($activity)
    };
}

/// Create a [`Trace`].
///
/// A trace is denoted by a comma-separated list of activity names.
///
/// # Examples
///
/// ```rust
/// use inductive_miner::trace;
///
/// let trace = trace!("a", "b", "c", "d");
/// assert_eq!(trace.events.len(), 4);
/// ```
///
/// [`Trace`]: crate::core::event_data::Trace
#[macro_export]
macro_rules! trace {
    ($($activity:expr),* $(,)?) => {
        $crate::core::event_data::Trace {
            events: vec![
                $(
                    $crate::event!($activity)
                ),*
            ],
        }
    };
}

/// Create an [`EventLog`].
///
/// An event log is a sequence of traces, each denoted by square brackets
/// containing activity names.
///
/// # Examples
///
/// ```rust
/// use inductive_miner::event_log;
///
/// // Create an event log with traces <a,b,c,d> and <a,c,b,d>
/// let log = event_log!(
///     ["a", "b", "c", "d"],
///     ["a", "c", "b", "d"],
/// );
/// assert_eq!(log.traces.len(), 2);
/// ```
///
/// [`EventLog`]: crate::core::event_data::EventLog
#[macro_export]
macro_rules! event_log {
    ($([$($activity:expr),* $(,)?]),* $(,)?) => {
        $crate::core::event_data::EventLog {
            traces: vec![
                $(
                    $crate::trace!($($activity),*)
                ),*
            ],
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::event_data::{Event, EventLog};

    #[test]
    fn test_event_macro() {
        assert_eq!(event!("a"), Event::new("a"));
        let act = String::from("another activity");
        assert_eq!(event!(act.clone()), Event::new(act));
    }

    #[test]
    fn test_trace_macro() {
        let trace = trace!("a", "b", "c", "d");
        assert_eq!(
            trace.activities().collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
        // Reproducible
        assert_eq!(trace, trace!("a", "b", "c", "d"));
        // Empty traces can be created
        assert!(trace!().events.is_empty());
    }

    #[test]
    fn test_event_log_macro() {
        let log = event_log!(["a", "b", "c", "d"], ["a", "c", "b", "d"], ["a", "e", "d"]);
        let activity_projection = log
            .traces
            .iter()
            .map(|trace| trace.activities().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(
            activity_projection,
            vec![
                vec!["a", "b", "c", "d"],
                vec!["a", "c", "b", "d"],
                vec!["a", "e", "d"]
            ]
        );

        // Empty logs and logs with empty traces can be created
        assert_eq!(event_log!(), EventLog::new());
        assert!(event_log!([]).traces[0].events.is_empty());
    }

    #[test]
    fn event_log_macro_equality() {
        assert_eq!(
            event_log!(["a", "b", "c", "d"], ["a", "c", "b", "d"]),
            event_log!(["a", "b", "c", "d"], ["a", "c", "b", "d"]),
        );
        assert_ne!(
            event_log!(["a", "b", "c", "d"], ["a", "c", "b", "d"]),
            event_log!(["a", "c", "b", "d"], ["a", "b", "c", "d"]),
        );
    }
}
