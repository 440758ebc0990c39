use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::event_data::event_log_struct::EventLog;

///
/// Projection of an [`EventLog`] onto its activities
///
/// Activities are replaced by indices into [`EventLogActivityProjection::activities`],
/// which lists every activity of the log ordered by first occurrence. All
/// iteration over activities downstream (graph construction, discovery)
/// follows this order, making results reproducible for a given log.
///
/// Traces are deduplicated into variants, each annotated with its frequency.
///
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct EventLogActivityProjection {
    /// All activities of the log, ordered by first occurrence
    pub activities: Vec<String>,
    /// Mapping from activity name to its index in `activities`
    pub act_to_index: HashMap<String, usize>,
    /// Distinct trace variants with their frequency
    pub traces: Vec<(Vec<usize>, u64)>,
}

impl From<&EventLog> for EventLogActivityProjection {
    fn from(log: &EventLog) -> Self {
        let mut activities: Vec<String> = Vec::new();
        let mut act_to_index: HashMap<String, usize> = HashMap::new();
        let mut variant_to_pos: HashMap<Vec<usize>, usize> = HashMap::new();
        let mut traces: Vec<(Vec<usize>, u64)> = Vec::new();

        for trace in &log.traces {
            let variant: Vec<usize> = trace
                .events
                .iter()
                .map(|event| match act_to_index.get(&event.activity).copied() {
                    Some(index) => index,
                    None => {
                        let index = activities.len();
                        activities.push(event.activity.clone());
                        act_to_index.insert(event.activity.clone(), index);
                        index
                    }
                })
                .collect();
            match variant_to_pos.get(&variant).copied() {
                Some(pos) => traces[pos].1 += 1,
                None => {
                    variant_to_pos.insert(variant.clone(), traces.len());
                    traces.push((variant, 1));
                }
            }
        }

        EventLogActivityProjection {
            activities,
            act_to_index,
            traces,
        }
    }
}

impl EventLogActivityProjection {
    /// Translate a list of activity indices back to their (sorted) names
    pub fn acts_to_names(&self, acts: &[usize]) -> Vec<String> {
        let mut ret: Vec<String> = acts
            .iter()
            .map(|act| self.activities[*act].clone())
            .collect();
        ret.sort();
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activities_ordered_by_first_occurrence() {
        let log = crate::event_log!(["a", "c", "b"], ["a", "b", "d"]);
        let projection = EventLogActivityProjection::from(&log);
        assert_eq!(projection.activities, vec!["a", "c", "b", "d"]);
        assert_eq!(projection.act_to_index["d"], 3);
    }

    #[test]
    fn trace_variants_are_deduplicated() {
        let log = crate::event_log!(["a", "b"], ["a", "b"], ["b", "a"]);
        let projection = EventLogActivityProjection::from(&log);
        assert_eq!(
            projection.traces,
            vec![(vec![0, 1], 2), (vec![1, 0], 1)]
        );
    }

    #[test]
    fn empty_traces_are_skipped_as_activity_sources() {
        let log = crate::event_log!([], ["a"]);
        let projection = EventLogActivityProjection::from(&log);
        assert_eq!(projection.activities, vec!["a"]);
        assert_eq!(projection.traces, vec![(vec![], 1), (vec![0], 1)]);
    }

    #[test]
    fn acts_to_names_sorts() {
        let log = crate::event_log!(["c", "b", "a"]);
        let projection = EventLogActivityProjection::from(&log);
        assert_eq!(projection.acts_to_names(&[0, 1, 2]), vec!["a", "b", "c"]);
    }
}
