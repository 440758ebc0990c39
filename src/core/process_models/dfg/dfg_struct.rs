use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::collections::HashMap;

use crate::core::event_data::activity_projection::EventLogActivityProjection;

/// A directly-follows graph over the activity indices of an
/// [`EventLogActivityProjection`].
///
/// An edge `(a, b)` means that some trace contains `a` immediately followed
/// by `b`; its value is the number of such occurrences across the log.
/// Self-loops (`(a, a)`) are kept: they are significant for discovery.
#[serde_as]
#[derive(Debug, Default, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct DirectlyFollowsGraph {
    /// Activity indices (nodes)
    pub nodes: Vec<usize>,
    /// Directly-follows relations with their frequency
    #[serde_as(as = "Vec<(_, _)>")]
    pub edges: HashMap<(usize, usize), u64>,
}

impl DirectlyFollowsGraph {
    /// Construct the directly-follows graph of an event log projection.
    ///
    /// Sweeps every trace variant and records each consecutive activity pair,
    /// weighted by the variant frequency. Empty and single-activity traces
    /// contribute no edges.
    pub fn from_event_log_projection(log: &EventLogActivityProjection) -> Self {
        let nodes: Vec<usize> = (0..log.activities.len()).collect();
        let edges: HashMap<(usize, usize), u64> = log
            .traces
            .par_iter()
            .map(|(trace, weight)| {
                trace
                    .windows(2)
                    .map(|pair| ((pair[0], pair[1]), *weight))
                    .collect::<Vec<_>>()
            })
            .flatten()
            .fold(
                HashMap::<(usize, usize), u64>::new,
                |mut map, (df_pair, weight)| {
                    *map.entry(df_pair).or_default() += weight;
                    map
                },
            )
            .reduce(HashMap::new, |mut m1, m2| {
                for (df_pair, weight) in m2 {
                    *m1.entry(df_pair).or_default() += weight;
                }
                m1
            });
        Self { nodes, edges }
    }

    /// Number of times activity `b` directly follows activity `a`
    pub fn df_between(&self, a: usize, b: usize) -> u64 {
        *self.edges.get(&(a, b)).unwrap_or(&0)
    }

    /// Checks if a directly-follows relation is contained in the graph
    pub fn contains_df_relation(&self, a: usize, b: usize) -> bool {
        self.edges.contains_key(&(a, b))
    }

    /// The activities that directly precede `act` somewhere in the log
    pub fn df_preset_of<T: FromIterator<usize>>(&self, act: usize) -> T {
        self.edges
            .keys()
            .filter_map(|(a, b)| if *b == act { Some(*a) } else { None })
            .collect()
    }

    /// The activities that directly follow `act` somewhere in the log
    pub fn df_postset_of(&self, act: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .keys()
            .filter_map(move |(a, b)| if *a == act { Some(*b) } else { None })
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_data::activity_projection::EventLogActivityProjection;
    use std::collections::HashSet;

    fn dfg_of(log: &crate::core::event_data::EventLog) -> DirectlyFollowsGraph {
        DirectlyFollowsGraph::from_event_log_projection(&EventLogActivityProjection::from(log))
    }

    #[test]
    fn directly_follows_graph_from_log() {
        // a=0, b=1, c=2, d=3
        let log = crate::event_log!(["a", "b", "c", "d"], ["a", "c", "b", "d"]);
        let dfg = dfg_of(&log);

        assert_eq!(dfg.nodes, vec![0, 1, 2, 3]);
        assert_eq!(dfg.edges.len(), 6);
        assert_eq!(dfg.df_between(0, 1), 1);
        assert!(dfg.contains_df_relation(1, 2));
        assert!(dfg.contains_df_relation(2, 1));
        assert!(!dfg.contains_df_relation(3, 0));
        assert_eq!(
            dfg.df_preset_of::<HashSet<usize>>(3),
            HashSet::from([1, 2])
        );
        assert_eq!(
            dfg.df_postset_of(0).collect::<HashSet<usize>>(),
            HashSet::from([1, 2])
        );
    }

    #[test]
    fn repeated_variants_accumulate_frequencies() {
        let log = crate::event_log!(["a", "b"], ["a", "b"], ["a", "b"]);
        let dfg = dfg_of(&log);
        assert_eq!(dfg.df_between(0, 1), 3);
    }

    #[test]
    fn self_loops_are_kept() {
        let log = crate::event_log!(["a", "a", "b"]);
        let dfg = dfg_of(&log);
        assert!(dfg.contains_df_relation(0, 0));
        assert!(dfg.contains_df_relation(0, 1));
    }

    #[test]
    fn edgeless_logs_build_an_empty_graph() {
        let log = crate::event_log!(["a"], ["b"]);
        let dfg = dfg_of(&log);
        assert_eq!(dfg.nodes, vec![0, 1]);
        assert!(dfg.edges.is_empty());
    }

    #[test]
    fn construction_is_idempotent() {
        let log = crate::event_log!(["a", "b", "c", "d"], ["a", "c", "b", "d"], ["a", "e", "d"]);
        assert_eq!(dfg_of(&log), dfg_of(&log));
    }

    #[test]
    fn dfg_json_roundtrip() {
        let log = crate::event_log!(["a", "b", "b", "c"]);
        let dfg = dfg_of(&log);
        let dfg_again: DirectlyFollowsGraph = serde_json::from_str(&dfg.to_json()).unwrap();
        assert_eq!(dfg, dfg_again);
    }
}
