use crate::core::event_data::activity_projection::EventLogActivityProjection;
use crate::core::event_data::EventLog;
use crate::core::process_models::dfg::DirectlyFollowsGraph;
use crate::core::process_models::process_tree::{Node, OperatorType, ProcessTree};

use super::cuts::{exclusive_cut, loop_cut, parallel_cut, sequence_cut, CutPartition};

///
/// Errors that can occur during Inductive Miner process discovery
///
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InductiveMinerError {
    /// Error if the event log contains no activities at all
    EmptyEventLog,
    /// Error if a cut produced a partition that misses or duplicates
    /// activities of its cluster
    InvalidCutPartition,
}

impl std::fmt::Display for InductiveMinerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InductiveMinerError::EmptyEventLog => {
                write!(f, "Event log contains no activities")
            }
            InductiveMinerError::InvalidCutPartition => {
                write!(f, "Cut produced a partition that does not cover its cluster")
            }
        }
    }
}

impl std::error::Error for InductiveMinerError {}

///
/// Discover a [`ProcessTree`] from an [`EventLog`] using the Inductive Miner
/// (directly-follows variant).
///
/// Every activity of the log appears exactly once as a leaf of the returned
/// tree. Equal logs always produce equal trees; empty traces are tolerated
/// and contribute nothing.
///
/// ```rust
/// use inductive_miner::{discover_process_tree, event_log};
///
/// let log = event_log!(["a", "b", "c", "d"], ["a", "c", "b", "d"]);
/// let tree = discover_process_tree(&log).unwrap();
/// assert_eq!(tree.to_string(), "->('a', +('b', 'c'), 'd')");
/// ```
pub fn discover_process_tree(event_log: &EventLog) -> Result<ProcessTree, InductiveMinerError> {
    discover_process_tree_from_projection(&EventLogActivityProjection::from(event_log))
}

///
/// Discover a [`ProcessTree`] from an [`EventLogActivityProjection`]
///
/// See [`discover_process_tree`].
///
pub fn discover_process_tree_from_projection(
    log_proj: &EventLogActivityProjection,
) -> Result<ProcessTree, InductiveMinerError> {
    if log_proj.activities.is_empty() {
        return Err(InductiveMinerError::EmptyEventLog);
    }
    let dfg = DirectlyFollowsGraph::from_event_log_projection(log_proj);
    let alphabet: Vec<usize> = (0..log_proj.activities.len()).collect();
    let root = mine_cluster(&dfg, &alphabet, log_proj)?;
    Ok(ProcessTree::new(root))
}

fn activity_leaf(log_proj: &EventLogActivityProjection, act: usize) -> Node {
    Node::new_leaf(Some(log_proj.activities[act].clone()))
}

///
/// Recursively mine one cluster of activity indices.
///
/// Tries the cuts in fixed order (exclusive, sequential, parallel, loop) and
/// recurses on the blocks of the first one that splits the cluster. A cluster
/// that no cut can split becomes a flower loop over its activities.
///
fn mine_cluster(
    dfg: &DirectlyFollowsGraph,
    cluster: &[usize],
    log_proj: &EventLogActivityProjection,
) -> Result<Node, InductiveMinerError> {
    if let &[act] = cluster {
        // a single activity only has loop structure if it follows itself
        if dfg.contains_df_relation(act, act) {
            return Ok(Node::new_operator(
                OperatorType::Loop,
                vec![activity_leaf(log_proj, act)],
            ));
        }
        return Ok(activity_leaf(log_proj, act));
    }

    let cut = exclusive_cut(dfg, cluster)
        .map(|partition| (OperatorType::ExclusiveChoice, partition))
        .or_else(|| sequence_cut(dfg, cluster).map(|p| (OperatorType::Sequence, p)))
        .or_else(|| parallel_cut(dfg, cluster).map(|p| (OperatorType::Concurrency, p)))
        .or_else(|| loop_cut(dfg, cluster).map(|p| (OperatorType::Loop, p)));

    match cut {
        Some((op_type, partition)) => {
            validate_partition(cluster, &partition)?;
            let children = partition
                .iter()
                .map(|block| mine_cluster(dfg, block, log_proj))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::new_operator(op_type, children))
        }
        None => Ok(Node::new_operator(
            OperatorType::Loop,
            cluster
                .iter()
                .map(|&act| activity_leaf(log_proj, act))
                .collect(),
        )),
    }
}

/// Every activity of the cluster must appear exactly once across the blocks.
fn validate_partition(
    cluster: &[usize],
    partition: &CutPartition,
) -> Result<(), InductiveMinerError> {
    let mut all: Vec<usize> = partition.iter().flatten().copied().collect();
    all.sort_unstable();
    if all != cluster {
        return Err(InductiveMinerError::InvalidCutPartition);
    }
    Ok(())
}
