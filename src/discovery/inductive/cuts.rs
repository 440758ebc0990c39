use std::collections::HashSet;

use crate::core::process_models::dfg::DirectlyFollowsGraph;

use super::reachability::{end_activities, start_activities, Relation};

/// A cut partitions a cluster of activities into at least two blocks.
///
/// Every block is sorted ascending; the block order is the order in which
/// the first activity of each block occurs in the cluster. A finder returns
/// `None` when it cannot split the cluster.
pub type CutPartition = Vec<Vec<usize>>;

///
/// Exclusive-choice cut: partition `cluster` into the connected components
/// of the restricted DFG, edges taken undirected.
///
/// Activities end up in the same block iff an undirected path between them
/// exists wholly inside the cluster. Fails when everything is connected.
///
pub fn exclusive_cut(dfg: &DirectlyFollowsGraph, cluster: &[usize]) -> Option<CutPartition> {
    let rel = Relation::dfg_within(dfg, cluster);
    let components = rel.undirected_components(cluster);
    if components.len() <= 1 {
        return None;
    }
    Some(components)
}

///
/// Sequential cut: group the cluster into strongly connected blocks, then
/// merge blocks that cannot reach each other at all.
///
/// Two activities share a block iff they are mutually reachable in the
/// restricted DFG. The merge is a left fold over the blocks in first-
/// representative order: the current block absorbs every later block that is
/// unreachable from and cannot reach it. What remains is totally ordered by
/// reachability and becomes the sequence. Fails when only one block remains.
///
pub fn sequence_cut(dfg: &DirectlyFollowsGraph, cluster: &[usize]) -> Option<CutPartition> {
    let rel = Relation::dfg_within(dfg, cluster);

    // strongly connected blocks, discovered in canonical order
    let mut blocks: CutPartition = Vec::new();
    let mut assigned: HashSet<usize> = HashSet::new();
    for &act in cluster {
        if assigned.contains(&act) {
            continue;
        }
        assigned.insert(act);
        let mut block = vec![act];
        for &other in cluster {
            if !assigned.contains(&other) && rel.mutually_reachable(act, other) {
                assigned.insert(other);
                block.push(other);
            }
        }
        block.sort_unstable();
        blocks.push(block);
    }

    // absorb pairwise unreachable blocks into the earliest of them
    let mut i = 0;
    while i < blocks.len() {
        let mut j = i + 1;
        while j < blocks.len() {
            if !rel.connected(&blocks[i], &blocks[j]) {
                let absorbed = blocks.remove(j);
                blocks[i].extend(absorbed);
                blocks[i].sort_unstable();
            } else {
                j += 1;
            }
        }
        i += 1;
    }

    if blocks.len() <= 1 {
        return None;
    }
    Some(blocks)
}

///
/// Parallel cut: partition `cluster` into the connected components of the
/// complemented DFG and require every component to contain a start and an
/// end activity of the cluster.
///
/// In the complement, two activities are adjacent iff the DFG never relates
/// them directly (see [`Relation::negated_dfg_within`]); in particular,
/// activities that follow each other in both directions fall into different
/// components and may run concurrently.
///
pub fn parallel_cut(dfg: &DirectlyFollowsGraph, cluster: &[usize]) -> Option<CutPartition> {
    let starts: HashSet<usize> = start_activities(dfg, cluster).into_iter().collect();
    let ends: HashSet<usize> = end_activities(dfg, cluster).into_iter().collect();

    let rel = Relation::negated_dfg_within(dfg, cluster);
    let components = rel.undirected_components(cluster);
    if components.len() <= 1 {
        return None;
    }

    let every_component_bounded = components.iter().all(|component| {
        component.iter().any(|act| starts.contains(act))
            && component.iter().any(|act| ends.contains(act))
    });
    if !every_component_bounded {
        return None;
    }
    Some(components)
}

///
/// Loop cut: split `cluster` into a body containing all start and end
/// activities and a redo part that leads from the ends back to the starts.
///
/// Removing every edge that touches a start or end activity decomposes the
/// remaining activities into fragments. A fragment belongs to the body if it
/// reaches a start activity over some end activity, and to the redo part if
/// it reaches an end activity over some start activity; the distinction is
/// made by inspecting the trail of the successful search. Fails when a
/// fragment is neither, or when no redo part exists.
///
pub fn loop_cut(dfg: &DirectlyFollowsGraph, cluster: &[usize]) -> Option<CutPartition> {
    let starts = start_activities(dfg, cluster);
    let ends = end_activities(dfg, cluster);
    let boundary: HashSet<usize> = starts.iter().chain(ends.iter()).copied().collect();

    let interior: Vec<usize> = cluster
        .iter()
        .copied()
        .filter(|act| !boundary.contains(act))
        .collect();
    if interior.is_empty() {
        return None;
    }

    let aux = Relation::dfg_within_excluding(dfg, cluster, &boundary);
    let fragments = aux.undirected_components(&interior);

    let rel = Relation::dfg_within(dfg, cluster);
    let start_set: HashSet<usize> = starts.iter().copied().collect();
    let end_set: HashSet<usize> = ends.iter().copied().collect();

    let mut body_acts: Vec<usize> = Vec::new();
    let mut redo_acts: Vec<usize> = Vec::new();
    for fragment in &fragments {
        if let Some(trail) = rel.find_path(fragment, &start_set) {
            if trail.iter().any(|act| end_set.contains(act)) {
                body_acts.extend(fragment);
                continue;
            }
        }
        if let Some(trail) = rel.find_path(fragment, &end_set) {
            if trail.iter().any(|act| start_set.contains(act)) {
                redo_acts.extend(fragment);
                continue;
            }
        }
        return None;
    }
    if redo_acts.is_empty() {
        // everything is body, so the split would return the cluster itself
        return None;
    }

    let mut body: Vec<usize> = starts.into_iter().chain(body_acts).chain(ends).collect();
    body.sort_unstable();
    body.dedup();
    redo_acts.sort_unstable();
    Some(vec![body, redo_acts])
}
