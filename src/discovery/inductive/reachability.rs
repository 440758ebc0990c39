use std::collections::{HashMap, HashSet};

use crate::core::process_models::dfg::DirectlyFollowsGraph;

/// Whether `act` is contained in the (ascending) `cluster`.
fn in_cluster(cluster: &[usize], act: usize) -> bool {
    cluster.binary_search(&act).is_ok()
}

///
/// A directed successor relation over the activities of one cluster.
///
/// Relations are derived from a [`DirectlyFollowsGraph`] for a single cut
/// attempt and discarded afterwards; the graph itself is never modified.
/// Successor lists are kept in ascending activity order so that all
/// traversals are reproducible.
///
/// All constructors expect `cluster` to be sorted ascending.
///
#[derive(Debug, Default)]
pub struct Relation {
    successors: HashMap<usize, Vec<usize>>,
}

impl Relation {
    /// The DFG restricted to edges with both endpoints inside `cluster`.
    pub fn dfg_within(dfg: &DirectlyFollowsGraph, cluster: &[usize]) -> Self {
        let mut successors: HashMap<usize, Vec<usize>> = HashMap::new();
        for &(from, to) in dfg.edges.keys() {
            if in_cluster(cluster, from) && in_cluster(cluster, to) {
                successors.entry(from).or_default().push(to);
            }
        }
        Self::sorted(successors)
    }

    /// The complement of the restricted DFG: two distinct activities are
    /// adjacent (in both directions) iff the DFG has no edge between them in
    /// either direction. Activities that can directly follow each other both
    /// ways thus end up disconnected here. Self-loops are ignored.
    pub fn negated_dfg_within(dfg: &DirectlyFollowsGraph, cluster: &[usize]) -> Self {
        let mut successors: HashMap<usize, Vec<usize>> = HashMap::new();
        for (i, &a) in cluster.iter().enumerate() {
            for &b in &cluster[i + 1..] {
                if !dfg.contains_df_relation(a, b) && !dfg.contains_df_relation(b, a) {
                    successors.entry(a).or_default().push(b);
                    successors.entry(b).or_default().push(a);
                }
            }
        }
        Self::sorted(successors)
    }

    /// The restricted DFG without any edge that touches an activity of
    /// `excluded`.
    pub fn dfg_within_excluding(
        dfg: &DirectlyFollowsGraph,
        cluster: &[usize],
        excluded: &HashSet<usize>,
    ) -> Self {
        let mut successors: HashMap<usize, Vec<usize>> = HashMap::new();
        for &(from, to) in dfg.edges.keys() {
            if in_cluster(cluster, from)
                && in_cluster(cluster, to)
                && !excluded.contains(&from)
                && !excluded.contains(&to)
            {
                successors.entry(from).or_default().push(to);
            }
        }
        Self::sorted(successors)
    }

    fn sorted(mut successors: HashMap<usize, Vec<usize>>) -> Self {
        for succs in successors.values_mut() {
            succs.sort_unstable();
        }
        Self { successors }
    }

    /// Successors of `act`, in ascending order
    pub fn successors_of(&self, act: usize) -> &[usize] {
        self.successors
            .get(&act)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Depth-first search from any activity of `sources` until an activity of
    /// `targets` is reached.
    ///
    /// The visited set is fresh for every call. On success, the returned
    /// trail contains every activity expanded before the target was seen
    /// (the target itself is not part of the trail).
    pub fn find_path(&self, sources: &[usize], targets: &HashSet<usize>) -> Option<Vec<usize>> {
        let mut visited: HashSet<usize> = HashSet::new();
        let mut trail: Vec<usize> = Vec::new();
        let mut stack: Vec<usize> = sources.iter().rev().copied().collect();

        while let Some(act) = stack.pop() {
            if targets.contains(&act) {
                return Some(trail);
            }
            if visited.insert(act) {
                trail.push(act);
                for &succ in self.successors_of(act).iter().rev() {
                    if !visited.contains(&succ) {
                        stack.push(succ);
                    }
                }
            }
        }

        None
    }

    /// Whether a directed path from `sources` to `targets` exists
    pub fn has_path(&self, sources: &[usize], targets: &HashSet<usize>) -> bool {
        self.find_path(sources, targets).is_some()
    }

    /// Whether directed paths exist from `a` to `b` and from `b` to `a`
    pub fn mutually_reachable(&self, a: usize, b: usize) -> bool {
        self.has_path(&[a], &HashSet::from([b])) && self.has_path(&[b], &HashSet::from([a]))
    }

    /// Whether a directed path exists from `a` to `b` or from `b` to `a`
    pub fn connected(&self, a: &[usize], b: &[usize]) -> bool {
        let set_a: HashSet<usize> = a.iter().copied().collect();
        let set_b: HashSet<usize> = b.iter().copied().collect();
        self.has_path(a, &set_b) || self.has_path(b, &set_a)
    }

    /// Connected components of the symmetric closure of the relation.
    ///
    /// Components are discovered by sweeping `cluster` in ascending order;
    /// every component is itself sorted ascending.
    pub fn undirected_components(&self, cluster: &[usize]) -> Vec<Vec<usize>> {
        let mut adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
        for (&from, succs) in &self.successors {
            for &to in succs {
                adjacency.entry(from).or_default().push(to);
                adjacency.entry(to).or_default().push(from);
            }
        }

        let mut components: Vec<Vec<usize>> = Vec::new();
        let mut seen: HashSet<usize> = HashSet::new();
        for &act in cluster {
            if seen.contains(&act) {
                continue;
            }
            let mut component: Vec<usize> = Vec::new();
            let mut stack: Vec<usize> = vec![act];
            while let Some(x) = stack.pop() {
                if seen.insert(x) {
                    component.push(x);
                    if let Some(neighbors) = adjacency.get(&x) {
                        for &n in neighbors {
                            if !seen.contains(&n) {
                                stack.push(n);
                            }
                        }
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }
}

/// Start activities of `cluster`: those without any predecessors in the
/// graph, or with at least one predecessor outside the cluster. For the
/// top-level cluster this is exactly the set of activities with an empty
/// global preset.
///
/// `cluster` must be sorted ascending; the result preserves that order.
pub fn start_activities(dfg: &DirectlyFollowsGraph, cluster: &[usize]) -> Vec<usize> {
    cluster
        .iter()
        .copied()
        .filter(|&act| {
            let preset: Vec<usize> = dfg.df_preset_of(act);
            preset.is_empty() || preset.iter().any(|p| !in_cluster(cluster, *p))
        })
        .collect()
}

/// End activities of `cluster`: those without any successors in the graph,
/// or with at least one successor outside the cluster.
///
/// `cluster` must be sorted ascending; the result preserves that order.
pub fn end_activities(dfg: &DirectlyFollowsGraph, cluster: &[usize]) -> Vec<usize> {
    cluster
        .iter()
        .copied()
        .filter(|&act| {
            let postset: Vec<usize> = dfg.df_postset_of(act).collect();
            postset.is_empty() || postset.iter().any(|s| !in_cluster(cluster, *s))
        })
        .collect()
}
