use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

///
/// Leaf label in a process tree
///
#[derive(Debug, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum LeafLabel {
    /// Non-silent activity leaf
    Activity(String),
    /// Silent activity leaf
    Tau,
}

///
/// Operator type enum for [`Operator`]
///
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub enum OperatorType {
    /// Exclusive choice operator
    ExclusiveChoice,
    /// Sequence operator
    Sequence,
    /// Concurrency operator
    Concurrency,
    /// Loop operator with a mandatory body as first child and an optional
    /// redo part as second child
    Loop,
}

impl Display for OperatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            OperatorType::ExclusiveChoice => "X",
            OperatorType::Sequence => "->",
            OperatorType::Concurrency => "+",
            OperatorType::Loop => "*",
        };
        write!(f, "{}", symbol)
    }
}

///
/// Node in a process tree
///
#[derive(Debug, Serialize, Deserialize)]
pub enum Node {
    /// Operator node of a process tree
    Operator(Operator),
    /// Leaf node of a process tree
    Leaf(Leaf),
}

impl Node {
    ///
    /// Returns the identifier of a node in a process tree
    ///
    pub fn get_uuid(&self) -> &Uuid {
        match self {
            Node::Operator(op) => &op.uuid,
            Node::Leaf(leaf) => &leaf.uuid,
        }
    }

    ///
    /// Creates a new [`Node::Operator`] with the given [`OperatorType`] and children
    ///
    pub fn new_operator(op_type: OperatorType, children: Vec<Node>) -> Self {
        Node::Operator(Operator::new(op_type, children))
    }

    ///
    /// Creates a new non-silent or silent leaf [`Node`]
    ///
    pub fn new_leaf(leaf_label: Option<String>) -> Self {
        Node::Leaf(Leaf::new(leaf_label))
    }

    ///
    /// Returns `true` if a loop operator has at least one child and if all
    /// other operators have at least two children.
    ///
    /// A structured loop has a body and optionally a redo child; the
    /// degenerate flower loop carries one leaf per activity.
    ///
    pub fn check_children_valid(&self) -> bool {
        match self {
            Node::Operator(op) => match op.operator_type {
                OperatorType::Loop => !op.children.is_empty(),
                _ => op.children.len() >= 2,
            },
            Node::Leaf(_) => true,
        }
    }
}

/// Nodes are compared structurally; identifiers are excluded so that two
/// independently built trees of the same shape are equal.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Operator(a), Node::Operator(b)) => {
                a.operator_type == b.operator_type && a.children == b.children
            }
            (Node::Leaf(a), Node::Leaf(b)) => a.label == b.label,
            _ => false,
        }
    }
}

impl Eq for Node {}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Operator(op) => {
                write!(f, "{}({})", op.operator_type, op.children.iter().join(", "))
            }
            Node::Leaf(leaf) => match &leaf.label {
                LeafLabel::Activity(act) => write!(f, "'{}'", act),
                LeafLabel::Tau => write!(f, "tau"),
            },
        }
    }
}

///
/// An operator node in a process tree
///
#[derive(Debug, Serialize, Deserialize)]
pub struct Operator {
    /// The node ID
    pub uuid: Uuid,
    /// The [`OperatorType`] of the node
    pub operator_type: OperatorType,
    /// The children nodes of the operator node
    pub children: Vec<Node>,
}

impl Operator {
    ///
    /// Creates a new [`Operator`] with a fresh [`Uuid`] and the given
    /// [`OperatorType`] and children
    ///
    pub fn new(operator_type: OperatorType, children: Vec<Node>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            operator_type,
            children,
        }
    }
}

///
/// A leaf in a process tree
///
#[derive(Debug, Serialize, Deserialize)]
pub struct Leaf {
    /// The identifier of the leaf
    pub uuid: Uuid,
    /// The silent or non-silent activity label [`LeafLabel`]
    pub label: LeafLabel,
}

impl Leaf {
    ///
    /// Creates a new [`Leaf`] either by using a given label or making it
    /// silent if a label is missing
    ///
    pub fn new(leaf_label: Option<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            label: match leaf_label {
                Some(label) => LeafLabel::Activity(label),
                None => LeafLabel::Tau,
            },
        }
    }
}

///
/// Process tree struct that contains a [`Node`] as root
///
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct ProcessTree {
    /// The root of the process tree
    pub root: Node,
}

impl ProcessTree {
    ///
    /// Initializes the process tree with the given node as root
    ///
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    ///
    /// Returns `true` if every operator node of the tree has a valid number
    /// of children (see [`Node::check_children_valid`]).
    ///
    pub fn is_valid(&self) -> bool {
        let mut curr_nodes: Vec<&Node> = vec![&self.root];
        let mut next_nodes: Vec<&Node> = Vec::new();

        while !curr_nodes.is_empty() {
            for node in &curr_nodes {
                if !node.check_children_valid() {
                    return false;
                }
                if let Node::Operator(op) = node {
                    next_nodes.extend(op.children.iter());
                }
            }
            curr_nodes = next_nodes;
            next_nodes = Vec::new();
        }

        true
    }

    ///
    /// Returns all descendant [`Leaf`]s, from left to right
    ///
    pub fn find_all_leaves(&self) -> Vec<&Leaf> {
        let mut result: Vec<&Leaf> = Vec::new();
        let mut stack: Vec<&Node> = vec![&self.root];

        while let Some(node) = stack.pop() {
            match node {
                Node::Operator(op) => stack.extend(op.children.iter().rev()),
                Node::Leaf(leaf) => result.push(leaf),
            }
        }

        result
    }

    ///
    /// Returns the activity labels of all non-silent leaves, from left to right
    ///
    pub fn leaf_activities(&self) -> Vec<&str> {
        self.find_all_leaves()
            .iter()
            .filter_map(|leaf| match &leaf.label {
                LeafLabel::Activity(act) => Some(act.as_str()),
                LeafLabel::Tau => None,
            })
            .collect()
    }
}

impl Display for ProcessTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(act: &str) -> Node {
        Node::new_leaf(Some(act.into()))
    }

    #[test]
    fn tree_notation() {
        let tree = ProcessTree::new(Node::new_operator(
            OperatorType::Sequence,
            vec![
                leaf("a"),
                Node::new_operator(OperatorType::ExclusiveChoice, vec![leaf("b"), leaf("c")]),
                Node::new_operator(
                    OperatorType::Loop,
                    vec![
                        Node::new_operator(OperatorType::Concurrency, vec![leaf("d"), leaf("e")]),
                        Node::new_leaf(None),
                    ],
                ),
            ],
        ));
        assert_eq!(tree.to_string(), "->('a', X('b', 'c'), *(+('d', 'e'), tau))");
    }

    #[test]
    fn structural_equality_ignores_node_ids() {
        let make = || {
            ProcessTree::new(Node::new_operator(
                OperatorType::ExclusiveChoice,
                vec![leaf("a"), leaf("b")],
            ))
        };
        let t1 = make();
        let t2 = make();
        assert_ne!(t1.root.get_uuid(), t2.root.get_uuid());
        assert_eq!(t1, t2);
    }

    #[test]
    fn child_arity_validation() {
        // Operators other than loop need at least two children
        let single_child = ProcessTree::new(Node::new_operator(
            OperatorType::Sequence,
            vec![leaf("a")],
        ));
        assert!(!single_child.is_valid());

        // A loop needs at least one child
        let flower = ProcessTree::new(Node::new_operator(OperatorType::Loop, vec![leaf("a")]));
        assert!(flower.is_valid());
        let empty_loop = ProcessTree::new(Node::new_operator(OperatorType::Loop, vec![]));
        assert!(!empty_loop.is_valid());

        // Validation descends into children
        let nested = ProcessTree::new(Node::new_operator(
            OperatorType::ExclusiveChoice,
            vec![
                leaf("a"),
                Node::new_operator(OperatorType::Concurrency, vec![leaf("b")]),
            ],
        ));
        assert!(!nested.is_valid());
    }

    #[test]
    fn leaves_are_collected_left_to_right() {
        let tree = ProcessTree::new(Node::new_operator(
            OperatorType::Sequence,
            vec![
                leaf("a"),
                Node::new_operator(OperatorType::Concurrency, vec![leaf("b"), leaf("c")]),
                leaf("d"),
            ],
        ));
        assert_eq!(tree.leaf_activities(), vec!["a", "b", "c", "d"]);
    }
}
