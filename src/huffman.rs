use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use log::{debug, trace};

use crate::codes::CodeTable;
use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeType {
    Leaf(char),
    Internal(Box<Node>, Box<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    node_type: NodeType,
    weight: u64,
}

impl Node {
    fn new_leaf(symbol: char, weight: u64) -> Self {
        Node {
            node_type: NodeType::Leaf(symbol),
            weight,
        }
    }

    fn new_internal(left: Node, right: Node) -> Self {
        Node {
            weight: left.weight + right.weight,
            node_type: NodeType::Internal(Box::new(left), Box::new(right)),
        }
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn symbol(&self) -> Option<char> {
        match self.node_type {
            NodeType::Leaf(symbol) => Some(symbol),
            NodeType::Internal(..) => None,
        }
    }

    pub fn children(&self) -> Option<(&Node, &Node)> {
        match &self.node_type {
            NodeType::Leaf(_) => None,
            NodeType::Internal(left, right) => Some((&**left, &**right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_type, NodeType::Leaf(_))
    }

    fn leaf_count(&self) -> usize {
        match &self.node_type {
            NodeType::Leaf(_) => 1,
            NodeType::Internal(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match &self.node_type {
            NodeType::Leaf(_) => 0,
            NodeType::Internal(left, right) => 1 + left.depth().max(right.depth()),
        }
    }
}

// Reversed for the max-heap: lightest first, then earliest pushed.
#[derive(Debug)]
struct Queued {
    node: Node,
    seq: usize,
}

impl Eq for Queued {}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .weight
            .cmp(&self.node.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTree {
    root: Node,
}

impl PrefixTree {
    /// Equal weights pop in push order; the first node popped goes left.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self, HuffmanError> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyFrequencyTable);
        }

        let mut pqueue = BinaryHeap::with_capacity(frequencies.len());
        let mut seq = 0;
        for (symbol, count) in frequencies.iter() {
            pqueue.push(Queued {
                node: Node::new_leaf(symbol, u64::from(count)),
                seq,
            });
            seq += 1;
        }

        while pqueue.len() > 1 {
            let ln = pqueue.pop().expect("checked with while loop condition");
            let rn = pqueue.pop().expect("checked with while loop condition");
            trace!(
                "merging weights {} (#{}) and {} (#{})",
                ln.node.weight, ln.seq, rn.node.weight, rn.seq
            );

            pqueue.push(Queued {
                node: Node::new_internal(ln.node, rn.node),
                seq,
            });
            seq += 1;
        }

        let root = pqueue.pop().expect("non-empty table leaves one root").node;
        debug!(
            "built prefix tree: {} leaves, depth {}, total weight {}",
            root.leaf_count(),
            root.depth(),
            root.weight
        );

        Ok(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn codes(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }
}

impl fmt::Display for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &self.root, 0, "root")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize, label: &str) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match &node.node_type {
        NodeType::Leaf(symbol) => {
            writeln!(f, "{indent}{label}: '{symbol}' (weight: {})", node.weight)
        }
        NodeType::Internal(ln, rn) => {
            writeln!(f, "{indent}{label}: * (weight: {})", node.weight)?;
            write_node(f, ln, depth + 1, "0")?;
            write_node(f, rn, depth + 1, "1")
        }
    }
}
