//! ID3 decision-tree induction over the categorical task attributes.
//!
//! At every node the attribute with the highest information gain is chosen
//! among those not yet used on the path. Candidates are examined in
//! [`Attribute::ALL`] order and a later attribute replaces the current best
//! only when its gain is strictly larger (beyond [`GAIN_EPSILON`]), so equal
//! gains resolve to the earliest attribute.
//!
//! # References
//!
//! Quinlan (1986), "Induction of Decision Trees"

use super::exemplar::Exemplar;
use crate::error::{EngineError, Result};
use crate::task::{Attribute, Attributes};
use tracing::{debug, trace};

/// Gains closer than this are treated as equal.
pub const GAIN_EPSILON: f64 = 1e-9;

/// A node of the induced tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal node carrying a base score.
    Leaf { score: u32 },

    /// Internal node branching on one attribute.
    Split {
        attribute: Attribute,
        /// One slot per attribute value (indexed by
        /// [`Attributes::value_index`]); `None` when no exemplar reached
        /// that value.
        branches: Vec<Option<Node>>,
        /// Most frequent score among the exemplars at this node. Returned
        /// when the input's value has no branch.
        majority: u32,
    },
}

impl Node {
    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split { branches, .. } => {
                1 + branches
                    .iter()
                    .flatten()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split { branches, .. } => branches.iter().flatten().map(Node::leaf_count).sum(),
        }
    }
}

/// An immutable decision tree induced from an exemplar table.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    /// Induces a tree from `exemplars`.
    ///
    /// Fails with [`EngineError::EmptyExemplarTable`] when no rows are given.
    pub fn induce(exemplars: &[Exemplar]) -> Result<Self> {
        if exemplars.is_empty() {
            return Err(EngineError::EmptyExemplarTable);
        }
        Ok(Self::grow(exemplars))
    }

    /// Induction without the emptiness check. An empty table yields a
    /// single zero-score leaf.
    pub(crate) fn grow(exemplars: &[Exemplar]) -> Self {
        let rows: Vec<&Exemplar> = exemplars.iter().collect();
        let root = build(&rows, &Attribute::ALL);
        let tree = Self { root };
        debug!(
            exemplars = exemplars.len(),
            depth = tree.depth(),
            leaves = tree.leaf_count(),
            "induced decision tree"
        );
        tree
    }

    /// Walks the tree with `attributes` and returns the score reached.
    pub fn predict(&self, attributes: &Attributes) -> u32 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { score } => return *score,
                Node::Split {
                    attribute,
                    branches,
                    majority,
                } => match branches
                    .get(attributes.value_index(*attribute))
                    .and_then(Option::as_ref)
                {
                    Some(child) => node = child,
                    None => return *majority,
                },
            }
        }
    }

    /// Root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of split levels on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

fn build(rows: &[&Exemplar], candidates: &[Attribute]) -> Node {
    let majority = majority_score(rows);
    if is_pure(rows) || candidates.is_empty() {
        return Node::Leaf { score: majority };
    }

    let base = entropy(rows);
    let mut best: Option<(Attribute, f64)> = None;
    for &attribute in candidates {
        let gain = base - split_entropy(rows, attribute);
        trace!(attribute = attribute.name(), gain, rows = rows.len(), "candidate split");
        if best.is_none_or(|(_, g)| gain > g + GAIN_EPSILON) {
            best = Some((attribute, gain));
        }
    }

    let (attribute, gain) = match best {
        Some(b) if b.1 > GAIN_EPSILON => b,
        // Remaining attributes cannot separate these rows.
        _ => return Node::Leaf { score: majority },
    };
    debug!(attribute = attribute.name(), gain, rows = rows.len(), "split");

    let remaining: Vec<Attribute> = candidates
        .iter()
        .copied()
        .filter(|&a| a != attribute)
        .collect();

    let branches = partition(rows, attribute)
        .into_iter()
        .map(|subset| (!subset.is_empty()).then(|| build(&subset, &remaining)))
        .collect();

    Node::Split {
        attribute,
        branches,
        majority,
    }
}

/// Scores paired with their frequency, in first-seen order.
fn score_counts(rows: &[&Exemplar]) -> Vec<(u32, usize)> {
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for row in rows {
        match counts.iter_mut().find(|(s, _)| *s == row.base_score) {
            Some((_, n)) => *n += 1,
            None => counts.push((row.base_score, 1)),
        }
    }
    counts
}

/// Most frequent score; ties go to the score seen first. 0 for no rows.
fn majority_score(rows: &[&Exemplar]) -> u32 {
    let mut best: Option<(u32, usize)> = None;
    for (score, n) in score_counts(rows) {
        if best.is_none_or(|(_, m)| n > m) {
            best = Some((score, n));
        }
    }
    best.map_or(0, |(score, _)| score)
}

fn is_pure(rows: &[&Exemplar]) -> bool {
    rows.windows(2).all(|w| w[0].base_score == w[1].base_score)
}

/// Shannon entropy (bits) of the score distribution.
fn entropy(rows: &[&Exemplar]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let total = rows.len() as f64;
    score_counts(rows)
        .into_iter()
        .map(|(_, n)| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Weighted entropy of the partitions induced by `attribute`.
fn split_entropy(rows: &[&Exemplar], attribute: Attribute) -> f64 {
    let total = rows.len() as f64;
    partition(rows, attribute)
        .iter()
        .filter(|subset| !subset.is_empty())
        .map(|subset| subset.len() as f64 / total * entropy(subset))
        .sum()
}

fn partition<'a>(rows: &[&'a Exemplar], attribute: Attribute) -> Vec<Vec<&'a Exemplar>> {
    let mut parts: Vec<Vec<&Exemplar>> = vec![Vec::new(); attribute.cardinality()];
    for &row in rows {
        parts[row.attributes.value_index(attribute)].push(row);
    }
    parts
}
