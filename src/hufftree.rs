use std::cmp::Ordering;
use std::fmt::Write;

use crate::bit_vec::BitVec;
use crate::config::{CodeConfig, MergeStrategy};
use crate::error::{PrefixCodeError, Result};
use crate::frequency::{FrequencyTable, Symbol};
use crate::min_heap::MinHeap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode<S> {
    Leaf {
        weight: usize,
        symbol: S,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode<S>>,
        right: Box<HuffNode<S>>,
    },
}

impl<S> HuffNode<S> {
    pub fn new(symbol: S, weight: usize) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Join two subtrees under a new internal node; `a` becomes the left child.
    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }
}

/// A node waiting to be merged. Ordered by weight, then by the order in which
/// it entered the candidate pool.
#[derive(Debug)]
struct Candidate<S> {
    weight: usize,
    sequence: usize,
    node: HuffNode<S>,
}

impl<S> PartialEq for Candidate<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Candidate<S> {}

impl<S> PartialOrd for Candidate<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Candidate<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.sequence.cmp(&other.sequence))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffNode<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn from_frequencies(table: &FrequencyTable<S>, config: &CodeConfig) -> Result<Self> {
        if table.is_empty() {
            return Err(PrefixCodeError::InvalidInput(
                "cannot build a tree from an empty frequency table".to_string(),
            ));
        }

        let candidates: Vec<Candidate<S>> = table
            .iter()
            .enumerate()
            .map(|(sequence, (symbol, weight))| Candidate {
                weight,
                sequence,
                node: HuffNode::new(symbol.clone(), weight),
            })
            .collect();

        if candidates.len() == 1 {
            log::warn!("single distinct symbol, the tree is a lone leaf");
        }

        let root = match config.merge_strategy {
            MergeStrategy::MinHeap => Self::merge_with_heap(candidates)?,
            MergeStrategy::SortAndShift => Self::merge_with_sort(candidates)?,
        };

        log::debug!(
            "tree assembly: {} leaves merged into root of weight {}",
            table.len(),
            root.weight()
        );

        Ok(HuffmanTree { root })
    }

    fn merge_with_heap(candidates: Vec<Candidate<S>>) -> Result<HuffNode<S>> {
        let mut sequence = candidates.len();
        let mut heap = MinHeap::build(candidates);

        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;
            log::trace!(
                "merge #{} (weight {}) with #{} (weight {})",
                x.sequence,
                x.weight,
                y.sequence,
                y.weight
            );

            let node = HuffNode::merge(x.node, y.node);
            heap.insert(Candidate {
                weight: node.weight(),
                sequence,
                node,
            });
            sequence += 1;
        }

        Ok(heap.extract_min()?.node)
    }

    fn merge_with_sort(mut candidates: Vec<Candidate<S>>) -> Result<HuffNode<S>> {
        let mut sequence = candidates.len();

        while candidates.len() > 1 {
            // stable: equal weights keep pool order
            candidates.sort_by_key(|c| c.weight);
            let x = candidates.remove(0);
            let y = candidates.remove(0);
            log::trace!(
                "merge #{} (weight {}) with #{} (weight {})",
                x.sequence,
                x.weight,
                y.sequence,
                y.weight
            );

            let node = HuffNode::merge(x.node, y.node);
            candidates.push(Candidate {
                weight: node.weight(),
                sequence,
                node,
            });
            sequence += 1;
        }

        candidates
            .pop()
            .map(|c| c.node)
            .ok_or_else(|| PrefixCodeError::InvalidInput("no candidates to merge".to_string()))
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &HuffNode<S> {
        &self.root
    }

    /// Total weight, equal to the length of the counted input.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                HuffNode::Leaf { .. } => count += 1,
                HuffNode::Internal { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffNode::Leaf { .. } => deepest = deepest.max(depth),
                HuffNode::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
        deepest
    }

    /// Walk from the root, consuming bits from `bit_index` until a leaf is
    /// reached. The root must be an internal node.
    pub(crate) fn decode_symbol(&self, bits: &BitVec, bit_index: &mut usize) -> Result<&S> {
        let mut current = &self.root;
        loop {
            match current {
                HuffNode::Leaf { symbol, .. } => return Ok(symbol),
                HuffNode::Internal { left, right, .. } => {
                    let bit = bits.get(*bit_index).ok_or(PrefixCodeError::TruncatedCode {
                        bit_index: *bit_index,
                    })?;
                    *bit_index += 1;
                    current = if bit { right.as_ref() } else { left.as_ref() };
                }
            }
        }
    }
}

impl<S: std::fmt::Debug> HuffmanTree<S> {
    /// Indented, one-node-per-line view of the tree.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(&self.root, 0usize, "root")];
        while let Some((node, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match node {
                HuffNode::Leaf { symbol, weight } => {
                    let _ = writeln!(
                        out,
                        "{}{}-> Leaf: {:?} [weight: {}]",
                        indent, label, symbol, weight
                    );
                }
                HuffNode::Internal { weight, left, right } => {
                    let _ = writeln!(out, "{}{}-> Internal [weight: {}]", indent, label, weight);
                    stack.push((right.as_ref(), depth + 1, "R"));
                    stack.push((left.as_ref(), depth + 1, "L"));
                }
            }
        }
        out
    }
}

/// Phase 2: assemble the prefix tree with the default merge strategy.
pub fn build_tree<S: Symbol>(table: &FrequencyTable<S>) -> Result<HuffmanTree<S>> {
    HuffmanTree::from_frequencies(table, &CodeConfig::default())
}

pub fn build_tree_with_config<S: Symbol>(
    table: &FrequencyTable<S>,
    config: &CodeConfig,
) -> Result<HuffmanTree<S>> {
    HuffmanTree::from_frequencies(table, config)
}
