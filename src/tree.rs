use itertools::Itertools;

use crate::error::CapacityError;
use crate::frequency::FrequencyTable;
use crate::huffman::{Code, CodeTable, MAX_CODE_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanTree {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Node {
        weight: u64,
        left: Box<HuffmanTree>,
        right: Box<HuffmanTree>,
    },
}

impl HuffmanTree {
    /// Merges the two lightest nodes until one root remains.
    ///
    /// The forest is kept in insertion order: leaves in first-seen order,
    /// merged nodes appended at the back. Ties go to the earliest node, and the
    /// first node taken becomes the left (`0`) child. Returns `None` for an
    /// empty table.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut forest = frequencies
            .iter()
            .map(|(symbol, weight)| HuffmanTree::Leaf { symbol, weight })
            .collect::<Vec<_>>();

        while forest.len() > 1 {
            let left = Self::take_lightest(&mut forest)?;
            let right = Self::take_lightest(&mut forest)?;
            forest.push(HuffmanTree::Node {
                weight: left.weight() + right.weight(),
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        forest.pop()
    }

    fn take_lightest(forest: &mut Vec<Self>) -> Option<Self> {
        let index = forest.iter().position_min_by_key(|node| node.weight())?;
        Some(forest.remove(index))
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffmanTree::Leaf { weight, .. } | HuffmanTree::Node { weight, .. } => *weight,
        }
    }

    fn leftmost_symbol(&self) -> u8 {
        let mut node = self;
        loop {
            match node {
                HuffmanTree::Leaf { symbol, .. } => return *symbol,
                HuffmanTree::Node { left, .. } => node = left.as_ref(),
            }
        }
    }

    /// Sum over leaves of weight times depth, i.e. the payload size in bits.
    pub fn weighted_path_length(&self) -> u64 {
        let mut total = 0;
        let mut stack = vec![(self, 0u64)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanTree::Leaf { weight, .. } => total += weight * depth,
                HuffmanTree::Node { left, right, .. } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
        total
    }

    /// Reads a code off every leaf: `0` for a left descent, `1` for a right one.
    ///
    /// Entries come out in left-first depth-first order. A lone leaf gets the
    /// one-bit code `0`. Any leaf deeper than [`MAX_CODE_LEN`] fails the whole
    /// derivation.
    pub fn codes(&self) -> Result<CodeTable, CapacityError> {
        if let HuffmanTree::Leaf { symbol, .. } = self {
            return Ok(CodeTable::from_derived(vec![(*symbol, Code::new(0, 1))]));
        }

        let mut entries = Vec::new();
        let mut stack = vec![(self, 0u8, 0u8)];

        while let Some((node, bits, depth)) = stack.pop() {
            match node {
                HuffmanTree::Leaf { symbol, .. } => {
                    entries.push((*symbol, Code::new(bits, depth)));
                }
                HuffmanTree::Node { left, right, .. } => {
                    if depth == MAX_CODE_LEN {
                        return Err(CapacityError::CodeTooLong {
                            symbol: node.leftmost_symbol(),
                            max: MAX_CODE_LEN,
                        });
                    }
                    stack.push((right.as_ref(), (bits << 1) | 1, depth + 1));
                    stack.push((left.as_ref(), bits << 1, depth + 1));
                }
            }
        }

        Ok(CodeTable::from_derived(entries))
    }
}
