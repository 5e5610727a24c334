use std::collections::BTreeMap;

use crate::bit_vec::BitVec;
use crate::config::{CodeConfig, SingleSymbolCode};
use crate::frequency::{FrequencyTable, Symbol};
use crate::hufftree::{HuffNode, HuffmanTree};

/// Code word for every leaf of a finished tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: BTreeMap<S, BitVec>,
}

impl<S: Symbol> CodeTable<S> {
    /// Depth-first, left before right: `0` for a left edge, `1` for a right
    /// edge. Uses an explicit stack so very deep trees cannot overflow.
    pub fn from_tree(tree: &HuffmanTree<S>, config: &CodeConfig) -> Self {
        let mut codes = BTreeMap::new();

        if let HuffNode::Leaf { symbol, .. } = tree.root() {
            let code: BitVec = match config.single_symbol {
                SingleSymbolCode::OneBit => std::iter::once(false).collect(),
                SingleSymbolCode::Empty => BitVec::new(),
            };
            codes.insert(symbol.clone(), code);
            return CodeTable { codes };
        }

        let mut stack = vec![(tree.root(), BitVec::new())];
        while let Some((node, code)) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    codes.insert(symbol.clone(), code);
                }
                HuffNode::Internal { left, right, .. } => {
                    let mut right_code = code.clone();
                    right_code.push_bit(true);
                    let mut left_code = code;
                    left_code.push_bit(false);
                    stack.push((right.as_ref(), right_code));
                    stack.push((left.as_ref(), left_code));
                }
            }
        }

        log::debug!("code extraction: {} codes assigned", codes.len());
        CodeTable { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitVec> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitVec)> + '_ {
        self.codes.iter()
    }

    /// No code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut words: Vec<String> = self.codes.values().map(|c| c.to_string()).collect();
        words.sort();
        // after sorting, a prefix always sorts right before some word it prefixes
        words.windows(2).all(|pair| !pair[1].starts_with(pair[0].as_str()))
    }

    /// Number of bits needed to encode the input `table` was counted from.
    /// Symbols missing from this code table contribute nothing.
    pub fn encoded_bit_len(&self, table: &FrequencyTable<S>) -> usize {
        table
            .iter()
            .filter_map(|(symbol, count)| self.codes.get(symbol).map(|code| code.len() * count))
            .sum()
    }

    /// Weighted mean code length in bits per symbol.
    pub fn average_code_length(&self, table: &FrequencyTable<S>) -> f64 {
        if table.total() == 0 {
            return 0.0;
        }
        self.encoded_bit_len(table) as f64 / table.total() as f64
    }
}

/// Phase 3: bind a code to every leaf of the tree.
pub fn extract_codes<S: Symbol>(tree: &HuffmanTree<S>) -> CodeTable<S> {
    CodeTable::from_tree(tree, &CodeConfig::default())
}

pub fn extract_codes_with_config<S: Symbol>(
    tree: &HuffmanTree<S>,
    config: &CodeConfig,
) -> CodeTable<S> {
    CodeTable::from_tree(tree, config)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::frequency::build_frequency_table;
    use crate::hufftree::build_tree;

    fn codes_of(text: &str) -> (FrequencyTable<char>, CodeTable<char>) {
        let table = build_frequency_table(text.chars()).unwrap();
        let tree = build_tree(&table).unwrap();
        let codes = extract_codes(&tree);
        (table, codes)
    }

    #[test]
    fn test_abracadabra_codes() {
        let (table, codes) = codes_of("abracadabra");
        let rendered: Vec<(char, String)> =
            codes.iter().map(|(s, c)| (*s, c.to_string())).collect();
        assert_eq!(
            rendered,
            vec![
                ('a', "0".to_string()),
                ('b', "110".to_string()),
                ('c', "100".to_string()),
                ('d', "101".to_string()),
                ('r', "111".to_string()),
            ]
        );
        assert!(codes.is_prefix_free());
        assert_eq!(codes.encoded_bit_len(&table), 23);
    }

    #[test]
    fn test_single_symbol_conventions() {
        let table = build_frequency_table("aaaa".chars()).unwrap();
        let tree = build_tree(&table).unwrap();

        let one_bit = extract_codes(&tree);
        assert_eq!(one_bit.len(), 1);
        assert_eq!(one_bit.get(&'a').map(|c| c.to_string()), Some("0".to_string()));
        assert_eq!(one_bit.encoded_bit_len(&table), 4);

        let empty = extract_codes_with_config(
            &tree,
            &CodeConfig::new().with_single_symbol(SingleSymbolCode::Empty),
        );
        assert_eq!(empty.get(&'a'), Some(&BitVec::new()));
        assert_eq!(empty.encoded_bit_len(&table), 0);
        assert!(empty.is_prefix_free());
    }

    #[test]
    fn test_average_code_length_bounds() {
        let (table, codes) = codes_of("the quick brown fox jumps over the lazy dog");
        let avg = codes.average_code_length(&table);
        // never shorter than one bit, never longer than a fixed-length code
        let fixed = (table.len() as f64).log2().ceil();
        assert!(avg >= 1.0);
        assert!(avg <= fixed);
    }

    #[test]
    fn test_prefix_check_detects_violation() {
        let (_, codes) = codes_of("ab");
        assert!(codes.is_prefix_free());

        let mut broken = codes.clone();
        broken.codes.insert('z', BitVec::new());
        assert!(!broken.is_prefix_free());
    }
}
