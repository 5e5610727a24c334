/// How the tree assembler picks the two lowest-weight candidates.
///
/// Both strategies break ties the same way (earlier candidate first), so they
/// always assemble identical trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Binary min-heap keyed by `(weight, sequence)`. O(n log n).
    #[default]
    MinHeap,
    /// Stable-sort the candidates and take the first two on every merge.
    /// O(n² log n), kept to cross-check the heap.
    SortAndShift,
}

/// The code bound to the only symbol of a single-symbol input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingleSymbolCode {
    /// The lone symbol gets the one-bit code `0`.
    #[default]
    OneBit,
    /// The lone symbol gets the empty code; encoded streams carry no bits.
    Empty,
}

/// Options for building a prefix code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeConfig {
    pub merge_strategy: MergeStrategy,
    pub single_symbol: SingleSymbolCode,
}

impl CodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merge_strategy(mut self, merge_strategy: MergeStrategy) -> Self {
        self.merge_strategy = merge_strategy;
        self
    }

    pub fn with_single_symbol(mut self, single_symbol: SingleSymbolCode) -> Self {
        self.single_symbol = single_symbol;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodeConfig::default();
        assert_eq!(config.merge_strategy, MergeStrategy::MinHeap);
        assert_eq!(config.single_symbol, SingleSymbolCode::OneBit);
    }

    #[test]
    fn test_builder_overrides() {
        let config = CodeConfig::new()
            .with_merge_strategy(MergeStrategy::SortAndShift)
            .with_single_symbol(SingleSymbolCode::Empty);
        assert_eq!(config.merge_strategy, MergeStrategy::SortAndShift);
        assert_eq!(config.single_symbol, SingleSymbolCode::Empty);
    }
}
