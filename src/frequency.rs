use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{PrefixCodeError, Result};

/// Anything that can be counted and coded: bytes, chars, or any other
/// ordered, hashable value.
pub trait Symbol: Ord + Hash + Clone + Debug {}

impl<T: Ord + Hash + Clone + Debug> Symbol for T {}

/// Occurrence counts for every distinct symbol of an input.
///
/// Entries keep the order in which their symbol was first seen. That order
/// carries no meaning for the counts themselves; the tree assembler uses it
/// to break ties between equal weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    entries: Vec<(S, usize)>,
    index: HashMap<S, usize>,
    total: usize,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Tally a sequence of symbols. Fails on an empty sequence.
    pub fn from_symbols<I>(input: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        let mut entries: Vec<(S, usize)> = Vec::new();
        let mut index: HashMap<S, usize> = HashMap::new();
        let mut total = 0;

        for symbol in input {
            match index.get(&symbol) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(symbol.clone(), entries.len());
                    entries.push((symbol, 1));
                }
            }
            total += 1;
        }

        if total == 0 {
            return Err(PrefixCodeError::InvalidInput(
                "cannot count frequencies of an empty sequence".to_string(),
            ));
        }

        log::debug!(
            "frequency analysis: {} symbols, {} distinct",
            total,
            entries.len()
        );

        Ok(FrequencyTable { entries, index, total })
    }

    /// Build a table from counts gathered elsewhere. Entries keep the given
    /// order. Zero counts and repeated symbols are rejected; an empty list is
    /// accepted and left for the tree assembler to refuse.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        let mut total = 0usize;

        for (symbol, count) in counts {
            if count == 0 {
                return Err(PrefixCodeError::InvalidInput(format!(
                    "symbol {:?} has a zero count",
                    symbol
                )));
            }
            if index.contains_key(&symbol) {
                return Err(PrefixCodeError::InvalidInput(format!(
                    "symbol {:?} appears more than once",
                    symbol
                )));
            }
            index.insert(symbol.clone(), entries.len());
            entries.push((symbol, count));
            total = total.checked_add(count).ok_or_else(|| {
                PrefixCodeError::InvalidInput("total count overflows usize".to_string())
            })?;
        }

        Ok(FrequencyTable { entries, index, total })
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, which is the length of the counted input.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(symbol, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }
}

/// Phase 1: count every distinct symbol of `input`.
pub fn build_frequency_table<S, I>(input: I) -> Result<FrequencyTable<S>>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    FrequencyTable::from_symbols(input)
}
