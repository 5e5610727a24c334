//! Step-by-step driver for the three phases.
//!
//! `PrefixCodeBuilder` only moves forward: each phase needs the previous one
//! to have completed, and a phase cannot be re-entered. A failed phase leaves
//! the builder where it was.

use std::fmt;

use crate::code_table::CodeTable;
use crate::config::CodeConfig;
use crate::error::{PrefixCodeError, Result};
use crate::frequency::{FrequencyTable, Symbol};
use crate::hufftree::HuffmanTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    Uninitialized,
    FrequenciesComputed,
    TreeBuilt,
    CodesAssigned,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Uninitialized => "uninitialized",
            PipelineStage::FrequenciesComputed => "frequencies computed",
            PipelineStage::TreeBuilt => "tree built",
            PipelineStage::CodesAssigned => "codes assigned",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct PrefixCodeBuilder<S: Symbol> {
    config: CodeConfig,
    stage: PipelineStage,
    frequencies: Option<FrequencyTable<S>>,
    tree: Option<HuffmanTree<S>>,
    codes: Option<CodeTable<S>>,
}

impl<S: Symbol> PrefixCodeBuilder<S> {
    pub fn new(config: CodeConfig) -> Self {
        PrefixCodeBuilder {
            config,
            stage: PipelineStage::Uninitialized,
            frequencies: None,
            tree: None,
            codes: None,
        }
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    pub fn config(&self) -> &CodeConfig {
        &self.config
    }

    fn expect_stage(&self, expected: PipelineStage, phase: &str) -> Result<()> {
        if self.stage != expected {
            return Err(PrefixCodeError::InvalidInput(format!(
                "{} requires stage '{}', builder is at '{}'",
                phase, expected, self.stage
            )));
        }
        Ok(())
    }

    fn advance(&mut self, next: PipelineStage) {
        log::debug!("pipeline: {} -> {}", self.stage, next);
        self.stage = next;
    }

    /// Phase 1.
    pub fn analyze<I>(&mut self, input: I) -> Result<&FrequencyTable<S>>
    where
        I: IntoIterator<Item = S>,
    {
        self.expect_stage(PipelineStage::Uninitialized, "frequency analysis")?;
        let table = FrequencyTable::from_symbols(input)?;
        self.advance(PipelineStage::FrequenciesComputed);
        Ok(&*self.frequencies.insert(table))
    }

    /// Phase 2.
    pub fn build_tree(&mut self) -> Result<&HuffmanTree<S>> {
        self.expect_stage(PipelineStage::FrequenciesComputed, "tree assembly")?;
        let table = self.frequencies.as_ref().ok_or_else(|| {
            PrefixCodeError::InvalidInput("frequency table missing".to_string())
        })?;
        let tree = HuffmanTree::from_frequencies(table, &self.config)?;
        self.advance(PipelineStage::TreeBuilt);
        Ok(&*self.tree.insert(tree))
    }

    /// Phase 3.
    pub fn extract_codes(&mut self) -> Result<&CodeTable<S>> {
        self.expect_stage(PipelineStage::TreeBuilt, "code extraction")?;
        let tree = self
            .tree
            .as_ref()
            .ok_or_else(|| PrefixCodeError::InvalidInput("tree missing".to_string()))?;
        let codes = CodeTable::from_tree(tree, &self.config);
        self.advance(PipelineStage::CodesAssigned);
        Ok(&*self.codes.insert(codes))
    }

    /// Run all three phases on `input`.
    pub fn run<I>(mut self, input: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        self.analyze(input)?;
        self.build_tree()?;
        self.extract_codes()?;
        Ok(self)
    }

    pub fn frequencies(&self) -> Option<&FrequencyTable<S>> {
        self.frequencies.as_ref()
    }

    pub fn tree(&self) -> Option<&HuffmanTree<S>> {
        self.tree.as_ref()
    }

    pub fn codes(&self) -> Option<&CodeTable<S>> {
        self.codes.as_ref()
    }

    /// Tree and code table of a finished pipeline.
    pub fn into_parts(self) -> Result<(HuffmanTree<S>, CodeTable<S>)> {
        match (self.stage, self.tree, self.codes) {
            (PipelineStage::CodesAssigned, Some(tree), Some(codes)) => Ok((tree, codes)),
            (stage, _, _) => Err(PrefixCodeError::InvalidInput(format!(
                "pipeline is not finished, builder is at '{}'",
                stage
            ))),
        }
    }
}

impl<S: Symbol> Default for PrefixCodeBuilder<S> {
    fn default() -> Self {
        Self::new(CodeConfig::default())
    }
}
