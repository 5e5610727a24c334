//! # huffman_prefix
//!
//! Builds Huffman prefix codes in three phases: count symbol frequencies,
//! merge the two lightest nodes until one tree remains, then read a code for
//! every leaf off the tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffman_prefix::{build_frequency_table, build_tree, extract_codes};
//!
//! let table = build_frequency_table("abracadabra".chars())?;
//! let tree = build_tree(&table)?;
//! let codes = extract_codes(&tree);
//!
//! assert_eq!(codes.len(), 5);
//! assert!(codes.is_prefix_free());
//! # Ok::<(), huffman_prefix::PrefixCodeError>(())
//! ```
//!
//! `HuffmanCodec` wraps the same pipeline and can encode and decode:
//!
//! ```rust
//! use huffman_prefix::HuffmanCodec;
//!
//! let codec = HuffmanCodec::from_text("abracadabra")?;
//! let encoded = codec.encode_text("abracadabra")?;
//! assert_eq!(codec.decode_text(&encoded)?, "abracadabra");
//! # Ok::<(), huffman_prefix::PrefixCodeError>(())
//! ```

pub mod bit_vec;
pub mod code_table;
pub mod config;
pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod pipeline;

// Internal modules - not part of public API
mod min_heap;

pub use bit_vec::BitVec;
pub use code_table::{extract_codes, extract_codes_with_config, CodeTable};
pub use config::{CodeConfig, MergeStrategy, SingleSymbolCode};
pub use error::{PrefixCodeError, Result};
pub use frequency::{build_frequency_table, FrequencyTable, Symbol};
pub use huffman_codec::{EncodedData, HuffmanCodec};
pub use hufftree::{build_tree, build_tree_with_config, HuffNode, HuffmanTree};
pub use pipeline::{PipelineStage, PrefixCodeBuilder};
