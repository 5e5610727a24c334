use crate::bit_vec::BitVec;
use crate::code_table::CodeTable;
use crate::config::CodeConfig;
use crate::error::{PrefixCodeError, Result};
use crate::frequency::Symbol;
use crate::hufftree::{HuffNode, HuffmanTree};
use crate::pipeline::PrefixCodeBuilder;

/// An encoded symbol sequence: the concatenated code words and how many
/// symbols they stand for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedData {
    pub bits: BitVec,
    pub symbol_count: usize,
}

/// A finished prefix code: the tree used for decoding and the code table
/// used for encoding.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S: Symbol> {
    tree: HuffmanTree<S>,
    encode_table: CodeTable<S>,
}

impl<S: Symbol> HuffmanCodec<S> {
    pub fn new(tree: HuffmanTree<S>, config: &CodeConfig) -> Self {
        let encode_table = CodeTable::from_tree(&tree, config);
        HuffmanCodec { tree, encode_table }
    }

    /// Run the whole pipeline over `input` with the default config.
    pub fn from_symbols<I>(input: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_symbols_with_config(input, CodeConfig::default())
    }

    pub fn from_symbols_with_config<I>(input: I, config: CodeConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        let (tree, encode_table) = PrefixCodeBuilder::new(config).run(input)?.into_parts()?;
        Ok(HuffmanCodec { tree, encode_table })
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable<S> {
        &self.encode_table
    }

    pub fn encode(&self, data: &[S]) -> Result<EncodedData> {
        let mut bits = BitVec::new();
        for symbol in data {
            let code = self
                .encode_table
                .get(symbol)
                .ok_or_else(|| PrefixCodeError::UnknownSymbol(format!("{:?}", symbol)))?;
            bits.push_bits(code);
        }

        log::debug!("encoded {} symbols into {} bits", data.len(), bits.len());

        Ok(EncodedData {
            bits,
            symbol_count: data.len(),
        })
    }

    pub fn decode(&self, encoded: &EncodedData) -> Result<Vec<S>> {
        let bits = &encoded.bits;
        let mut result = Vec::with_capacity(encoded.symbol_count);

        match self.tree.root() {
            HuffNode::Leaf { symbol, .. } => {
                if bits.is_empty() {
                    // empty-code convention: the count alone carries the data
                    result.resize(encoded.symbol_count, symbol.clone());
                } else {
                    for (bit_index, bit) in bits.iter().enumerate() {
                        if bit {
                            return Err(PrefixCodeError::InvalidBit { bit_index });
                        }
                        result.push(symbol.clone());
                    }
                }
            }
            HuffNode::Internal { .. } => {
                let mut bit_index = 0;
                while bit_index < bits.len() {
                    let symbol = self.tree.decode_symbol(bits, &mut bit_index)?;
                    result.push(symbol.clone());
                }
            }
        }

        if result.len() != encoded.symbol_count {
            return Err(PrefixCodeError::LengthMismatch {
                expected: encoded.symbol_count,
                actual: result.len(),
            });
        }

        Ok(result)
    }
}

impl HuffmanCodec<char> {
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_symbols(text.chars())
    }

    pub fn encode_text(&self, text: &str) -> Result<EncodedData> {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols)
    }

    pub fn decode_text(&self, encoded: &EncodedData) -> Result<String> {
        Ok(self.decode(encoded)?.into_iter().collect())
    }
}

impl HuffmanCodec<u8> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_symbols(bytes.iter().copied())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::SingleSymbolCode;

    #[test]
    fn test_text_roundtrip() {
        let text = "abracadabra";
        let codec = HuffmanCodec::from_text(text).unwrap();
        let encoded = codec.encode_text(text).unwrap();
        assert_eq!(encoded.bits.len(), 23);
        assert_eq!(encoded.bits.to_string(), "01101110100010101101110");
        assert_eq!(codec.decode_text(&encoded).unwrap(), text);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let data = b"Huffman encoding is a greedy algorithm that builds optimal prefix codes.";
        let codec = HuffmanCodec::from_bytes(data).unwrap();
        let encoded = codec.encode(data).unwrap();
        assert!(encoded.bits.len() < data.len() * 8);
        assert_eq!(codec.decode(&encoded).unwrap(), data.to_vec());
    }

    #[test]
    fn test_unknown_symbol() {
        let codec = HuffmanCodec::from_text("abc").unwrap();
        let err = codec.encode_text("abz").unwrap_err();
        assert_eq!(err, PrefixCodeError::UnknownSymbol("'z'".to_string()));
    }

    #[test]
    fn test_truncated_stream() {
        let codec = HuffmanCodec::from_text("abracadabra").unwrap();
        let mut encoded = codec.encode_text("ab").unwrap();
        // "0" + "110", drop the last bit
        encoded.bits = encoded.bits.iter().take(3).collect();
        let err = codec.decode(&encoded).unwrap_err();
        assert_eq!(err, PrefixCodeError::TruncatedCode { bit_index: 3 });
    }

    #[test]
    fn test_length_mismatch() {
        let codec = HuffmanCodec::from_text("abracadabra").unwrap();
        let mut encoded = codec.encode_text("abra").unwrap();
        encoded.symbol_count = 5;
        let err = codec.decode(&encoded).unwrap_err();
        assert_eq!(err, PrefixCodeError::LengthMismatch { expected: 5, actual: 4 });
    }

    #[test]
    fn test_single_symbol_one_bit() {
        let codec = HuffmanCodec::from_text("aaaa").unwrap();
        let encoded = codec.encode_text("aaaa").unwrap();
        assert_eq!(encoded.bits.to_string(), "0000");
        assert_eq!(codec.decode_text(&encoded).unwrap(), "aaaa");

        let bad = EncodedData {
            bits: [false, true].into_iter().collect(),
            symbol_count: 2,
        };
        assert_eq!(
            codec.decode(&bad).unwrap_err(),
            PrefixCodeError::InvalidBit { bit_index: 1 }
        );
    }

    #[test]
    fn test_single_symbol_empty_code() {
        let config = CodeConfig::new().with_single_symbol(SingleSymbolCode::Empty);
        let codec = HuffmanCodec::from_symbols_with_config("zzz".chars(), config).unwrap();
        let encoded = codec.encode(&['z', 'z', 'z']).unwrap();
        assert!(encoded.bits.is_empty());
        assert_eq!(encoded.symbol_count, 3);
        assert_eq!(codec.decode(&encoded).unwrap(), vec!['z', 'z', 'z']);
    }

    #[test]
    fn test_empty_input_has_no_codec() {
        let err = HuffmanCodec::from_text("").unwrap_err();
        assert!(matches!(err, PrefixCodeError::InvalidInput(_)));
    }
}
