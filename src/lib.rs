//! Static Huffman coding over letters.
//!
//! Build a [`PrefixTree`] from a [`FrequencyTable`], derive its
//! [`CodeTable`], then [`encode`] text into a [`BitSequence`]:
//!
//! ```
//! use huffcode::{FrequencyTable, PrefixTree, encode};
//!
//! let frequencies = FrequencyTable::from_text("I have a dream")?;
//! let tree = PrefixTree::build(&frequencies)?;
//! let codes = tree.codes();
//! let bits = encode("dream", &codes);
//! assert_eq!(bits.len() as u64, codes.weighted_length(&FrequencyTable::from_text("dream")?));
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```

pub mod bits;
pub mod codes;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod huffman;

pub use bits::BitSequence;
pub use codes::CodeTable;
pub use encoder::encode;
pub use error::HuffmanError;
pub use frequency::FrequencyTable;
pub use huffman::{Node, PrefixTree};
