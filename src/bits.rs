use std::fmt;
use std::str::FromStr;

use crate::error::HuffmanError;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn append_code(&mut self, code: &BitSequence) {
        self.bits.extend_from_slice(&code.bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn is_prefix_of(&self, other: &BitSequence) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.iter().map(|bit| if bit { '1' } else { '0' }).collect();
        f.pad(&rendered)
    }
}

impl FromStr for BitSequence {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitSequence::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(HuffmanError::InvalidBit { found, position }),
            }
        }
        Ok(bits)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitSequence {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_append_order() {
        let mut bits = BitSequence::new();
        bits.push(true);
        bits.push(false);
        bits.push(true);
        bits.push(true);

        assert_eq!(bits.to_string(), "1011");
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.get(4), None);
    }

    #[test]
    fn append_code_counts_every_bit() {
        let code: BitSequence = "110".parse().unwrap();
        let mut bits = BitSequence::new();
        bits.push(false);
        bits.append_code(&code);
        bits.append_code(&code);

        assert_eq!(bits.len(), 7);
        assert_eq!(bits.to_string(), "0110110");
    }

    #[test]
    fn parse_rejects_non_binary() {
        assert_eq!(
            "0120".parse::<BitSequence>(),
            Err(HuffmanError::InvalidBit {
                found: '2',
                position: 2
            })
        );
    }

    #[test]
    fn empty_string_is_empty_sequence() {
        let bits: BitSequence = "".parse().unwrap();
        assert!(bits.is_empty());
        assert_eq!(bits.to_string(), "");
    }

    #[test]
    fn prefix_check() {
        let short: BitSequence = "10".parse().unwrap();
        let long: BitSequence = "101".parse().unwrap();

        assert!(short.is_prefix_of(&long));
        assert!(!long.is_prefix_of(&short));
        assert!(short.is_prefix_of(&short));
    }
}
