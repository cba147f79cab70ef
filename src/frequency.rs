use std::collections::BTreeMap;

use crate::error::HuffmanError;

/// Positive symbol counts, keyed by lower-cased symbol.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Result<Self, HuffmanError> {
        let mut table = FrequencyTable::new();
        for symbol in text.chars().filter(char::is_ascii_alphabetic) {
            table.add(symbol, 1)?;
        }

        Ok(table)
    }

    pub fn add(&mut self, symbol: char, count: u32) -> Result<(), HuffmanError> {
        if count == 0 {
            return Err(HuffmanError::ZeroFrequency { symbol });
        }

        let symbol = symbol.to_ascii_lowercase();
        let entry = self.counts.entry(symbol).or_default();
        *entry = entry
            .checked_add(count)
            .ok_or(HuffmanError::FrequencyOverflow { symbol })?;
        Ok(())
    }

    pub fn get(&self, symbol: char) -> Option<u32> {
        self.counts.get(&symbol.to_ascii_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&count| u64::from(count)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl TryFrom<&[(char, u32)]> for FrequencyTable {
    type Error = HuffmanError;

    fn try_from(entries: &[(char, u32)]) -> Result<Self, Self::Error> {
        let mut table = FrequencyTable::new();
        for &(symbol, count) in entries {
            table.add(symbol, count)?;
        }
        Ok(table)
    }
}

impl<const N: usize> TryFrom<[(char, u32); N]> for FrequencyTable {
    type Error = HuffmanError;

    fn try_from(entries: [(char, u32); N]) -> Result<Self, Self::Error> {
        Self::try_from(&entries[..])
    }
}
