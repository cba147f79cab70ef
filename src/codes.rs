use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::bits::BitSequence;
use crate::frequency::FrequencyTable;
use crate::huffman::{Node, PrefixTree};

/// Left edges are `0`, right edges `1`; a lone leaf gets the code `0`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, BitSequence>,
}

impl CodeTable {
    pub fn from_tree(tree: &PrefixTree) -> Self {
        let mut codes = BTreeMap::new();
        let root = tree.root();

        if let Some(symbol) = root.symbol() {
            codes.insert(symbol, BitSequence::from_iter([false]));
        } else {
            fill(root, &mut BitSequence::new(), &mut codes);
        }
        debug!("derived {} codes", codes.len());

        Self { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&BitSequence> {
        self.codes.get(&symbol.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &BitSequence)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| {
                self.get(symbol)
                    .map(|code| u64::from(count) * code.len() as u64)
            })
            .sum()
    }
}

fn fill(node: &Node, path: &mut BitSequence, codes: &mut BTreeMap<char, BitSequence>) {
    match node.children() {
        None => {
            if let Some(symbol) = node.symbol() {
                codes.insert(symbol, path.clone());
            }
        }
        Some((ln, rn)) => {
            let mut left = path.clone();
            left.push(false);
            fill(ln, &mut left, codes);

            path.push(true);
            fill(rn, path, codes);
        }
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{symbol}: {code}")?;
        }
        Ok(())
    }
}
