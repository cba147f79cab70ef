use crate::bits::BitSequence;
use crate::codes::CodeTable;

/// Symbols with no code in `table` are skipped.
pub fn encode(text: &str, table: &CodeTable) -> BitSequence {
    let mut encoded = BitSequence::new();
    for symbol in text.chars() {
        if let Some(code) = table.get(symbol) {
            encoded.append_code(code);
        }
    }

    encoded
}
