use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use huffcode::{FrequencyTable, PrefixTree, encode};
use log::info;

/// Letter counts sampled from the "I have a dream" speech.
const LETTER_FREQUENCIES: [(char, u32); 26] = [
    ('a', 1000),
    ('b', 200),
    ('c', 300),
    ('d', 400),
    ('e', 1200),
    ('f', 250),
    ('g', 300),
    ('h', 600),
    ('i', 800),
    ('j', 100),
    ('k', 150),
    ('l', 500),
    ('m', 400),
    ('n', 700),
    ('o', 750),
    ('p', 200),
    ('q', 50),
    ('r', 600),
    ('s', 500),
    ('t', 900),
    ('u', 400),
    ('v', 150),
    ('w', 300),
    ('x', 50),
    ('y', 300),
    ('z', 100),
];

const DEFAULT_WORDS: [&str; 4] = ["dream", "freedom", "hope", "justice"];

#[derive(Parser, Debug)]
#[command(about = "Build Huffman codes for letters and encode words with them", long_about = None)]
struct Args {
    /// Frequency entry as SYMBOL=COUNT. Repeatable; defaults to an English letter table.
    #[arg(short, long = "freq", value_name = "SYMBOL=COUNT", conflicts_with = "text")]
    freqs: Vec<String>,

    /// Count letter frequencies from this text instead.
    #[arg(short, long)]
    text: Option<String>,

    /// Also print the tree structure.
    #[arg(long)]
    tree: bool,

    /// Raise log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Words to encode.
    words: Vec<String>,
}

fn parse_freq(entry: &str) -> Result<(char, u32)> {
    let Some((symbol, count)) = entry.split_once('=') else {
        bail!("frequency entry {entry:?} is not SYMBOL=COUNT");
    };

    let mut chars = symbol.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        bail!("symbol {symbol:?} must be a single character");
    };
    ensure!(
        symbol.is_ascii_alphabetic(),
        "symbol {symbol:?} must be an ASCII letter"
    );

    let count = count
        .trim()
        .parse()
        .with_context(|| format!("parse count for {symbol:?}"))?;

    Ok((symbol, count))
}

fn frequencies(args: &Args) -> Result<FrequencyTable> {
    if let Some(text) = &args.text {
        return FrequencyTable::from_text(text).context("count letters");
    }

    if args.freqs.is_empty() {
        return Ok(FrequencyTable::try_from(LETTER_FREQUENCIES)?);
    }

    let mut table = FrequencyTable::new();
    for entry in &args.freqs {
        let (symbol, count) = parse_freq(entry)?;
        table.add(symbol, count)?;
    }
    Ok(table)
}

fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(1 + usize::from(args.verbose))
        .init()
        .context("initialize logger")?;

    let table = frequencies(&args)?;
    info!(
        "building codes for {} symbols ({} occurrences)",
        table.len(),
        table.total()
    );
    let tree = PrefixTree::build(&table).context("build prefix tree")?;
    let codes = tree.codes();

    if args.tree {
        println!("Tree:\n{tree}");
    }
    println!("Codes:\n{codes}");

    let words: Vec<&str> = if args.words.is_empty() {
        DEFAULT_WORDS.to_vec()
    } else {
        args.words.iter().map(String::as_str).collect()
    };

    for word in words {
        let encoded = encode(word, &codes);
        println!("Word: {word}");
        println!("Encoded: {encoded} ({} bits)\n", encoded.len());
    }

    info!(
        "weighted code length: {} bits",
        codes.weighted_length(&table)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frequency_entries() {
        assert_eq!(parse_freq("a=5").unwrap(), ('a', 5));
        assert_eq!(parse_freq("Q= 12").unwrap(), ('Q', 12));
    }

    #[test]
    fn rejects_bad_frequency_entries() {
        assert!(parse_freq("a5").is_err());
        assert!(parse_freq("ab=5").is_err());
        assert!(parse_freq("=5").is_err());
        assert!(parse_freq("1=5").is_err());
        assert!(parse_freq("a=x").is_err());
    }

    #[test]
    fn default_table_covers_the_alphabet() {
        let args = Args::parse_from(["huffcode"]);
        let table = frequencies(&args).unwrap();

        assert_eq!(table.len(), 26);
        assert!(('a'..='z').all(|symbol| table.get(symbol).is_some()));
    }

    #[test]
    fn zero_count_is_an_error() {
        let args = Args::parse_from(["huffcode", "-f", "a=0"]);
        assert!(frequencies(&args).is_err());
    }

    #[test]
    fn repeated_letters_accumulate() {
        let args = Args::parse_from(["huffcode", "-f", "a=3", "-f", "A=4", "-f", "b=1"]);
        let table = frequencies(&args).unwrap();

        assert_eq!(table.get('a'), Some(7));
        assert_eq!(table.total(), 8);
    }
}
