// File: src/parser/tokenizer.rs
//! Splits command arguments into a preamble and prefixed values.
//!
//! `tadd m/1 n/Buy milk` with prefixes `m/` and `n/` gives an empty preamble,
//! `m/ -> ["1 "]` and `n/ -> ["Buy milk"]`. Values are kept verbatim; trimming
//! and validation belong to the field parsers.
use std::collections::HashMap;
use std::fmt;

/// A short marker that introduces a field value, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_POSITION: Prefix = Prefix::new("pos/");
pub const PREFIX_MEMBER: Prefix = Prefix::new("m/");
pub const PREFIX_TASK: Prefix = Prefix::new("t/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");

/// Result of tokenizing one argument string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, untrimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn is_preamble_blank(&self) -> bool {
        self.preamble.trim().is_empty()
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }
}

/// Finds prefix markers left to right. A marker only counts at the start of
/// the text or right after whitespace, and markers never overlap. When two
/// prefixes match at the same spot the longer one wins.
fn find_markers(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut markers = Vec::new();
    let mut at_word_start = true;
    let mut skip_until = 0;

    for (i, c) in args.char_indices() {
        if i < skip_until {
            at_word_start = false;
            continue;
        }
        if at_word_start
            && let Some(prefix) = prefixes
                .iter()
                .filter(|p| args[i..].starts_with(p.as_str()))
                .max_by_key(|p| p.as_str().len())
        {
            markers.push((i, *prefix));
            skip_until = i + prefix.as_str().len();
            at_word_start = false;
            continue;
        }
        at_word_start = c.is_whitespace();
    }
    markers
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let markers = find_markers(args, prefixes);

    let preamble_end = markers.first().map(|(pos, _)| *pos).unwrap_or(args.len());
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].to_string(),
        values: HashMap::new(),
    };

    for (n, (pos, prefix)) in markers.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = markers
            .get(n + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].to_string());
    }
    map
}
