//! Replace long tokens with generated short identifiers.
//!
//! Every distinct long token is mapped to a name from the sequence
//! `a, b, ..., z, ba, bb, ...` (base 26 with `a` as zero), skipping names that
//! already appear as token text anywhere in the source. The mapping is
//! emitted as `#define` lines ahead of the art.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::token::{is_directive, is_quoted, width};

/// Insertion-ordered map from original token to its short name.
#[derive(Debug, Default, Clone)]
pub struct ShortNameTable {
    index: FxHashMap<String, usize>,
    entries: Vec<(String, String)>,
}

impl ShortNameTable {
    pub fn get(&self, original: &str) -> Option<&str> {
        self.index.get(original).map(|&i| self.entries[i].1.as_str())
    }

    fn insert(&mut self, original: String, short: String) {
        self.index.insert(original.clone(), self.entries.len());
        self.entries.push((original, short));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(original, short)` pairs in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(o, s)| (o.as_str(), s.as_str()))
    }

    /// One `#define <short> <original>` line per entry, without line breaks.
    pub fn definitions(&self) -> impl Iterator<Item = String> + '_ {
        self.iter()
            .map(|(original, short)| format!("#define {} {}", short.trim_end(), original.trim_end()))
    }
}

#[derive(Debug)]
pub struct Shortener {
    min_len: usize,
    /// Text of every token in the source, trailing spacing removed.
    taken: FxHashSet<String>,
    table: ShortNameTable,
    counter: usize,
}

impl Shortener {
    /// `words` is the full original token text; generated names never collide with it.
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>, min_len: usize) -> Self {
        let taken = words.into_iter().map(|w| w.trim_end().to_string()).collect();
        Shortener {
            min_len,
            taken,
            table: ShortNameTable::default(),
            counter: 0,
        }
    }

    /// Long enough, and neither a directive nor a quoted literal.
    pub fn qualifies(&self, token: &str) -> bool {
        width(token) > self.min_len && !is_directive(token) && !is_quoted(token)
    }

    /// Short name for `token`, allocating one on first sight. A token ending in
    /// a space gets a short name ending in a space.
    pub fn shorten(&mut self, token: &str) -> String {
        if let Some(short) = self.table.get(token) {
            return short.to_string();
        }
        let mut short = self.next_free_name();
        if token.ends_with(' ') {
            short.push(' ');
        }
        self.table.insert(token.to_string(), short.clone());
        short
    }

    fn next_free_name(&mut self) -> String {
        loop {
            let candidate = short_name(self.counter);
            self.counter += 1;
            if !self.taken.contains(&candidate) {
                return candidate;
            }
        }
    }

    pub fn table(&self) -> &ShortNameTable {
        &self.table
    }

    pub fn into_table(self) -> ShortNameTable {
        self.table
    }
}

/// Base-26 rendering of `index` with digits `a..=z`: 0 is `a`, 26 is `ba`.
pub fn short_name(mut index: usize) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(char::from(b'a' + (index % 26) as u8));
        index /= 26;
        if index == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}
