//! Custom word list files
//!
//! A list is plain text with one word per line. `#` starts a comment, blank
//! lines are ignored and repeated words are kept once, so a hand-edited list
//! cannot make one target more likely than another.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Parse the contents of a word list
///
/// Entries keep their first-seen order. Lines that are not a single word are
/// skipped and logged at debug level with their line number.
///
/// # Examples
/// ```
/// use wordo::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("# fruit\nApple\nmango # ripe\napple\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["apple", "mango"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let entry = line.split('#').next().unwrap_or_default().trim();
        if entry.is_empty() {
            continue;
        }

        match Word::new(entry) {
            Ok(word) if seen.insert(word.clone()) => words.push(word),
            Ok(word) => debug!(line = number + 1, word = word.text(), "duplicate word"),
            Err(e) => debug!(line = number + 1, entry, error = %e, "skipping entry"),
        }
    }

    words
}

/// Load a word list file
///
/// Words of every length are kept; the game filters by length.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let words = parse_word_list(&fs::read_to_string(path)?);

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Words from a compiled-in list, dropping anything malformed
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
