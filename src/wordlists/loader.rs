//! Word list loading utilities
//!
//! Loads a dictionary from a file or from an embedded slice. Dictionary
//! sourcing is the host's concern; the engine only sees the resulting
//! normalized set.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Lines that fail normalization (wrong length, non-alphabetic) are
/// silently skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use pangram_game::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::new(content.lines()))
}

/// Build a dictionary from a string slice
///
/// # Examples
/// ```
/// use pangram_game::wordlists::WORDS;
/// use pangram_game::wordlists::loader::dictionary_from_slice;
///
/// let dictionary = dictionary_from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::new(slice.iter().copied())
}
