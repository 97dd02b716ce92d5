//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Failure to produce a usable word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid words", path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped, as
/// are entries that are not plain letters.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if no valid word remains.
///
/// # Examples
/// ```no_run
/// use assembly_endgame::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), count = words.len(), "word list loaded");
    Ok(words)
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(entry = line, error = %e, "skipping word list entry");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use assembly_endgame::wordlists::loader::words_from_slice;
/// use assembly_endgame::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["rust", "Kernel", "go"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "rust");
        assert_eq!(words[1].text(), "kernel");
        assert_eq!(words[2].text(), "go");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["rust", "c++", "", "node js", "python"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "rust");
        assert_eq!(words[1].text(), "python");
    }

    #[test]
    fn words_from_lines_skips_comments_and_blanks() {
        let words = words_from_lines("# header\n\n  apple \nr2d2\nbanana\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple", "banana"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!("endgame-words-{}.txt", std::process::id()));
        fs::write(&path, "socket\nthread\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 2);

        fs::write(&path, "# nothing useful\n123\n").unwrap();
        assert!(matches!(
            load_from_file(&path),
            Err(WordListError::Empty { .. })
        ));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
