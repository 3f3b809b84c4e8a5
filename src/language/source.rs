use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GameError, GameResult};
use crate::language::Language;

/// Where the candidate words come from.
#[derive(Debug, Clone, PartialEq)]
pub enum WordSource {
    Builtin(String),
    File(PathBuf),
}

impl WordSource {
    /// Load the raw word list. Validation happens in `WordBank::new`.
    pub fn load(&self) -> GameResult<Vec<String>> {
        match self {
            WordSource::Builtin(name) => Ok(Language::new(name)?.words),
            WordSource::File(path) => read_word_file(path),
        }
    }
}

impl Default for WordSource {
    fn default() -> Self {
        WordSource::Builtin("english5".to_string())
    }
}

/// One word per line; surrounding whitespace and blank lines are dropped.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> GameResult<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| GameError::BankUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn reads_one_word_per_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "apple\n  grape \n\nlemon").unwrap();

        let words = read_word_file(file.path()).unwrap();
        assert_eq!(words, vec!["apple", "grape", "lemon"]);
    }

    #[test]
    fn missing_file_is_bank_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        assert_matches!(
            WordSource::File(path.clone()).load(),
            Err(GameError::BankUnavailable { path: p, .. }) if p == path
        );
    }

    #[test]
    fn default_source_is_five_letter_builtin() {
        let words = WordSource::default().load().unwrap();
        assert!(!words.is_empty());
    }
}
