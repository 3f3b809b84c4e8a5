use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

use crate::error::{GameError, GameResult};

static LANG_DIR: Dir = include_dir!("src/lang");

/// A word list compiled into the binary.
#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    pub fn new(file_name: &str) -> GameResult<Self> {
        read_language_from_file(file_name)
    }
}

fn read_language_from_file(name: &str) -> GameResult<Language> {
    let file = LANG_DIR
        .get_file(format!("{name}.json"))
        .ok_or_else(|| GameError::UnknownLanguage(name.to_string()))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| GameError::UnknownLanguage(name.to_string()))?;

    from_str(file_as_str).map_err(|source| GameError::MalformedLanguage {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_language_new_english5() {
        let lang = Language::new("english5").unwrap();

        assert_eq!(lang.name, "english_5");
        assert!(!lang.words.is_empty());
        assert_eq!(lang.size as usize, lang.words.len());
        assert!(lang.words.iter().all(|w| w.chars().count() == 5));
    }

    #[test]
    fn test_language_new_english() {
        let lang = Language::new("english").unwrap();

        assert_eq!(lang.name, "english");
        assert!(!lang.words.is_empty());
        assert_eq!(lang.size as usize, lang.words.len());
    }

    #[test]
    fn builtin_words_never_prefix_each_other() {
        // a word that starts another can only ever be matched first
        for name in ["english5", "english"] {
            let lang = Language::new(name).unwrap();
            let len = lang.words[0].chars().count();
            assert!(
                lang.words.iter().all(|w| w.chars().count() == len),
                "{name} mixes word lengths"
            );

            let mut words = lang.words.clone();
            words.sort();
            words.dedup();
            assert_eq!(words.len(), lang.words.len(), "{name} repeats words");
        }
    }

    #[test]
    fn test_language_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "tests"]
        }
        "#;

        let lang: Language = from_str(json_data).expect("Failed to deserialize test language");

        assert_eq!(lang.name, "test");
        assert_eq!(lang.size, 3);
        assert!(lang.words.contains(&"world".to_string()));
    }

    #[test]
    fn test_unknown_language() {
        assert_matches!(
            Language::new("klingon"),
            Err(GameError::UnknownLanguage(name)) if name == "klingon"
        );
    }
}
