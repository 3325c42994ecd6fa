//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Word source

use log::{debug, warn};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::{fmt, fs, io};

// 引入编译生成的单词列表
include!(concat!(env!("OUT_DIR"), "/word_data.rs"));

/// Something that can hand out a word of a given length.
pub trait WordProvider {
    /// A word whose character count lies in `[min_length, max_length]`,
    /// or `None` when the provider has nothing suitable.
    fn word(&self, min_length: usize, max_length: usize) -> Option<String>;
}

/// Provider backed by a dictionary file, one word per line.
#[derive(Debug, Clone)]
pub struct WordListProvider {
    words: Vec<String>,
}

impl WordListProvider {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Dictionary '{}' contains no words", path.display()),
            ));
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordProvider for WordListProvider {
    fn word(&self, min_length: usize, max_length: usize) -> Option<String> {
        let suitable: Vec<&String> = self
            .words
            .iter()
            .filter(|w| (min_length..=max_length).contains(&w.chars().count()))
            .collect();
        suitable.choose(&mut OsRng).map(|w| w.to_string())
    }
}

/// Supplies words to the memorable and recipe builders.
///
/// The external provider is resolved on first use and kept for the life of
/// the source. Without one, words come from the built-in list.
pub struct WordSource {
    dictionary: Option<PathBuf>,
    provider: OnceLock<Option<Box<dyn WordProvider>>>,
}

impl WordSource {
    /// Built-in list only.
    pub fn new() -> Self {
        let provider = OnceLock::new();
        let _ = provider.set(None);
        Self { dictionary: None, provider }
    }

    /// Loads `path` lazily on the first request.
    pub fn with_dictionary(path: impl Into<PathBuf>) -> Self {
        Self {
            dictionary: Some(path.into()),
            provider: OnceLock::new(),
        }
    }

    pub fn with_provider(provider: Box<dyn WordProvider>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(Some(provider));
        Self { dictionary: None, provider: cell }
    }

    pub fn from_dictionary_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::with_dictionary(path),
            None => Self::new(),
        }
    }

    fn provider(&self) -> Option<&dyn WordProvider> {
        self.provider
            .get_or_init(|| {
                let path = self.dictionary.as_ref()?;
                match WordListProvider::from_file(path) {
                    Ok(list) => {
                        debug!("Loaded {} words from {}", list.len(), path.display());
                        Some(Box::new(list) as Box<dyn WordProvider>)
                    }
                    Err(e) => {
                        warn!("Falling back to built-in words, cannot load {}: {}", path.display(), e);
                        None
                    }
                }
            })
            .as_deref()
    }

    /// A word in `[min_length, max_length]`. Never fails: the built-in list
    /// is used when the provider has nothing, unfiltered if no built-in word
    /// fits either.
    pub fn next_word(&self, min_length: usize, max_length: usize) -> String {
        if let Some(word) = self.provider().and_then(|p| p.word(min_length, max_length)) {
            return word;
        }
        fallback_word(min_length, max_length)
    }

    pub fn has_provider(&self) -> bool {
        self.provider().is_some()
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordSource")
            .field("dictionary", &self.dictionary)
            .field("resolved", &self.provider.get().is_some())
            .finish()
    }
}

fn fallback_word(min_length: usize, max_length: usize) -> String {
    let mut rng = OsRng;
    let suitable: Vec<&str> = FALLBACK_WORDS
        .iter()
        .copied()
        .filter(|w| (min_length..=max_length).contains(&w.len()))
        .collect();
    let word = suitable
        .choose(&mut rng)
        .or_else(|| FALLBACK_WORDS.choose(&mut rng))
        .copied()
        .unwrap_or(FALLBACK_WORDS[0]);
    word.to_string()
}
