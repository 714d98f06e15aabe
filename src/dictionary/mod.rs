use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{BoggleError, Result};

/// An immutable set of lowercase words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Load dictionary from a whitespace-delimited word file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BoggleError::DictionaryMissing {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_words(content.split_whitespace());

        tracing::info!(
            "Loaded {} words into dictionary from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Check if a word exists in the dictionary, ignoring case
    pub fn look_up(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// All words beginning with `prefix` (case-insensitive), in lexicographic order
    pub fn words_starting_with(&self, prefix: &str) -> BTreeSet<String> {
        let prefix = prefix.to_lowercase();
        self.words
            .range(prefix.clone()..)
            .take_while(|word| word.starts_with(&prefix))
            .cloned()
            .collect()
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
