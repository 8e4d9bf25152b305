use std::fs;
use std::path::Path;

use rand::rngs::SmallRng;
use rust_embed::Embed;

use crate::error::WordListError;
use crate::generator::rand_between;

#[derive(Embed)]
#[folder = "assets/"]
struct WordAssets;

pub const BUNDLED_WORDS: &str = "ipsum.txt";

/// Candidate words, one per line of the source file, kept verbatim.
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Rejects lists whose samplable entries (all but the last, see
    /// [`WordList::sample`]) are all empty.
    pub fn from_words(words: Vec<String>) -> Result<Self, WordListError> {
        let samplable = match words.len() {
            0 | 1 => &words[..],
            len => &words[..len - 1],
        };
        if samplable.iter().all(String::is_empty) {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// Splits on `\n` only. A trailing newline leaves an empty last entry.
    pub fn parse(content: &str) -> Result<Self, WordListError> {
        Self::from_words(content.split('\n').map(str::to_string).collect())
    }

    pub fn load(path: &Path) -> Result<Self, WordListError> {
        let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), entries = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn bundled() -> Result<Self, WordListError> {
        let file = WordAssets::get(BUNDLED_WORDS)
            .ok_or(WordListError::MissingBundled(BUNDLED_WORDS))?;
        let content = String::from_utf8_lossy(file.data.as_ref());
        let list = Self::parse(&content)?;
        tracing::debug!(entries = list.len(), "loaded bundled word list");
        Ok(list)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draws from indices `0..len - 1`, so the last entry is only ever
    /// returned when it is the only one. A trailing empty line from the
    /// file is therefore never sampled.
    pub fn sample(&self, rng: &mut SmallRng) -> &str {
        let index = rand_between(rng, 0, self.words.len() - 1);
        &self.words[index]
    }
}
