use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Statistical shape of the generated text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    #[serde(default = "default_paragraphs")]
    pub paragraphs: usize,
    #[serde(default = "default_min_words_sentence")]
    pub min_words_sentence: usize,
    #[serde(default = "default_max_words_sentence")]
    pub max_words_sentence: usize,
    #[serde(default = "default_min_paragraph_sentences")]
    pub min_paragraph_sentences: usize,
    #[serde(default = "default_max_paragraph_sentences")]
    pub max_paragraph_sentences: usize,
    #[serde(default = "default_min_clause_length")]
    pub min_clause_length: usize,
    #[serde(default = "default_max_clause_length")]
    pub max_clause_length: usize,
    #[serde(default = "default_clause_probability")]
    pub clause_probability: f64,
    #[serde(default = "default_semicolon_probability")]
    pub semicolon_probability: f64,
}

fn default_paragraphs() -> usize {
    2
}
fn default_min_words_sentence() -> usize {
    8
}
fn default_max_words_sentence() -> usize {
    20
}
fn default_min_paragraph_sentences() -> usize {
    4
}
fn default_max_paragraph_sentences() -> usize {
    8
}
fn default_min_clause_length() -> usize {
    1
}
fn default_max_clause_length() -> usize {
    4
}
fn default_clause_probability() -> f64 {
    0.2
}
fn default_semicolon_probability() -> f64 {
    0.1
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            paragraphs: default_paragraphs(),
            min_words_sentence: default_min_words_sentence(),
            max_words_sentence: default_max_words_sentence(),
            min_paragraph_sentences: default_min_paragraph_sentences(),
            max_paragraph_sentences: default_max_paragraph_sentences(),
            min_clause_length: default_min_clause_length(),
            max_clause_length: default_max_clause_length(),
            clause_probability: default_clause_probability(),
            semicolon_probability: default_semicolon_probability(),
        }
    }
}

/// Partial `OutputOptions`. Unset fields keep whatever they are merged onto.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputOverrides {
    pub paragraphs: Option<usize>,
    pub min_words_sentence: Option<usize>,
    pub max_words_sentence: Option<usize>,
    pub min_paragraph_sentences: Option<usize>,
    pub max_paragraph_sentences: Option<usize>,
    pub min_clause_length: Option<usize>,
    pub max_clause_length: Option<usize>,
    pub clause_probability: Option<f64>,
    pub semicolon_probability: Option<f64>,
}

impl OutputOverrides {
    pub fn paragraphs(count: usize) -> Self {
        Self {
            paragraphs: Some(count),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl OutputOptions {
    /// Returns a copy with every set field of `overrides` applied.
    pub fn merged(&self, overrides: &OutputOverrides) -> Self {
        Self {
            paragraphs: overrides.paragraphs.unwrap_or(self.paragraphs),
            min_words_sentence: overrides
                .min_words_sentence
                .unwrap_or(self.min_words_sentence),
            max_words_sentence: overrides
                .max_words_sentence
                .unwrap_or(self.max_words_sentence),
            min_paragraph_sentences: overrides
                .min_paragraph_sentences
                .unwrap_or(self.min_paragraph_sentences),
            max_paragraph_sentences: overrides
                .max_paragraph_sentences
                .unwrap_or(self.max_paragraph_sentences),
            min_clause_length: overrides
                .min_clause_length
                .unwrap_or(self.min_clause_length),
            max_clause_length: overrides
                .max_clause_length
                .unwrap_or(self.max_clause_length),
            clause_probability: overrides
                .clause_probability
                .unwrap_or(self.clause_probability),
            semicolon_probability: overrides
                .semicolon_probability
                .unwrap_or(self.semicolon_probability),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(
            "words_sentence",
            self.min_words_sentence,
            self.max_words_sentence,
        )?;
        check_range(
            "paragraph_sentences",
            self.min_paragraph_sentences,
            self.max_paragraph_sentences,
        )?;
        check_range(
            "clause_length",
            self.min_clause_length,
            self.max_clause_length,
        )?;
        check_probability("clause_probability", self.clause_probability)?;
        check_probability("semicolon_probability", self.semicolon_probability)?;
        Ok(())
    }
}

fn check_range(field: &'static str, min: usize, max: usize) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails `contains` too
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ProbabilityOutOfRange { field, value });
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Word list path. `None` uses the bundled list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub output: OutputOptions,
}

impl Config {
    /// Loads the user config file if there is one, defaults otherwise.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(&Self::config_path())
    }

    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cryptoipsum")
            .join("config.toml")
    }
}
