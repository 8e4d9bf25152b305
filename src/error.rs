use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field}: minimum {min} is greater than maximum {max}")]
    InvertedRange {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field}: probability {value} is outside 0.0..=1.0")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write config file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list has no usable entries")]
    Empty,

    #[error("bundled word list {0} is missing")]
    MissingBundled(&'static str),
}

#[derive(Debug, Error)]
pub enum IpsumError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    WordList(#[from] WordListError),
}

pub type Result<T> = std::result::Result<T, IpsumError>;
