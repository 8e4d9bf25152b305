pub mod config;
pub mod error;
pub mod generator;

pub use config::{Config, OutputOptions, OutputOverrides};
pub use error::{ConfigError, IpsumError, WordListError};
pub use generator::TextGenerator;
pub use generator::ipsum::IpsumGenerator;
pub use generator::word_list::WordList;
