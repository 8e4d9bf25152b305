use rand::rngs::SmallRng;

use crate::config::{Config, OutputOptions, OutputOverrides};
use crate::error::Result;
use crate::generator::TextGenerator;
use crate::generator::capitalize::capitalize_first;
use crate::generator::punctuate::{ClauseState, ClauseWindow, Terminator};
use crate::generator::rand_between;
use crate::generator::word_list::WordList;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Stitches sampled words into sentences and paragraphs.
///
/// The word list and base options are fixed at construction. Each call to
/// [`TextGenerator::generate`] may layer its own overrides on top without
/// touching the stored options.
pub struct IpsumGenerator {
    words: WordList,
    options: OutputOptions,
    rng: SmallRng,
}

impl IpsumGenerator {
    /// Uses `words` when given, otherwise loads `config.file` or the bundled
    /// list. Fails before loading anything if the options are invalid.
    pub fn new(config: &Config, words: Option<WordList>, rng: SmallRng) -> Result<Self> {
        config.output.validate()?;
        let words = match (words, &config.file) {
            (Some(words), _) => words,
            (None, Some(path)) => WordList::load(path)?,
            (None, None) => WordList::bundled()?,
        };
        Ok(Self {
            words,
            options: config.output.clone(),
            rng,
        })
    }

    /// Defaults with `overrides` applied, over a caller-supplied list.
    pub fn with_words(
        words: WordList,
        overrides: &OutputOverrides,
        rng: SmallRng,
    ) -> Result<Self> {
        let config = Config {
            file: None,
            output: OutputOptions::default().merged(overrides),
        };
        Self::new(&config, Some(words), rng)
    }

    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    fn write_paragraph(&mut self, options: &OutputOptions, out: &mut String) {
        let sentence_count = rand_between(
            &mut self.rng,
            options.min_paragraph_sentences,
            options.max_paragraph_sentences,
        );
        let mut after_semicolon = false;

        for index in 0..sentence_count {
            let terminator = Terminator::pick(
                index,
                sentence_count,
                options.semicolon_probability,
                &mut self.rng,
            );
            let word_count = rand_between(
                &mut self.rng,
                options.min_words_sentence,
                options.max_words_sentence,
            );
            self.write_sentence(options, word_count, !after_semicolon, out);
            out.push_str(terminator.as_str());
            after_semicolon = terminator == Terminator::Semicolon;
        }
    }

    fn write_sentence(
        &mut self,
        options: &OutputOptions,
        word_count: usize,
        capitalize: bool,
        out: &mut String,
    ) {
        let window = ClauseWindow::new(options.min_clause_length, options.max_clause_length);
        let mut clause = ClauseState::new(window, options.clause_probability);

        for position in 0..word_count {
            let word = self.words.sample(&mut self.rng);
            if position == 0 && capitalize {
                out.push_str(&capitalize_first(word));
            } else {
                out.push_str(word);
            }
            if clause.comma_after(position, &mut self.rng) {
                out.push(',');
            }
            if position + 1 != word_count {
                out.push(' ');
            }
        }
    }
}

impl TextGenerator for IpsumGenerator {
    fn generate(&mut self, overrides: &OutputOverrides) -> Result<String> {
        let options = self.options.merged(overrides);
        options.validate()?;

        let mut out = String::new();
        for paragraph in 0..options.paragraphs {
            self.write_paragraph(&options, &mut out);
            if paragraph + 1 < options.paragraphs {
                out.push_str(PARAGRAPH_SEPARATOR);
            }
        }

        tracing::debug!(
            paragraphs = options.paragraphs,
            bytes = out.len(),
            "generated ipsum"
        );
        Ok(out)
    }
}
