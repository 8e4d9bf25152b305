use std::fs;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use regex::Regex;

use cryptoipsum::{
    Config, IpsumError, IpsumGenerator, OutputOptions, OutputOverrides, TextGenerator,
    WordList, WordListError,
};

fn words() -> WordList {
    WordList::parse("token\nledger\nwallet\nhash\nnode\nminer\n").unwrap()
}

fn generate(overrides: OutputOverrides, seed: u64) -> String {
    let mut ipsum =
        IpsumGenerator::with_words(words(), &overrides, SmallRng::seed_from_u64(seed)).unwrap();
    ipsum.generate(&OutputOverrides::default()).unwrap()
}

#[test]
fn paragraphs_are_separated_by_blank_lines() {
    for seed in 0..10 {
        let text = generate(OutputOverrides::paragraphs(3), seed);
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks.iter().all(|b| !b.is_empty() && !b.contains('\n')));
    }
}

#[test]
fn single_paragraph_has_no_separator() {
    let text = generate(OutputOverrides::paragraphs(1), 1);
    assert!(!text.contains('\n'));
}

#[test]
fn every_sentence_ends_with_period_or_semicolon() {
    let overrides = OutputOverrides {
        paragraphs: Some(5),
        semicolon_probability: Some(0.4),
        ..OutputOverrides::default()
    };
    let text = generate(overrides, 2);
    let paragraph_shape = Regex::new(r"^(?:[A-Za-z]+(?:,? [A-Za-z]+)*,?[.;] )+$").unwrap();
    for paragraph in text.split("\n\n") {
        assert!(paragraph_shape.is_match(paragraph), "bad paragraph {paragraph:?}");
        assert!(paragraph.starts_with(|c: char| c.is_ascii_uppercase()));
        assert!(paragraph.ends_with(". "));
    }
}

#[test]
fn zero_semicolon_probability_never_joins_sentences() {
    let overrides = OutputOverrides {
        paragraphs: Some(10),
        semicolon_probability: Some(0.0),
        ..OutputOverrides::default()
    };
    for seed in 0..5 {
        assert!(!generate(overrides.clone(), seed).contains(';'));
    }
}

#[test]
fn zero_clause_probability_never_inserts_commas() {
    let overrides = OutputOverrides {
        paragraphs: Some(10),
        clause_probability: Some(0.0),
        ..OutputOverrides::default()
    };
    for seed in 0..5 {
        assert!(!generate(overrides.clone(), seed).contains(','));
    }
}

#[test]
fn certain_clause_inserts_one_comma_per_sentence_in_window() {
    let overrides = OutputOverrides {
        paragraphs: Some(6),
        min_words_sentence: Some(6),
        max_words_sentence: Some(12),
        min_clause_length: Some(2),
        max_clause_length: Some(4),
        clause_probability: Some(1.0),
        semicolon_probability: Some(0.0),
        ..OutputOverrides::default()
    };
    let text = generate(overrides, 3);
    for paragraph in text.split("\n\n") {
        for sentence in paragraph.split(". ").filter(|s| !s.is_empty()) {
            let words: Vec<&str> = sentence.split(' ').collect();
            let commas: Vec<usize> = words
                .iter()
                .enumerate()
                .filter(|(_, w)| w.ends_with(','))
                .map(|(i, _)| i)
                .collect();
            // The first window position always wins
            assert_eq!(commas, vec![1], "in {sentence:?}");
        }
    }
}

#[test]
fn short_sentences_outside_window_get_no_comma() {
    let overrides = OutputOverrides {
        paragraphs: Some(3),
        min_words_sentence: Some(2),
        max_words_sentence: Some(3),
        min_clause_length: Some(5),
        max_clause_length: Some(6),
        clause_probability: Some(1.0),
        ..OutputOverrides::default()
    };
    assert!(!generate(overrides, 4).contains(','));
}

#[test]
fn zero_paragraphs_is_empty_string() {
    let mut ipsum = IpsumGenerator::with_words(
        words(),
        &OutputOverrides::default(),
        SmallRng::seed_from_u64(5),
    )
    .unwrap();
    assert_eq!(ipsum.generate(&OutputOverrides::paragraphs(0)).unwrap(), "");
}

#[test]
fn single_entry_list_repeats_that_word() {
    let list = WordList::from_words(vec!["hello".to_string()]).unwrap();
    let overrides = OutputOverrides {
        clause_probability: Some(0.0),
        semicolon_probability: Some(0.0),
        ..OutputOverrides::default()
    };
    let mut ipsum =
        IpsumGenerator::with_words(list, &overrides, SmallRng::seed_from_u64(6)).unwrap();
    let text = ipsum.generate(&OutputOverrides::default()).unwrap();
    let sentence = Regex::new(r"^Hello( hello)*\. $").unwrap();
    for paragraph in text.split("\n\n") {
        for piece in paragraph.split_inclusive(". ") {
            assert!(sentence.is_match(piece), "unexpected {piece:?}");
        }
    }
}

#[test]
fn seeded_generators_are_reproducible() {
    let a = generate(OutputOverrides::paragraphs(3), 77);
    let b = generate(OutputOverrides::paragraphs(3), 77);
    let c = generate(OutputOverrides::paragraphs(3), 78);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn word_file_from_config_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "alpha\nbeta\n").unwrap();
    let config = Config {
        file: Some(path),
        output: OutputOptions {
            paragraphs: 1,
            clause_probability: 0.0,
            ..OutputOptions::default()
        },
    };
    let mut ipsum = IpsumGenerator::new(&config, None, SmallRng::seed_from_u64(8)).unwrap();
    assert_eq!(ipsum.word_list().len(), 3);
    let text = ipsum.generate(&OutputOverrides::default()).unwrap();
    // The trailing empty entry is never sampled
    assert!(!text.contains("  "));
    assert!(text.contains("alpha") || text.contains("Alpha"));
    assert!(text.contains("beta") || text.contains("Beta"));
}

#[test]
fn empty_word_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "\n").unwrap();
    let config = Config {
        file: Some(path),
        output: OutputOptions::default(),
    };
    let result = IpsumGenerator::new(&config, None, SmallRng::seed_from_u64(9));
    assert!(matches!(
        result,
        Err(IpsumError::WordList(WordListError::Empty))
    ));
}

#[test]
fn config_file_options_drive_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[output]\nparagraphs = 4\nsemicolon_probability = 0.0\n",
    )
    .unwrap();
    let config = Config::load_from(&path).unwrap();
    let mut ipsum =
        IpsumGenerator::new(&config, Some(words()), SmallRng::seed_from_u64(10)).unwrap();
    let text = ipsum.generate(&OutputOverrides::default()).unwrap();
    assert_eq!(text.split("\n\n").count(), 4);
    assert!(!text.contains(';'));
}

#[test]
fn word_file_with_only_a_last_line_word_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "\nhello").unwrap();
    let config = Config {
        file: Some(path),
        output: OutputOptions::default(),
    };
    let result = IpsumGenerator::new(&config, None, SmallRng::seed_from_u64(11));
    assert!(matches!(
        result,
        Err(IpsumError::WordList(WordListError::Empty))
    ));
}
