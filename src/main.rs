use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cryptoipsum::{Config, IpsumGenerator, OutputOverrides, TextGenerator};

#[derive(Parser)]
#[command(
    name = "cryptoipsum",
    version,
    about = "A meaningless copy generator for hodlers."
)]
struct Cli {
    #[arg(short, long, help = "Number of paragraphs to generate")]
    paragraphs: Option<usize>,

    #[arg(
        short = 'f',
        value_name = "PATH",
        help = "Path to word file (default: bundled ipsum.txt)"
    )]
    words_file: Option<PathBuf>,

    #[arg(long, help = "Minimum number of words in a sentence")]
    min_words_sentence: Option<usize>,

    #[arg(long, help = "Maximum number of words in a sentence")]
    max_words_sentence: Option<usize>,

    #[arg(long, help = "Minimum sentences in a paragraph")]
    min_paragraph_sentences: Option<usize>,

    #[arg(long, help = "Maximum sentences in a paragraph")]
    max_paragraph_sentences: Option<usize>,

    #[arg(long, help = "Minimum number of words in a clause")]
    min_clause_length: Option<usize>,

    #[arg(long, help = "Maximum number of words in a clause")]
    max_clause_length: Option<usize>,

    #[arg(long, help = "Probability of clause occurrence (0-1.0)")]
    clause_probability: Option<f64>,

    #[arg(long, help = "Probability of semicolon occurrence (0-1.0)")]
    semicolon_probability: Option<f64>,

    #[arg(long, help = "Seed for reproducible output")]
    seed: Option<u64>,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Config file (default: <config dir>/cryptoipsum/config.toml)"
    )]
    config: Option<PathBuf>,

    #[arg(long, help = "Write the effective options back to the config file")]
    save_config: bool,
}

impl Cli {
    fn overrides(&self) -> OutputOverrides {
        OutputOverrides {
            paragraphs: self.paragraphs,
            min_words_sentence: self.min_words_sentence,
            max_words_sentence: self.max_words_sentence,
            min_paragraph_sentences: self.min_paragraph_sentences,
            max_paragraph_sentences: self.max_paragraph_sentences,
            min_clause_length: self.min_clause_length,
            max_clause_length: self.max_clause_length,
            clause_probability: self.clause_probability,
            semicolon_probability: self.semicolon_probability,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the generated text
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        // Saving may create the file
        Some(path) if cli.save_config => Config::load_or_default(path)?,
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = &cli.words_file {
        config.file = Some(path.clone());
    }
    config.output = config.output.merged(&cli.overrides());

    if cli.save_config {
        config.output.validate()?;
        match &cli.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        tracing::info!("saved config");
    }

    let rng = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed seed");
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };

    let mut generator = IpsumGenerator::new(&config, None, rng)?;
    let text = generator.generate(&OutputOverrides::default())?;
    println!("{text}");

    Ok(())
}
