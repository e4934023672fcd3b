
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;
use word_splicer::config::{GeneratorConfig, LengthRange, DEFAULT_WORD_LIST, LARGEST_WORD, SMALLEST_WORD};
use word_splicer::display::{alert_box, explain, header_box, render, render_styled};
use word_splicer::error::{ConfigError, CorpusError};
use word_splicer::{NewWord, WordGenerator};

#[derive(Parser, Debug)]
#[command(name = "newword", version, about = "Splice a pronounceable new word out of a list of real ones.")]
struct Args {
  /// Word list, one donor word per line
  #[arg(long, default_value = DEFAULT_WORD_LIST)]
  words: PathBuf,

  #[arg(long, default_value_t = SMALLEST_WORD)]
  min_length: usize,

  #[arg(long, default_value_t = LARGEST_WORD)]
  max_length: usize,

  /// Fixed seed for reproducible words (seeded from the clock otherwise)
  #[arg(long)]
  seed: Option<u64>,

  /// Print this many words and exit instead of asking
  #[arg(long)]
  count: Option<usize>,

  /// With --count, print the words and their letter sources as JSON
  #[arg(long, requires = "count", conflicts_with = "explain")]
  json: bool,

  /// Show where every letter came from (JSON output always carries it)
  #[arg(long)]
  explain: bool,
}

impl Args {
  fn config(&self) -> Result<GeneratorConfig, ConfigError> {
    Ok(GeneratorConfig {
      word_list: self.words.clone(),
      lengths: LengthRange::new(self.min_length, self.max_length)?,
      seed: self.seed
    })
  }
}

fn print_word(generator: &WordGenerator, word: &NewWord, show_sources: bool) {
  println!("{}", render(word));
  if show_sources {
    println!("{}\n", explain(word, generator.corpus()));
  }
}

fn run_batch(generator: &mut WordGenerator, count: usize, args: &Args) -> Result<()> {
  let words = (0 .. count)
    .map(|_| generator.generate())
    .collect::<Result<Vec<NewWord>, _>>()?;

  if args.json {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &words)?;
    writeln!(out)?;
  }
  else {
    for word in &words {
      print_word(generator, word, args.explain);
    }
  }

  Ok(())
}

fn run_interactive(generator: &mut WordGenerator, args: &Args) -> Result<()> {
  print!("{}", header_box("New Word Generator"));

  loop {
    let word = generator.generate()?;
    tracing::info!(word = %word, "generated word");

    println!();
    print!("{}", alert_box("Your new word is:", &render_styled(&word)));
    if args.explain {
      println!("{}", explain(&word, generator.corpus()));
    }
    println!();

    let again = Confirm::new()
      .with_prompt("Generate another word?")
      .default(true)
      .interact()?;
    if !again {
      break;
    }
  }

  Ok(())
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("word_splicer=warn,newword=info"))
    )
    .init();

  let args = Args::parse();
  let config = args.config()?;

  let mut generator = match WordGenerator::from_config(&config) {
    Ok(generator) => generator,
    Err(CorpusError::EmptySource { path }) => {
      print!("{}", alert_box("Error!", &format!("{} is empty!", path.display())));
      return Ok(());
    },
    Err(e) => return Err(e).with_context(|| format!("loading word list {}", config.word_list.display()))
  };

  match args.count {
    Some(count) => run_batch(&mut generator, count, &args),
    None => run_interactive(&mut generator, &args)
  }
}
