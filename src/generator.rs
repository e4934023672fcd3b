
use crate::config::{GeneratorConfig, LengthRange};
use crate::corpus::DonorCorpus;
use crate::error::{CorpusError, SynthesisError};
use crate::random::{BoundedRandom, RandomBounds};
use crate::synthesis::{NewWord, WordSynthesizer};

/// Owns the donor corpus and the random source for a run, and hands out one
/// freshly synthesized word per call.
pub struct WordGenerator<R: BoundedRandom = RandomBounds> {
  corpus: DonorCorpus,
  lengths: LengthRange,
  random: R
}

impl WordGenerator<RandomBounds> {
  pub fn from_config(config: &GeneratorConfig) -> Result<Self, CorpusError> {
    let corpus = DonorCorpus::load(&config.word_list)?;
    Ok(WordGenerator::new(corpus, config.lengths, config.random_source()))
  }
}

impl<R: BoundedRandom> WordGenerator<R> {
  pub fn new(corpus: DonorCorpus, lengths: LengthRange, random: R) -> Self {
    WordGenerator { corpus, lengths, random }
  }

  pub fn generate(&mut self) -> Result<NewWord, SynthesisError> {
    WordSynthesizer::with_lengths(&self.corpus, self.lengths).generate(&mut self.random)
  }

  pub fn corpus(&self) -> &DonorCorpus {
    &self.corpus
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::random::ScriptedRandom;
  use std::io::Write;

  #[test]
  fn test_from_config_loads_word_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "lantern\nmeadow\nthistle").unwrap();
    let config = GeneratorConfig {
      word_list: file.path().to_owned(),
      seed: Some(5),
      ..GeneratorConfig::default()
    };

    let mut generator = WordGenerator::from_config(&config).unwrap();
    assert_eq!(generator.corpus().len(), 3);

    let first = generator.generate().unwrap();
    let again = WordGenerator::from_config(&config).unwrap().generate().unwrap();
    assert_eq!(first, again);
  }

  #[test]
  fn test_from_config_empty_word_list() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = GeneratorConfig {
      word_list: file.path().to_owned(),
      ..GeneratorConfig::default()
    };

    assert!(matches!(WordGenerator::from_config(&config), Err(CorpusError::EmptySource { .. })));
  }

  #[test]
  fn test_successive_words_use_fresh_buffers() {
    let corpus = DonorCorpus::from_words(["anything"]);
    let random = ScriptedRandom::new([
      2, ScriptedRandom::letter('o'), ScriptedRandom::letter('x'),
      2, ScriptedRandom::letter('b'), ScriptedRandom::vowel('e')
    ]);
    let mut generator = WordGenerator::new(corpus, LengthRange::default(), random);

    assert_eq!(generator.generate().unwrap().as_str(), "ox");
    assert_eq!(generator.generate().unwrap().as_str(), "be");
  }
}
