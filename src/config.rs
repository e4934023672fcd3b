
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::random::RandomBounds;

pub const SMALLEST_WORD: usize = 2;
pub const LARGEST_WORD: usize = 12;
pub const LONGEST_ALLOWED: usize = 255;
pub const DEFAULT_WORD_LIST: &str = "words.txt";

/// Inclusive range of target word lengths.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LengthRange {
  min: usize,
  max: usize
}

impl LengthRange {
  pub fn new(min: usize, max: usize) -> Result<LengthRange, ConfigError> {
    if min < SMALLEST_WORD || max > LONGEST_ALLOWED || min > max {
      return Err(ConfigError::InvalidLengthRange { min, max });
    }
    Ok(LengthRange { min, max })
  }

  pub fn min(&self) -> usize {
    self.min
  }

  pub fn max(&self) -> usize {
    self.max
  }
}

impl Default for LengthRange {
  fn default() -> Self {
    LengthRange { min: SMALLEST_WORD, max: LARGEST_WORD }
  }
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
  pub word_list: PathBuf,
  pub lengths: LengthRange,
  pub seed: Option<u64>
}

impl GeneratorConfig {
  pub fn random_source(&self) -> RandomBounds {
    match self.seed {
      Some(seed) => RandomBounds::from_seed(seed),
      None => RandomBounds::from_time()
    }
  }
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    GeneratorConfig {
      word_list: PathBuf::from(DEFAULT_WORD_LIST),
      lengths: LengthRange::default(),
      seed: None
    }
  }
}
