
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
  #[error("cannot read from {}", path.display())]
  UnavailableSource {
    path: PathBuf,
    #[source]
    source: io::Error
  },

  #[error("{} is empty", path.display())]
  EmptySource {
    path: PathBuf
  },

  #[error("failed while reading word list: {0}")]
  Read(#[from] io::Error)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
  #[error("donor corpus is empty")]
  EmptyCorpus,

  #[error("could not allocate a {length}-letter word")]
  AllocationError {
    length: usize
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("invalid word length range {min}..={max} (lengths must satisfy 2 <= min <= max <= 255)")]
  InvalidLengthRange {
    min: usize,
    max: usize
  }
}
