
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::CorpusError;

/// Donor words in file order. Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct DonorCorpus {
  words: Vec<String>
}

impl DonorCorpus {
  /// Reads one donor word per line. Lines are kept verbatim apart from the
  /// line terminator; an empty line is an empty donor.
  pub fn load(path: impl AsRef<Path>) -> Result<DonorCorpus, CorpusError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| CorpusError::UnavailableSource {
      path: path.to_owned(),
      source
    })?;

    let corpus = DonorCorpus::from_reader(BufReader::new(file))?;

    if corpus.is_empty() {
      tracing::warn!(path = %path.display(), "word list has no entries");
      return Err(CorpusError::EmptySource { path: path.to_owned() });
    }

    tracing::info!(path = %path.display(), words = corpus.len(), "loaded donor corpus");
    Ok(corpus)
  }

  /// Bytes that are not valid UTF-8 are replaced rather than rejected; they
  /// never match a letter anyway.
  pub fn from_reader<R: BufRead>(reader: R) -> Result<DonorCorpus, CorpusError> {
    let mut words = vec![];

    for line in reader.split(b'\n') {
      let mut line = line?;
      if line.last() == Some(&b'\r') {
        line.pop();
      }
      words.push(String::from_utf8_lossy(&line).into_owned());
    }

    Ok(DonorCorpus { words })
  }

  pub fn from_words<I, S>(words: I) -> DonorCorpus
    where I: IntoIterator<Item=S>, S: Into<String>
  {
    DonorCorpus {
      words: words.into_iter().map(|w| w.into()).collect()
    }
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&str> {
    self.words.get(index).map(|w| w.as_str())
  }

  pub fn words(&self) -> &[String] {
    &self.words
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::{Cursor, Write};

  #[test]
  fn test_load_keeps_lines_verbatim() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "apple\r\n Banana\n\nkiwi").unwrap();

    let corpus = DonorCorpus::load(file.path()).unwrap();

    assert_eq!(corpus.words(), &["apple", " Banana", "", "kiwi"]);
    assert_eq!(corpus.get(1), Some(" Banana"));
    assert_eq!(corpus.get(4), None);
  }

  #[test]
  fn test_load_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();

    match DonorCorpus::load(file.path()) {
      Err(CorpusError::EmptySource { path }) => assert_eq!(path, file.path()),
      other => panic!("expected EmptySource, got {:?}", other)
    }
  }

  #[test]
  fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");

    match DonorCorpus::load(&path) {
      Err(CorpusError::UnavailableSource { path: p, .. }) => assert_eq!(p, path),
      other => panic!("expected UnavailableSource, got {:?}", other)
    }
  }

  #[test]
  fn test_from_reader_trailing_newline() {
    let corpus = DonorCorpus::from_reader(Cursor::new("one\ntwo\n")).unwrap();
    assert_eq!(corpus.len(), 2);

    let corpus = DonorCorpus::from_reader(Cursor::new("")).unwrap();
    assert!(corpus.is_empty());
  }

  #[test]
  fn test_from_reader_invalid_utf8_line() {
    let bytes: &[u8] = b"ok\nca\xfft\r\nfine\n";
    let corpus = DonorCorpus::from_reader(bytes).unwrap();

    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.get(0), Some("ok"));
    assert_eq!(corpus.get(1), Some("ca\u{fffd}t"));
    assert_eq!(corpus.get(2), Some("fine"));
  }
}
