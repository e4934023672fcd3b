
use std::fmt;

use serde::Serialize;

use crate::config::LengthRange;
use crate::corpus::DonorCorpus;
use crate::error::SynthesisError;
use crate::random::{BoundedRandom, is_vowel};
use crate::sections::Section;

const PLACEHOLDER: u8 = b'0';

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LetterSource {
  /// Drawn at random: the first letter, or either letter of a two-letter word.
  Seed,
  /// Copied from the donor at `donor_index`, out of the given third of it.
  Donor { donor_index: usize, section: Section },
  /// No donor continued the previous letter in time; a random vowel.
  Fallback
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct NewWord {
  text: String,
  sources: Vec<LetterSource>
}

impl NewWord {
  pub fn as_str(&self) -> &str {
    &self.text
  }

  pub fn len(&self) -> usize {
    self.sources.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sources.is_empty()
  }

  pub fn sources(&self) -> &[LetterSource] {
    &self.sources
  }

  pub fn letters(&self) -> impl Iterator<Item=(char, LetterSource)> + '_ {
    self.text.chars().zip(self.sources.iter().copied())
  }
}

impl fmt::Display for NewWord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

struct TargetWord {
  letters: Vec<u8>,
  sources: Vec<LetterSource>,
  letters_added: usize
}

impl TargetWord {
  fn allocate(length: usize) -> Result<TargetWord, SynthesisError> {
    let mut letters = Vec::new();
    let mut sources = Vec::new();
    letters.try_reserve_exact(length).map_err(|_| SynthesisError::AllocationError { length })?;
    sources.try_reserve_exact(length).map_err(|_| SynthesisError::AllocationError { length })?;
    letters.resize(length, PLACEHOLDER);
    sources.resize(length, LetterSource::Seed);
    Ok(TargetWord { letters, sources, letters_added: 0 })
  }

  fn len(&self) -> usize {
    self.letters.len()
  }

  fn last_letter(&self) -> u8 {
    self.letters[self.letters_added - 1]
  }

  fn place(&mut self, letter: u8, source: LetterSource) {
    self.letters[self.letters_added] = letter;
    self.sources[self.letters_added] = source;
    self.letters_added += 1;
  }

  fn finish(self) -> NewWord {
    debug_assert_eq!(self.letters_added, self.letters.len());
    NewWord {
      text: self.letters.iter().map(|&b| b as char).collect(),
      sources: self.sources
    }
  }
}

/// Splices new words together out of the letter transitions of donor words.
pub struct WordSynthesizer<'a> {
  corpus: &'a DonorCorpus,
  lengths: LengthRange
}

impl<'a> WordSynthesizer<'a> {
  pub fn new(corpus: &'a DonorCorpus) -> WordSynthesizer<'a> {
    WordSynthesizer::with_lengths(corpus, LengthRange::default())
  }

  pub fn with_lengths(corpus: &'a DonorCorpus, lengths: LengthRange) -> WordSynthesizer<'a> {
    WordSynthesizer { corpus, lengths }
  }

  pub fn generate<R: BoundedRandom + ?Sized>(&self, random: &mut R) -> Result<NewWord, SynthesisError> {
    if self.corpus.is_empty() {
      return Err(SynthesisError::EmptyCorpus);
    }

    let word_length = random.uniform(self.lengths.min(), self.lengths.max());
    self.synthesize(word_length, random)
  }

  fn synthesize<R: BoundedRandom + ?Sized>(&self, word_length: usize, random: &mut R) -> Result<NewWord, SynthesisError> {
    let mut target = TargetWord::allocate(word_length)?;

    if word_length < 3 {
      short_word(&mut target, random);
      return Ok(target.finish());
    }

    target.place(random.random_letter(), LetterSource::Seed);

    for section in Section::ALL {
      // The seed letter already covers the first third of a word of five letters or fewer.
      if section == Section::First && word_length <= 5 {
        continue;
      }
      self.fill_section(section, &mut target, random);
    }

    Ok(target.finish())
  }

  fn fill_section<R: BoundedRandom + ?Sized>(&self, section: Section, target: &mut TargetWord, random: &mut R) {
    let upper = section.bounds(target.len()).upper;
    let mut tries = 0;

    tracing::debug!(section = section.name(), from = target.letters_added, to = upper, "filling section");

    while target.letters_added < upper {
      let donor_index = random.uniform(0, self.corpus.len() - 1);
      let donor = self.corpus.words()[donor_index].as_bytes();

      let continuation = continuation(donor, section, target.last_letter());
      tries += 1;

      match continuation {
        Some(letter) => {
          target.place(letter, LetterSource::Donor { donor_index, section });
        },
        None if tries >= self.corpus.len() => {
          let vowel = random.random_vowel();
          tracing::debug!(section = section.name(), tries, vowel = %(vowel as char), "no donor match, falling back to vowel");
          target.place(vowel, LetterSource::Fallback);
        },
        None => ()
      }
    }
  }
}

/// One random letter, then a letter of the other kind, so the pair always
/// holds one vowel and one consonant.
fn short_word<R: BoundedRandom + ?Sized>(target: &mut TargetWord, random: &mut R) {
  let first = random.random_letter();
  target.place(first, LetterSource::Seed);

  let second = if is_vowel(first) {
    loop {
      let letter = random.random_letter();
      if !is_vowel(letter) {
        break letter;
      }
    }
  }
  else {
    random.random_vowel()
  };
  target.place(second, LetterSource::Seed);
}

/// Letter following the first occurrence of `previous` (ignoring case) inside
/// the donor's own `section`, if that following letter is alphabetic.
fn continuation(donor: &[u8], section: Section, previous: u8) -> Option<u8> {
  section.bounds(donor.len()).range()
    .find(|&i| {
      donor[i].eq_ignore_ascii_case(&previous)
        && donor.get(i + 1).map_or(false, |c| c.is_ascii_alphabetic())
    })
    .map(|i| donor[i + 1])
}
