
#[cfg(test)]
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{SeedableRng, rngs::SmallRng, distributions::Uniform, prelude::Distribution};

pub const VOWELS: [u8; 5] = [b'a', b'e', b'i', b'o', b'u'];

pub fn is_vowel(letter: u8) -> bool {
  VOWELS.contains(&letter.to_ascii_lowercase())
}

/// A source of uniformly distributed integers in an inclusive range.
pub trait BoundedRandom {
  fn uniform(&mut self, lower: usize, upper: usize) -> usize;

  fn random_letter(&mut self) -> u8 {
    b'a' + self.uniform(0, 25) as u8
  }

  fn random_vowel(&mut self) -> u8 {
    VOWELS[self.uniform(0, VOWELS.len() - 1)]
  }
}

pub struct RandomBounds {
  rng: SmallRng
}

impl RandomBounds {
  pub fn from_seed(seed: u64) -> RandomBounds {
    RandomBounds { rng: SmallRng::seed_from_u64(seed) }
  }

  /// Seeds once from the system clock.
  pub fn from_time() -> RandomBounds {
    let seed = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|d| d.as_nanos() as u64)
      .unwrap_or(0);
    tracing::debug!(seed, "seeding random source from clock");
    RandomBounds::from_seed(seed)
  }
}

impl BoundedRandom for RandomBounds {
  fn uniform(&mut self, lower: usize, upper: usize) -> usize {
    Uniform::new_inclusive(lower, upper).sample(&mut self.rng)
  }
}

/// Test-only source that replays a fixed script of draws. Each draw must lie
/// inside the bounds it is asked for; running out of script or leaving the
/// bounds panics.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
  script: VecDeque<usize>
}

#[cfg(test)]
impl ScriptedRandom {
  pub fn new<I: IntoIterator<Item=usize>>(script: I) -> ScriptedRandom {
    ScriptedRandom { script: script.into_iter().collect() }
  }

  /// Draw that makes `random_letter` return `letter`.
  pub fn letter(letter: char) -> usize {
    (letter as u8 - b'a') as usize
  }

  /// Draw that makes `random_vowel` return `vowel`.
  pub fn vowel(vowel: char) -> usize {
    match VOWELS.iter().position(|&v| v == vowel as u8) {
      Some(i) => i,
      None => panic!("not a vowel: {}", vowel)
    }
  }

  pub fn remaining(&self) -> usize {
    self.script.len()
  }
}

#[cfg(test)]
impl BoundedRandom for ScriptedRandom {
  fn uniform(&mut self, lower: usize, upper: usize) -> usize {
    let value = match self.script.pop_front() {
      Some(value) => value,
      None => panic!("script exhausted drawing from {}..={}", lower, upper)
    };
    assert!(lower <= value && value <= upper, "scripted {} outside {}..={}", value, lower, upper);
    value
  }
}
