
use std::ops::Range;

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
  First, Middle, Last
}

/// Half-open index range `[lower, upper)` of one third of a word.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SectionBounds {
  pub lower: usize,
  pub upper: usize
}

impl Section {
  pub const ALL: [Section; 3] = [Section::First, Section::Middle, Section::Last];

  /// Thirds round down; the middle absorbs the remainder.
  pub fn bounds(self, length: usize) -> SectionBounds {
    let third = length / 3;
    match self {
      Section::First => SectionBounds { lower: 0, upper: third },
      Section::Middle => SectionBounds { lower: third, upper: length - third },
      Section::Last => SectionBounds { lower: length - third, upper: length }
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Section::First => "first",
      Section::Middle => "middle",
      Section::Last => "last"
    }
  }
}

pub fn thirds(length: usize) -> [SectionBounds; 3] {
  Section::ALL.map(|s| s.bounds(length))
}

impl SectionBounds {
  pub fn len(&self) -> usize {
    self.upper - self.lower
  }

  pub fn is_empty(&self) -> bool {
    self.upper == self.lower
  }

  pub fn range(&self) -> Range<usize> {
    self.lower .. self.upper
  }
}
