
use console::{measure_text_width, style};
use itertools::Itertools;

use crate::corpus::DonorCorpus;
use crate::synthesis::{LetterSource, NewWord};

pub const BOX_WIDTH: usize = 72;
const HEADER_DOTS: usize = 13;

/// The word's characters, verbatim.
pub fn render(word: &NewWord) -> String {
  word.to_string()
}

pub fn render_styled(word: &NewWord) -> String {
  style(word.as_str()).bold().cyan().to_string()
}

fn rule() -> String {
  "=".repeat(BOX_WIDTH)
}

fn centered(text: &str) -> String {
  let width = measure_text_width(text);
  let spaces = (BOX_WIDTH.saturating_sub(width) + width % 2) / 2;
  format!("{}{}", " ".repeat(spaces), text)
}

pub fn header_box(message: &str) -> String {
  let width = measure_text_width(message);
  let spaces = BOX_WIDTH.saturating_sub(width + HEADER_DOTS * 2 + 2) / 2;
  let dots = ".".repeat(HEADER_DOTS);
  format!("\n{}\n{}{} {} {}\n{}\n", rule(), " ".repeat(spaces), dots, message, dots, rule())
}

pub fn alert_box(line1: &str, line2: &str) -> String {
  format!("{}\n{}\n{}\n{}\n", rule(), centered(line1), centered(line2), rule())
}

/// One line per letter saying where it came from.
pub fn explain(word: &NewWord, corpus: &DonorCorpus) -> String {
  word.letters().map(|(letter, source)| {
    match source {
      LetterSource::Seed => format!("{}  random", letter),
      LetterSource::Donor { donor_index, section } => format!(
        "{}  from \"{}\" ({} third)",
        letter,
        corpus.get(donor_index).unwrap_or("?"),
        section.name()
      ),
      LetterSource::Fallback => format!("{}  fallback vowel", letter)
    }
  }).join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::random::ScriptedRandom;
  use crate::synthesis::WordSynthesizer;

  fn sample_word(corpus: &DonorCorpus) -> NewWord {
    let mut random = ScriptedRandom::new([
      5, ScriptedRandom::letter('t'),
      0, 0, 1,
      1, 0, ScriptedRandom::vowel('u')
    ]);
    WordSynthesizer::new(corpus).generate(&mut random).unwrap()
  }

  #[test]
  fn test_render_verbatim() {
    let corpus = DonorCorpus::from_words(["stone", "banana"]);
    assert_eq!(render(&sample_word(&corpus)), "tonau");
  }

  #[test]
  fn test_styled_keeps_text() {
    let corpus = DonorCorpus::from_words(["stone", "banana"]);
    let styled = render_styled(&sample_word(&corpus));
    assert_eq!(console::strip_ansi_codes(&styled), "tonau");
  }

  #[test]
  fn test_header_box() {
    let text = header_box("New Word Generator");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "=".repeat(BOX_WIDTH));
    assert_eq!(lines[2].trim_start(), "............. New Word Generator .............");
    assert_eq!(lines[2].len(), 13 + 46);
    assert_eq!(lines[3], "=".repeat(BOX_WIDTH));
  }

  #[test]
  fn test_alert_box_centers() {
    let text = alert_box("ab", "abc");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], format!("{}ab", " ".repeat(35)));
    assert_eq!(lines[2], format!("{}abc", " ".repeat(35)));
  }

  #[test]
  fn test_explain() {
    let corpus = DonorCorpus::from_words(["stone", "banana"]);
    let text = explain(&sample_word(&corpus), &corpus);
    assert_eq!(text, [
      "t  random",
      "o  from \"stone\" (middle third)",
      "n  from \"stone\" (middle third)",
      "a  from \"banana\" (middle third)",
      "u  fallback vowel"
    ].join("\n"));
  }
}
