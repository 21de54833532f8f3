//! Pure text metrics: characters, words, sentences, letter density,
//! reading time.
//!
//! Every function here is total and stateless: any input string (including
//! the empty one) maps to a defined result, and calling a function twice
//! with the same input yields the same output. The UI recomputes all of
//! them from scratch on every keystroke.

#[cfg(test)]
mod tests;

/// Words per minute assumed for the reading-time estimate.
const READING_SPEED_WPM: usize = 200;

/// One row of the letter-density table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterDensityEntry {
    /// Uppercase ASCII letter.
    pub letter: char,
    /// Occurrences of the letter in the case-folded text.
    pub count: usize,
    /// Share of ALL characters (not just letters), two fraction digits.
    pub percentage: String,
}

impl LetterDensityEntry {
    /// Percentage as a number, for bar widths. The string form is
    /// authoritative for display.
    #[must_use]
    pub fn percentage_value(&self) -> f64 {
        self.percentage.parse().unwrap_or(0.0)
    }
}

/// Number of characters in `text`. With `exclude_spaces` every whitespace
/// character (space, tab, newline, ...) is skipped.
#[must_use]
pub fn character_count(text: &str, exclude_spaces: bool) -> usize {
    if exclude_spaces {
        text.chars().filter(|c| !c.is_whitespace()).count()
    } else {
        text.chars().count()
    }
}

/// Number of whitespace-separated words. Leading/trailing whitespace is
/// ignored; runs of whitespace separate exactly one word boundary.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of sentences, where a run of `.`, `!` or `?` terminates one.
///
/// Only exactly-empty fragments are discarded after splitting, so a
/// whitespace-only fragment (e.g. a trailing space after a period) still
/// counts as a sentence. That mirrors the behavior users see in the
/// original widget and is kept deliberately.
#[must_use]
pub fn sentence_count(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    text.split(is_sentence_terminator)
        .filter(|fragment| !fragment.is_empty())
        .count()
}

const fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Per-letter frequency of ASCII letters in the case-folded text, sorted
/// by descending count. Ties keep first-seen order.
///
/// The percentage denominator is the length of the whole lowercased text,
/// spaces, digits and punctuation included.
#[must_use]
pub fn letter_density(text: &str) -> Vec<LetterDensityEntry> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let total = lowered.chars().count();

    // Vec instead of a map so first-seen order survives the stable sort.
    let mut counts: Vec<(char, usize)> = Vec::new();
    for c in lowered.chars() {
        if c.is_ascii_lowercase() {
            match counts.iter_mut().find(|(letter, _)| *letter == c) {
                Some(slot) => slot.1 += 1,
                None => counts.push((c, 1)),
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(letter, count)| {
            let share = count as f64 / total as f64 * 100.0;
            LetterDensityEntry {
                letter: letter.to_ascii_uppercase(),
                count,
                percentage: format!("{share:.2}"),
            }
        })
        .collect()
}

/// Human-readable reading-time estimate at 200 words per minute.
#[must_use]
pub fn reading_time(word_count: usize) -> String {
    if word_count == 0 {
        return "<1 minute".to_owned();
    }
    let minutes = word_count.div_ceil(READING_SPEED_WPM);
    if minutes == 1 {
        "1 minute".to_owned()
    } else {
        format!("{minutes} minutes")
    }
}
