//! Tests for the text metrics functions.

use super::*;

#[test]
fn test_character_count_empty() {
    assert_eq!(character_count("", true), 0);
    assert_eq!(character_count("", false), 0);
}

#[test]
fn test_character_count_spaces() {
    assert_eq!(character_count("a b c", true), 3);
    assert_eq!(character_count("a b c", false), 5);
}

#[test]
fn test_character_count_all_whitespace_kinds() {
    // Tabs and newlines are whitespace too, not just spaces.
    assert_eq!(character_count("a\tb\nc", true), 3);
    assert_eq!(character_count("a\tb\nc", false), 5);
}

#[test]
fn test_character_count_is_char_based() {
    // Multi-byte characters count once.
    assert_eq!(character_count("héllo", false), 5);
}

#[test]
fn test_word_count_whitespace_only() {
    assert_eq!(word_count("   "), 0);
    assert_eq!(word_count(""), 0);
}

#[test]
fn test_word_count_collapses_runs() {
    assert_eq!(word_count("one two  three"), 3);
    assert_eq!(word_count("  leading and trailing  "), 3);
    assert_eq!(word_count("line\nbreaks\tcount"), 3);
}

#[test]
fn test_sentence_count_basic() {
    assert_eq!(sentence_count("Hi! Go? Run."), 3);
    assert_eq!(sentence_count(""), 0);
    assert_eq!(sentence_count("   "), 0);
}

#[test]
fn test_sentence_count_terminator_runs() {
    // A run of terminators ends a single sentence.
    assert_eq!(sentence_count("Wait... what?!"), 2);
}

#[test]
fn test_sentence_count_keeps_whitespace_fragments() {
    // The fragment after the final period is " ", which is not the empty
    // string and therefore still counts.
    assert_eq!(sentence_count("Done. "), 2);
    assert_eq!(sentence_count("Done."), 1);
}

#[test]
fn test_sentence_count_no_terminator() {
    assert_eq!(sentence_count("no punctuation here"), 1);
}

#[test]
fn test_letter_density_counts_and_percentages() {
    let entries = letter_density("aabbc");
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].letter, 'A');
    assert_eq!(entries[0].count, 2);
    assert_eq!(entries[0].percentage, "40.00");

    assert_eq!(entries[1].letter, 'B');
    assert_eq!(entries[1].count, 2);
    assert_eq!(entries[1].percentage, "40.00");

    assert_eq!(entries[2].letter, 'C');
    assert_eq!(entries[2].count, 1);
    assert_eq!(entries[2].percentage, "20.00");
}

#[test]
fn test_letter_density_ties_keep_first_seen_order() {
    let entries = letter_density("bbaacc");
    let letters: Vec<char> = entries.iter().map(|e| e.letter).collect();
    assert_eq!(letters, vec!['B', 'A', 'C']);
}

#[test]
fn test_letter_density_total_includes_non_letters() {
    // "ab c!" has 5 characters, of which 3 are letters.
    let entries = letter_density("ab c!");
    for entry in &entries {
        assert_eq!(entry.count, 1);
        assert_eq!(entry.percentage, "20.00");
    }
}

#[test]
fn test_letter_density_whitespace_only_is_empty() {
    assert!(letter_density("  ").is_empty());
    assert!(letter_density("").is_empty());
}

#[test]
fn test_letter_density_ignores_digits_and_punctuation() {
    let entries = letter_density("a1a2!");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].letter, 'A');
    assert_eq!(entries[0].count, 2);
}

#[test]
fn test_letter_density_case_folds() {
    let entries = letter_density("AaA");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].count, 3);
    assert_eq!(entries[0].percentage, "100.00");
}

#[test]
fn test_letter_density_count_sum_matches_alphabetic_chars() {
    let text = "The quick brown fox, 2 jumps! Over 1 lazy dog?";
    let alphabetic = text.chars().filter(char::is_ascii_alphabetic).count();
    let sum: usize = letter_density(text).iter().map(|e| e.count).sum();
    assert_eq!(sum, alphabetic);
}

#[test]
fn test_reading_time_boundaries() {
    assert_eq!(reading_time(0), "<1 minute");
    assert_eq!(reading_time(1), "1 minute");
    assert_eq!(reading_time(200), "1 minute");
    assert_eq!(reading_time(201), "2 minutes");
    assert_eq!(reading_time(400), "2 minutes");
    assert_eq!(reading_time(401), "3 minutes");
}

#[test]
fn test_metrics_are_idempotent() {
    let text = "Hi! Same input, same output. Every time?";
    assert_eq!(character_count(text, true), character_count(text, true));
    assert_eq!(word_count(text), word_count(text));
    assert_eq!(sentence_count(text), sentence_count(text));
    assert_eq!(letter_density(text), letter_density(text));
    assert_eq!(reading_time(7), reading_time(7));
}
