//! Title case normalization applied to every text field before it is stored.
//!
//! The input is lowercased, stripped of Latin diacritics and apostrophes, then
//! split into words. Each word gets its first character capitalized and words
//! are joined back with a single space, so punctuation and repeated
//! whitespace do not survive normalization.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};
use unicode_segmentation::UnicodeSegmentation;

pub fn title_case(input: &str) -> String {
    let cleaned: String = deburr(&input.to_lowercase())
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect();

    alphanumeric_runs(&cleaned)
        .into_iter()
        .flat_map(|run| run.split(|c: char| !c.is_alphanumeric()))
        .flat_map(split_letters_and_digits)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Latin letters with no canonical decomposition.
fn latin_replacement(c: char) -> Option<&'static str> {
    let replacement = match c {
        'æ' => "ae",
        'ð' | 'đ' => "d",
        'ø' => "o",
        'þ' => "th",
        'ß' => "ss",
        'ħ' => "h",
        'ı' => "i",
        'ĳ' => "ij",
        'ĸ' => "k",
        'ŀ' | 'ł' => "l",
        'ŉ' => "'n",
        'ŋ' => "n",
        'œ' => "oe",
        'ŧ' => "t",
        'ſ' => "s",
        _ => return None,
    };
    Some(replacement)
}

fn is_latin_letter(c: char) -> bool {
    matches!(c, '\u{c0}'..='\u{d6}' | '\u{d8}'..='\u{f6}' | '\u{f8}'..='\u{17f}')
}

fn is_diacritical_mark(c: char) -> bool {
    matches!(c, '\u{300}'..='\u{36f}' | '\u{fe20}'..='\u{fe2f}' | '\u{20d0}'..='\u{20ff}')
}

/// Replaces Latin-1 and Latin Extended-A letters with their plain ASCII
/// counterparts and drops combining diacritical marks. Other scripts pass
/// through untouched.
fn deburr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if let Some(replacement) = latin_replacement(c) {
            out.push_str(replacement);
        } else if is_latin_letter(c) {
            decompose_canonical(c, |d| {
                if !is_combining_mark(d) {
                    out.push(d);
                }
            });
        } else if !is_diacritical_mark(c) {
            out.push(c);
        }
    }
    out
}

/// Joins consecutive word-bound segments holding at least one alphanumeric
/// character. Whitespace and punctuation segments end a run.
fn alphanumeric_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for (offset, segment) in text.split_word_bound_indices() {
        if segment.chars().any(char::is_alphanumeric) {
            let end = offset + segment.len();
            current = Some(match current {
                Some((start, _)) => (start, end),
                None => (offset, end),
            });
        } else if let Some((start, end)) = current.take() {
            runs.push(&text[start..end]);
        }
    }
    if let Some((start, end)) = current {
        runs.push(&text[start..end]);
    }
    runs
}

/// Splits a run at every switch between ASCII digits and letters. A trailing
/// ordinal ("1st", "22nd", "4th") stays in one piece.
fn split_letters_and_digits(run: &str) -> Vec<&str> {
    if run.is_empty() {
        return Vec::new();
    }

    let mut bounds = vec![0];
    let mut prev_digit = None;
    for (i, c) in run.char_indices() {
        let digit = c.is_ascii_digit();
        if prev_digit.is_some_and(|prev| prev != digit) {
            bounds.push(i);
        }
        prev_digit = Some(digit);
    }
    bounds.push(run.len());

    let mut words = Vec::with_capacity(bounds.len() - 1);
    for i in 0..bounds.len() - 1 {
        let part = &run[bounds[i]..bounds[i + 1]];
        if i + 3 == bounds.len() && is_ordinal(part, &run[bounds[i + 1]..]) {
            words.push(&run[bounds[i]..]);
            break;
        }
        words.push(part);
    }
    words
}

fn is_ordinal(digits: &str, suffix: &str) -> bool {
    match (digits.chars().last(), suffix) {
        (Some('1'), "st") | (Some('2'), "nd") | (Some('3'), "rd") => true,
        (Some(d), "th") => d.is_ascii_digit() && !matches!(d, '1' | '2' | '3'),
        _ => false,
    }
}
