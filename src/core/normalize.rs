//! Accent folding for tolerant, case-insensitive text matching.
//!
//! Player, club and country names in the dataset carry diacritics that users
//! rarely type ("Mbappé", "Atlético", "Côte d'Ivoire"). Every comparison in
//! the search core goes through [`fold`] so that `"jose"` finds `"José"`.
//!
//! Folding is canonical decomposition (NFD) with combining marks removed.
//! A handful of Latin letters have no decomposition (`ß`, `ø`, `ł`, ...);
//! those are rewritten through a fixed substitution table.

use std::borrow::Cow;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Strip diacritics, keeping case.
///
/// ```rust
/// use fifa_scout::core::normalize::normalize;
///
/// assert_eq!(normalize("José"), "Jose");
/// assert_eq!(normalize("Martin Ødegaard"), "Martin Odegaard");
/// ```
pub fn normalize(s: &str) -> String {
    if s.is_ascii() {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        match substitute(c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    out
}

/// Fold using only the substitution table, without decomposition.
pub fn fold_with_table(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match substitute(c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    out
}

/// Matching key: [`normalize`] then lower-case.
pub fn fold(s: &str) -> String {
    normalize(s).to_lowercase()
}

/// Accent- and case-insensitive substring test. An empty needle matches.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Text for the console: folded to plain letters when `ascii` is set.
pub fn display_text(s: &str, ascii: bool) -> Cow<'_, str> {
    if ascii && !s.is_ascii() {
        Cow::Owned(normalize(s))
    } else {
        Cow::Borrowed(s)
    }
}

fn substitute(c: char) -> Option<&'static str> {
    let rep = match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'É' | 'È' | 'Ê' | 'Ë' => "E",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'Í' | 'Ì' | 'Î' | 'Ï' => "I",
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => "o",
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => "O",
        'ú' | 'ù' | 'û' | 'ü' => "u",
        'Ú' | 'Ù' | 'Û' | 'Ü' => "U",
        'ç' => "c",
        'Ç' => "C",
        'ñ' => "n",
        'Ñ' => "N",
        // No canonical decomposition for these.
        'ß' => "ss",
        'ẞ' => "SS",
        'ø' => "o",
        'Ø' => "O",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ð' | 'đ' => "d",
        'Ð' | 'Đ' => "D",
        'ł' => "l",
        'Ł' => "L",
        'ı' => "i",
        'ħ' => "h",
        'Ħ' => "H",
        'þ' => "th",
        'Þ' => "Th",
        _ => return None,
    };
    Some(rep)
}
