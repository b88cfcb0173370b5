// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text Normalization
//!
//! Canonical forms used when comparing free text (names, emails, cities).
//! Three strictness levels exist and are deliberately kept apart:
//!
//! - [`normalize`]: accents, case and every non alphanumeric character removed.
//!   Used for exact matching, field comparison and the quick filter.
//! - [`simplify`]: accents and case removed, surrounding whitespace trimmed.
//!   Used on the candidate side of similarity scoring.
//! - [`fold`]: case folded and trimmed only. Used on the pattern side of
//!   similarity scoring.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-cases `text` and strips diacritics through NFD decomposition.
///
/// Lower-casing happens first: some lower-case mappings (e.g. `İ`) emit
/// combining marks which must be dropped too.
fn strip_accents(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
}

/// Returns the strict canonical form of `text`.
///
/// "Jean-Pierre", "jean pierre" and " JEAN PIERRE " all normalize to
/// `"jeanpierre"`.
pub fn normalize(text: &str) -> String {
    strip_accents(text).filter(|c| c.is_alphanumeric()).collect()
}

/// Returns `text` without accents, lower-cased and trimmed.
///
/// Internal spaces and punctuation are kept.
pub fn simplify(text: &str) -> String {
    let stripped: String = strip_accents(text).collect();
    stripped.trim().to_string()
}

/// Returns `text` trimmed and lower-cased. Accents are kept.
pub fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}
