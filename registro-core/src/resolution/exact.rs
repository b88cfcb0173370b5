// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exact Profile Matching
//!
//! Decides whether an incoming identity is already known, in which case it
//! is attached to the existing profile without human review.

use tracing::{debug, warn};

use super::similarity::SearchPattern;
use crate::identity::{Identity, Person};
use crate::normalize::normalize;

/// A [`SearchPattern`] with names in strict canonical form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExactPattern {
    pattern: SearchPattern,
}

impl ExactPattern {
    pub fn new(pattern: &SearchPattern) -> Self {
        ExactPattern {
            pattern: SearchPattern {
                last_name: normalize(&pattern.last_name),
                first_name: normalize(&pattern.first_name),
                ..pattern.clone()
            },
        }
    }

    /// Returns true if the pattern carries no compared value at all.
    pub fn is_blank(&self) -> bool {
        self.pattern.last_name.is_empty()
            && self.pattern.first_name.is_empty()
            && self.pattern.birth_date.is_none()
            && self.pattern.sex.is_unspecified()
    }

    /// Returns true if `candidate` has the same names and birth date, and a
    /// compatible sex. An unspecified sex, on either side, matches any sex.
    pub fn matches(&self, candidate: &Identity) -> bool {
        let p = &self.pattern;
        p.last_name == normalize(&candidate.last_name)
            && p.first_name == normalize(&candidate.first_name)
            && p.birth_date == candidate.birth_date
            && (p.sex.is_unspecified() || candidate.sex.is_unspecified() || p.sex == candidate.sex)
    }
}

/// Returns true if `candidate` exactly matches `pattern` after normalization.
pub fn matches(pattern: &SearchPattern, candidate: &Identity) -> bool {
    ExactPattern::new(pattern).matches(candidate)
}

/// Returns the first non temporary profile exactly matching `pattern`.
/// `None` means a new profile should be created.
pub fn find_match<'a, I>(candidates: I, pattern: &SearchPattern) -> Option<&'a Person>
where
    I: IntoIterator<Item = &'a Person>,
{
    let exact = ExactPattern::new(pattern);
    let found = candidates
        .into_iter()
        .filter(|p| !p.is_temp)
        .find(|p| exact.matches(&p.identity));

    match found {
        Some(person) if exact.is_blank() => {
            warn!(id = %person.id, "blank identity matched a blank profile");
        }
        Some(person) => debug!(id = %person.id, "exact match found"),
        None => debug!("no exact match"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Sex;
    use chrono::NaiveDate;

    fn date(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(1994, 4, d)
    }

    fn identity(last: &str, first: &str, sex: Sex, birth: Option<NaiveDate>) -> Identity {
        Identity {
            last_name: last.to_string(),
            first_name: first.to_string(),
            sex,
            birth_date: birth,
            ..Default::default()
        }
    }

    fn pattern(last: &str, first: &str, sex: Sex, birth: Option<NaiveDate>) -> SearchPattern {
        SearchPattern::from(&identity(last, first, sex, birth))
    }

    #[test]
    fn test_matches_table() {
        let c1 = identity("Benoit", "Kugler", Sex::Man, date(2));
        let c2 = identity("Léo", "Kugler", Sex::Man, date(2));
        let c3 = identity("Léa", "Kugler", Sex::Woman, date(2));
        let c4 = identity("Dominique", "Kugler", Sex::Woman, date(2));

        let cases = [
            (pattern("Benoit", "Kugler", Sex::Man, date(2)), &c1, true),
            (pattern("Benoit", "Kugler", Sex::Man, date(3)), &c1, false),
            (pattern("Benoît", "Kugler", Sex::Man, date(2)), &c1, true),
            (pattern("Benoît", "Kugler", Sex::Man, date(2)), &c2, false),
            (pattern("Léo", "Kugler", Sex::Woman, date(2)), &c3, false),
            (pattern("Dominique", "Kugler", Sex::Woman, date(2)), &c4, true),
            (pattern("Dominique", "Kugler", Sex::Man, date(2)), &c4, false),
        ];
        for (pattern, candidate, want) in cases {
            assert_eq!(matches(&pattern, candidate), want, "{:?}", pattern);
        }
    }

    #[test]
    fn test_sex_wildcard_on_both_sides() {
        let woman = identity("Jonac", "Tom", Sex::Woman, date(6));
        let unknown = identity("Jonac", "Tom", Sex::Unspecified, date(6));
        assert!(matches(
            &pattern("jonac", "TOM", Sex::Unspecified, date(6)),
            &woman
        ));
        assert!(matches(&pattern("jonac", "tom", Sex::Man, date(6)), &unknown));
    }

    #[test]
    fn test_punctuation_insensitive() {
        let candidate = identity("d'Artagnan", "Jean Pierre", Sex::Man, date(2));
        assert!(matches(
            &pattern("DARTAGNAN", "jean-pierre", Sex::Man, date(2)),
            &candidate
        ));
    }

    #[test]
    fn test_birth_date_must_agree() {
        let candidate = identity("Kugler", "Ben", Sex::Man, None);
        assert!(!matches(
            &pattern("Kugler", "Ben", Sex::Man, date(2)),
            &candidate
        ));
    }

    #[test]
    fn test_find_match_skips_temporary() {
        let people = vec![
            Person::new(1, identity("Kugler", "Ben", Sex::Man, date(2))).temporary(),
            Person::new(2, identity("Kugler", "Ben", Sex::Man, date(2))),
        ];
        let found = find_match(&people, &pattern("kugler", "ben", Sex::Man, date(2)));
        assert_eq!(found.map(|p| p.id.0), Some(2));

        let only_temp = &people[..1];
        assert!(find_match(only_temp, &pattern("kugler", "ben", Sex::Man, date(2))).is_none());
    }

    #[test]
    fn test_find_match_returns_first() {
        let people = vec![
            Person::new(4, identity("Kugler", "Ben", Sex::Unspecified, date(2))),
            Person::new(5, identity("Kugler", "Ben", Sex::Man, date(2))),
        ];
        let found = find_match(&people, &pattern("kugler", "ben", Sex::Man, date(2)));
        assert_eq!(found.map(|p| p.id.0), Some(4));
    }

    #[test]
    fn test_blank_pattern_matches_blank_profile() {
        let people = vec![
            Person::new(1, identity("Kugler", "Ben", Sex::Man, date(2))),
            Person::new(2, Identity::default()),
        ];
        let blank = SearchPattern::default();
        assert!(ExactPattern::new(&blank).is_blank());
        assert_eq!(find_match(&people, &blank).map(|p| p.id.0), Some(2));
    }
}
