// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Quick text filter over profiles, as used by search boxes.

use crate::identity::{Person, PersonHeader};
use crate::normalize::normalize;

/// A free text query, split in normalized chunks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    chunks: Vec<String>,
}

impl Query {
    /// Builds a query from whitespace separated words.
    ///
    /// Words without any letter or digit are dropped, so an empty pattern
    /// (or `"*"`) matches every profile.
    pub fn new(pattern: &str) -> Self {
        let chunks = pattern
            .split_whitespace()
            .map(normalize)
            .filter(|chunk| !chunk.is_empty())
            .collect();
        Query { chunks }
    }

    /// Returns true if every chunk appears in the person's "LAST First".
    pub fn matches(&self, person: &Person) -> bool {
        let haystack = normalize(&person.identity.sort_key());
        self.chunks.iter().all(|chunk| haystack.contains(chunk.as_str()))
    }
}

/// Returns the headers of the profiles matching `pattern`, sorted by label
/// then id. Temporary profiles are included.
pub fn filter_people<'a, I>(people: I, pattern: &str) -> Vec<PersonHeader>
where
    I: IntoIterator<Item = &'a Person>,
{
    let query = Query::new(pattern);
    let mut out: Vec<PersonHeader> = people
        .into_iter()
        .filter(|p| query.matches(p))
        .map(PersonHeader::from)
        .collect();
    out.sort_by(|a, b| a.label.cmp(&b.label).then(a.id.cmp(&b.id)));
    out
}
