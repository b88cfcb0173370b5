// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identity Resolution
//!
//! Decides what to do with an incoming identity: attach it to a known
//! profile, suggest similar profiles, or merge two versions of a profile.
//! Everything here is pure: candidates are supplied by the caller and no
//! input is modified.

pub mod compare;
pub mod exact;
pub mod filter;
pub mod merge;
pub mod similarity;

pub use compare::{compare, Comparable, FieldComparison};
pub use exact::{find_match, matches, ExactPattern};
pub use filter::{filter_people, Query};
pub use merge::{merge, ConflictReport};
pub use similarity::{rank, Ranking, ScoredCandidate, SearchPattern};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::identity::{Identity, Person, PersonId};

/// What to do with an incoming identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Resolution {
    /// The identity is already known: store `merged` in place of profile `id`.
    Attach {
        id: PersonId,
        merged: Identity,
        conflicts: ConflictReport,
    },
    /// No known profile matches: a new one should be created.
    Create,
}

/// Resolves an incoming identity (e.g. a donor or a registration) against
/// the known profiles.
///
/// On an exact match, the incoming record is merged into the matched one.
pub fn resolve<'a, I>(incoming: &Identity, candidates: I) -> Resolution
where
    I: IntoIterator<Item = &'a Person>,
{
    let pattern = SearchPattern::from(incoming);
    match find_match(candidates, &pattern) {
        Some(existing) => {
            let (merged, conflicts) = merge(incoming, &existing.identity);
            info!(
                id = %existing.id,
                conflicts = conflicts.count(),
                "attaching incoming identity to existing profile"
            );
            Resolution::Attach {
                id: existing.id,
                merged,
                conflicts,
            }
        }
        None => Resolution::Create,
    }
}
