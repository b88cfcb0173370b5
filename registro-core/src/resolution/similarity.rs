// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Similar Profile Search
//!
//! Weighted scoring of existing profiles against a partial identity, used to
//! suggest merge targets for manual review.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::identity::{Identity, Person, PersonHeader, Sex};
use crate::normalize::{fold, simplify};

// Scoring model. Not configurable so rankings stay reproducible.

/// Weight of a last name contained in the candidate's last name.
pub const WEIGHT_LAST_NAME: u32 = 3;
/// Weight of a first name contained in the candidate's first name.
pub const WEIGHT_FIRST_NAME: u32 = 2;
/// Weight of an email contained in the candidate's email.
pub const WEIGHT_EMAIL: u32 = 4;
/// Weight of an identical birth date.
pub const WEIGHT_BIRTH_DATE: u32 = 3;
/// Weight of an identical sex.
pub const WEIGHT_SEX: u32 = 1;
/// Candidates scoring less are not reported.
pub const MIN_SCORE: u32 = 2;

/// The identity fields used to search similar profiles.
///
/// Empty fields are ignored: they neither score nor count in the maximum.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPattern {
    pub last_name: String,
    pub first_name: String,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    pub email: String,
}

impl From<&Identity> for SearchPattern {
    fn from(identity: &Identity) -> Self {
        SearchPattern {
            last_name: identity.last_name.clone(),
            first_name: identity.first_name.clone(),
            sex: identity.sex,
            birth_date: identity.birth_date,
            email: identity.email.clone(),
        }
    }
}

impl SearchPattern {
    /// Returns an identity holding only the pattern fields.
    pub fn to_identity(&self) -> Identity {
        Identity {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            sex: self.sex,
            birth_date: self.birth_date,
            email: self.email.clone(),
            ..Default::default()
        }
    }

    fn folded(&self) -> SearchPattern {
        SearchPattern {
            last_name: fold(&self.last_name),
            first_name: fold(&self.first_name),
            sex: self.sex,
            birth_date: self.birth_date,
            email: fold(&self.email),
        }
    }

    /// Returns the score of a candidate matching every specified field.
    pub fn max_score(&self) -> u32 {
        self.folded().max_score_folded()
    }

    fn max_score_folded(&self) -> u32 {
        let mut max = 0;
        if !self.last_name.is_empty() {
            max += WEIGHT_LAST_NAME;
        }
        if !self.first_name.is_empty() {
            max += WEIGHT_FIRST_NAME;
        }
        if !self.email.is_empty() {
            max += WEIGHT_EMAIL;
        }
        if self.birth_date.is_some() {
            max += WEIGHT_BIRTH_DATE;
        }
        if !self.sex.is_unspecified() {
            max += WEIGHT_SEX;
        }
        max
    }

    /// Returns the weighted score of `candidate` against this pattern.
    pub fn score(&self, candidate: &Identity) -> u32 {
        self.folded().score_folded(candidate)
    }

    fn score_folded(&self, candidate: &Identity) -> u32 {
        let mut score = 0;
        if contains(&candidate.last_name, &self.last_name) {
            score += WEIGHT_LAST_NAME;
        }
        if contains(&candidate.first_name, &self.first_name) {
            score += WEIGHT_FIRST_NAME;
        }
        if contains(&candidate.email, &self.email) {
            score += WEIGHT_EMAIL;
        }
        if candidate.birth_date.is_some() && candidate.birth_date == self.birth_date {
            score += WEIGHT_BIRTH_DATE;
        }
        if !candidate.sex.is_unspecified() && candidate.sex == self.sex {
            score += WEIGHT_SEX;
        }
        score
    }
}

/// Returns true if the simplified `full` contains the already folded
/// `pattern`. False as soon as one of them is empty.
fn contains(full: &str, pattern: &str) -> bool {
    !pattern.is_empty() && !full.is_empty() && simplify(full).contains(pattern)
}

/// A candidate retained by the search, with its raw score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub score: u32,
    pub person: PersonHeader,
}

impl ScoredCandidate {
    /// Returns the score as a percentage (0 to 100) of `max_score`.
    pub fn percent_of(&self, max_score: u32) -> u32 {
        if max_score == 0 {
            return 0;
        }
        100 * self.score / max_score
    }
}

/// Result of a similar profile search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    /// Maximum attainable score for the pattern.
    pub max_score: u32,
    /// Retained candidates, best first.
    pub candidates: Vec<ScoredCandidate>,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns the scores as percentages of the maximum, in ranking order.
    pub fn percents(&self) -> Vec<u32> {
        self.candidates
            .iter()
            .map(|c| c.percent_of(self.max_score))
            .collect()
    }
}

/// Returns the profiles similar to `pattern`, best first.
///
/// Temporary profiles are skipped: an incoming profile must never be
/// merged into an unverified one. A pattern without any specified field
/// yields an empty ranking with a zero maximum. Candidates with equal
/// scores keep their input order.
pub fn rank<'a, I>(candidates: I, pattern: &SearchPattern) -> Ranking
where
    I: IntoIterator<Item = &'a Person>,
{
    let pattern = pattern.folded();
    let max_score = pattern.max_score_folded();
    if max_score == 0 {
        debug!("empty search pattern, no candidate ranked");
        return Ranking::default();
    }

    let mut scanned = 0usize;
    let mut retained: Vec<ScoredCandidate> = Vec::with_capacity(20);
    for person in candidates {
        scanned += 1;
        if person.is_temp {
            continue;
        }
        let score = pattern.score_folded(&person.identity);
        trace!(id = %person.id, score, "scored candidate");
        if score >= MIN_SCORE {
            retained.push(ScoredCandidate {
                score,
                person: person.header(),
            });
        }
    }

    // stable: ties keep input order
    retained.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        scanned,
        retained = retained.len(),
        max_score,
        "ranked similar profiles"
    );
    Ranking {
        max_score,
        candidates: retained,
    }
}
