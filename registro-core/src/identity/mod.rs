// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identity Module
//!
//! Person records as submitted by registration forms, donation webhooks or
//! staff entry. Every field is optional: an empty string, an absent date or
//! an `Unspecified` enumeration means "unknown", which is a meaningful state
//! distinct from any populated value.

mod enums;
pub mod format;

pub use enums::{EducationLevel, FieldParseError, Nationality, Sex, Specialization};

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use format::{format_first_name, format_last_name, format_phone, strip_phone, PHONE_SEPARATOR};

/// A list of phone numbers, in the format they were entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phones(pub Vec<String>);

impl Phones {
    /// Returns true if no number is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the numbers as entered.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the distinct numbers with separators removed.
    pub fn stripped(&self) -> BTreeSet<String> {
        self.0.iter().map(|t| strip_phone(t)).collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Phones {
    fn from(numbers: [S; N]) -> Self {
        Phones(numbers.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for Phones {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Phones(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Phones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted: Vec<String> = self
            .0
            .iter()
            .map(|t| format_phone(t, PHONE_SEPARATOR))
            .collect();
        f.write_str(&formatted.join(";"))
    }
}

/// Personal identity attributes of one person.
///
/// These are exactly the fields compared and merged by the resolution engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub last_name: String,
    pub first_name: String,
    pub sex: Sex,

    pub birth_date: Option<NaiveDate>,
    pub birth_city: String,
    /// Department number for France, region name elsewhere.
    pub birth_department: String,
    pub nationality: Nationality,

    pub phones: Phones,
    pub email: String,

    pub address: String,
    pub postal_code: String,
    pub city: String,
    /// ISO 3166 country code.
    pub country: String,

    pub social_security_number: String,

    // Staff members only
    pub maiden_name: String,
    pub profession: String,
    pub student: bool,
    pub civil_servant: bool,
    pub education_level: EducationLevel,
    pub specialization: Specialization,
}

impl Identity {
    /// Returns the first name capitalized part by part.
    pub fn formatted_first_name(&self) -> String {
        format_first_name(&self.first_name)
    }

    /// Returns the upper-cased last name.
    pub fn formatted_last_name(&self) -> String {
        format_last_name(&self.last_name)
    }

    /// Returns "First LAST", used as display label.
    pub fn label(&self) -> String {
        join_non_empty(self.formatted_first_name(), self.formatted_last_name())
    }

    /// Returns "LAST First", used for alphabetical listings and text search.
    pub fn sort_key(&self) -> String {
        join_non_empty(self.formatted_last_name(), self.formatted_first_name())
    }

    /// Returns the age in full years at `date`, if the birth date is known
    /// and not after `date`.
    pub fn age_at(&self, date: NaiveDate) -> Option<u32> {
        self.birth_date.and_then(|birth| date.years_since(birth))
    }
}

fn join_non_empty(a: String, b: String) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b,
        (_, true) => a,
        _ => format!("{} {}", a, b),
    }
}

/// Storage identifier of a person.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored person: an identity with its id and verification state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    #[serde(flatten)]
    pub identity: Identity,
    /// Unverified profile, possibly a duplicate waiting to be merged.
    /// Never offered as a match or merge target.
    #[serde(default)]
    pub is_temp: bool,
}

impl Person {
    pub fn new(id: i64, identity: Identity) -> Self {
        Person {
            id: PersonId(id),
            identity,
            is_temp: false,
        }
    }

    /// Marks the profile as temporary.
    pub fn temporary(mut self) -> Self {
        self.is_temp = true;
        self
    }

    pub fn header(&self) -> PersonHeader {
        PersonHeader::from(self)
    }
}

/// Lightweight projection of a [`Person`] for listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonHeader {
    pub id: PersonId,
    pub label: String,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    pub is_temp: bool,
}

impl From<&Person> for PersonHeader {
    fn from(person: &Person) -> Self {
        PersonHeader {
            id: person.id,
            label: person.identity.label(),
            sex: person.identity.sex,
            birth_date: person.identity.birth_date,
            is_temp: person.is_temp,
        }
    }
}
