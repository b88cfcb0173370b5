// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Comparison
//!
//! Classifies a pair of values (incoming, existing) of the same identity
//! field. The set of comparable types is closed: [`Comparable`] is sealed and
//! implemented for text, dates, enumerations, phone sets and booleans only,
//! so a new kind of identity field must be given a comparison rule here
//! before it can be merged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::{EducationLevel, Nationality, Phones, Sex, Specialization};
use crate::normalize::normalize;

/// Outcome of comparing an incoming value against an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldComparison {
    /// The incoming value is empty.
    IncomingEmpty,
    /// The existing value is empty, the incoming one is not.
    ExistingEmpty,
    /// Both values are present and equivalent.
    Equal,
    /// Both values are present and different.
    Conflict,
}

mod sealed {
    pub trait Sealed {}
}

/// A value type with a comparison rule for merging.
pub trait Comparable: sealed::Sealed {
    fn compare(incoming: &Self, existing: &Self) -> FieldComparison;
}

/// Compares two values of the same field.
pub fn compare<T: Comparable>(incoming: &T, existing: &T) -> FieldComparison {
    T::compare(incoming, existing)
}

/// Shared emptiness rule: incoming emptiness takes precedence.
fn classify(
    incoming_empty: bool,
    existing_empty: bool,
    equal: impl FnOnce() -> bool,
) -> FieldComparison {
    if incoming_empty {
        FieldComparison::IncomingEmpty
    } else if existing_empty {
        FieldComparison::ExistingEmpty
    } else if equal() {
        FieldComparison::Equal
    } else {
        FieldComparison::Conflict
    }
}

impl sealed::Sealed for String {}

/// Text: equal when identical after strict normalization. Only the empty
/// string is empty: whitespace-only text is a value.
impl Comparable for String {
    fn compare(incoming: &Self, existing: &Self) -> FieldComparison {
        classify(incoming.is_empty(), existing.is_empty(), || {
            normalize(incoming) == normalize(existing)
        })
    }
}

impl sealed::Sealed for Option<NaiveDate> {}

/// Date: calendar equality, `None` is empty.
impl Comparable for Option<NaiveDate> {
    fn compare(incoming: &Self, existing: &Self) -> FieldComparison {
        classify(incoming.is_none(), existing.is_none(), || incoming == existing)
    }
}

impl sealed::Sealed for Phones {}

/// Phone numbers: equal when both sets of stripped numbers are identical.
/// Any number present on one side only is a conflict.
impl Comparable for Phones {
    fn compare(incoming: &Self, existing: &Self) -> FieldComparison {
        classify(incoming.is_empty(), existing.is_empty(), || {
            incoming.stripped() == existing.stripped()
        })
    }
}

impl sealed::Sealed for bool {}

/// Flags are never empty.
impl Comparable for bool {
    fn compare(incoming: &Self, existing: &Self) -> FieldComparison {
        classify(false, false, || incoming == existing)
    }
}

// Enumerations: the unspecified variant is empty on either side.
macro_rules! comparable_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Comparable for $ty {
                fn compare(incoming: &Self, existing: &Self) -> FieldComparison {
                    classify(incoming.is_unspecified(), existing.is_unspecified(), || {
                        incoming == existing
                    })
                }
            }
        )+
    };
}

comparable_enum!(Sex, Nationality, EducationLevel, Specialization);
