// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Enumerated Identity Fields
//!
//! Every enumeration has an `Unspecified` variant, its default, which stands
//! for "unknown" and is treated as an empty value by comparison and merging.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::normalize;

/// Error returned when parsing an enumerated field from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("Unknown {field} value: {value:?}")]
    UnknownValue { field: &'static str, value: String },
}

/// Closed set of textual codes for an enumeration.
trait Coded: Sized + Copy + 'static {
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;
}

/// Parses `value` against the codes of `T`, ignoring case and punctuation.
/// An empty value parses as the `Unspecified` variant (first of `ALL`).
fn parse_coded<T: Coded>(value: &str) -> Result<T, FieldParseError> {
    let wanted = normalize(value);
    T::ALL
        .iter()
        .copied()
        .find(|v| normalize(v.code()) == wanted)
        .ok_or_else(|| FieldParseError::UnknownValue {
            field: T::FIELD,
            value: value.to_string(),
        })
}

/// Sex of a person.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Unspecified,
    Woman,
    Man,
}

impl Sex {
    /// Returns true for [`Sex::Unspecified`].
    pub fn is_unspecified(&self) -> bool {
        *self == Sex::Unspecified
    }
}

impl Coded for Sex {
    const FIELD: &'static str = "sex";
    const ALL: &'static [Self] = &[Sex::Unspecified, Sex::Woman, Sex::Man];

    fn code(&self) -> &'static str {
        match self {
            Sex::Unspecified => "",
            Sex::Woman => "woman",
            Sex::Man => "man",
        }
    }
}

impl FromStr for Sex {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "f" | "w" => Ok(Sex::Woman),
            "m" => Ok(Sex::Man),
            _ => parse_coded(s),
        }
    }
}

/// Nationality, which may differ from the country of residence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nationality {
    #[default]
    Unspecified,
    French,
    Swiss,
}

impl Nationality {
    pub fn is_unspecified(&self) -> bool {
        *self == Nationality::Unspecified
    }
}

impl Coded for Nationality {
    const FIELD: &'static str = "nationality";
    const ALL: &'static [Self] = &[
        Nationality::Unspecified,
        Nationality::French,
        Nationality::Swiss,
    ];

    fn code(&self) -> &'static str {
        match self {
            Nationality::Unspecified => "",
            Nationality::French => "french",
            Nationality::Swiss => "swiss",
        }
    }
}

impl FromStr for Nationality {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coded(s)
    }
}

/// Highest qualification declared by a staff member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// No qualification declared.
    #[default]
    Unspecified,
    BafaHolder,
    BafaTrainee,
    BafdHolder,
    BafdTrainee,
    EarlyChildhoodCap,
    SocialWorker,
    SpecialisedEducator,
    EducatorMonitor,
    SchoolTeacher,
    SecondaryTeacher,
    Agrege,
    Bpjeps,
    DutSocialCareers,
    Eje,
    Deug,
    Staps,
    Bapaat,
    Beatep,
    Other,
}

impl EducationLevel {
    pub fn is_unspecified(&self) -> bool {
        *self == EducationLevel::Unspecified
    }
}

impl Coded for EducationLevel {
    const FIELD: &'static str = "education level";
    const ALL: &'static [Self] = &[
        EducationLevel::Unspecified,
        EducationLevel::BafaHolder,
        EducationLevel::BafaTrainee,
        EducationLevel::BafdHolder,
        EducationLevel::BafdTrainee,
        EducationLevel::EarlyChildhoodCap,
        EducationLevel::SocialWorker,
        EducationLevel::SpecialisedEducator,
        EducationLevel::EducatorMonitor,
        EducationLevel::SchoolTeacher,
        EducationLevel::SecondaryTeacher,
        EducationLevel::Agrege,
        EducationLevel::Bpjeps,
        EducationLevel::DutSocialCareers,
        EducationLevel::Eje,
        EducationLevel::Deug,
        EducationLevel::Staps,
        EducationLevel::Bapaat,
        EducationLevel::Beatep,
        EducationLevel::Other,
    ];

    fn code(&self) -> &'static str {
        match self {
            EducationLevel::Unspecified => "",
            EducationLevel::BafaHolder => "bafa_holder",
            EducationLevel::BafaTrainee => "bafa_trainee",
            EducationLevel::BafdHolder => "bafd_holder",
            EducationLevel::BafdTrainee => "bafd_trainee",
            EducationLevel::EarlyChildhoodCap => "early_childhood_cap",
            EducationLevel::SocialWorker => "social_worker",
            EducationLevel::SpecialisedEducator => "specialised_educator",
            EducationLevel::EducatorMonitor => "educator_monitor",
            EducationLevel::SchoolTeacher => "school_teacher",
            EducationLevel::SecondaryTeacher => "secondary_teacher",
            EducationLevel::Agrege => "agrege",
            EducationLevel::Bpjeps => "bpjeps",
            EducationLevel::DutSocialCareers => "dut_social_careers",
            EducationLevel::Eje => "eje",
            EducationLevel::Deug => "deug",
            EducationLevel::Staps => "staps",
            EducationLevel::Bapaat => "bapaat",
            EducationLevel::Beatep => "beatep",
            EducationLevel::Other => "other",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coded(s)
    }
}

/// Additional specialization training of a staff member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    /// Not completed.
    #[default]
    Unspecified,
    Other,
    Lifeguard,
    Canoe,
    Sailing,
    Motorcycling,
}

impl Specialization {
    pub fn is_unspecified(&self) -> bool {
        *self == Specialization::Unspecified
    }
}

impl Coded for Specialization {
    const FIELD: &'static str = "specialization";
    const ALL: &'static [Self] = &[
        Specialization::Unspecified,
        Specialization::Other,
        Specialization::Lifeguard,
        Specialization::Canoe,
        Specialization::Sailing,
        Specialization::Motorcycling,
    ];

    fn code(&self) -> &'static str {
        match self {
            Specialization::Unspecified => "",
            Specialization::Other => "other",
            Specialization::Lifeguard => "lifeguard",
            Specialization::Canoe => "canoe",
            Specialization::Sailing => "sailing",
            Specialization::Motorcycling => "motorcycling",
        }
    }
}

impl FromStr for Specialization {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coded(s)
    }
}

// Displayed as their code, `Unspecified` as an empty string.
macro_rules! display_coded {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.code())
                }
            }
        )+
    };
}

display_coded!(Sex, Nationality, EducationLevel, Specialization);
