// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.
//! Import these in property test files to avoid duplication.

#![allow(dead_code)]

use chrono::NaiveDate;
use proptest::prelude::*;
use registro_core::{Identity, Person, Phones, SearchPattern, Sex};

// ============================================================
// String Strategies
// ============================================================

/// Strategy for generating latin names with accents, case and separators.
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-ZàâäéèêëîïôöùûüçÀÉÈÎÔÇ' -]{0,20}"
}

/// Strategy for generating short name fragments, used as search patterns.
pub fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z]{1,4}"]
}

/// Strategy for generating email addresses, sometimes empty.
pub fn email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        ("[a-z]{3,10}", "[a-z]{2,8}", "[a-z]{2,4}")
            .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld)),
    ]
}

/// Strategy for generating phone numbers with random separators.
pub fn phone_strategy() -> impl Strategy<Value = String> {
    ("[0-9]{10}", prop_oneof![Just(""), Just(" "), Just("-"), Just(".")]).prop_map(
        |(digits, sep)| {
            digits
                .as_bytes()
                .chunks(2)
                .map(|pair| String::from_utf8_lossy(pair).into_owned())
                .collect::<Vec<_>>()
                .join(sep)
        },
    )
}

// ============================================================
// Field Strategies
// ============================================================

pub fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Unspecified), Just(Sex::Woman), Just(Sex::Man)]
}

/// Strategy for optional birth dates, drawn from a narrow range so that
/// collisions happen.
pub fn birth_date_strategy() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((1990i32..1993, 1u32..3, 1u32..4))
        .prop_map(|d| d.and_then(|(y, m, day)| NaiveDate::from_ymd_opt(y, m, day)))
}

pub fn phones_strategy() -> impl Strategy<Value = Phones> {
    prop::collection::vec(phone_strategy(), 0..3).prop_map(Phones)
}

// ============================================================
// Composite Strategies
// ============================================================

prop_compose! {
    /// Strategy for identities filling the compared and a few merged fields.
    pub fn identity_strategy()(
        last_name in name_strategy(),
        first_name in name_strategy(),
        sex in sex_strategy(),
        birth_date in birth_date_strategy(),
        email in email_strategy(),
        phones in phones_strategy(),
        city in name_strategy(),
        student in any::<bool>(),
    ) -> Identity {
        Identity {
            last_name,
            first_name,
            sex,
            birth_date,
            email,
            phones,
            city,
            student,
            ..Default::default()
        }
    }
}

prop_compose! {
    /// Strategy for stored people, about one in five being temporary.
    pub fn person_strategy()(
        id in 1i64..10_000,
        identity in identity_strategy(),
        is_temp in prop::bool::weighted(0.2),
    ) -> Person {
        Person { id: registro_core::PersonId(id), identity, is_temp }
    }
}

prop_compose! {
    /// Strategy for search patterns built from short fragments.
    pub fn pattern_strategy()(
        last_name in fragment_strategy(),
        first_name in fragment_strategy(),
        sex in sex_strategy(),
        birth_date in birth_date_strategy(),
        email in fragment_strategy(),
    ) -> SearchPattern {
        SearchPattern { last_name, first_name, sex, birth_date, email }
    }
}

/// Strategy for candidate pools.
pub fn pool_strategy(max: usize) -> impl Strategy<Value = Vec<Person>> {
    prop::collection::vec(person_strategy(), 0..max)
}
