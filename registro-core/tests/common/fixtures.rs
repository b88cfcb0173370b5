// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures
//!
//! A small pool of stored profiles, in the JSON shape produced by the
//! persistence layer.

#![allow(dead_code)]

use chrono::NaiveDate;
use registro_core::Person;

/// Id of the only verified Kugler profile in [`sample_people`].
pub const KUGLER_ID: i64 = 1;
/// Id of the unrelated profile in [`sample_people`].
pub const MARTIN_ID: i64 = 3;
/// Id of the temporary profile in [`sample_people`].
pub const TEMP_ID: i64 = 5;

const SAMPLES: &str = r#"[
    {
        "id": 1,
        "last_name": "Kugler",
        "first_name": "Benoît",
        "sex": "man",
        "birth_date": "1994-04-02",
        "email": "benoit.kugler@example.com",
        "phones": ["06 75 78 45 12"],
        "city": "Lyon"
    },
    {
        "id": 2,
        "last_name": "Jonac",
        "first_name": "Tom",
        "sex": "woman",
        "birth_date": "2021-05-06"
    },
    {
        "id": 3,
        "last_name": "Martin",
        "first_name": "Paul",
        "sex": "man",
        "birth_date": "1980-01-15",
        "email": "paul.martin@example.org"
    },
    {
        "id": 4,
        "last_name": "Dupont",
        "first_name": "Claire",
        "sex": "woman",
        "postal_code": "69001"
    },
    {
        "id": 5,
        "last_name": "Kugler",
        "first_name": "Dédé",
        "sex": "man",
        "birth_date": "1994-04-02",
        "is_temp": true
    }
]"#;

/// Returns the sample pool.
pub fn sample_people() -> Vec<Person> {
    serde_json::from_str(SAMPLES).expect("Sample profiles should parse")
}

pub fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
