// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display Formatting for Names and Phone Numbers

/// Default separator between digit pairs of a formatted phone number.
pub const PHONE_SEPARATOR: &str = " ";

/// Returns the phone number with every non digit character removed.
pub fn strip_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a phone number as a prefix followed by four digit pairs,
/// e.g. `"06 75 78 45 12"`. Numbers shorter than 8 digits are returned
/// stripped but otherwise untouched.
pub fn format_phone(phone: &str, separator: &str) -> String {
    let digits = strip_phone(phone);
    if digits.len() < 8 {
        return digits;
    }
    // ASCII digits only, byte slicing is safe
    let start = digits.len() - 8;
    let mut chunks = Vec::with_capacity(5);
    if start > 0 {
        chunks.push(&digits[..start]);
    }
    for i in 0..4 {
        chunks.push(&digits[start + 2 * i..start + 2 * i + 2]);
    }
    chunks.join(separator)
}

fn upper_first(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes each part of a first name, joining parts with `-`.
///
/// `"jean pierre"` and `"JEAN.pierre"` both give `"Jean-Pierre"`.
pub fn format_first_name(first_name: &str) -> String {
    first_name
        .split([' ', '-', '.'])
        .filter(|part| !part.is_empty())
        .map(upper_first)
        .collect::<Vec<_>>()
        .join("-")
}

/// Upper-cases a last name.
pub fn format_last_name(last_name: &str) -> String {
    last_name.trim().to_uppercase()
}
