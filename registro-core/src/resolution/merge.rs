// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identity Merge
//!
//! Field by field merge of an incoming identity into an existing one.
//! Incoming values win whenever they are present; every genuine
//! disagreement is reported so it can be reviewed.

use serde::{Deserialize, Serialize};

use super::compare::{compare, Comparable, FieldComparison};
use crate::identity::Identity;

/// Fields which could not be merged without overwriting a different value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub last_name: bool,
    pub first_name: bool,
    pub sex: bool,
    pub birth_date: bool,
    pub birth_city: bool,
    pub birth_department: bool,
    pub nationality: bool,
    pub phones: bool,
    pub email: bool,
    pub address: bool,
    pub postal_code: bool,
    pub city: bool,
    pub country: bool,
    pub social_security_number: bool,
    pub maiden_name: bool,
    pub profession: bool,
    pub student: bool,
    pub civil_servant: bool,
    pub education_level: bool,
    pub specialization: bool,
}

impl ConflictReport {
    fn flags(&self) -> [(&'static str, bool); 20] {
        [
            ("last_name", self.last_name),
            ("first_name", self.first_name),
            ("sex", self.sex),
            ("birth_date", self.birth_date),
            ("birth_city", self.birth_city),
            ("birth_department", self.birth_department),
            ("nationality", self.nationality),
            ("phones", self.phones),
            ("email", self.email),
            ("address", self.address),
            ("postal_code", self.postal_code),
            ("city", self.city),
            ("country", self.country),
            ("social_security_number", self.social_security_number),
            ("maiden_name", self.maiden_name),
            ("profession", self.profession),
            ("student", self.student),
            ("civil_servant", self.civil_servant),
            ("education_level", self.education_level),
            ("specialization", self.specialization),
        ]
    }

    /// Returns true if at least one field is in conflict.
    pub fn any(&self) -> bool {
        self.flags().iter().any(|(_, conflict)| *conflict)
    }

    /// Returns the number of conflicting fields.
    pub fn count(&self) -> usize {
        self.flags().iter().filter(|(_, conflict)| *conflict).count()
    }

    /// Returns the names of the conflicting fields, in declaration order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.flags()
            .into_iter()
            .filter_map(|(name, conflict)| conflict.then_some(name))
            .collect()
    }
}

/// Picks the merged value of one field and whether it is a conflict.
fn choose<T: Comparable + Clone>(incoming: &T, existing: &T) -> (T, bool) {
    match compare(incoming, existing) {
        FieldComparison::IncomingEmpty => (existing.clone(), false),
        FieldComparison::ExistingEmpty => (incoming.clone(), false),
        // incoming reflects the latest intent, even when equivalent
        FieldComparison::Equal => (incoming.clone(), false),
        FieldComparison::Conflict => (incoming.clone(), true),
    }
}

/// Merges `incoming` into `existing`, returning the merged identity and
/// the fields where both sides held different values.
///
/// Neither input is modified.
pub fn merge(incoming: &Identity, existing: &Identity) -> (Identity, ConflictReport) {
    // Exhaustive destructuring: a new Identity field fails to compile here
    // until it is merged.
    let Identity {
        last_name,
        first_name,
        sex,
        birth_date,
        birth_city,
        birth_department,
        nationality,
        phones,
        email,
        address,
        postal_code,
        city,
        country,
        social_security_number,
        maiden_name,
        profession,
        student,
        civil_servant,
        education_level,
        specialization,
    } = incoming;

    let mut merged = Identity::default();
    let mut conflicts = ConflictReport::default();

    (merged.last_name, conflicts.last_name) = choose(last_name, &existing.last_name);
    (merged.first_name, conflicts.first_name) = choose(first_name, &existing.first_name);
    (merged.sex, conflicts.sex) = choose(sex, &existing.sex);
    (merged.birth_date, conflicts.birth_date) = choose(birth_date, &existing.birth_date);
    (merged.birth_city, conflicts.birth_city) = choose(birth_city, &existing.birth_city);
    (merged.birth_department, conflicts.birth_department) =
        choose(birth_department, &existing.birth_department);
    (merged.nationality, conflicts.nationality) = choose(nationality, &existing.nationality);
    (merged.phones, conflicts.phones) = choose(phones, &existing.phones);
    (merged.email, conflicts.email) = choose(email, &existing.email);
    (merged.address, conflicts.address) = choose(address, &existing.address);
    (merged.postal_code, conflicts.postal_code) = choose(postal_code, &existing.postal_code);
    (merged.city, conflicts.city) = choose(city, &existing.city);
    (merged.country, conflicts.country) = choose(country, &existing.country);
    (merged.social_security_number, conflicts.social_security_number) =
        choose(social_security_number, &existing.social_security_number);
    (merged.maiden_name, conflicts.maiden_name) = choose(maiden_name, &existing.maiden_name);
    (merged.profession, conflicts.profession) = choose(profession, &existing.profession);
    (merged.student, conflicts.student) = choose(student, &existing.student);
    (merged.civil_servant, conflicts.civil_servant) =
        choose(civil_servant, &existing.civil_servant);
    (merged.education_level, conflicts.education_level) =
        choose(education_level, &existing.education_level);
    (merged.specialization, conflicts.specialization) =
        choose(specialization, &existing.specialization);

    (merged, conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{EducationLevel, Phones, Sex, Specialization};
    use chrono::NaiveDate;

    fn today() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 6, 1)
    }

    #[test]
    fn test_merge_whitespace_overwrites_existing() {
        let incoming = Identity {
            last_name: "   ".to_string(),
            ..Default::default()
        };
        let existing = Identity {
            last_name: "Kugler".to_string(),
            ..Default::default()
        };

        let (merged, conflicts) = merge(&incoming, &existing);

        assert_eq!(merged.last_name, "   ");
        assert!(conflicts.last_name);
    }

    #[test]
    fn test_merge_conflicts_and_priority() {
        let incoming = Identity {
            last_name: "NNS".to_string(),
            first_name: "ben".to_string(),
            phones: Phones::from(["0675784512"]),
            sex: Sex::Man,
            birth_date: today(),
            specialization: Specialization::Canoe,
            student: true,
            ..Default::default()
        };
        let existing = Identity {
            last_name: "llmmlsd".to_string(),
            first_name: "BÈn".to_string(),
            phones: Phones::from(["06-75-78-45-12", "0478458956"]),
            sex: Sex::Woman,
            birth_date: today(),
            civil_servant: true,
            ..Default::default()
        };

        let (merged, conflicts) = merge(&incoming, &existing);

        assert!(conflicts.last_name);
        assert_eq!(merged.last_name, "NNS");
        assert!(!conflicts.first_name);
        assert_eq!(merged.first_name, "ben");
        assert!(conflicts.phones);
        assert_eq!(merged.phones, incoming.phones);
        assert!(conflicts.sex);
        assert_eq!(merged.sex, Sex::Man);
        assert!(!conflicts.birth_date);
        assert!(!conflicts.specialization);
        assert_eq!(merged.specialization, Specialization::Canoe);
        assert!(conflicts.student);
        assert!(merged.student);
        assert!(conflicts.civil_servant);
        assert!(!merged.civil_servant);
    }

    #[test]
    fn test_merge_keeps_existing_when_incoming_empty() {
        let existing = Identity {
            email: "ben@example.com".to_string(),
            education_level: EducationLevel::BafaHolder,
            city: "Lyon".to_string(),
            ..Default::default()
        };
        let (merged, conflicts) = merge(&Identity::default(), &existing);
        assert_eq!(merged, existing);
        assert!(!conflicts.any());
    }

    #[test]
    fn test_merge_fills_existing_gaps() {
        let incoming = Identity {
            postal_code: "69001".to_string(),
            ..Default::default()
        };
        let (merged, conflicts) = merge(&incoming, &Identity::default());
        assert_eq!(merged.postal_code, "69001");
        assert_eq!(conflicts, ConflictReport::default());
    }

    #[test]
    fn test_merge_with_itself_has_no_conflict() {
        let identity = Identity {
            last_name: "Kugler".to_string(),
            first_name: "Benoît".to_string(),
            sex: Sex::Man,
            birth_date: today(),
            phones: Phones::from(["0675784512"]),
            student: true,
            ..Default::default()
        };
        let (merged, conflicts) = merge(&identity, &identity);
        assert_eq!(merged, identity);
        assert!(!conflicts.any());
    }

    #[test]
    fn test_report_fields() {
        let report = ConflictReport {
            email: true,
            last_name: true,
            ..Default::default()
        };
        assert!(report.any());
        assert_eq!(report.count(), 2);
        assert_eq!(report.fields(), vec!["last_name", "email"]);
    }
}
