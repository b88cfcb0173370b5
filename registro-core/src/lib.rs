//! Registro Core Library
//!
//! Identity resolution for a registry of person records submitted through
//! uncoordinated entry points: exact matching of incoming identities,
//! ranking of similar profiles and field by field merging.
//! All operations are pure functions over in-memory values.

pub mod identity;
pub mod normalize;
pub mod resolution;

pub use identity::{
    EducationLevel, FieldParseError, Identity, Nationality, Person, PersonHeader, PersonId,
    Phones, Sex, Specialization,
};
pub use normalize::{fold, normalize, simplify};
pub use resolution::{
    compare, filter_people, find_match, matches, merge, rank, resolve, Comparable,
    ConflictReport, ExactPattern, FieldComparison, Query, Ranking, Resolution, ScoredCandidate,
    SearchPattern,
};
