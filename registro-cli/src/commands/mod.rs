//! CLI Commands

pub mod reconcile;
pub mod search;
