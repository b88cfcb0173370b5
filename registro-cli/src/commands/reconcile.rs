//! Reconciliation Commands
//!
//! Exact matching, merging and attach-or-create decisions for incoming
//! identity records.

use std::path::Path;

use anyhow::Result;
use registro_core::{find_match, merge, resolve, Resolution, SearchPattern};
use serde_json::json;

use crate::config::{load_identity, CliConfig};
use crate::display;

/// Looks for a known profile identical to the identity in `incoming`.
pub fn exact(config: &CliConfig, incoming: &Path) -> Result<()> {
    let identity = load_identity(incoming)?;
    let people = config.load_people()?;
    let found = find_match(&people, &SearchPattern::from(&identity));

    if config.json {
        return display::json(&found.map(|p| p.header()));
    }

    match found {
        Some(person) => {
            display::success(&format!("Matches profile {}", person.id));
            display::headers_table(&[person.header()]);
        }
        None => display::info("No matching profile: a new one should be created"),
    }

    Ok(())
}

/// Merges the `incoming` identity file into the `existing` one.
pub fn merge_files(config: &CliConfig, incoming: &Path, existing: &Path) -> Result<()> {
    let incoming = load_identity(incoming)?;
    let existing = load_identity(existing)?;
    let (merged, conflicts) = merge(&incoming, &existing);

    if config.json {
        return display::json(&json!({ "merged": merged, "conflicts": conflicts }));
    }

    println!();
    display::identity_table(&merged);
    display::conflicts(&conflicts);
    println!();

    Ok(())
}

/// Decides whether `incoming` is attached to a known profile or created.
pub fn resolve_file(config: &CliConfig, incoming: &Path) -> Result<()> {
    let identity = load_identity(incoming)?;
    let people = config.load_people()?;
    let resolution = resolve(&identity, &people);

    if config.json {
        return display::json(&resolution);
    }

    match &resolution {
        Resolution::Attach {
            id,
            merged,
            conflicts,
        } => {
            display::success(&format!("Attach to profile {}", id));
            println!();
            display::identity_table(merged);
            display::conflicts(conflicts);
        }
        Resolution::Create => display::info("Unknown identity: create a new profile"),
    }

    Ok(())
}
