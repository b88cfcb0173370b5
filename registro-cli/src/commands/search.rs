//! Search Commands
//!
//! Similar profile suggestions and quick text filtering over the pool.

use anyhow::Result;
use registro_core::{filter_people, rank, Ranking, SearchPattern};
use serde_json::{json, Value};

use crate::config::CliConfig;
use crate::display;

/// Ranks the known profiles against `pattern`.
pub fn similar(config: &CliConfig, pattern: &SearchPattern, percent: bool) -> Result<()> {
    let people = config.load_people()?;
    let ranking = rank(&people, pattern);

    if config.json {
        if percent {
            return display::json(&with_percents(&ranking));
        }
        return display::json(&ranking);
    }

    if ranking.max_score == 0 {
        display::warning("Empty pattern: give at least one of the search fields");
        return Ok(());
    }
    if ranking.is_empty() {
        display::info("No similar profile");
        return Ok(());
    }

    println!();
    println!("Similar profiles ({}):", ranking.candidates.len());
    println!();
    display::ranking_table(&ranking, percent);
    println!();

    Ok(())
}

/// Ranking JSON with each candidate's percentage of the maximum score.
fn with_percents(ranking: &Ranking) -> Value {
    let candidates: Vec<Value> = ranking
        .candidates
        .iter()
        .map(|c| {
            json!({
                "score": c.score,
                "percent": c.percent_of(ranking.max_score),
                "person": c.person,
            })
        })
        .collect();
    json!({ "max_score": ranking.max_score, "candidates": candidates })
}

/// Lists the profiles whose name matches every word of `pattern`.
pub fn filter(config: &CliConfig, pattern: &str) -> Result<()> {
    let people = config.load_people()?;
    let headers = filter_people(&people, pattern);

    if config.json {
        return display::json(&headers);
    }

    if headers.is_empty() {
        display::info(&format!("No profile matching '{}'", pattern));
        return Ok(());
    }

    println!();
    println!("Profiles ({}):", headers.len());
    println!();
    display::headers_table(&headers);
    println!();

    Ok(())
}
