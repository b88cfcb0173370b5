//! Terminal Output Helpers

use anyhow::Result;
use console::style;
use registro_core::{ConflictReport, Identity, PersonHeader, Ranking};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", style("→").cyan(), msg);
}

pub fn warning(msg: &str) {
    println!("{} {}", style("!").yellow().bold(), msg);
}

/// Prints any value as pretty JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn date_cell(header: &PersonHeader) -> String {
    header
        .birth_date
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

#[derive(Tabled)]
struct HeaderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    label: String,
    #[tabled(rename = "Sex")]
    sex: String,
    #[tabled(rename = "Born")]
    born: String,
    #[tabled(rename = "Temp")]
    temp: String,
}

impl From<&PersonHeader> for HeaderRow {
    fn from(header: &PersonHeader) -> Self {
        HeaderRow {
            id: header.id.to_string(),
            label: header.label.clone(),
            sex: header.sex.to_string(),
            born: date_cell(header),
            temp: if header.is_temp { "yes" } else { "" }.to_string(),
        }
    }
}

/// Prints profile headers as a table.
pub fn headers_table(headers: &[PersonHeader]) {
    let rows: Vec<HeaderRow> = headers.iter().map(HeaderRow::from).collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
}

#[derive(Tabled)]
struct ScoredRow {
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    label: String,
    #[tabled(rename = "Sex")]
    sex: String,
    #[tabled(rename = "Born")]
    born: String,
}

/// Prints a ranking, with raw scores or percentages of the maximum.
pub fn ranking_table(ranking: &Ranking, percent: bool) {
    let rows: Vec<ScoredRow> = ranking
        .candidates
        .iter()
        .map(|c| ScoredRow {
            score: if percent {
                format!("{}%", c.percent_of(ranking.max_score))
            } else {
                format!("{}/{}", c.score, ranking.max_score)
            },
            id: c.person.id.to_string(),
            label: c.person.label.clone(),
            sex: c.person.sex.to_string(),
            born: date_cell(&c.person),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

/// Prints the non empty fields of an identity. Flags are always shown.
pub fn identity_table(identity: &Identity) {
    let fields = [
        ("last_name", identity.formatted_last_name()),
        ("first_name", identity.formatted_first_name()),
        ("sex", identity.sex.to_string()),
        (
            "birth_date",
            identity
                .birth_date
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default(),
        ),
        ("birth_city", identity.birth_city.clone()),
        ("birth_department", identity.birth_department.clone()),
        ("nationality", identity.nationality.to_string()),
        ("phones", identity.phones.to_string()),
        ("email", identity.email.clone()),
        ("address", identity.address.clone()),
        ("postal_code", identity.postal_code.clone()),
        ("city", identity.city.clone()),
        ("country", identity.country.clone()),
        (
            "social_security_number",
            identity.social_security_number.clone(),
        ),
        ("maiden_name", identity.maiden_name.clone()),
        ("profession", identity.profession.clone()),
        ("student", yes_no(identity.student)),
        ("civil_servant", yes_no(identity.civil_servant)),
        ("education_level", identity.education_level.to_string()),
        ("specialization", identity.specialization.to_string()),
    ];
    let rows: Vec<FieldRow> = fields
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(field, value)| FieldRow { field, value })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
}

/// Prints the conflicting fields, if any.
pub fn conflicts(report: &ConflictReport) {
    if report.any() {
        warning(&format!(
            "{} conflicting field(s): {}",
            report.count(),
            report.fields().join(", ")
        ));
    } else {
        success("No conflicting field");
    }
}
