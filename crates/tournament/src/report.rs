//! Text and JSON reports for standings and pairings

use serde::Serialize;
use swiss_core::{Pairing, StandingRecord};

use crate::service::RoundPlan;

/// Report for one tournament snapshot
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport<'a> {
    /// Name/description of the tournament
    pub name: &'a str,
    #[serde(flatten)]
    pub plan: &'a RoundPlan,
}

impl<'a> RoundReport<'a> {
    pub fn new(name: &'a str, plan: &'a RoundPlan) -> Self {
        Self { name, plan }
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&standings_table(&self.plan.standings));
        report.push('\n');
        report.push_str(&pairings_table(&self.plan.pairings, &self.plan.unpaired));
        report
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn standings_table(standings: &[StandingRecord]) -> String {
    let mut table = String::new();
    table.push_str("Standings:\n");
    table.push_str(&format!(
        "{:>4} {:>6} {:<24} {:>5} {:>5} {:>7}\n",
        "#", "ID", "Name", "W", "L", "Played"
    ));
    table.push_str(&"-".repeat(56));
    table.push('\n');

    for (place, record) in standings.iter().enumerate() {
        table.push_str(&format!(
            "{:>4} {:>6} {:<24} {:>5} {:>5} {:>7}\n",
            place + 1,
            record.id,
            record.name,
            record.wins,
            record.losses(),
            record.matches_played
        ));
    }

    table
}

pub fn pairings_table(pairings: &[Pairing], unpaired: &[StandingRecord]) -> String {
    let mut table = String::new();
    table.push_str("Next round:\n");
    table.push_str(&"-".repeat(56));
    table.push('\n');

    for (board, p) in pairings.iter().enumerate() {
        table.push_str(&format!(
            "{:>4}. {:>4} {:<18} vs {:>4} {:<18}\n",
            board + 1,
            p.id1,
            p.name1,
            p.id2,
            p.name2
        ));
    }

    for record in unpaired {
        table.push_str(&format!(
            "      {:>4} {:<18} (no opponent)\n",
            record.id, record.name
        ));
    }

    table
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
