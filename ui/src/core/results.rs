//! Raw result rows and per-state winner classification.

use serde::Deserialize;

use crate::core::party::Party;

/// One state's row exactly as it appears in an `election-results-<year>.csv`
/// file. Every numeric column stays textual here; the files are hand-curated
/// and occasionally carry blanks or stray characters, so parsing is deferred
/// to [`classify`], which defaults anything unreadable to zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StateRow {
    #[serde(rename = "Abbreviation")]
    pub abbreviation: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Total_EV")]
    pub total_ev: String,
    /// Legacy grid column carried by the files; the cartogram uses
    /// [`crate::core::tiles`] instead.
    #[serde(rename = "Space", default)]
    pub space: String,
    /// Legacy grid row, same story as `space`.
    #[serde(rename = "Row", default)]
    pub row: String,
    #[serde(rename = "D_Nominee")]
    pub d_nominee: String,
    #[serde(rename = "D_Votes")]
    pub d_votes: String,
    #[serde(rename = "D_Percentage")]
    pub d_percentage: String,
    #[serde(rename = "R_Nominee")]
    pub r_nominee: String,
    #[serde(rename = "R_Votes")]
    pub r_votes: String,
    #[serde(rename = "R_Percentage")]
    pub r_percentage: String,
    #[serde(rename = "I_Nominee", default)]
    pub i_nominee: String,
    #[serde(rename = "I_Votes", default)]
    pub i_votes: String,
    #[serde(rename = "I_Percentage", default)]
    pub i_percentage: String,
}

/// One party's showing in one state, after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyResult {
    pub party: Party,
    pub nominee: String,
    pub percentage: f64,
    pub votes: u64,
}

/// A state row annotated with the derived fields every chart consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedState {
    pub abbreviation: String,
    pub state: String,
    pub electoral_votes: u32,
    /// Party with the strictest plurality of the three parsed percentages.
    pub winner: Party,
    /// Republican percentage minus democrat percentage, signed. This is the
    /// margin the colour scale and group orderings run on, and it stays
    /// D/R-relative even in states an independent carries.
    pub margin: f64,
    /// All three showings, descending by vote share. The sort is stable over
    /// [`Party::BALLOT_ORDER`], so equal shares keep D before R before I.
    pub results: Vec<PartyResult>,
}

impl ClassifiedState {
    /// Look up one party's showing regardless of its rank.
    pub fn result_for(&self, party: Party) -> &PartyResult {
        self.results
            .iter()
            .find(|r| r.party == party)
            .expect("all three parties are always present")
    }
}

/// Lenient float parse: blank or malformed cells count as zero.
pub fn parse_share(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Lenient vote-count parse with the same zero default.
pub fn parse_votes(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

pub fn parse_electoral_votes(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Tag a raw row with its winner, margin, and ordered results.
pub fn classify(row: &StateRow) -> ClassifiedState {
    let mut results = vec![
        PartyResult {
            party: Party::Democrat,
            nominee: row.d_nominee.trim().to_string(),
            percentage: parse_share(&row.d_percentage),
            votes: parse_votes(&row.d_votes),
        },
        PartyResult {
            party: Party::Republican,
            nominee: row.r_nominee.trim().to_string(),
            percentage: parse_share(&row.r_percentage),
            votes: parse_votes(&row.r_votes),
        },
        PartyResult {
            party: Party::Independent,
            nominee: row.i_nominee.trim().to_string(),
            percentage: parse_share(&row.i_percentage),
            votes: parse_votes(&row.i_votes),
        },
    ];

    let margin = parse_share(&row.r_percentage) - parse_share(&row.d_percentage);

    // Stable sort: ties keep the ballot order above.
    results.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ClassifiedState {
        abbreviation: row.abbreviation.trim().to_string(),
        state: row.state.trim().to_string(),
        electoral_votes: parse_electoral_votes(&row.total_ev),
        winner: results[0].party,
        margin,
        results,
    }
}

/// Classify a whole year's rows in file order.
pub fn classify_all(rows: &[StateRow]) -> Vec<ClassifiedState> {
    rows.iter().map(classify).collect()
}
