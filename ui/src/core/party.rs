//! The three parties tracked by the per-state result files.

use serde::{Deserialize, Serialize};

/// Closed set of parties appearing in the data. Keeping this an enum (rather
/// than the raw `"D"`/`"R"`/`"I"` column tags) lets match arms stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Democrat,
    Republican,
    Independent,
}

impl Party {
    /// Ballot-column order. Classification builds its candidate tuples in this
    /// order, so percentage ties resolve to the earlier party.
    pub const BALLOT_ORDER: [Party; 3] = [Party::Democrat, Party::Republican, Party::Independent];

    /// The single-letter tag used by the data files.
    pub fn tag(self) -> &'static str {
        match self {
            Party::Democrat => "D",
            Party::Republican => "R",
            Party::Independent => "I",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Party> {
        match tag.trim() {
            "D" => Some(Party::Democrat),
            "R" => Some(Party::Republican),
            "I" => Some(Party::Independent),
            _ => None,
        }
    }

    /// CSS hook shared by every chart so party colouring stays consistent.
    pub fn css_class(self) -> &'static str {
        match self {
            Party::Democrat => "democrat",
            Party::Republican => "republican",
            Party::Independent => "independent",
        }
    }

}
