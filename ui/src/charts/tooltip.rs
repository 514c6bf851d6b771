//! Structured tooltip payloads and their cards.
//!
//! Charts hand these a typed payload instead of assembling markup strings;
//! the cards do the rendering.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::group::NationalShare;
use crate::core::party::Party;
use crate::core::results::ClassifiedState;

/// Tooltip payload for one state: who carried it, its electoral votes, and
/// all three showings in ballot order (D, R, I).
#[derive(Debug, Clone, PartialEq)]
pub struct StateTooltip {
    pub state: String,
    pub winner: Party,
    pub electoral_votes: u32,
    pub results: Vec<TooltipRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub party: Party,
    pub nominee: String,
    pub votes: u64,
    pub percentage: f64,
}

impl StateTooltip {
    pub fn for_state(state: &ClassifiedState) -> Self {
        let results = Party::BALLOT_ORDER
            .iter()
            .map(|&party| {
                let result = state.result_for(party);
                TooltipRow {
                    party,
                    nominee: result.nominee.clone(),
                    votes: result.votes,
                    percentage: result.percentage,
                }
            })
            .filter(|row| !row.nominee.is_empty())
            .collect();

        StateTooltip {
            state: state.state.clone(),
            winner: state.winner,
            electoral_votes: state.electoral_votes,
            results,
        }
    }
}

#[component]
pub fn StateTooltipCard(tooltip: StateTooltip) -> Element {
    rsx! {
        div { class: "chart-tooltip__card",
            h2 { class: "{tooltip.winner.css_class()}", "{tooltip.state}" }
            p { class: "chart-tooltip__meta", "Electoral Votes: {tooltip.electoral_votes}" }
            ul { class: "chart-tooltip__results",
                for row in tooltip.results.iter() {
                    li { key: "{row.party.tag()}", class: "{row.party.css_class()}",
                        "{row.nominee}: {format::format_votes(row.votes)} ({format::format_percent(row.percentage)})"
                    }
                }
            }
        }
    }
}

/// Tooltip card for the popular-vote bar: the national three-party totals,
/// shown in ballot order.
#[component]
pub fn NationalTooltipCard(shares: Vec<NationalShare>) -> Element {
    let mut ordered: Vec<&NationalShare> = Vec::new();
    for party in Party::BALLOT_ORDER {
        if let Some(share) = shares.iter().find(|s| s.party == party) {
            if !share.nominee.is_empty() {
                ordered.push(share);
            }
        }
    }

    rsx! {
        div { class: "chart-tooltip__card",
            ul { class: "chart-tooltip__results",
                for share in ordered {
                    li { key: "{share.party.tag()}", class: "{share.party.css_class()}",
                        "{share.nominee}: {format::format_votes(share.votes)} ({format::format_percent(share.percentage)})"
                    }
                }
            }
        }
    }
}
