//! Grouping a classified year into the stacked-bar order.

use std::cmp::Ordering;

use crate::core::party::Party;
use crate::core::results::ClassifiedState;

/// A year's states split by winning party, each group ordered for the
/// electoral-vote bar: independents and democrats strongest-first,
/// republicans closest-race-first, so the competitive seam between the two
/// major parties sits next to the centre marker.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedResults {
    pub independents: Vec<ClassifiedState>,
    pub democrats: Vec<ClassifiedState>,
    pub republicans: Vec<ClassifiedState>,
}

/// Electoral votes won by each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElectoralTotals {
    pub independent: u32,
    pub democrat: u32,
    pub republican: u32,
}

impl ElectoralTotals {
    pub fn overall(&self) -> u32 {
        self.independent + self.democrat + self.republican
    }
}

fn by_descending_margin(a: &ClassifiedState, b: &ClassifiedState) -> Ordering {
    b.margin
        .abs()
        .partial_cmp(&a.margin.abs())
        .unwrap_or(Ordering::Equal)
}

fn by_ascending_margin(a: &ClassifiedState, b: &ClassifiedState) -> Ordering {
    by_descending_margin(b, a)
}

impl GroupedResults {
    pub fn from_classified(states: Vec<ClassifiedState>) -> Self {
        let mut independents = Vec::new();
        let mut democrats = Vec::new();
        let mut republicans = Vec::new();

        for state in states {
            match state.winner {
                Party::Independent => independents.push(state),
                Party::Democrat => democrats.push(state),
                Party::Republican => republicans.push(state),
            }
        }

        independents.sort_by(by_descending_margin);
        democrats.sort_by(by_descending_margin);
        republicans.sort_by(by_ascending_margin);

        GroupedResults {
            independents,
            democrats,
            republicans,
        }
    }

    pub fn electoral_totals(&self) -> ElectoralTotals {
        let sum = |group: &[ClassifiedState]| group.iter().map(|s| s.electoral_votes).sum();
        ElectoralTotals {
            independent: sum(&self.independents),
            democrat: sum(&self.democrats),
            republican: sum(&self.republicans),
        }
    }

    pub fn len(&self) -> usize {
        self.independents.len() + self.democrats.len() + self.republicans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bar order: independents, then democrats, then republicans.
    pub fn into_stacked_order(self) -> Vec<ClassifiedState> {
        let mut states = self.independents;
        states.extend(self.democrats);
        states.extend(self.republicans);
        states
    }
}

/// One party's national showing for the popular-vote bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NationalShare {
    pub party: Party,
    pub nominee: String,
    pub votes: u64,
    /// Share of the three-party national vote, rounded to two decimals. The
    /// rounded value feeds both the label and the bar width.
    pub percentage: f64,
}

/// Sum votes across all states and express each party's national share.
/// Entries come back in the bar order: independent, democrat, republican.
pub fn national_shares(states: &[ClassifiedState]) -> Vec<NationalShare> {
    let sum_votes = |party: Party| -> u64 {
        states
            .iter()
            .map(|s| s.result_for(party).votes)
            .sum()
    };
    let nominee = |party: Party| -> String {
        states
            .first()
            .map(|s| s.result_for(party).nominee.clone())
            .unwrap_or_default()
    };

    let totals = [
        (Party::Independent, sum_votes(Party::Independent)),
        (Party::Democrat, sum_votes(Party::Democrat)),
        (Party::Republican, sum_votes(Party::Republican)),
    ];
    let overall: u64 = totals.iter().map(|(_, v)| v).sum();

    totals
        .iter()
        .map(|&(party, votes)| {
            let raw = if overall == 0 {
                0.0
            } else {
                votes as f64 / overall as f64 * 100.0
            };
            NationalShare {
                party,
                nominee: nominee(party),
                votes,
                percentage: (raw * 100.0).round() / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::results::{classify, StateRow};

    fn state(abbr: &str, ev: &str, d: &str, r: &str, i: &str) -> ClassifiedState {
        classify(&StateRow {
            abbreviation: abbr.into(),
            state: abbr.into(),
            total_ev: ev.into(),
            d_nominee: "Dee".into(),
            d_votes: "0".into(),
            d_percentage: d.into(),
            r_nominee: "Arr".into(),
            r_votes: "0".into(),
            r_percentage: r.into(),
            i_nominee: "Eye".into(),
            i_votes: "0".into(),
            i_percentage: i.into(),
            ..StateRow::default()
        })
    }

    #[test]
    fn groups_partition_the_dataset() {
        let states = vec![
            state("CA", "55", "65", "35", "0"),
            state("TX", "38", "40", "60", "0"),
            state("VT", "3", "30", "25", "45"),
            state("FL", "29", "49", "51", "0"),
        ];
        let total = states.len();
        let grouped = GroupedResults::from_classified(states);
        assert_eq!(
            grouped.independents.len() + grouped.democrats.len() + grouped.republicans.len(),
            total
        );
        assert_eq!(grouped.independents.len(), 1);
        assert_eq!(grouped.democrats.len(), 1);
        assert_eq!(grouped.republicans.len(), 2);
    }

    #[test]
    fn democrats_strongest_first_republicans_closest_first() {
        let states = vec![
            state("A", "10", "52", "48", "0"), // D by 4
            state("B", "10", "70", "30", "0"), // D by 40
            state("C", "10", "45", "55", "0"), // R by 10
            state("D", "10", "20", "80", "0"), // R by 60
        ];
        let grouped = GroupedResults::from_classified(states);
        let dems: Vec<&str> = grouped
            .democrats
            .iter()
            .map(|s| s.abbreviation.as_str())
            .collect();
        let reps: Vec<&str> = grouped
            .republicans
            .iter()
            .map(|s| s.abbreviation.as_str())
            .collect();
        assert_eq!(dems, vec!["B", "A"]);
        assert_eq!(reps, vec!["C", "D"]);
    }

    #[test]
    fn electoral_totals_sum_each_group() {
        let states = vec![
            state("CA", "55", "65", "35", "0"),
            state("TX", "38", "40", "60", "0"),
            state("VT", "3", "30", "25", "45"),
        ];
        let totals = GroupedResults::from_classified(states).electoral_totals();
        assert_eq!(totals.democrat, 55);
        assert_eq!(totals.republican, 38);
        assert_eq!(totals.independent, 3);
        assert_eq!(totals.overall(), 96);
    }

    #[test]
    fn stacked_order_is_independents_democrats_republicans() {
        let states = vec![
            state("TX", "38", "40", "60", "0"),
            state("CA", "55", "65", "35", "0"),
            state("VT", "3", "30", "25", "45"),
        ];
        let order: Vec<String> = GroupedResults::from_classified(states)
            .into_stacked_order()
            .into_iter()
            .map(|s| s.abbreviation)
            .collect();
        assert_eq!(order, vec!["VT", "CA", "TX"]);
    }

    #[test]
    fn national_shares_round_to_two_decimals() {
        let mut a = state("A", "10", "60", "40", "0");
        let mut b = state("B", "10", "40", "60", "0");
        // Overwrite vote counts directly; percentages above only set winners.
        for r in &mut a.results {
            r.votes = match r.party {
                Party::Democrat => 2,
                Party::Republican => 1,
                Party::Independent => 0,
            };
        }
        for r in &mut b.results {
            r.votes = match r.party {
                Party::Democrat => 1,
                Party::Republican => 2,
                Party::Independent => 0,
            };
        }
        let shares = national_shares(&[a, b]);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].party, Party::Independent);
        assert_eq!(shares[0].percentage, 0.0);
        assert_eq!(shares[1].percentage, 50.0);
        assert_eq!(shares[2].percentage, 50.0);
    }

    #[test]
    fn national_shares_of_empty_dataset_are_zero() {
        let shares = national_shares(&[]);
        assert!(shares.iter().all(|s| s.percentage == 0.0 && s.votes == 0));
    }
}
