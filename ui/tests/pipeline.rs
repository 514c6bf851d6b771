//! End-to-end checks over the data pipeline: decode a shipped year file,
//! classify, group, lay out, and resolve tiles, asserting the properties the
//! charts depend on.

use ui::core::controller::build_year_view;
use ui::core::data::parse_results_csv;
use ui::core::group::GroupedResults;
use ui::core::layout::{LayoutFrame, LinearScale};
use ui::core::party::Party;
use ui::core::results::classify_all;
use ui::core::tiles;

const YEAR_2016: &str = include_str!("../assets/data/election-results-2016.csv");

const FRAME: LayoutFrame = LayoutFrame {
    margin_left: 50.0,
    max_range: 930.0,
};

#[test]
fn shipped_year_runs_the_whole_pipeline() {
    let rows = parse_results_csv("election-results-2016.csv", YEAR_2016).unwrap();
    assert_eq!(rows.len(), 51);

    let view = build_year_view(2016, &rows, FRAME, FRAME).unwrap();
    assert_eq!(view.states.len(), 51);
    assert_eq!(view.tiles.len(), 51);
    assert_eq!(view.electoral.segments.len(), 51);
    assert_eq!(view.totals.overall(), 538);

    // Segments tile the bar: each starts where the previous ended.
    for pair in view.electoral.segments.windows(2) {
        assert_eq!(pair[1].x, pair[0].x + pair[0].width);
    }

    // Every state is addressable by its abbreviation key.
    let california = view.electoral.segment("CA").unwrap();
    assert!(california.width > 0.0);

    // Widths sum to the scaled total.
    let sum: f64 = view.electoral.segments.iter().map(|s| s.width).sum();
    let expected = LinearScale::new(538.0, FRAME.max_range).apply(538.0);
    assert!((sum - expected).abs() < 1e-9);

    // Popular-vote shares cover the three-party total, up to rounding each
    // of the three shares to two decimals.
    let share_sum: f64 = view.shares.iter().map(|s| s.percentage).sum();
    assert!((share_sum - 100.0).abs() < 0.02);
}

#[test]
fn grouping_partitions_and_orders_each_winner_bucket() {
    let rows = parse_results_csv("election-results-2016.csv", YEAR_2016).unwrap();
    let classified = classify_all(&rows);
    let total = classified.len();
    let grouped = GroupedResults::from_classified(classified);

    assert_eq!(
        grouped.independents.len() + grouped.democrats.len() + grouped.republicans.len(),
        total
    );
    for state in &grouped.independents {
        assert_eq!(state.winner, Party::Independent);
    }
    for state in &grouped.democrats {
        assert_eq!(state.winner, Party::Democrat);
    }
    for pair in grouped.democrats.windows(2) {
        assert!(pair[0].margin.abs() >= pair[1].margin.abs());
    }
    for pair in grouped.republicans.windows(2) {
        assert!(pair[0].margin.abs() <= pair[1].margin.abs());
    }
}

#[test]
fn rerunning_the_pipeline_is_bit_identical() {
    let rows = parse_results_csv("election-results-2016.csv", YEAR_2016).unwrap();
    let a = build_year_view(2016, &rows, FRAME, FRAME).unwrap();
    let b = build_year_view(2016, &rows, FRAME, FRAME).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_shipped_abbreviation_has_a_tile() {
    let rows = parse_results_csv("election-results-2016.csv", YEAR_2016).unwrap();
    for row in &rows {
        tiles::resolve(&row.abbreviation).unwrap();
    }
}

#[test]
fn three_state_scenario() {
    let csv = "\
Abbreviation,State,Total_EV,Space,Row,D_Nominee,D_Votes,D_Percentage,R_Nominee,R_Votes,R_Percentage,I_Nominee,I_Votes,I_Percentage
CA,California,55,1,4,Dee,650,65,Arr,350,35,,,
TX,Texas,38,4,7,Dee,400,40,Arr,600,60,,,
FL,Florida,29,9,7,,,,,,,Eye,1,0.1
";
    let rows = parse_results_csv("scenario.csv", csv).unwrap();
    let view = build_year_view(2000, &rows, FRAME, FRAME).unwrap();

    // FL: a sliver of an independent share against blank D/R columns makes
    // the independent the winner, while the D/R-relative margin stays 0.
    // CA is democrat by a -30 margin, TX republican by +20, so the stacked
    // order is independents, democrats, republicans.
    let order: Vec<(&str, Party, f64)> = view
        .states
        .iter()
        .map(|s| (s.abbreviation.as_str(), s.winner, s.margin))
        .collect();
    assert_eq!(
        order,
        vec![
            ("FL", Party::Independent, 0.0),
            ("CA", Party::Democrat, -30.0),
            ("TX", Party::Republican, 20.0),
        ]
    );

    let sum: f64 = view.electoral.segments.iter().map(|s| s.width).sum();
    let expected = LinearScale::new(122.0, FRAME.max_range).apply(122.0);
    assert!((sum - expected).abs() < 1e-9);
}
