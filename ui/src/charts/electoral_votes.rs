//! Stacked electoral-vote bar.

use dioxus::prelude::*;

use crate::charts::ELECTORAL_BAR;
use crate::core::color::MarginColorScale;
use crate::core::controller::YearView;

const SVG_HEIGHT: f64 = 150.0;

/// One contiguous segment per state, independents on the left, democrats by
/// strength, republicans closest-race-first, with the 270-vote line at the
/// midpoint marker.
#[component]
pub fn ElectoralVoteBar(view: YearView, scale: MarginColorScale) -> Element {
    let geo = ELECTORAL_BAR;
    let label_y = geo.bar_y - 10.0;
    let note_y = geo.bar_y - 20.0;

    // A group with no electoral votes renders no total.
    let total_labels: Vec<(f64, u32, &str)> = [
        (view.electoral.independent_label_x, view.totals.independent, "independent"),
        (view.electoral.democrat_label_x, view.totals.democrat, "democrat"),
        (view.electoral.republican_label_x, view.totals.republican, "republican"),
    ]
    .into_iter()
    .filter_map(|(anchor, total, class)| match anchor {
        Some(x) if total > 0 => Some((x, total, class)),
        _ => None,
    })
    .collect();

    rsx! {
        section { class: "chart-card chart-card--electoral",
            h2 { class: "chart-card__title", "Electoral votes" }
            svg {
                class: "ev-bar",
                width: "{geo.width}",
                height: "{SVG_HEIGHT}",
                view_box: "0 0 {geo.width} {SVG_HEIGHT}",
                role: "img",
                "aria-label": "Electoral votes per state, stacked by winning party",

                for (state, segment) in view.states.iter().zip(view.electoral.segments.iter()) {
                    rect {
                        key: "{state.abbreviation}",
                        class: "ev-bar__segment",
                        x: "{segment.x}",
                        y: "{geo.bar_y}",
                        width: "{segment.width}",
                        height: "{geo.bar_height}",
                        fill: scale.fill(state.winner, state.margin),
                    }
                }

                for (x, total, party_class) in total_labels.iter() {
                    text {
                        key: "{party_class}",
                        class: "ev-bar__total {party_class}",
                        x: "{x}",
                        y: "{label_y}",
                        "{total}"
                    }
                }

                rect {
                    class: "ev-bar__midpoint",
                    x: "{view.electoral.midpoint_x}",
                    y: "{geo.bar_y - 10.0}",
                    width: "5",
                    height: "{geo.bar_height + 20.0}",
                }
                text {
                    class: "ev-bar__note",
                    x: "{view.electoral.midpoint_x}",
                    y: "{note_y}",
                    "Electoral Vote (270 needed to win)"
                }
            }
        }
    }
}
