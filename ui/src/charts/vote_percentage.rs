//! National popular-vote percentage bar.

use dioxus::prelude::*;

use crate::charts::{NationalTooltipCard, PERCENTAGE_BAR};
use crate::core::controller::YearView;
use crate::core::format;
use crate::core::party::Party;

const SVG_HEIGHT: f64 = 200.0;

/// Three segments (independent, democrat, republican) over a fixed 0 to 100
/// domain, with each nominee's national share labelled above their segment
/// and the 50% line marked.
#[component]
pub fn VotePercentageBar(view: YearView) -> Element {
    let geo = PERCENTAGE_BAR;
    let label_y = geo.bar_y - 25.0;
    let note_y = geo.bar_y + geo.bar_height + 30.0;

    let mut hovered = use_signal(|| false);

    // Label anchoring follows the source chart: the independent label hugs
    // its segment's left edge, the democrat label sits between the democrat
    // and republican segment starts, the republican label at the bar's end.
    let segment_x = |party: Party| -> Option<f64> {
        view.popular
            .segments
            .iter()
            .position(|s| s.key == party.tag())
            .map(|i| view.popular.segments[i].x)
    };
    let label_x = |party: Party| -> Option<f64> {
        match party {
            Party::Independent => segment_x(Party::Independent).map(|x| x + 5.0),
            Party::Democrat => match (segment_x(Party::Democrat), segment_x(Party::Republican)) {
                (Some(d), Some(r)) => Some((d + r) / 2.0),
                (Some(d), None) => Some(d),
                _ => None,
            },
            Party::Republican => Some(view.popular.right_edge_x),
        }
    };

    let labels: Vec<(f64, String, &str)> = view
        .shares
        .iter()
        .filter(|share| share.percentage > 0.0 && !share.nominee.is_empty())
        .filter_map(|share| {
            label_x(share.party).map(|x| {
                (
                    x,
                    format!("{} {}", share.nominee, format::format_percent(share.percentage)),
                    share.party.css_class(),
                )
            })
        })
        .collect();

    rsx! {
        section { class: "chart-card chart-card--percentage",
            h2 { class: "chart-card__title", "Popular vote" }
            div { class: "chart-card__canvas",
                svg {
                    class: "pct-bar",
                    width: "{geo.width}",
                    height: "{SVG_HEIGHT}",
                    view_box: "0 0 {geo.width} {SVG_HEIGHT}",
                    role: "img",
                    "aria-label": "National popular vote share by party",
                    onmouseenter: move |_| hovered.set(true),
                    onmouseleave: move |_| hovered.set(false),

                    for (share, segment) in view.shares.iter().zip(view.popular.segments.iter()) {
                        rect {
                            key: "{share.party.tag()}",
                            class: "pct-bar__segment {share.party.css_class()}",
                            x: "{segment.x}",
                            y: "{geo.bar_y}",
                            width: "{segment.width}",
                            height: "{geo.bar_height}",
                        }
                    }

                    for (x, label, party_class) in labels.iter() {
                        text {
                            key: "{party_class}",
                            class: "pct-bar__label {party_class}",
                            x: "{x}",
                            y: "{label_y}",
                            "{label}"
                        }
                    }

                    rect {
                        class: "pct-bar__midpoint",
                        x: "{view.popular.midpoint_x}",
                        y: "{geo.bar_y - 10.0}",
                        width: "5",
                        height: "{geo.bar_height + 20.0}",
                    }
                    text {
                        class: "pct-bar__note",
                        x: "{view.popular.midpoint_x}",
                        y: "{note_y}",
                        "Popular Vote (50%)"
                    }
                }

                if hovered() {
                    div { class: "chart-tooltip chart-tooltip--national",
                        NationalTooltipCard { shares: view.shares.clone() }
                    }
                }
            }
        }
    }
}
