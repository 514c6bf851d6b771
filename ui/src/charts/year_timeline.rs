//! Election-year timeline.

use dioxus::prelude::*;

use crate::core::data::YearEntry;

const SVG_WIDTH: f64 = 1000.0;
const SVG_HEIGHT: f64 = 100.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const LINE_Y: f64 = 50.0;
const DOT_RADIUS: f64 = 13.0;
const LABEL_Y: f64 = 80.0;

#[derive(Clone)]
struct DotEntry {
    year: u16,
    x: f64,
    class: String,
}

/// One dot per election year on a dashed line, coloured by the national
/// winner. Clicking a dot selects that year; a failed load shows a badge
/// here while the charts keep their previous year.
#[component]
pub fn YearTimeline(
    years: Vec<YearEntry>,
    selected: Option<u16>,
    failure: Option<String>,
    on_select: EventHandler<u16>,
) -> Element {
    // The index arrives sorted, so first/last bound the domain.
    let first = years.first().map(|y| f64::from(y.year)).unwrap_or_default();
    let last = years.last().map(|y| f64::from(y.year)).unwrap_or_default();
    let span = last - first;
    let inner = SVG_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

    let position = move |year: u16| -> f64 {
        if span == 0.0 {
            MARGIN_LEFT
        } else {
            MARGIN_LEFT + (f64::from(year) - first) / span * inner
        }
    };

    let dots: Vec<DotEntry> = years
        .iter()
        .map(|entry| {
            let party_class = entry
                .winner()
                .map(|p| p.css_class())
                .unwrap_or("independent");
            let selected_class = if selected == Some(entry.year) {
                " year-timeline__dot--selected"
            } else {
                ""
            };
            DotEntry {
                year: entry.year,
                x: position(entry.year),
                class: format!("year-timeline__dot {party_class}{selected_class}"),
            }
        })
        .collect();

    rsx! {
        section { class: "chart-card chart-card--timeline",
            h2 { class: "chart-card__title", "Election years" }
            if let Some(message) = failure.as_ref() {
                p { class: "year-timeline__error", "⚠️ {message}" }
            }
            svg {
                class: "year-timeline",
                width: "{SVG_WIDTH}",
                height: "{SVG_HEIGHT}",
                view_box: "0 0 {SVG_WIDTH} {SVG_HEIGHT}",
                role: "listbox",
                "aria-label": "Election years",

                line {
                    class: "year-timeline__line",
                    x1: "{MARGIN_LEFT}",
                    y1: "{LINE_Y}",
                    x2: "{SVG_WIDTH - MARGIN_RIGHT}",
                    y2: "{LINE_Y}",
                }

                for dot in dots.into_iter() {
                    g { key: "{dot.year}",
                        circle {
                            class: "{dot.class}",
                            cx: "{dot.x}",
                            cy: "{LINE_Y}",
                            r: "{DOT_RADIUS}",
                            role: "option",
                            "aria-selected": selected == Some(dot.year),
                            onclick: {
                                let year = dot.year;
                                move |_| on_select.call(year)
                            },
                        }
                        text {
                            class: "year-timeline__label",
                            x: "{dot.x}",
                            y: "{LABEL_Y}",
                            "{dot.year}"
                        }
                    }
                }
            }
        }
    }
}
