//! Colour legend for the margin scale.

use dioxus::prelude::*;

use crate::core::color::MarginColorScale;

/// One swatch per ramp cell, labelled with its margin interval. Negative
/// margins lean democrat, positive lean republican.
#[component]
pub fn MarginLegend(scale: MarginColorScale) -> Element {
    let cells = scale.legend_cells();

    rsx! {
        div { class: "margin-legend", role: "list", aria_label: "Margin colour scale",
            for (index, cell) in cells.iter().enumerate() {
                div { key: "{index}", class: "margin-legend__cell", role: "listitem",
                    span {
                        class: "margin-legend__swatch",
                        style: "background: {cell.color};",
                    }
                    span { class: "margin-legend__bounds",
                        {match (cell.lower, cell.upper) {
                            (None, Some(upper)) => format!("< {upper:+.0}"),
                            (Some(lower), Some(upper)) => format!("{lower:+.0} to {upper:+.0}"),
                            (Some(lower), None) => format!("≥ {lower:+.0}"),
                            (None, None) => String::new(),
                        }}
                    }
                }
            }
        }
    }
}
