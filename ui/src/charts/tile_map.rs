//! State-tile cartogram.

use dioxus::prelude::*;

use crate::charts::{MarginLegend, StateTooltip, StateTooltipCard};
use crate::core::color::MarginColorScale;
use crate::core::controller::YearView;
use crate::core::tiles::{GRID_COLUMNS, GRID_ROWS};

const SVG_WIDTH: f64 = 960.0;
const SVG_HEIGHT: f64 = 480.0;
const TILE_WIDTH: f64 = SVG_WIDTH / GRID_COLUMNS as f64;
const TILE_HEIGHT: f64 = SVG_HEIGHT / GRID_ROWS as f64;

#[derive(Clone)]
struct TileEntry {
    index: usize,
    abbreviation: String,
    electoral_votes: u32,
    x: f64,
    y: f64,
    fill: &'static str,
}

/// One fixed-size cell per state on a 12×8 grid, coloured like the
/// electoral-vote bar, with a hover tooltip carrying the full state result.
#[component]
pub fn TileMap(view: YearView, scale: MarginColorScale) -> Element {
    // Index into `view.states` of the tile under the pointer.
    let mut hovered = use_signal(|| Option::<usize>::None);

    let entries: Vec<TileEntry> = view
        .states
        .iter()
        .zip(view.tiles.iter())
        .enumerate()
        .map(|(index, (state, tile))| {
            let (x, y) = tile.cell.origin(TILE_WIDTH, TILE_HEIGHT);
            TileEntry {
                index,
                abbreviation: state.abbreviation.clone(),
                electoral_votes: state.electoral_votes,
                x,
                y,
                fill: scale.fill(state.winner, state.margin),
            }
        })
        .collect();

    let tooltip = hovered().and_then(|index| {
        let state = view.states.get(index)?;
        let tile = view.tiles.get(index)?;
        let (x, y) = tile.cell.origin(TILE_WIDTH, TILE_HEIGHT);
        // Anchor the card just past the tile's bottom-right corner.
        Some((StateTooltip::for_state(state), x + TILE_WIDTH, y + TILE_HEIGHT))
    });

    rsx! {
        section { class: "chart-card chart-card--tiles",
            h2 { class: "chart-card__title", "State map" }
            MarginLegend { scale: scale.clone() }
            div { class: "chart-card__canvas",
                svg {
                    class: "tile-map",
                    width: "{SVG_WIDTH}",
                    height: "{SVG_HEIGHT}",
                    view_box: "0 0 {SVG_WIDTH} {SVG_HEIGHT}",
                    role: "img",
                    "aria-label": "Cartogram of state results",

                    for entry in entries.into_iter() {
                        g {
                            key: "{entry.abbreviation}",
                            class: "tile-map__state",
                            onmouseenter: {
                                let index = entry.index;
                                move |_| hovered.set(Some(index))
                            },
                            onmouseleave: move |_| hovered.set(None),

                            rect {
                                class: "tile-map__tile",
                                x: "{entry.x}",
                                y: "{entry.y}",
                                width: "{TILE_WIDTH}",
                                height: "{TILE_HEIGHT}",
                                fill: entry.fill,
                            }
                            text {
                                class: "tile-map__abbr",
                                x: "{entry.x + TILE_WIDTH / 2.0}",
                                y: "{entry.y + TILE_HEIGHT / 2.0 - 4.0}",
                                "{entry.abbreviation}"
                            }
                            text {
                                class: "tile-map__ev",
                                x: "{entry.x + TILE_WIDTH / 2.0}",
                                y: "{entry.y + TILE_HEIGHT / 2.0 + 14.0}",
                                "{entry.electoral_votes}"
                            }
                        }
                    }
                }

                if let Some((payload, x, y)) = tooltip {
                    div {
                        class: "chart-tooltip chart-tooltip--tile",
                        style: "left: {x}px; top: {y}px;",
                        StateTooltipCard { tooltip: payload }
                    }
                }
            }
        }
    }
}
