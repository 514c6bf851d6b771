//! Year-selection state machine and the per-year derivation pipeline.
//!
//! The selection machine is pure so the stale-response rule is testable
//! without a UI: every fetch gets a monotonically increasing token, and only
//! the token handed out by the most recent [`YearSelection::begin`] may
//! complete or fail the load. Anything older is a superseded request whose
//! result is dropped on the floor.

use crate::core::group::{national_shares, ElectoralTotals, GroupedResults, NationalShare};
use crate::core::layout::{stack, stack_scaled, LayoutFrame, LinearScale, StackEntry, StackedLayout};
use crate::core::results::{classify_all, ClassifiedState, StateRow};
use crate::core::tiles::{self, TileCell, TileError};

pub type RequestToken = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    Loading { year: u16, token: RequestToken },
    Displaying { year: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSelection {
    phase: SelectionPhase,
    next_token: RequestToken,
}

impl Default for YearSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl YearSelection {
    pub fn new() -> Self {
        YearSelection {
            phase: SelectionPhase::Idle,
            next_token: 0,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// The year whose dot is highlighted: the one being loaded, or failing
    /// that the one on screen.
    pub fn selected_year(&self) -> Option<u16> {
        match self.phase {
            SelectionPhase::Idle => None,
            SelectionPhase::Loading { year, .. } => Some(year),
            SelectionPhase::Displaying { year } => Some(year),
        }
    }

    /// Start loading `year`. Supersedes any in-flight load.
    pub fn begin(&mut self, year: u16) -> RequestToken {
        let token = self.next_token;
        self.next_token += 1;
        self.phase = SelectionPhase::Loading { year, token };
        token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        matches!(self.phase, SelectionPhase::Loading { token: t, .. } if t == token)
    }

    /// The load identified by `token` finished. Returns the year to display,
    /// or `None` when the response is stale and must be ignored.
    pub fn complete(&mut self, token: RequestToken) -> Option<u16> {
        match self.phase {
            SelectionPhase::Loading { year, token: t } if t == token => {
                self.phase = SelectionPhase::Displaying { year };
                Some(year)
            }
            _ => None,
        }
    }

    /// The load identified by `token` failed. Falls back to displaying
    /// `displayed` (the charts were never touched). Returns false for stale
    /// failures, which are ignored like stale successes.
    pub fn fail(&mut self, token: RequestToken, displayed: Option<u16>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.phase = match displayed {
            Some(year) => SelectionPhase::Displaying { year },
            None => SelectionPhase::Idle,
        };
        true
    }
}

/// One tile of the cartogram, resolved ahead of rendering. Indexes line up
/// with [`YearView::states`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTile {
    pub abbreviation: String,
    pub cell: TileCell,
}

/// Everything the four charts need for one year, derived in a single pass
/// and replaced wholesale on the next selection. Charts never retain it.
#[derive(Debug, Clone, PartialEq)]
pub struct YearView {
    pub year: u16,
    /// Classified states in stacked-bar order (independents, democrats,
    /// republicans). The one dataset instance every chart reads from.
    pub states: Vec<ClassifiedState>,
    pub totals: ElectoralTotals,
    /// Electoral-vote bar segments, one per state, keyed by abbreviation.
    pub electoral: StackedLayout,
    /// National three-party shares, in bar order.
    pub shares: Vec<NationalShare>,
    /// Popular-vote bar segments over a fixed 0–100 domain.
    pub popular: StackedLayout,
    pub tiles: Vec<PlacedTile>,
}

/// Run the whole derivation: classify, group, lay out both bars, resolve
/// every tile. Any tile miss aborts the year before a single chart updates.
pub fn build_year_view(
    year: u16,
    rows: &[StateRow],
    electoral_frame: LayoutFrame,
    popular_frame: LayoutFrame,
) -> Result<YearView, TileError> {
    let grouped = GroupedResults::from_classified(classify_all(rows));
    let totals = grouped.electoral_totals();
    let states = grouped.into_stacked_order();

    let electoral_entries: Vec<StackEntry> = states
        .iter()
        .map(|s| StackEntry {
            key: s.abbreviation.clone(),
            value: s.electoral_votes as f64,
            party: s.winner,
        })
        .collect();
    let electoral = stack(&electoral_entries, electoral_frame);

    let shares = national_shares(&states);
    let share_entries: Vec<StackEntry> = shares
        .iter()
        .map(|s| StackEntry {
            key: s.party.tag().to_string(),
            value: s.percentage,
            party: s.party,
        })
        .collect();
    let popular = stack_scaled(
        &share_entries,
        LinearScale::new(100.0, popular_frame.max_range),
        popular_frame,
    );

    let tiles = states
        .iter()
        .map(|s| {
            tiles::resolve(&s.abbreviation).map(|cell| PlacedTile {
                abbreviation: s.abbreviation.clone(),
                cell,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(YearView {
        year,
        states,
        totals,
        electoral,
        shares,
        popular,
        tiles,
    })
}
