//! Fixed cartogram grid: one cell per state plus DC.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

pub const GRID_COLUMNS: u32 = 12;
pub const GRID_ROWS: u32 = 8;

/// Grid placement for every recognised abbreviation. The shape approximates
/// the US map: Alaska top-left, New England stacked top-right, Hawaii,
/// Texas, and Florida along the bottom edge.
static CELLS: Lazy<HashMap<&'static str, TileCell>> = Lazy::new(|| {
    const TABLE: [(&str, u32, u32); 51] = [
        ("AK", 0, 0),
        ("ME", 11, 0),
        ("VT", 10, 1),
        ("NH", 11, 1),
        ("WA", 1, 2),
        ("ID", 2, 2),
        ("MT", 3, 2),
        ("ND", 4, 2),
        ("MN", 5, 2),
        ("IL", 6, 2),
        ("WI", 7, 2),
        ("MI", 8, 2),
        ("NY", 9, 2),
        ("RI", 10, 2),
        ("MA", 11, 2),
        ("OR", 1, 3),
        ("NV", 2, 3),
        ("WY", 3, 3),
        ("SD", 4, 3),
        ("IA", 5, 3),
        ("IN", 6, 3),
        ("OH", 7, 3),
        ("PA", 8, 3),
        ("NJ", 9, 3),
        ("CT", 10, 3),
        ("CA", 1, 4),
        ("UT", 2, 4),
        ("CO", 3, 4),
        ("NE", 4, 4),
        ("MO", 5, 4),
        ("KY", 6, 4),
        ("WV", 7, 4),
        ("VA", 8, 4),
        ("MD", 9, 4),
        ("DC", 10, 4),
        ("AZ", 2, 5),
        ("NM", 3, 5),
        ("KS", 4, 5),
        ("AR", 5, 5),
        ("TN", 6, 5),
        ("NC", 7, 5),
        ("SC", 8, 5),
        ("DE", 9, 5),
        ("OK", 4, 6),
        ("LA", 5, 6),
        ("MS", 6, 6),
        ("AL", 7, 6),
        ("GA", 8, 6),
        ("HI", 1, 7),
        ("TX", 4, 7),
        ("FL", 9, 7),
    ];
    TABLE
        .iter()
        .map(|&(abbr, column, row)| (abbr, TileCell { column, row }))
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    /// A dataset referenced a state the grid does not know. This is a
    /// configuration fault, never something to paper over by skipping the
    /// state, so callers abort the render pass.
    #[error("no cartogram cell for state abbreviation {0:?}")]
    UnknownAbbreviation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCell {
    pub column: u32,
    pub row: u32,
}

impl TileCell {
    /// Top-left corner of the cell for a given tile size.
    pub fn origin(&self, tile_width: f64, tile_height: f64) -> (f64, f64) {
        (
            self.column as f64 * tile_width,
            self.row as f64 * tile_height,
        )
    }
}

pub fn resolve(abbreviation: &str) -> Result<TileCell, TileError> {
    CELLS
        .get(abbreviation)
        .copied()
        .ok_or_else(|| TileError::UnknownAbbreviation(abbreviation.to_string()))
}

/// Every abbreviation the grid recognises, for coverage checks.
pub fn known_abbreviations() -> impl Iterator<Item = &'static str> {
    CELLS.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_fifty_states_plus_dc() {
        assert_eq!(known_abbreviations().count(), 51);
        assert!(resolve("DC").is_ok());
    }

    #[test]
    fn every_cell_is_inside_the_grid() {
        for abbr in known_abbreviations() {
            let cell = resolve(abbr).unwrap();
            assert!(cell.column < GRID_COLUMNS, "{abbr} column out of range");
            assert!(cell.row < GRID_ROWS, "{abbr} row out of range");
        }
    }

    #[test]
    fn cells_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for abbr in known_abbreviations() {
            let cell = resolve(abbr).unwrap();
            assert!(seen.insert((cell.column, cell.row)), "{abbr} shares a cell");
        }
    }

    #[test]
    fn unknown_abbreviation_is_fatal() {
        assert_eq!(
            resolve("ZZ"),
            Err(TileError::UnknownAbbreviation("ZZ".into()))
        );
    }

    #[test]
    fn origin_multiplies_by_tile_size() {
        let cell = resolve("TX").unwrap();
        assert_eq!(cell.origin(80.0, 60.0), (4.0 * 80.0, 7.0 * 60.0));
    }
}
