//! The shared margin colour scale.
//!
//! One scale instance is built by the dashboard and passed by reference into
//! every chart so all four stay visually consistent; nothing here is a
//! module-level global.

use crate::core::party::Party;

/// Margin sample points (percentage points, republican minus democrat) the
/// quantile scale is built from.
const MARGIN_DOMAIN: [f64; 13] = [
    -60.0, -50.0, -40.0, -30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0,
];

/// Blue-to-red ramp, strongest democrat lean first.
const MARGIN_COLORS: [&str; 12] = [
    "#0066CC", "#0080FF", "#3399FF", "#66B2FF", "#99ccff", "#CCE5FF", "#ffcccc", "#ff9999",
    "#ff6666", "#ff3333", "#FF0000", "#CC0000",
];

/// States carried by an independent are drawn in this green instead of a
/// ramp colour: the ramp only encodes the D/R margin.
pub const INDEPENDENT_FILL: &str = "#45ad6a";

/// Quantile scale over the fixed margin domain. Thresholds are the domain's
/// `k/12` quantiles, which for the evenly spaced samples above are exactly
/// the interior points −50 … 50; lookup is bisect-right, so a margin equal
/// to a threshold falls into the cell to its right.
#[derive(Debug, Clone, PartialEq)]
pub struct MarginColorScale {
    thresholds: Vec<f64>,
}

/// One legend cell: the colour plus its margin interval (open-ended at the
/// extremes).
#[derive(Debug, Clone, PartialEq)]
pub struct LegendCell {
    pub color: &'static str,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl Default for MarginColorScale {
    fn default() -> Self {
        Self::new()
    }
}

impl MarginColorScale {
    pub fn new() -> Self {
        let cells = MARGIN_COLORS.len();
        let thresholds = (1..cells)
            .map(|k| quantile(&MARGIN_DOMAIN, k as f64 / cells as f64))
            .collect();
        MarginColorScale { thresholds }
    }

    /// Ramp colour for a D/R margin.
    pub fn color(&self, margin: f64) -> &'static str {
        let idx = self.thresholds.partition_point(|t| *t <= margin);
        MARGIN_COLORS[idx]
    }

    /// Fill for a classified state: independents get the flat green, everyone
    /// else the margin ramp.
    pub fn fill(&self, winner: Party, margin: f64) -> &'static str {
        if winner == Party::Independent {
            INDEPENDENT_FILL
        } else {
            self.color(margin)
        }
    }

    pub fn legend_cells(&self) -> Vec<LegendCell> {
        MARGIN_COLORS
            .iter()
            .enumerate()
            .map(|(i, color)| LegendCell {
                color,
                lower: (i > 0).then(|| self.thresholds[i - 1]),
                upper: (i < self.thresholds.len()).then(|| self.thresholds[i]),
            })
            .collect()
    }
}

/// Linear-interpolated quantile of a sorted sample (the R-7 rule).
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_interior_domain_points() {
        let scale = MarginColorScale::new();
        assert_eq!(
            scale.thresholds,
            vec![-50.0, -40.0, -30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 40.0, 50.0]
        );
    }

    #[test]
    fn deep_margins_saturate() {
        let scale = MarginColorScale::new();
        assert_eq!(scale.color(-75.0), "#0066CC");
        assert_eq!(scale.color(75.0), "#CC0000");
    }

    #[test]
    fn zero_margin_falls_on_the_republican_side() {
        // Bisect-right: a margin exactly on a threshold takes the right cell.
        let scale = MarginColorScale::new();
        assert_eq!(scale.color(0.0), "#ffcccc");
        assert_eq!(scale.color(-0.1), "#CCE5FF");
    }

    #[test]
    fn independent_winners_bypass_the_ramp() {
        let scale = MarginColorScale::new();
        assert_eq!(scale.fill(Party::Independent, -12.0), INDEPENDENT_FILL);
        assert_eq!(scale.fill(Party::Democrat, -12.0), scale.color(-12.0));
    }

    #[test]
    fn legend_cells_cover_the_ramp_in_order() {
        let cells = MarginColorScale::new().legend_cells();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0].lower, None);
        assert_eq!(cells[0].upper, Some(-50.0));
        assert_eq!(cells[11].lower, Some(50.0));
        assert_eq!(cells[11].upper, None);
    }
}
