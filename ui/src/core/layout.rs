//! Stacked-bar layout: values in, pixel segments out.
//!
//! The engine is a pure function. It walks an ordered sequence once,
//! accumulating a running offset, and returns the complete layout in one
//! value. There is no shared cursor for render passes to mutate, so two
//! runs over the same input produce bit-identical output.

use crate::core::party::Party;

/// Linear mapping from `[0, domain_max]` onto `[0, range_max]` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_max: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain_max: f64, range_max: f64) -> Self {
        LinearScale {
            domain_max,
            range_max,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        if self.domain_max == 0.0 {
            0.0
        } else {
            value / self.domain_max * self.range_max
        }
    }
}

/// Pixel window a stacked bar is laid out into: the scale's range plus the
/// left offset the first segment starts at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutFrame {
    pub margin_left: f64,
    pub max_range: f64,
}

/// One value to stack, tagged with the party that owns it so the engine can
/// find the group boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct StackEntry {
    pub key: String,
    pub value: f64,
    pub party: Party,
}

/// Computed position of one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub key: String,
    pub x: f64,
    pub width: f64,
}

/// Complete layout for one stacked bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedLayout {
    /// Segments in input order; each starts exactly where the previous ends.
    pub segments: Vec<Segment>,
    /// First independent segment's x, when any independent entry exists.
    pub independent_label_x: Option<f64>,
    /// Post-independent boundary, when any democrat entry exists.
    pub democrat_label_x: Option<f64>,
    /// Final right edge of the bar, when any republican entry exists.
    pub republican_label_x: Option<f64>,
    /// Pixel where the democrat region begins (left margin plus the width of
    /// every independent segment), whether or not democrats exist.
    pub democrat_boundary_x: f64,
    /// Centre-line marker: `(democrat_boundary_x + max_range) / 2`. The 270-EV
    /// and 50%-popular-vote threshold line both sit here.
    pub midpoint_x: f64,
    /// `margin_left + scale(total value)`.
    pub right_edge_x: f64,
}

impl StackedLayout {
    pub fn segment(&self, key: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.key == key)
    }
}

/// Lay the entries out left to right along `frame`, scaling each value with
/// a linear scale whose domain is the sum of all entry values.
pub fn stack(entries: &[StackEntry], frame: LayoutFrame) -> StackedLayout {
    let total: f64 = entries.iter().map(|e| e.value).sum();
    stack_scaled(entries, LinearScale::new(total, frame.max_range), frame)
}

/// Same as [`stack`] but with a caller-supplied scale, for bars whose domain
/// is fixed (the popular-vote bar uses `0..100`).
pub fn stack_scaled(entries: &[StackEntry], scale: LinearScale, frame: LayoutFrame) -> StackedLayout {
    let total: f64 = entries.iter().map(|e| e.value).sum();
    let right_edge_x = frame.margin_left + scale.apply(total);

    let mut segments = Vec::with_capacity(entries.len());
    let mut offset = frame.margin_left;

    let mut independent_label_x = None;
    let mut democrat_label_x = None;
    let mut has_republicans = false;
    let mut democrat_boundary_x = frame.margin_left;
    let mut seen_non_independent = false;

    for entry in entries {
        let width = scale.apply(entry.value);

        if entry.party == Party::Independent {
            if independent_label_x.is_none() {
                independent_label_x = Some(offset);
            }
        } else if !seen_non_independent {
            seen_non_independent = true;
            democrat_boundary_x = offset;
        }
        if entry.party == Party::Democrat && democrat_label_x.is_none() {
            democrat_label_x = Some(offset);
        }
        has_republicans |= entry.party == Party::Republican;

        segments.push(Segment {
            key: entry.key.clone(),
            x: offset,
            width,
        });
        offset += width;
    }

    // All entries independent (or none): the boundary is wherever the walk
    // ended, i.e. the right edge of the independent region.
    if !seen_non_independent {
        democrat_boundary_x = offset;
    }

    StackedLayout {
        segments,
        independent_label_x,
        democrat_label_x,
        republican_label_x: has_republicans.then_some(right_edge_x),
        democrat_boundary_x,
        midpoint_x: (democrat_boundary_x + frame.max_range) / 2.0,
        right_edge_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: f64, party: Party) -> StackEntry {
        StackEntry {
            key: key.into(),
            value,
            party,
        }
    }

    const FRAME: LayoutFrame = LayoutFrame {
        margin_left: 50.0,
        max_range: 930.0,
    };

    fn sample() -> Vec<StackEntry> {
        vec![
            entry("VT", 3.0, Party::Independent),
            entry("CA", 55.0, Party::Democrat),
            entry("NY", 29.0, Party::Democrat),
            entry("FL", 29.0, Party::Republican),
            entry("TX", 38.0, Party::Republican),
        ]
    }

    #[test]
    fn widths_sum_to_scaled_total() {
        let layout = stack(&sample(), FRAME);
        let sum: f64 = layout.segments.iter().map(|s| s.width).sum();
        let total = 3.0 + 55.0 + 29.0 + 29.0 + 38.0;
        let expected = LinearScale::new(total, FRAME.max_range).apply(total);
        assert!((sum - expected).abs() < 1e-9);
        assert!((layout.right_edge_x - (FRAME.margin_left + expected)).abs() < 1e-9);
    }

    #[test]
    fn segments_tile_without_gaps() {
        let layout = stack(&sample(), FRAME);
        assert_eq!(layout.segments[0].x, FRAME.margin_left);
        for pair in layout.segments.windows(2) {
            // Offsets accumulate, so adjacency is exact, not approximate.
            assert_eq!(pair[1].x, pair[0].x + pair[0].width);
        }
    }

    #[test]
    fn label_anchors() {
        let layout = stack(&sample(), FRAME);
        assert_eq!(layout.independent_label_x, Some(FRAME.margin_left));
        assert_eq!(layout.democrat_label_x, Some(layout.democrat_boundary_x));
        assert_eq!(layout.republican_label_x, Some(layout.right_edge_x));
    }

    #[test]
    fn missing_groups_have_no_labels() {
        let entries = vec![
            entry("CA", 55.0, Party::Democrat),
            entry("TX", 38.0, Party::Republican),
        ];
        let layout = stack(&entries, FRAME);
        assert_eq!(layout.independent_label_x, None);
        // No independents: the democrat region starts at the margin.
        assert_eq!(layout.democrat_boundary_x, FRAME.margin_left);
        assert_eq!(layout.democrat_label_x, Some(FRAME.margin_left));

        let democrats_only = vec![entry("CA", 55.0, Party::Democrat)];
        let layout = stack(&democrats_only, FRAME);
        assert_eq!(layout.republican_label_x, None);
    }

    #[test]
    fn midpoint_splits_boundary_and_range() {
        let layout = stack(&sample(), FRAME);
        assert_eq!(
            layout.midpoint_x,
            (layout.democrat_boundary_x + FRAME.max_range) / 2.0
        );
    }

    #[test]
    fn empty_input_is_degenerate_but_defined() {
        let layout = stack(&[], FRAME);
        assert!(layout.segments.is_empty());
        assert_eq!(layout.independent_label_x, None);
        assert_eq!(layout.democrat_label_x, None);
        assert_eq!(layout.republican_label_x, None);
        assert_eq!(layout.democrat_boundary_x, FRAME.margin_left);
        assert_eq!(layout.right_edge_x, FRAME.margin_left);
    }

    #[test]
    fn zero_domain_collapses_to_zero_widths() {
        let entries = vec![entry("ZZ", 0.0, Party::Democrat)];
        let layout = stack(&entries, FRAME);
        assert_eq!(layout.segments[0].width, 0.0);
    }

    #[test]
    fn relayout_is_bit_identical() {
        let entries = sample();
        let a = stack(&entries, FRAME);
        let b = stack(&entries, FRAME);
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_scale_stacks_percentages() {
        let entries = vec![
            entry("I", 18.91, Party::Independent),
            entry("D", 43.01, Party::Democrat),
            entry("R", 38.08, Party::Republican),
        ];
        let scale = LinearScale::new(100.0, FRAME.max_range);
        let layout = stack_scaled(&entries, scale, FRAME);
        let sum: f64 = layout.segments.iter().map(|s| s.width).sum();
        assert!((sum - scale.apply(100.0)).abs() < 1e-9);
    }
}
