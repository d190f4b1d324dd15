//! Validated partition of [1, N] into active elements and gaps

use super::{active_segments, resolve_gaps, Gap, Interval, SecondaryStructure};
use crate::FoldTreeError;

/// Active elements and gaps of one sequence
///
/// Invariant: `active` is non-empty, ordered, non-overlapping and inside
/// [1, length]; `gaps` fill the remainder exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentLayout {
    length: usize,
    active: Vec<Interval>,
    gaps: Vec<Gap>,
}

impl SegmentLayout {
    /// Scan `labels` and resolve their gaps
    pub fn from_labels(labels: &[SecondaryStructure]) -> Result<Self, FoldTreeError> {
        let active = active_segments(labels)?;
        let gaps = resolve_gaps(&active, labels.len());
        Ok(Self {
            length: labels.len(),
            active,
            gaps,
        })
    }

    /// Build from externally supplied active elements
    pub fn new(active: Vec<Interval>, length: usize) -> Result<Self, FoldTreeError> {
        if length == 0 {
            return Err(FoldTreeError::invalid_layout(0, 0, "sequence length is zero"));
        }
        if active.is_empty() {
            return Err(FoldTreeError::invalid_layout(
                1,
                length,
                "no active element to root the tree",
            ));
        }

        let mut floor = 1;
        for span in &active {
            if span.start > span.end {
                return Err(FoldTreeError::invalid_layout(
                    span.start,
                    span.end,
                    "interval is inverted",
                ));
            }
            if span.start < floor {
                return Err(FoldTreeError::invalid_layout(
                    span.start,
                    span.end,
                    "interval overlaps its predecessor or starts before residue 1",
                ));
            }
            if span.end > length {
                return Err(FoldTreeError::invalid_layout(
                    span.start,
                    span.end,
                    format!("interval extends past residue {length}"),
                ));
            }
            floor = span.end + 1;
        }

        let gaps = resolve_gaps(&active, length);
        Ok(Self {
            length,
            active,
            gaps,
        })
    }

    /// Sequence length N
    pub fn length(&self) -> usize {
        self.length
    }

    /// Active elements in sequence order
    pub fn active(&self) -> &[Interval] {
        &self.active
    }

    /// Gaps in sequence order
    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }

    /// Gaps lying between two active elements
    pub fn interior_gaps(&self) -> impl Iterator<Item = &Gap> + '_ {
        self.gaps.iter().filter(|gap| gap.is_interior())
    }

    /// Root hub: midpoint of the first active element
    pub fn root(&self) -> usize {
        self.active[0].midpoint()
    }
}
