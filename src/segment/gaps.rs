//! Loop runs complementary to the active elements

use super::Interval;
use tracing::debug;

/// Where a gap sits relative to the active elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GapKind {
    /// Before the first element, starting at residue 1
    Leading,

    /// Between two consecutive elements
    Interior,

    /// After the last element, ending at residue N
    Trailing,
}

/// Maximal loop run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gap {
    /// Residues covered
    pub span: Interval,

    /// Position relative to the active elements
    pub kind: GapKind,
}

impl Gap {
    /// Whether this gap lies between two active elements
    #[inline]
    pub fn is_interior(&self) -> bool {
        self.kind == GapKind::Interior
    }
}

/// Derive the gaps left by `active` within [1, `length`].
///
/// `active` must be ordered and non-overlapping. Empty gaps are never emitted.
pub fn resolve_gaps(active: &[Interval], length: usize) -> Vec<Gap> {
    let mut gaps = Vec::with_capacity(active.len() + 1);
    let (Some(first), Some(last)) = (active.first(), active.last()) else {
        return gaps;
    };

    if first.start > 1 {
        gaps.push(Gap {
            span: Interval::new(1, first.start - 1),
            kind: GapKind::Leading,
        });
    }

    for pair in active.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev.end + 1 < next.start {
            gaps.push(Gap {
                span: Interval::new(prev.end + 1, next.start - 1),
                kind: GapKind::Interior,
            });
        }
    }

    if last.end < length {
        gaps.push(Gap {
            span: Interval::new(last.end + 1, length),
            kind: GapKind::Trailing,
        });
    }

    for (element, gap) in gaps.iter().enumerate() {
        debug!(
            element = element + 1,
            start = gap.span.start,
            end = gap.span.end,
            kind = ?gap.kind,
            "gap element"
        );
    }

    gaps
}
