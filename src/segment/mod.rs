//! Secondary structure labels and the intervals derived from them
//!
//! Positions are 1-indexed residues in [1, N].
//! An interval [start, end] is inclusive on both ends.
//! Hub of an interval: m = start + ⌊(end - start) / 2⌋

mod gaps;
mod layout;
mod scanner;

pub use gaps::{resolve_gaps, Gap, GapKind};
pub use layout::SegmentLayout;
pub use scanner::{active_segments, scan_active_spans};

use std::fmt;

/// Per-residue secondary structure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecondaryStructure {
    /// Beta strand (DSSP `E`)
    Strand,

    /// Helix (DSSP `H`)
    Helix,

    /// Anything else: loops, turns, unassigned
    Loop,
}

impl SecondaryStructure {
    /// Whether this label opens or extends an active element
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, SecondaryStructure::Loop)
    }
}

/// Mapping from raw label bytes onto [`SecondaryStructure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolMap {
    /// Byte denoting a strand residue
    pub strand: u8,

    /// Byte denoting a helix residue
    pub helix: u8,
}

impl Default for SymbolMap {
    fn default() -> Self {
        Self::dssp()
    }
}

impl SymbolMap {
    /// DSSP letters: `E` strand, `H` helix
    pub fn dssp() -> Self {
        Self {
            strand: b'E',
            helix: b'H',
        }
    }

    /// Classify a single byte
    #[inline]
    pub fn classify(&self, byte: u8) -> SecondaryStructure {
        if byte == self.strand {
            SecondaryStructure::Strand
        } else if byte == self.helix {
            SecondaryStructure::Helix
        } else {
            SecondaryStructure::Loop
        }
    }

    /// Classify every byte of a label string
    pub fn labels(&self, ss: &str) -> Vec<SecondaryStructure> {
        ss.bytes().map(|byte| self.classify(byte)).collect()
    }
}

/// Contiguous run of residues [start, end]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// First residue (inclusive)
    pub start: usize,

    /// Last residue (inclusive)
    pub end: usize,
}

impl Interval {
    /// Create interval [start, end]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "interval [{start}, {end}] is inverted");
        Self { start, end }
    }

    /// Check if single residue
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.start == self.end
    }

    /// Number of residues covered
    #[inline]
    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }

    /// Hub residue of the interval
    ///
    /// Truncates toward `start` on even lengths: [4, 7] → 5.
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.start + (self.end - self.start) / 2
    }

    /// Whether `position` lies inside the interval
    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }
}

impl From<(usize, usize)> for Interval {
    fn from((start, end): (usize, usize)) -> Self {
        Interval::new(start, end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            write!(f, "[{}]", self.start)
        } else {
            write!(f, "[{}, {}]", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_truncates_toward_start() {
        assert_eq!(Interval::new(4, 8).midpoint(), 6);
        assert_eq!(Interval::new(4, 7).midpoint(), 5);
        assert_eq!(Interval::new(12, 12).midpoint(), 12);
        assert_eq!(Interval::new(1, 2).midpoint(), 1);
    }

    #[test]
    fn test_midpoint_within_bounds() {
        for start in 1..20 {
            for end in start..40 {
                let interval = Interval::new(start, end);
                assert!(interval.contains(interval.midpoint()), "{interval}");
            }
        }
    }

    #[test]
    fn test_symbol_map_classify() {
        let map = SymbolMap::dssp();
        assert_eq!(
            map.labels("EH L"),
            vec![
                SecondaryStructure::Strand,
                SecondaryStructure::Helix,
                SecondaryStructure::Loop,
                SecondaryStructure::Loop,
            ]
        );

        let custom = SymbolMap {
            strand: b'B',
            helix: b'A',
        };
        assert_eq!(custom.classify(b'E'), SecondaryStructure::Loop);
        assert_eq!(custom.classify(b'A'), SecondaryStructure::Helix);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(3, 3).to_string(), "[3]");
        assert_eq!(Interval::new(3, 9).to_string(), "[3, 9]");
    }
}
