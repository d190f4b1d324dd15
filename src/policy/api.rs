use crate::segment::SegmentLayout;
use crate::tree::FoldTree;

/// Strategy turning a segment layout into a fold tree.
pub trait FoldPolicy: Send + Sync + 'static {
    /// Unique policy name used for registry lookup.
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Whether every tree this policy assembles spans [1, N] as a single tree.
    ///
    /// Callers only verify output of policies that make this claim.
    fn spans_all(&self) -> bool {
        true
    }

    /// Assemble the tree for `layout`.
    fn assemble(&self, layout: &SegmentLayout) -> FoldTree;
}

impl std::fmt::Debug for dyn FoldPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FoldPolicy({})", self.name())
    }
}
