use crate::policy::FoldPolicy;
use crate::segment::SegmentLayout;
use crate::tree::{self, FoldTree, TreeBuilder};

/// Always-spanning assembly: gaps classified by position, termini reached
/// from the first and last elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct Canonical;

impl FoldPolicy for Canonical {
    fn name(&self) -> &'static str {
        "canonical"
    }

    fn description(&self) -> &'static str {
        "Jumps from the first element to every other element and interior loop; always spans the sequence."
    }

    fn assemble(&self, layout: &SegmentLayout) -> FoldTree {
        tree::assemble(layout)
    }
}

/// Bug-compatible reproduction of the first published fold-tree-from-DSSP
/// routine.
///
/// Differences from [`Canonical`]:
/// - interior loops are the gap list minus its first and last entries, so a
///   sequence that starts or ends inside an element loses a loop;
/// - the first element's chain to residue 1 is dropped when its hub equals
///   its own start;
/// - a lone element only receives the first-element chains.
///
/// Output is not guaranteed to be a valid tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct Legacy;

impl FoldPolicy for Legacy {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn description(&self) -> &'static str {
        "Bug-compatible original assembly; may leave residues unreachable."
    }

    fn spans_all(&self) -> bool {
        false
    }

    fn assemble(&self, layout: &SegmentLayout) -> FoldTree {
        let n = layout.length();
        let active = layout.active();
        let gaps = layout.gaps();
        let inner_gaps = gaps.get(1..gaps.len().saturating_sub(1)).unwrap_or(&[]);

        let mut builder = TreeBuilder::new(n, layout.root());
        let root = builder.root();

        for span in &active[1..] {
            builder.add_jump(root, span.midpoint());
        }
        for gap in inner_gaps {
            builder.add_jump(root, gap.span.midpoint());
        }

        let last = active.len() - 1;
        for (idx, span) in active.iter().enumerate() {
            let hub = span.midpoint();
            if idx == 0 {
                if hub != span.start {
                    builder.add_chain(hub, 1);
                }
                builder.add_chain(hub, span.end);
            } else if idx == last {
                builder.add_chain(hub, span.start);
                builder.add_chain(hub, n);
            } else {
                builder.add_span_chains(span);
            }
        }

        for gap in inner_gaps {
            builder.add_span_chains(&gap.span);
        }

        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SymbolMap;
    use crate::tree::{check, Edge};
    use crate::FoldTreeError;

    fn layout(ss: &str) -> SegmentLayout {
        SegmentLayout::from_labels(&SymbolMap::dssp().labels(ss)).unwrap()
    }

    #[test]
    fn test_policies_agree_when_both_termini_are_loops() {
        let layout = layout("   EEEEEEE    EEEEEEE         EEEEEEEEE    EEEEEEEEEE   HHHHHH         EEEEEEEEE         EEEEE     ");
        assert_eq!(Canonical.assemble(&layout), Legacy.assemble(&layout));
    }

    #[test]
    fn test_legacy_drops_first_loop_without_head_gap() {
        let layout = layout("EEE  HH ");
        let legacy = Legacy.assemble(&layout);
        assert_eq!(
            legacy.edges(),
            &[Edge::jump(2, 6, 1), Edge::chain(2, 1), Edge::chain(2, 3), Edge::chain(6, 8)]
        );
        match check(&legacy) {
            Err(FoldTreeError::Unreachable { start, end }) => assert_eq!((start, end), (4, 5)),
            other => panic!("expected unreachable loop, got {other:?}"),
        }
        assert!(check(&Canonical.assemble(&layout)).is_ok());
    }

    #[test]
    fn test_legacy_lone_element_misses_tail() {
        let legacy = Legacy.assemble(&layout("  HHHH   "));
        assert_eq!(legacy.edges(), &[Edge::chain(4, 1), Edge::chain(4, 6)]);
        assert!(matches!(
            check(&legacy),
            Err(FoldTreeError::Unreachable { start: 7, end: 9 })
        ));
    }

    #[test]
    fn test_legacy_skips_head_for_short_first_element() {
        // First element [3, 4]: hub 3 equals its start.
        let legacy = Legacy.assemble(&layout("  HH  EEE  "));
        assert!(!legacy.edges().contains(&Edge::chain(3, 1)));
        assert!(Canonical.assemble(&layout("  HH  EEE  ")).edges().contains(&Edge::chain(3, 1)));
    }
}
