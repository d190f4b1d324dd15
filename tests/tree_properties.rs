//! Structural properties of canonical fold trees over random label strings

use foldtree::{tree::check, GapKind, Interval, SecondaryStructure, SegmentLayout};
use proptest::prelude::*;

fn labels() -> impl Strategy<Value = Vec<SecondaryStructure>> {
    proptest::collection::vec(
        prop_oneof![
            Just(SecondaryStructure::Strand),
            Just(SecondaryStructure::Helix),
            Just(SecondaryStructure::Loop),
            Just(SecondaryStructure::Loop),
        ],
        1..160,
    )
    .prop_filter("needs an element", |labels| {
        labels.iter().any(|label| label.is_active())
    })
}

proptest! {
    #[test]
    fn all_loop_scans_empty(len in 0usize..64) {
        let labels = vec![SecondaryStructure::Loop; len];
        prop_assert!(foldtree::segment::scan_active_spans(&labels).is_empty());
        prop_assert!(SegmentLayout::from_labels(&labels).is_err());
    }

    #[test]
    fn layout_partitions_sequence(labels in labels()) {
        let layout = SegmentLayout::from_labels(&labels).expect("layout resolves");

        let mut spans: Vec<Interval> = layout.active().to_vec();
        spans.extend(layout.gaps().iter().map(|gap| gap.span));
        spans.sort();
        let mut next = 1;
        for span in &spans {
            prop_assert_eq!(span.start, next, "hole or overlap before {}", span);
            prop_assert!(span.start <= span.end);
            next = span.end + 1;
        }
        prop_assert_eq!(next, labels.len() + 1);

        for span in layout.active() {
            let kind = labels[span.start - 1];
            prop_assert!(labels[span.start - 1..span.end].iter().all(|&label| label == kind));
        }
        for gap in layout.gaps() {
            prop_assert!(labels[gap.span.start - 1..gap.span.end]
                .iter()
                .all(|label| !label.is_active()));
        }
    }

    #[test]
    fn tree_spans_every_residue(labels in labels()) {
        let layout = SegmentLayout::from_labels(&labels).expect("layout resolves");
        let tree = foldtree::tree::assemble(&layout);

        prop_assert_eq!(check(&tree), Ok(()));
        prop_assert_eq!(tree.num_links(), labels.len() - 1);
        prop_assert_eq!(tree.root(), layout.active()[0].midpoint());
    }

    #[test]
    fn jump_count_and_ids(labels in labels()) {
        let layout = SegmentLayout::from_labels(&labels).expect("layout resolves");
        let tree = foldtree::tree::assemble(&layout);

        let k = layout.active().len();
        let interior = layout.interior_gaps().count();
        prop_assert_eq!(tree.num_jumps(), k - 1 + interior);
        prop_assert_eq!(tree.jump_ids(), (1..=k - 1 + interior).collect::<Vec<_>>());

        let has_head = layout.gaps().first().map_or(false, |gap| gap.kind == GapKind::Leading);
        let has_tail = layout.gaps().last().map_or(false, |gap| gap.kind == GapKind::Trailing);
        if k >= 2 && has_head && has_tail {
            prop_assert_eq!(tree.num_jumps(), (k - 1) + layout.gaps().len().saturating_sub(2));
        }

        for jump in tree.jumps() {
            prop_assert_eq!(jump.start, tree.root());
        }
    }

    #[test]
    fn chains_never_self_reference(labels in labels()) {
        let layout = SegmentLayout::from_labels(&labels).expect("layout resolves");
        let tree = foldtree::tree::assemble(&layout);
        for chain in tree.chains() {
            prop_assert_ne!(chain.start, chain.stop);
        }
    }
}
