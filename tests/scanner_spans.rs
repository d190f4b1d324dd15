//! Scanner and gap resolution against the original reference strings

use foldtree::{segment::resolve_gaps, GapKind, Interval};
use test_case::test_case;
use test_helpers::*;

#[test_case(
    "   EEEEE   HHHHHHHH  EEEEE   IGNOR EEEEEE   HHHHHHHHHHH  EEEEE  HHHH   ",
    &[(4, 8), (12, 19), (22, 26), (36, 41), (45, 55), (58, 62), (65, 68)];
    "loops at both termini"
)]
#[test_case(
    "HHHHHHH   HHHHHHHHHHHH      HHHHHHHHHHHHEEEEEEEEEEHHHHHHH EEEEHHH ",
    &[(1, 7), (11, 22), (29, 40), (41, 50), (51, 57), (59, 62), (63, 65)];
    "kind switches without loops"
)]
#[test_case(
    "EEEEEEEEE EEEEEEEE EEEEEEEEE H EEEEE H H H EEEEEEEE",
    &[(1, 9), (11, 18), (20, 28), (30, 30), (32, 36), (38, 38), (40, 40), (42, 42), (44, 51)];
    "single residue elements"
)]
#[test_case("EEEE", &[(1, 4)]; "whole chain one element")]
#[test_case("   ", &[]; "all loop")]
fn scanner_matches_reference(ss: &str, expected: &[(usize, usize)]) {
    assert_eq!(spans(ss), expected);
}

#[test]
fn gaps_fill_complement() {
    let ss = "   EEEEE   HHHHHHHH  EEEEE   IGNOR EEEEEE   HHHHHHHHHHH  EEEEE  HHHH   ";
    let layout = layout(ss);
    let gaps: Vec<_> = layout
        .gaps()
        .iter()
        .map(|gap| (gap.span.start, gap.span.end))
        .collect();
    assert_eq!(
        gaps,
        vec![(1, 3), (9, 11), (20, 21), (27, 35), (42, 44), (56, 57), (63, 64), (69, 71)]
    );
    assert_eq!(layout.gaps()[0].kind, GapKind::Leading);
    assert_eq!(layout.gaps()[7].kind, GapKind::Trailing);
    assert_eq!(layout.interior_gaps().count(), 6);

    let covered: usize = layout.active().iter().map(Interval::length).sum::<usize>()
        + layout.gaps().iter().map(|gap| gap.span.length()).sum::<usize>();
    assert_eq!(covered, ss.len());
}

#[test]
fn gaps_without_loop_termini() {
    let active = [Interval::new(1, 7), Interval::new(11, 22), Interval::new(23, 30)];
    let gaps = resolve_gaps(&active, 30);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].span, Interval::new(8, 10));
    assert_eq!(gaps[0].kind, GapKind::Interior);
}

#[test]
fn midpoint_of_first_reference_element() {
    assert_eq!(Interval::new(4, 8).midpoint(), 6);
}
