//! Single-pass scan for maximal active elements
//!
//! A run opens on the first active label after a closed state and closes on
//! a loop label or on an active label of a different kind than the one that
//! opened it.

use super::{Interval, SecondaryStructure};
use crate::FoldTreeError;
use tracing::debug;

/// Collect the active elements of `labels`, in order.
///
/// Returns an empty list when no label is active.
pub fn scan_active_spans(labels: &[SecondaryStructure]) -> Vec<Interval> {
    let mut spans = Vec::new();
    // (0-based start, opening kind)
    let mut open: Option<(usize, SecondaryStructure)> = None;

    for (idx, &label) in labels.iter().enumerate() {
        match open {
            None if label.is_active() => open = Some((idx, label)),
            Some((start, kind)) if label.is_active() && label != kind => {
                spans.push(Interval::new(start + 1, idx));
                open = Some((idx, label));
            }
            Some((start, _)) if !label.is_active() => {
                spans.push(Interval::new(start + 1, idx));
                open = None;
            }
            _ => {}
        }
    }

    if let Some((start, _)) = open {
        spans.push(Interval::new(start + 1, labels.len()));
    }

    for (element, span) in spans.iter().enumerate() {
        debug!(
            element = element + 1,
            start = span.start,
            end = span.end,
            "secondary structure element"
        );
    }

    spans
}

/// Checked form of [`scan_active_spans`]: a tree needs at least one element to root it.
pub fn active_segments(labels: &[SecondaryStructure]) -> Result<Vec<Interval>, FoldTreeError> {
    if labels.is_empty() {
        return Err(FoldTreeError::EmptySequence);
    }

    let spans = scan_active_spans(labels);
    if spans.is_empty() {
        return Err(FoldTreeError::NoActiveSegment {
            length: labels.len(),
        });
    }
    Ok(spans)
}
