//! Structural check: one connected, acyclic component over [1, N]
//!
//! Chain edges expand into their adjacency links, jumps are single links.
//! Traversal runs from the root with a visited bit per residue; reaching a
//! visited residue over any link other than the one we arrived by is a cycle.

use super::{EdgeKind, FoldTree};
use crate::FoldTreeError;
use bitvec::prelude::*;

/// Residue neighbour and the index of the edge that produced the link
type Link = (usize, usize);

/// Verify that `tree` spans [1, N] as a single tree
pub fn check(tree: &FoldTree) -> Result<(), FoldTreeError> {
    let n = tree.len();
    if n == 0 {
        return Err(FoldTreeError::invalid_layout(0, 0, "sequence length is zero"));
    }
    let in_range = |position: usize| -> Result<(), FoldTreeError> {
        if position == 0 || position > n {
            Err(FoldTreeError::PositionOutOfRange {
                position,
                length: n,
            })
        } else {
            Ok(())
        }
    };
    in_range(tree.root())?;

    // Index 0 unused; residues are 1-based.
    let mut adjacency: Vec<Vec<Link>> = vec![Vec::new(); n + 1];
    for (idx, edge) in tree.edges().iter().enumerate() {
        in_range(edge.start)?;
        in_range(edge.stop)?;
        match edge.kind {
            EdgeKind::Jump { .. } => {
                adjacency[edge.start].push((edge.stop, idx));
                adjacency[edge.stop].push((edge.start, idx));
            }
            EdgeKind::Chain => {
                let (low, high) = if edge.start <= edge.stop {
                    (edge.start, edge.stop)
                } else {
                    (edge.stop, edge.start)
                };
                for residue in low..high {
                    adjacency[residue].push((residue + 1, idx));
                    adjacency[residue + 1].push((residue, idx));
                }
            }
        }
    }

    let mut visited = bitvec![0; n + 1];
    // Link (neighbour, edge) each residue was reached by; None for the root.
    let mut arrived_by: Vec<Option<Link>> = vec![None; n + 1];
    let mut stack = vec![tree.root()];
    visited.set(tree.root(), true);

    while let Some(residue) = stack.pop() {
        for &(next, edge_idx) in &adjacency[residue] {
            if arrived_by[residue] == Some((next, edge_idx)) {
                continue;
            }
            if visited[next] {
                let edge = tree.edges()[edge_idx];
                return Err(FoldTreeError::Cycle {
                    start: edge.start,
                    end: edge.stop,
                });
            }
            visited.set(next, true);
            arrived_by[next] = Some((residue, edge_idx));
            stack.push(next);
        }
    }

    if let Some(first) = visited[1..].first_zero().map(|offset| offset + 1) {
        let last = visited[first..]
            .first_one()
            .map_or(n, |offset| first + offset - 1);
        return Err(FoldTreeError::Unreachable {
            start: first,
            end: last,
        });
    }

    Ok(())
}
