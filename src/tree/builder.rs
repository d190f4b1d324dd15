//! Fold tree assembly from a segment layout
//!
//! Pass 1: jump from the root hub to the hub of every later active element
//! Pass 2: jump from the root hub to the hub of every interior gap
//! Pass 3: chain edges out of every active hub
//! Pass 4: chain edges out of every interior gap hub
//!
//! The first element's chains reach residue 1 and the last element's reach
//! residue N, which covers the leading and trailing gaps whatever their length.

use super::{Edge, FoldTree};
use crate::segment::{Interval, SegmentLayout};
use tracing::trace;

/// Edge sink that numbers jumps and drops self-referential chains
#[derive(Debug)]
pub struct TreeBuilder {
    length: usize,
    root: usize,
    edges: Vec<Edge>,
    next_jump: usize,
}

impl TreeBuilder {
    /// Empty tree over [1, length] rooted at `root`
    pub fn new(length: usize, root: usize) -> Self {
        Self {
            length,
            root,
            edges: Vec::new(),
            next_jump: 1,
        }
    }

    /// Root hub
    pub fn root(&self) -> usize {
        self.root
    }

    /// Sequence length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Add a jump with the next sequential id and return that id
    pub fn add_jump(&mut self, start: usize, stop: usize) -> usize {
        let id = self.next_jump;
        self.next_jump += 1;
        trace!(start, stop, id, "jump edge");
        self.edges.push(Edge::jump(start, stop, id));
        id
    }

    /// Add a chain from `hub` to `target`; skipped when they coincide
    pub fn add_chain(&mut self, hub: usize, target: usize) -> bool {
        if hub == target {
            return false;
        }
        trace!(hub, target, "chain edge");
        self.edges.push(Edge::chain(hub, target));
        true
    }

    /// Chains from the hub of `span` to both of its ends
    pub fn add_span_chains(&mut self, span: &Interval) {
        let hub = span.midpoint();
        self.add_chain(hub, span.start);
        self.add_chain(hub, span.end);
    }

    /// Freeze into a [`FoldTree`]
    pub fn finish(self) -> FoldTree {
        FoldTree::from_parts(self.length, self.root, self.edges)
    }
}

/// Assemble the always-spanning fold tree for `layout`
pub fn assemble(layout: &SegmentLayout) -> FoldTree {
    let n = layout.length();
    let active = layout.active();
    let mut builder = TreeBuilder::new(n, layout.root());
    let root = builder.root();

    for span in &active[1..] {
        builder.add_jump(root, span.midpoint());
    }
    for gap in layout.interior_gaps() {
        builder.add_jump(root, gap.span.midpoint());
    }

    let last = active.len() - 1;
    for (idx, span) in active.iter().enumerate() {
        let hub = span.midpoint();
        match (idx == 0, idx == last) {
            // Lone element: the terminus chains pass through both of its ends.
            (true, true) => {
                builder.add_chain(hub, 1);
                builder.add_chain(hub, n);
            }
            (true, false) => {
                builder.add_chain(hub, 1);
                builder.add_chain(hub, span.end);
            }
            (false, true) => {
                builder.add_chain(hub, span.start);
                builder.add_chain(hub, n);
            }
            (false, false) => builder.add_span_chains(span),
        }
    }

    for gap in layout.interior_gaps() {
        builder.add_span_chains(&gap.span);
    }

    builder.finish()
}
