//! Fold tree over residues [1, N]
//!
//! Two edge kinds:
//!   Jump  - links two hubs directly, numbered 1, 2, ...
//!   Chain - polymer run from a hub to a target residue, covering every
//!           residue in between
//!
//! A valid tree holds exactly N - 1 adjacency links and reaches every
//! residue from the root.

mod builder;
mod check;

pub use builder::{assemble, TreeBuilder};
pub use check::check;

use std::fmt;

/// Edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeKind {
    /// Rigid-body jump between two hubs
    Jump {
        /// Sequential jump number, starting at 1
        id: usize,
    },

    /// Backbone run from hub to target
    Chain,
}

/// Directed tree edge from `start` (closer to the root) to `stop`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Upstream residue
    pub start: usize,

    /// Downstream residue
    pub stop: usize,

    /// Jump or chain
    pub kind: EdgeKind,
}

impl Edge {
    /// Jump edge with number `id`
    pub fn jump(start: usize, stop: usize, id: usize) -> Self {
        Self {
            start,
            stop,
            kind: EdgeKind::Jump { id },
        }
    }

    /// Chain edge from hub to target
    pub fn chain(start: usize, stop: usize) -> Self {
        Self {
            start,
            stop,
            kind: EdgeKind::Chain,
        }
    }

    /// Whether this is a jump
    #[inline]
    pub fn is_jump(&self) -> bool {
        matches!(self.kind, EdgeKind::Jump { .. })
    }

    /// Jump number, if any
    #[inline]
    pub fn jump_id(&self) -> Option<usize> {
        match self.kind {
            EdgeKind::Jump { id } => Some(id),
            EdgeKind::Chain => None,
        }
    }

    /// Number of adjacency links this edge contributes
    pub fn links(&self) -> usize {
        match self.kind {
            EdgeKind::Jump { .. } => 1,
            EdgeKind::Chain => self.start.abs_diff(self.stop),
        }
    }

    /// Label in the text form: jump number, or -1 for chain
    fn label(&self) -> i64 {
        match self.kind {
            EdgeKind::Jump { id } => id as i64,
            EdgeKind::Chain => -1,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EDGE {} {} {}", self.start, self.stop, self.label())
    }
}

/// Immutable fold tree
///
/// Annotations (e.g. breakable jumps) belong to the consumer and should be
/// keyed by edge index or jump id, never written back into the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldTree {
    length: usize,
    root: usize,
    edges: Vec<Edge>,
}

impl FoldTree {
    pub(crate) fn from_parts(length: usize, root: usize, edges: Vec<Edge>) -> Self {
        Self {
            length,
            root,
            edges,
        }
    }

    /// Number of residues N
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the tree spans no residues
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Root hub
    pub fn root(&self) -> usize {
        self.root
    }

    /// All edges in assembly order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Jump edges in id order
    pub fn jumps(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|edge| edge.is_jump())
    }

    /// Chain edges in assembly order
    pub fn chains(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|edge| !edge.is_jump())
    }

    /// Number of jump edges
    pub fn num_jumps(&self) -> usize {
        self.jumps().count()
    }

    /// Jump numbers in assembly order
    pub fn jump_ids(&self) -> Vec<usize> {
        self.edges.iter().filter_map(Edge::jump_id).collect()
    }

    /// Look up a jump by number
    pub fn jump(&self, id: usize) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.jump_id() == Some(id))
    }

    /// Total adjacency links across all edges
    pub fn num_links(&self) -> usize {
        self.edges.iter().map(Edge::links).sum()
    }

    /// Stable content hash of the text form
    pub fn fingerprint(&self) -> blake3::Hash {
        blake3::hash(self.to_string().as_bytes())
    }
}

impl fmt::Display for FoldTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FOLD_TREE")?;
        for edge in &self.edges {
            write!(f, "  {edge}")?;
        }
        Ok(())
    }
}
