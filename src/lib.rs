//! # Fold Trees from Secondary Structure
//!
//! Builds a fold tree spanning every residue of a chain from its per-residue
//! secondary structure string, so that each element and each loop can be
//! perturbed independently by a sampler.
//!
//! ## Pipeline
//!
//! 1. **Scan**: split the labels into maximal strand/helix elements
//! 2. **Gaps**: derive the loop runs between and around the elements
//! 3. **Hubs**: take the truncating midpoint of every interval
//! 4. **Assemble**: jump from the first element's hub to every other hub,
//!    then chain each hub out to its interval ends and the chain termini
//!
//! Result: a single connected, acyclic tree over [1, N] with N - 1 links.
//!
//! ## Usage Example
//!
//! ```
//! use foldtree::{FoldTreeConfig, Pipeline};
//!
//! let pipeline = Pipeline::new(FoldTreeConfig::default())?;
//! let tree = pipeline.build_from_str("  EEE  HH ")?;
//! assert_eq!(tree.root(), 4);
//! assert_eq!(tree.num_jumps(), 2);
//! # Ok::<(), foldtree::FoldTreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod policy;  // Named assembly strategies
pub mod segment; // Labels, intervals, scanning, gaps
pub mod tree;    // Fold tree value, assembly and checking

pub use policy::{Canonical, FoldPolicy, Legacy, PolicyInfo, PolicyRegistry};
pub use segment::{Gap, GapKind, Interval, SecondaryStructure, SegmentLayout, SymbolMap};
pub use tree::{Edge, EdgeKind, FoldTree};

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Broad classification of a [`FoldTreeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Degenerate label sequence
    Input,

    /// Invalid layout or configuration handed to the builder
    Config,

    /// Assembled tree is not a single spanning tree
    Structural,
}

/// Errors that can occur while building or checking a fold tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FoldTreeError {
    /// Label sequence has no residues
    #[error("empty secondary structure sequence")]
    EmptySequence,

    /// No strand or helix residue in the sequence
    #[error("no active segment found in {length} residues")]
    NoActiveSegment {
        /// Sequence length
        length: usize,
    },

    /// Layout cannot root or span a tree
    #[error("invalid layout at [{start}, {end}]: {reason}")]
    InvalidLayout {
        /// First residue of the offending interval
        start: usize,
        /// Last residue of the offending interval
        end: usize,
        /// What is wrong with it
        reason: String,
    },

    /// No policy registered under the requested name
    #[error("unknown fold policy '{0}'")]
    UnknownPolicy(String),

    /// An edge closes a cycle
    #[error("edge {start} -> {end} closes a cycle")]
    Cycle {
        /// Upstream residue of the edge
        start: usize,
        /// Downstream residue of the edge
        end: usize,
    },

    /// Residues not reachable from the root
    #[error("residues [{start}, {end}] are unreachable from the root")]
    Unreachable {
        /// First unreachable residue
        start: usize,
        /// Last residue of the unreachable run
        end: usize,
    },

    /// Edge endpoint outside [1, N]
    #[error("residue {position} outside [1, {length}]")]
    PositionOutOfRange {
        /// Offending residue
        position: usize,
        /// Sequence length
        length: usize,
    },
}

impl FoldTreeError {
    /// Helper for constructing layout errors
    pub fn invalid_layout(start: usize, end: usize, reason: impl Into<String>) -> Self {
        FoldTreeError::InvalidLayout {
            start,
            end,
            reason: reason.into(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FoldTreeError::EmptySequence | FoldTreeError::NoActiveSegment { .. } => {
                ErrorKind::Input
            }
            FoldTreeError::InvalidLayout { .. } | FoldTreeError::UnknownPolicy(_) => {
                ErrorKind::Config
            }
            FoldTreeError::Cycle { .. }
            | FoldTreeError::Unreachable { .. }
            | FoldTreeError::PositionOutOfRange { .. } => ErrorKind::Structural,
        }
    }
}

/// Configuration for fold tree construction
///
/// Constructed once by the owner and handed to [`Pipeline::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldTreeConfig {
    /// Label byte mapping
    pub symbols: SymbolMap,

    /// Name of the assembly policy
    pub policy: String,

    /// Check the assembled tree when the policy claims to span the sequence
    pub verify: bool,
}

impl Default for FoldTreeConfig {
    fn default() -> Self {
        Self {
            symbols: SymbolMap::dssp(),
            policy: Canonical.name().to_string(),
            verify: true,
        }
    }
}

impl FoldTreeConfig {
    /// Default configuration with another policy
    pub fn with_policy(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            ..Self::default()
        }
    }
}

/// Label string to fold tree orchestrator
///
/// Stateless between calls; one instance may be shared across threads.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: FoldTreeConfig,
    policy: Arc<dyn FoldPolicy>,
}

impl Pipeline {
    /// Create a pipeline using the built-in policies
    pub fn new(config: FoldTreeConfig) -> Result<Self, FoldTreeError> {
        Self::with_registry(config, &PolicyRegistry::with_defaults())
    }

    /// Create a pipeline resolving the policy from `registry`
    pub fn with_registry(
        config: FoldTreeConfig,
        registry: &PolicyRegistry,
    ) -> Result<Self, FoldTreeError> {
        let policy = registry.get(&config.policy)?;
        Ok(Self { config, policy })
    }

    /// Active configuration
    pub fn config(&self) -> &FoldTreeConfig {
        &self.config
    }

    /// Selected policy
    pub fn policy(&self) -> &dyn FoldPolicy {
        self.policy.as_ref()
    }

    /// Classify a raw label string with the configured symbol map
    pub fn labels(&self, ss: &str) -> Vec<SecondaryStructure> {
        self.config.symbols.labels(ss)
    }

    /// Scan and resolve the layout of a raw label string
    pub fn layout(&self, ss: &str) -> Result<SegmentLayout, FoldTreeError> {
        SegmentLayout::from_labels(&self.labels(ss))
    }

    /// Build the fold tree for a raw label string
    pub fn build_from_str(&self, ss: &str) -> Result<FoldTree, FoldTreeError> {
        self.build(&self.labels(ss))
    }

    /// Build the fold tree for classified labels
    pub fn build(&self, labels: &[SecondaryStructure]) -> Result<FoldTree, FoldTreeError> {
        let layout = SegmentLayout::from_labels(labels)?;
        self.build_layout(&layout)
    }

    /// Build the fold tree for an already resolved layout
    pub fn build_layout(&self, layout: &SegmentLayout) -> Result<FoldTree, FoldTreeError> {
        let tree = self.policy.assemble(layout);
        debug!(
            policy = self.policy.name(),
            residues = tree.len(),
            root = tree.root(),
            jumps = tree.num_jumps(),
            edges = tree.edges().len(),
            "assembled fold tree"
        );

        if self.config.verify && self.policy.spans_all() {
            crate::tree::check(&tree)?;
        }
        Ok(tree)
    }
}
