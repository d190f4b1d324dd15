//! Interchangeable fold tree assembly policies selected by name.

mod api;
mod policies;
mod registry;

pub use api::FoldPolicy;
pub use policies::{Canonical, Legacy};
pub use registry::{PolicyInfo, PolicyRegistry};
