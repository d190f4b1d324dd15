use std::collections::BTreeMap;
use std::sync::Arc;

use crate::policy::{Canonical, FoldPolicy, Legacy};
use crate::FoldTreeError;

/// Metadata describing a registered policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyInfo {
    /// Lookup name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Whether output is guaranteed to span the sequence.
    pub spans_all: bool,
}

/// Registry of available fold policies, keyed by name.
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    entries: BTreeMap<String, Arc<dyn FoldPolicy>>,
}

impl PolicyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry holding the built-in `canonical` and `legacy` policies.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Canonical);
        registry.register(Legacy);
        registry
    }

    /// Register a policy under its own name, replacing any previous entry,
    /// and return a shared handle to it.
    pub fn register<P>(&mut self, policy: P) -> Arc<dyn FoldPolicy>
    where
        P: FoldPolicy,
    {
        let arc: Arc<dyn FoldPolicy> = Arc::new(policy);
        self.entries.insert(arc.name().to_string(), Arc::clone(&arc));
        arc
    }

    /// Retrieve a policy by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn FoldPolicy>, FoldTreeError> {
        self.entries
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| FoldTreeError::UnknownPolicy(name.to_string()))
    }

    /// List all registered policies, ordered by name.
    pub fn list(&self) -> Vec<PolicyInfo> {
        self.entries
            .iter()
            .map(|(name, policy)| PolicyInfo {
                name: name.clone(),
                description: policy.description().to_string(),
                spans_all: policy.spans_all(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_listed_by_name() {
        let registry = PolicyRegistry::with_defaults();
        let names: Vec<_> = registry.list().into_iter().map(|info| info.name).collect();
        assert_eq!(names, vec!["canonical", "legacy"]);
        assert!(registry.get("canonical").unwrap().spans_all());
        assert!(!registry.get("legacy").unwrap().spans_all());
    }

    #[test]
    fn test_missing_policy() {
        let registry = PolicyRegistry::new();
        assert!(matches!(
            registry.get("canonical"),
            Err(FoldTreeError::UnknownPolicy(name)) if name == "canonical"
        ));
    }
}
