//! Label tree construction.
//!
//! A family's representative label is a `!!`-delimited path, e.g.
//! `Estimate!!ANCESTRY!!Total population!!Arab`. The leading measure-type
//! marker (`Estimate`/`Percent`) is dropped so the tree is organized by
//! topic rather than measure, and degenerate labels fall back to a
//! single-token path.

use std::sync::Arc;

use acs_model::{Family, TreeNode};

/// Label path delimiter used by the catalog.
pub const LABEL_DELIMITER: &str = "!!";

/// Resolve the tree path for a family from its representative label.
///
/// Fallback for missing or degenerate labels: concept, then group, then the
/// base id, whichever is non-empty first.
pub fn label_path(family: &Family) -> Vec<String> {
    let label = family.meta.label.as_deref().unwrap_or("");
    let mut path: Vec<String> = label
        .split(LABEL_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect();

    if path
        .first()
        .is_some_and(|t| t.eq_ignore_ascii_case("estimate") || t.eq_ignore_ascii_case("percent"))
    {
        path.remove(0);
    }

    if path.is_empty() {
        let fallback = family
            .meta
            .concept
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| family.meta.group.clone().filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| family.meta.base.clone());
        path.push(fallback);
    }

    path
}

/// Insert every family at its label path, creating intermediate nodes as
/// needed. Families with identical paths coexist in one node's bag, keyed
/// by base.
pub fn build_tree(families: &[Arc<Family>]) -> TreeNode {
    let mut root = TreeNode::default();
    for family in families {
        let mut node = &mut root;
        for token in label_path(family) {
            node = node.children.entry(token).or_default();
        }
        node.families
            .insert(family.base().to_string(), Arc::clone(family));
    }
    root
}
