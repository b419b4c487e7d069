use std::collections::BTreeMap;
use std::sync::Arc;

use crate::family::Family;

/// One node of the label-driven topic tree.
///
/// A node may have children, hold families, or both: a family's label path
/// can be a strict prefix of another's. Both maps are always present, and
/// both are ordered, so traversal order is fixed at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Child nodes keyed by label token.
    pub children: BTreeMap<String, TreeNode>,
    /// Families anchored at this node, keyed by base.
    pub families: BTreeMap<String, Arc<Family>>,
}

impl TreeNode {
    pub fn child(&self, token: &str) -> Option<&TreeNode> {
        self.children.get(token)
    }

    pub fn has_families(&self) -> bool {
        !self.families.is_empty()
    }

    /// Total number of families in this subtree, this node included.
    pub fn family_count(&self) -> usize {
        self.families.len()
            + self
                .children
                .values()
                .map(TreeNode::family_count)
                .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::FamilyMeta;

    fn family(base: &str) -> Arc<Family> {
        Arc::new(Family::new(FamilyMeta {
            base: base.to_string(),
            group: None,
            concept: None,
            label: None,
        }))
    }

    #[test]
    fn counts_families_across_levels() {
        let mut root = TreeNode::default();
        root.families
            .insert("DP02_0001".to_string(), family("DP02_0001"));
        let mut child = TreeNode::default();
        child
            .families
            .insert("DP02_0002".to_string(), family("DP02_0002"));
        root.children.insert("ANCESTRY".to_string(), child);

        assert_eq!(root.family_count(), 2);
        assert!(root.has_families());
        assert!(root.child("ANCESTRY").is_some());
        assert!(root.child("HOUSING").is_none());
    }
}
