//! The built tree and its read-only query façade.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::sync::{Arc, LazyLock};

use tracing::info;

use acs_catalog::{CatalogError, CatalogSource};
use acs_model::{Catalog, Family, TreeNode};

use crate::builder::build_tree;
use crate::classify::base_for_code;
use crate::families::aggregate;
use crate::index::{build_by_attribute, build_by_group};

static EMPTY_FAMILIES: LazyLock<BTreeMap<String, Arc<Family>>> = LazyLock::new(BTreeMap::new);

/// A tree path, either pre-split tokens or one `/`-delimited string.
#[derive(Debug, Clone, Copy)]
pub enum PathSpec<'a> {
    Tokens(&'a [&'a str]),
    Joined(&'a str),
}

impl<'a> PathSpec<'a> {
    fn tokens(&self) -> Vec<&'a str> {
        match self {
            PathSpec::Tokens(tokens) => tokens.to_vec(),
            PathSpec::Joined(joined) => joined.split('/').filter(|p| !p.is_empty()).collect(),
        }
    }
}

impl<'a> From<&'a str> for PathSpec<'a> {
    fn from(joined: &'a str) -> Self {
        PathSpec::Joined(joined)
    }
}

impl<'a> From<&'a [&'a str]> for PathSpec<'a> {
    fn from(tokens: &'a [&'a str]) -> Self {
        PathSpec::Tokens(tokens)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for PathSpec<'a> {
    fn from(tokens: &'a [&'a str; N]) -> Self {
        PathSpec::Tokens(tokens)
    }
}

/// The classified catalog: topic tree plus lookup indexes.
///
/// Built once from a catalog snapshot; every structure is immutable
/// afterwards, so a `ProfileTree` can be shared freely across reader
/// threads. All queries are pure reads and report absence as `None` or an
/// empty collection, never as an error.
pub struct ProfileTree {
    root: TreeNode,
    /// All families keyed by base.
    families: BTreeMap<String, Arc<Family>>,
    /// All families in discovery (catalog) order.
    ordered: Vec<Arc<Family>>,
    by_group: BTreeMap<String, Vec<Arc<Family>>>,
    by_attribute: HashMap<String, Arc<Family>>,
}

impl ProfileTree {
    /// Classify and arrange a loaded catalog.
    pub fn build(catalog: &Catalog) -> Self {
        let ordered: Vec<Arc<Family>> = aggregate(catalog).into_iter().map(Arc::new).collect();
        let families: BTreeMap<String, Arc<Family>> = ordered
            .iter()
            .map(|family| (family.base().to_string(), Arc::clone(family)))
            .collect();
        let root = build_tree(&ordered);
        let by_group = build_by_group(&ordered);
        let by_attribute = build_by_attribute(catalog, &families);

        info!(
            variables = catalog.len(),
            families = families.len(),
            groups = by_group.len(),
            "built profile tree"
        );
        Self {
            root,
            families,
            ordered,
            by_group,
            by_attribute,
        }
    }

    /// Load a catalog from `source` and build the tree. A failed load
    /// aborts construction; no partial tree is produced.
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let catalog = source.load()?;
        Ok(Self::build(&catalog))
    }

    /// The root of the topic tree.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// All families keyed by base.
    pub fn families(&self) -> &BTreeMap<String, Arc<Family>> {
        &self.families
    }

    /// All families in discovery order.
    pub fn families_ordered(&self) -> &[Arc<Family>] {
        &self.ordered
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// The node at `path`, or `None` if any token is missing on the walk.
    pub fn subtree<'a>(&self, path: impl Into<PathSpec<'a>>) -> Option<&TreeNode> {
        let mut node = &self.root;
        for token in path.into().tokens() {
            node = node.child(token)?;
        }
        Some(node)
    }

    /// The families bag at `path`; empty when the node is missing or holds
    /// no families.
    pub fn families_at<'a>(&self, path: impl Into<PathSpec<'a>>) -> &BTreeMap<String, Arc<Family>> {
        self.subtree(path)
            .map(|node| &node.families)
            .unwrap_or(&*EMPTY_FAMILIES)
    }

    /// The family owning any of its member codes (e.g. `DP02_0126E`).
    pub fn family_by_code(&self, code: &str) -> Option<&Arc<Family>> {
        let base = base_for_code(code)?;
        self.families.get(&base)
    }

    /// Families for a topic group, in discovery order.
    pub fn by_group(&self, group: &str) -> &[Arc<Family>] {
        self.by_group.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The family last registered under an attribute code.
    pub fn by_attribute(&self, code: &str) -> Option<&Arc<Family>> {
        self.by_attribute.get(code)
    }

    /// Plain-text preview of the tree, capped at `max_children` child nodes
    /// per level, for interactive exploration.
    pub fn render_preview(&self, max_children: usize) -> String {
        let mut out = String::new();
        render_node(&mut out, &self.root, 0, max_children);
        out
    }
}

fn render_node(out: &mut String, node: &TreeNode, depth: usize, max_children: usize) {
    let indent = "  ".repeat(depth);
    if node.has_families() {
        let _ = writeln!(out, "{indent}[{} families]", node.families.len());
    }
    for (token, child) in node.children.iter().take(max_children) {
        let _ = writeln!(out, "{indent}- {token}");
        render_node(out, child, depth + 1, max_children);
    }
    let remaining = node.children.len().saturating_sub(max_children);
    if remaining > 0 {
        let _ = writeln!(out, "{indent}... (+{remaining} more)");
    }
}
