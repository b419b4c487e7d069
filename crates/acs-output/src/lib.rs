//! XML output for the ACS profile topic tree.
//!
//! The document mirrors the tree: `Node name=".."` containers, then
//! `Family` records with their `Member` variants. Ordering is fixed at
//! every level (nodes by token, families by base, members by measure name),
//! and the destination file is replaced atomically.

mod xml;

pub use xml::{DEFAULT_ROOT_NAME, XmlOptions, write_tree, write_tree_xml};
