//! Classification pipeline for the ACS profile variable catalog.
//!
//! One pass over the catalog produces a [`ProfileTree`]:
//!
//! 1. [`classify`] parses each code against the fixed grammar
//! 2. [`families::aggregate`] folds measure variants into families
//! 3. [`builder::build_tree`] arranges families by their label paths
//! 4. [`index`] derives the group and attribute lookups
//!
//! The result is immutable; [`ProfileTree`] exposes the read API.

pub mod builder;
pub mod classify;
pub mod families;
pub mod index;
pub mod tree;

pub use classify::classify;
pub use tree::{PathSpec, ProfileTree};
