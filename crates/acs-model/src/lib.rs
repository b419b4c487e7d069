//! Data model for the ACS data-profile variable tree.
//!
//! The upstream catalog is a flat map from variable code to metadata. This
//! crate defines the typed shapes the pipeline works with:
//!
//! - [`RawVariable`] / [`Catalog`]: the catalog as loaded, in document order
//! - [`Measure`] / [`ParsedCode`]: the code grammar's output
//! - [`Family`]: one statistic with its measure variants
//! - [`TreeNode`]: the label-driven topic tree

pub mod family;
pub mod measure;
pub mod node;
pub mod variable;

pub use family::{Family, FamilyMember, FamilyMeta};
pub use measure::Measure;
pub use node::TreeNode;
pub use variable::{Catalog, ParsedCode, RawVariable};
