//! Catalog acquisition for the ACS profile variable tree.
//!
//! The upstream catalog is a single JSON document with a top-level
//! `variables` map from code to metadata. This crate turns that document
//! into an [`acs_model::Catalog`] while preserving document order, behind a
//! [`CatalogSource`] seam so the tree pipeline can be driven from fixtures
//! as easily as from the live endpoint.

pub mod decode;
pub mod error;
pub mod source;

pub use decode::decode_catalog;
pub use error::CatalogError;
pub use source::{
    CatalogSource, DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT, FileCatalogSource, HttpCatalogConfig,
    HttpCatalogSource,
};
