//! JSON decoding of the catalog document.
//!
//! `serde_json` is built with `preserve_order`, so the `variables` map keeps
//! the document's own key order. That order is the deterministic iteration
//! order the rest of the pipeline depends on.

use serde::Deserialize;

use acs_model::{Catalog, RawVariable};

use crate::error::CatalogError;

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    variables: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct VariableDef {
    label: Option<String>,
    concept: Option<String>,
    group: Option<String>,
    #[serde(rename = "predicateType")]
    predicate_type: Option<String>,
    /// Comma-separated annotation codes, possibly absent.
    attributes: Option<String>,
}

/// Decode a catalog document into a [`Catalog`], in document order.
pub fn decode_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(text).map_err(|source| CatalogError::Decode { source })?;

    let mut variables = Vec::with_capacity(document.variables.len());
    for (code, value) in document.variables {
        let def: VariableDef =
            serde_json::from_value(value).map_err(|source| CatalogError::Entry {
                code: code.clone(),
                source,
            })?;
        variables.push(RawVariable {
            code,
            label: def.label,
            concept: def.concept,
            group: def.group,
            predicate_type: def.predicate_type,
            attribute_codes: split_attribute_codes(def.attributes.as_deref()),
        });
    }

    tracing::debug!(variables = variables.len(), "decoded catalog document");
    Ok(Catalog::new(variables))
}

/// Split the comma-separated `attributes` field into an ordered,
/// de-duplicated list of codes.
fn split_attribute_codes(attributes: Option<&str>) -> Vec<String> {
    let Some(attributes) = attributes else {
        return Vec::new();
    };

    let mut codes: Vec<String> = Vec::new();
    for code in attributes.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if !codes.iter().any(|seen| seen == code) {
            codes.push(code.to_string());
        }
    }
    codes
}
