use serde::{Deserialize, Serialize};

use crate::measure::Measure;

/// One catalog entry, as loaded. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVariable {
    pub code: String,
    pub label: Option<String>,
    pub concept: Option<String>,
    pub group: Option<String>,
    pub predicate_type: Option<String>,
    /// Annotation/footnote codes listed on the variable, in catalog order,
    /// de-duplicated.
    pub attribute_codes: Vec<String>,
}

/// The upstream variable catalog in document order.
///
/// Document order is the deterministic iteration order for everything built
/// downstream (family aggregation, group discovery, attribute claiming).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    variables: Vec<RawVariable>,
}

impl Catalog {
    pub fn new(variables: Vec<RawVariable>) -> Self {
        Self { variables }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawVariable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Look up a raw entry by its exact code.
    pub fn get(&self, code: &str) -> Option<&RawVariable> {
        self.variables.iter().find(|v| v.code == code)
    }
}

/// A variable code decomposed by the fixed grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCode {
    /// Topic group token, e.g. `DP02` or `DP02P`.
    pub group: String,
    /// Four-digit line number, kept as written (leading zeros matter).
    pub line: String,
    pub measure: Measure,
}

impl ParsedCode {
    /// The family identity key, `<group>_<line>`.
    pub fn base(&self) -> String {
        format!("{}_{}", self.group, self.line)
    }
}
