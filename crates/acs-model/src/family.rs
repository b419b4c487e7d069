use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::measure::Measure;

/// Family-level metadata, taken from the first catalog entry seen for the
/// base. Later members contribute only their own entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMeta {
    pub base: String,
    pub group: Option<String>,
    pub concept: Option<String>,
    /// Representative label, used to place the family in the topic tree.
    pub label: Option<String>,
}

/// One measure variant of a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// The source variable code, e.g. `DP02_0126E`.
    pub var: String,
    pub label: Option<String>,
    pub predicate_type: Option<String>,
    pub attribute_codes: Vec<String>,
}

/// One logical statistic and its measure variants.
///
/// At most one member per measure; members iterate in canonical measure-name
/// order because `Measure`'s variant order matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub meta: FamilyMeta,
    pub members: BTreeMap<Measure, FamilyMember>,
}

impl Family {
    pub fn new(meta: FamilyMeta) -> Self {
        Self {
            meta,
            members: BTreeMap::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.meta.base
    }

    pub fn member(&self, measure: Measure) -> Option<&FamilyMember> {
        self.members.get(&measure)
    }

    /// Measures present on this family, in canonical-name order.
    pub fn measures(&self) -> impl Iterator<Item = Measure> + '_ {
        self.members.keys().copied()
    }
}
