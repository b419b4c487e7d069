//! Secondary lookup indexes, built independently of the tree.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use acs_model::{Catalog, Family};

use crate::classify::base_for_code;

/// Group families by their topic group, preserving family-discovery order
/// within each group. Families with no group metadata are not indexable and
/// are left out.
pub fn build_by_group(families: &[Arc<Family>]) -> BTreeMap<String, Vec<Arc<Family>>> {
    let mut by_group: BTreeMap<String, Vec<Arc<Family>>> = BTreeMap::new();
    for family in families {
        if let Some(group) = &family.meta.group {
            by_group
                .entry(group.clone())
                .or_default()
                .push(Arc::clone(family));
        }
    }
    by_group
}

/// Map each attribute code back to its owning family.
///
/// This pass walks raw variables (not families) in catalog order and
/// re-derives the base for each classifiable variable. If several variables
/// claim the same attribute code, the last one in catalog order wins; that
/// is a known upstream data-quality edge, not an error.
pub fn build_by_attribute(
    catalog: &Catalog,
    families: &BTreeMap<String, Arc<Family>>,
) -> HashMap<String, Arc<Family>> {
    let mut by_attribute: HashMap<String, Arc<Family>> = HashMap::new();
    for variable in catalog.iter() {
        if variable.attribute_codes.is_empty() {
            continue;
        }
        let Some(base) = base_for_code(&variable.code) else {
            continue;
        };
        let Some(family) = families.get(&base) else {
            continue;
        };
        for code in &variable.attribute_codes {
            by_attribute.insert(code.clone(), Arc::clone(family));
        }
    }
    debug!(attributes = by_attribute.len(), "built attribute index");
    by_attribute
}

#[cfg(test)]
mod tests {
    use super::*;
    use acs_model::{FamilyMeta, RawVariable};

    fn family(base: &str, group: Option<&str>) -> Arc<Family> {
        Arc::new(Family::new(FamilyMeta {
            base: base.to_string(),
            group: group.map(ToString::to_string),
            concept: None,
            label: None,
        }))
    }

    #[test]
    fn groups_keep_discovery_order() {
        let families = [
            family("DP05_0003", Some("DP05")),
            family("DP02_0001", Some("DP02")),
            family("DP05_0001", Some("DP05")),
            family("NO_GROUP", None),
        ];
        let by_group = build_by_group(&families);

        assert_eq!(by_group.len(), 2);
        let dp05: Vec<&str> = by_group["DP05"].iter().map(|f| f.base()).collect();
        assert_eq!(dp05, ["DP05_0003", "DP05_0001"]);
    }

    #[test]
    fn attribute_codes_resolve_to_owning_family() {
        let catalog = Catalog::new(vec![
            RawVariable {
                code: "DP05_0050E".to_string(),
                label: None,
                concept: None,
                group: Some("DP05".to_string()),
                predicate_type: None,
                attribute_codes: vec!["DP05_0050EA".to_string(), "DP05_0050PMA".to_string()],
            },
            // Unclassifiable entries never claim attributes.
            RawVariable {
                code: "for".to_string(),
                label: None,
                concept: None,
                group: None,
                predicate_type: None,
                attribute_codes: vec!["DP05_0050PMA".to_string()],
            },
        ]);
        let mut families = BTreeMap::new();
        families.insert("DP05_0050".to_string(), family("DP05_0050", Some("DP05")));

        let by_attribute = build_by_attribute(&catalog, &families);
        assert_eq!(by_attribute.len(), 2);
        assert_eq!(by_attribute["DP05_0050PMA"].base(), "DP05_0050");
    }

    #[test]
    fn last_claimant_wins_in_catalog_order() {
        let catalog = Catalog::new(vec![
            RawVariable {
                code: "DP02_0001E".to_string(),
                label: None,
                concept: None,
                group: Some("DP02".to_string()),
                predicate_type: None,
                attribute_codes: vec!["SHARED".to_string()],
            },
            RawVariable {
                code: "DP03_0001E".to_string(),
                label: None,
                concept: None,
                group: Some("DP03".to_string()),
                predicate_type: None,
                attribute_codes: vec!["SHARED".to_string()],
            },
        ]);
        let mut families = BTreeMap::new();
        families.insert("DP02_0001".to_string(), family("DP02_0001", Some("DP02")));
        families.insert("DP03_0001".to_string(), family("DP03_0001", Some("DP03")));

        let by_attribute = build_by_attribute(&catalog, &families);
        assert_eq!(by_attribute["SHARED"].base(), "DP03_0001");
    }
}
