//! Family aggregation.
//!
//! Classifiable variables sharing a base (`<group>_<line>`) collapse into
//! one [`Family`]. The catalog's document order drives everything: the first
//! variable seen for a base supplies the family meta, later variables only
//! fill (or overwrite) their own member slot, and the returned list is in
//! family-discovery order.

use std::collections::HashMap;

use tracing::debug;

use acs_model::{Catalog, Family, FamilyMember, FamilyMeta};

use crate::classify::classify;

/// Aggregate a catalog into families, in discovery order.
pub fn aggregate(catalog: &Catalog) -> Vec<Family> {
    let mut families: Vec<Family> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for variable in catalog.iter() {
        let Some(parsed) = classify(&variable.code) else {
            skipped += 1;
            continue;
        };
        let base = parsed.base();

        let slot = match slots.get(&base) {
            Some(&slot) => slot,
            None => {
                let meta = FamilyMeta {
                    base: base.clone(),
                    group: variable.group.clone(),
                    concept: variable.concept.clone(),
                    label: variable.label.clone(),
                };
                families.push(Family::new(meta));
                let slot = families.len() - 1;
                slots.insert(base, slot);
                slot
            }
        };

        families[slot].members.insert(
            parsed.measure,
            FamilyMember {
                var: variable.code.clone(),
                label: variable.label.clone(),
                predicate_type: variable.predicate_type.clone(),
                attribute_codes: variable.attribute_codes.clone(),
            },
        );
    }

    debug!(
        families = families.len(),
        unclassifiable = skipped,
        "aggregated catalog into families"
    );
    families
}

#[cfg(test)]
mod tests {
    use super::*;
    use acs_model::{Measure, RawVariable};

    fn variable(code: &str, label: &str, group: &str) -> RawVariable {
        RawVariable {
            code: code.to_string(),
            label: Some(label.to_string()),
            concept: Some("concept".to_string()),
            group: Some(group.to_string()),
            predicate_type: Some("int".to_string()),
            attribute_codes: Vec::new(),
        }
    }

    #[test]
    fn first_variable_supplies_meta() {
        let catalog = Catalog::new(vec![
            variable("DP02_0126E", "Estimate!!ANCESTRY!!Arab", "DP02"),
            variable("DP02_0126PE", "Percent!!ANCESTRY!!Arab", "DP02"),
        ]);
        let families = aggregate(&catalog);
        assert_eq!(families.len(), 1);

        let family = &families[0];
        assert_eq!(family.base(), "DP02_0126");
        // Meta comes from the first entry; the percent variant only adds a member.
        assert_eq!(family.meta.label.as_deref(), Some("Estimate!!ANCESTRY!!Arab"));
        assert_eq!(
            family.member(Measure::PercentEstimate).map(|m| m.var.as_str()),
            Some("DP02_0126PE")
        );
        assert_eq!(family.members.len(), 2);
    }

    #[test]
    fn unclassifiable_codes_are_skipped() {
        let catalog = Catalog::new(vec![
            RawVariable {
                code: "for".to_string(),
                label: Some("Census API Geography Specification".to_string()),
                concept: None,
                group: None,
                predicate_type: Some("fips-for".to_string()),
                attribute_codes: Vec::new(),
            },
            variable("DP05_0001E", "Estimate!!SEX AND AGE!!Total population", "DP05"),
        ]);
        let families = aggregate(&catalog);
        assert_eq!(families.len(), 1);
        assert_eq!(families[0].base(), "DP05_0001");
    }

    #[test]
    fn discovery_order_is_catalog_order() {
        let catalog = Catalog::new(vec![
            variable("DP05_0001E", "Estimate!!A", "DP05"),
            variable("DP02_0001E", "Estimate!!B", "DP02"),
            variable("DP05_0001M", "Estimate!!A", "DP05"),
        ]);
        let families = aggregate(&catalog);
        let bases: Vec<&str> = families.iter().map(Family::base).collect();
        assert_eq!(bases, ["DP05_0001", "DP02_0001"]);
    }

    #[test]
    fn duplicate_measure_last_seen_wins() {
        let catalog = Catalog::new(vec![
            variable("DP02_0001E", "Estimate!!first", "DP02"),
            variable("DP02_0001E", "Estimate!!second", "DP02"),
        ]);
        let families = aggregate(&catalog);
        assert_eq!(families.len(), 1);
        let member = families[0].member(Measure::Estimate).expect("estimate member");
        assert_eq!(member.label.as_deref(), Some("Estimate!!second"));
    }
}
