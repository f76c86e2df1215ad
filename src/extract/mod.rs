//! Walks the entities of one class and resolves everything the quantity
//! table needs: property sets, quantity sets, container and type.

use std::collections::BTreeSet;

use crate::model::{IfcModel, ObjectRecord, PropertySets};
use crate::parser::ifc::{get_container, get_predefined_type, get_psets, get_type, PsetKind};

/// Result of one extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// One record per matching entity, in id order.
    pub records: Vec<ObjectRecord>,
    /// Every `set.property` pair seen across all records, sorted.
    pub pset_attributes: Vec<String>,
}

/// Extracts a record for every entity of `class` (subtypes included).
///
/// Relations that are absent degrade to empty names or empty set maps; the
/// pass never fails on a heterogeneous entity population.
#[must_use]
pub fn objects_data_by_class(model: &IfcModel, class: &str) -> Extraction {
    let mut pset_attributes = BTreeSet::new();
    let mut records = Vec::new();

    for entity in model.by_type(class) {
        let quantity_sets = get_psets(model, entity.id, PsetKind::Quantities);
        add_pset_attributes(&quantity_sets, &mut pset_attributes);
        let property_sets = get_psets(model, entity.id, PsetKind::Properties);
        add_pset_attributes(&property_sets, &mut pset_attributes);

        records.push(ObjectRecord {
            id: entity.id,
            global_id: model.global_id_of(entity).map(str::to_string),
            class: model.class_of(entity).to_string(),
            predefined_type: get_predefined_type(model, entity.id),
            name: model.name_of(entity).map(str::to_string),
            level: get_container(model, entity.id)
                .and_then(|e| model.name_of(e))
                .unwrap_or_default()
                .to_string(),
            type_name: get_type(model, entity.id)
                .and_then(|e| model.name_of(e))
                .unwrap_or_default()
                .to_string(),
            quantity_sets,
            property_sets,
        });
    }

    tracing::debug!(
        class,
        records = records.len(),
        columns = pset_attributes.len(),
        "extracted objects"
    );

    Extraction {
        records,
        pset_attributes: pset_attributes.into_iter().collect(),
    }
}

fn add_pset_attributes(sets: &PropertySets, attributes: &mut BTreeSet<String>) {
    for (set_name, properties) in sets {
        for property_name in properties.keys().filter(|k| *k != "id") {
            attributes.insert(format!("{set_name}.{property_name}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;
    use crate::parser::parse_ifc_str;
    use pretty_assertions::assert_eq;

    const MODEL: &str = "DATA;
#10=IFCBUILDINGSTOREY('s',$,'Level 1',$,$,$,$,$,.ELEMENT.,0.);
#21=IFCWALL('w1',$,'Wall A',$,$,$,$,$,.SOLIDWALL.);
#22=IFCWALL('w2',$,$,$,$,$,$,$,$);
#23=IFCWALLTYPE('t',$,'Type',$,$,$,$,$,$,.STANDARD.);
#30=IFCQUANTITYLENGTH('Width',$,$,200.,$);
#32=IFCELEMENTQUANTITY('q',$,'Qto_WallBaseQuantities',$,$,(#30));
#33=IFCRELDEFINESBYPROPERTIES('r1',$,$,$,(#21),#32);
#51=IFCRELCONTAINEDINSPATIALSTRUCTURE('rc',$,$,$,(#21),#10);
ENDSEC;";

    #[test]
    fn one_record_per_entity_with_degraded_relations() {
        let model = parse_ifc_str(MODEL).unwrap();
        let extraction = objects_data_by_class(&model, "IfcWall");

        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.pset_attributes, vec!["Qto_WallBaseQuantities.Width"]);

        let a = &extraction.records[0];
        assert_eq!(a.class, "IfcWall");
        assert_eq!(a.level, "Level 1");
        assert_eq!(a.predefined_type.as_deref(), Some("SOLIDWALL"));
        assert_eq!(
            a.quantity_sets["Qto_WallBaseQuantities"]["Width"],
            Value::Real(200.0)
        );

        let b = &extraction.records[1];
        assert_eq!(b.name, None);
        assert_eq!(b.level, "");
        assert_eq!(b.type_name, "");
        assert!(b.quantity_sets.is_empty());
        assert!(b.property_sets.is_empty());
    }

    #[test]
    fn unmatched_class_yields_nothing() {
        let model = parse_ifc_str(MODEL).unwrap();
        let extraction = objects_data_by_class(&model, "IfcDoor");
        assert!(extraction.records.is_empty());
        assert!(extraction.pset_attributes.is_empty());
    }
}
