use crate::error::ParseError;
use crate::model::{IfcModel, PropertyMap, PropertySets, Value};
use crate::parser::step::{StepEntity, StepFile, StepValue};
use std::path::Path;

/// Which property definitions [`get_psets`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsetKind {
    /// `IfcPropertySet` definitions.
    Properties,
    /// `IfcElementQuantity` definitions.
    Quantities,
}

/// Parses an IFC file into an entity graph.
///
/// Supports both IFC2x3 and IFC4 exchange files. Entity records may span
/// several lines; comments are ignored.
///
/// # Arguments
///
/// * `path` - Path to the IFC file
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be read.
/// Returns [`ParseError::InvalidStep`] if the STEP format is malformed.
///
/// # Example
///
/// ```no_run
/// use ifc_stream::parser::parse_ifc_file;
///
/// let model = parse_ifc_file("model.ifc")?;
/// println!("{} walls", model.by_type("IfcWall").len());
/// # Ok::<(), ifc_stream::error::ParseError>(())
/// ```
pub fn parse_ifc_file<P: AsRef<Path>>(path: P) -> Result<IfcModel, ParseError> {
    let content = std::fs::read_to_string(&path).map_err(|source| ParseError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.as_ref().display(), bytes = content.len(), "loading IFC file");
    parse_ifc_str(&content)
}

/// Parses uploaded file bytes, which must be UTF-8 text.
pub fn parse_ifc_bytes(bytes: Vec<u8>) -> Result<IfcModel, ParseError> {
    let content = String::from_utf8(bytes)?;
    parse_ifc_str(&content)
}

pub fn parse_ifc_str(content: &str) -> Result<IfcModel, ParseError> {
    let step_file = StepFile::parse(content)?;
    Ok(IfcModel::new(step_file))
}

/// Spatial structure element that directly contains the entity.
#[must_use]
pub fn get_container(model: &IfcModel, id: u64) -> Option<&StepEntity> {
    model
        .relations_to(id, "IfcRelContainedInSpatialStructure", "RelatedElements")
        .into_iter()
        .find_map(|rel| {
            model.attribute_of(rel, "RelatingStructure")
                .and_then(StepValue::as_reference)
                .and_then(|sid| model.entity(sid))
        })
}

/// Type object assigned through `IfcRelDefinesByType`.
#[must_use]
pub fn get_type(model: &IfcModel, id: u64) -> Option<&StepEntity> {
    model
        .relations_to(id, "IfcRelDefinesByType", "RelatedObjects")
        .into_iter()
        .find_map(|rel| {
            model.attribute_of(rel, "RelatingType")
                .and_then(StepValue::as_reference)
                .and_then(|tid| model.entity(tid))
        })
}

/// Predefined type of an occurrence.
///
/// A type object's `PredefinedType` wins unless it is `NOTDEFINED`; a
/// `USERDEFINED` one resolves to the type's `ElementType`. Otherwise the
/// occurrence's own value is used, and a `USERDEFINED` or missing value falls
/// back to `ObjectType`.
#[must_use]
pub fn get_predefined_type(model: &IfcModel, id: u64) -> Option<String> {
    if let Some(type_object) = get_type(model, id) {
        match model.attribute_of(type_object, "PredefinedType").and_then(StepValue::as_enum) {
            Some("USERDEFINED") => {
                let element_type = model.attribute_of(type_object, "ElementType")
                    .and_then(StepValue::as_str);
                if let Some(element_type) = element_type {
                    return Some(element_type.to_string());
                }
            }
            Some("NOTDEFINED") | None => {}
            Some(predefined) => return Some(predefined.to_string()),
        }
    }

    let entity = model.entity(id)?;
    let object_type = || {
        model.attribute_of(entity, "ObjectType")
            .and_then(StepValue::as_str)
            .map(str::to_string)
    };
    match model.attribute_of(entity, "PredefinedType").and_then(StepValue::as_enum) {
        Some("USERDEFINED") => object_type().or_else(|| Some("USERDEFINED".to_string())),
        Some(predefined) => Some(predefined.to_string()),
        None => object_type(),
    }
}

/// Property or quantity sets of an entity, keyed by set name.
///
/// Sets inherited from the type object come first; occurrence sets with the
/// same name override them property by property. Every set carries an `"id"`
/// entry holding the set's entity id.
#[must_use]
pub fn get_psets(model: &IfcModel, id: u64, kind: PsetKind) -> PropertySets {
    let mut sets = PropertySets::new();
    let Some(entity) = model.entity(id) else {
        return sets;
    };

    if model.entity_is_a(entity, "IfcTypeObject") {
        add_type_definitions(model, entity, kind, &mut sets);
        return sets;
    }

    if let Some(type_object) = get_type(model, id) {
        add_type_definitions(model, type_object, kind, &mut sets);
    }

    for rel in model.relations_to(id, "IfcRelDefinesByProperties", "RelatedObjects") {
        let definitions = model.attribute_of(rel, "RelatingPropertyDefinition")
            .map(StepValue::references)
            .unwrap_or_default();
        for definition in definitions.into_iter().filter_map(|d| model.entity(d)) {
            add_definition(model, definition, kind, &mut sets);
        }
    }

    sets
}

fn add_type_definitions(
    model: &IfcModel,
    type_object: &StepEntity,
    kind: PsetKind,
    sets: &mut PropertySets,
) {
    let definitions = model.attribute_of(type_object, "HasPropertySets")
        .map(StepValue::references)
        .unwrap_or_default();
    for definition in definitions.into_iter().filter_map(|d| model.entity(d)) {
        add_definition(model, definition, kind, sets);
    }
}

fn add_definition(model: &IfcModel, definition: &StepEntity, kind: PsetKind, sets: &mut PropertySets) {
    let properties = match kind {
        PsetKind::Quantities if model.entity_is_a(definition, "IfcElementQuantity") => {
            read_quantities(model, definition)
        }
        PsetKind::Properties if model.entity_is_a(definition, "IfcPropertySet") => {
            read_properties(model, definition)
        }
        _ => return,
    };

    let name = model.name_of(definition)
        .map_or_else(|| format!("#{}", definition.id), str::to_string);
    let set = sets.entry(name).or_default();
    set.extend(properties);
    set.insert("id".to_string(), Value::Integer(definition.id as i64));
}

fn read_quantities(model: &IfcModel, quantity_set: &StepEntity) -> PropertyMap {
    let mut quantities = PropertyMap::new();
    let refs = model.attribute_of(quantity_set, "Quantities")
        .map(StepValue::references)
        .unwrap_or_default();

    for quantity in refs.into_iter().filter_map(|q| model.entity(q)) {
        if !model.entity_is_a(quantity, "IfcPhysicalSimpleQuantity") {
            continue;
        }
        let Some(name) = model.name_of(quantity) else {
            continue;
        };
        // Name, Description, Unit, then the measure value in every simple quantity.
        let value = quantity.values.get(3).map_or(Value::Null, Value::from_step);
        quantities.insert(name.to_string(), value);
    }

    quantities
}

fn read_properties(model: &IfcModel, property_set: &StepEntity) -> PropertyMap {
    let mut properties = PropertyMap::new();
    let refs = model.attribute_of(property_set, "HasProperties")
        .map(StepValue::references)
        .unwrap_or_default();

    for property in refs.into_iter().filter_map(|p| model.entity(p)) {
        let Some(name) = model.name_of(property) else {
            continue;
        };
        if let Some(value) = read_property_value(model, property) {
            properties.insert(name.to_string(), value);
        }
    }

    properties
}

fn read_property_value(model: &IfcModel, property: &StepEntity) -> Option<Value> {
    let attribute = |name: &str| model.attribute_of(property, name);

    if model.entity_is_a(property, "IfcPropertySingleValue") {
        return Some(attribute("NominalValue").map_or(Value::Null, Value::from_step));
    }
    if model.entity_is_a(property, "IfcPropertyEnumeratedValue") {
        return Some(attribute("EnumerationValues").map_or(Value::Null, Value::from_step));
    }
    if model.entity_is_a(property, "IfcPropertyListValue") {
        return Some(attribute("ListValues").map_or(Value::Null, Value::from_step));
    }
    if model.entity_is_a(property, "IfcPropertyBoundedValue") {
        let bound = |name: &str| {
            attribute(name)
                .map(Value::from_step)
                .filter(|v| !v.is_null())
        };
        let value = match (bound("LowerBoundValue"), bound("UpperBoundValue")) {
            (Some(lower), Some(upper)) => format!("{lower} - {upper}"),
            (Some(lower), None) => format!(">= {lower}"),
            (None, Some(upper)) => format!("<= {upper}"),
            (None, None) => return Some(Value::Null),
        };
        return Some(Value::Text(value));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MODEL: &str = "ISO-10303-21;HEADER;FILE_SCHEMA(('IFC4'));ENDSEC;DATA;
#10=IFCBUILDINGSTOREY('s',$,'Level 1',$,$,$,$,$,.ELEMENT.,0.);
#20=IFCWALLTYPE('t',$,'Basic Wall',$,$,(#48),$,$,$,.STANDARD.);
#21=IFCWALL('w1',$,'Wall A',$,$,$,$,$,.SOLIDWALL.);
#22=IFCWALL('w2',$,'Wall B','d','Custom',$,$,$,.USERDEFINED.);
#23=IFCWALLTYPE('ct',$,'Curtain',$,$,$,$,$,'Curtain panel',.USERDEFINED.);
#24=IFCWALL('w3',$,'Wall C',$,$,$,$,$,.NOTDEFINED.);
#25=IFCWALLTYPE('ut',$,'Unnamed',$,$,$,$,$,$,.USERDEFINED.);
#26=IFCWALL('w4',$,'Wall D',$,'Own',$,$,$,.USERDEFINED.);
#30=IFCQUANTITYLENGTH('Width',$,$,200.,$);
#32=IFCELEMENTQUANTITY('q',$,'Qto_WallBaseQuantities',$,$,(#30));
#33=IFCRELDEFINESBYPROPERTIES('r1',$,$,$,(#21),#32);
#40=IFCPROPERTYSINGLEVALUE('IsExternal',$,IFCBOOLEAN(.T.),$);
#41=IFCPROPERTYENUMERATEDVALUE('Finish',$,(IFCLABEL('Matt'),IFCLABEL('Gloss')),$);
#42=IFCPROPERTYSET('p',$,'Pset_WallCommon',$,(#40,#41));
#43=IFCRELDEFINESBYPROPERTIES('r2',$,$,$,(#21),#42);
#44=IFCPROPERTYBOUNDEDVALUE('Temp',$,IFCREAL(30.),IFCREAL(5.),$,$);
#45=IFCPROPERTYSINGLEVALUE('IsExternal',$,IFCBOOLEAN(.F.),$);
#48=IFCPROPERTYSET('pt',$,'Pset_WallCommon',$,(#44,#45));
#50=IFCRELDEFINESBYTYPE('rt',$,$,$,(#21),#20);
#51=IFCRELCONTAINEDINSPATIALSTRUCTURE('rc',$,$,$,(#21),#10);
#52=IFCRELDEFINESBYTYPE('rt2',$,$,$,(#24),#23);
#53=IFCRELDEFINESBYTYPE('rt3',$,$,$,(#26),#25);
ENDSEC;END-ISO-10303-21;";

    fn model() -> IfcModel {
        parse_ifc_str(MODEL).unwrap()
    }

    #[test]
    fn resolves_container_and_type() {
        let model = model();
        assert_eq!(get_container(&model, 21).map(|e| e.id), Some(10));
        assert_eq!(get_type(&model, 21).map(|e| e.id), Some(20));
        assert!(get_container(&model, 22).is_none());
        assert!(get_type(&model, 22).is_none());
    }

    #[test]
    fn predefined_type_prefers_type_object_then_object_type() {
        let model = model();
        assert_eq!(get_predefined_type(&model, 21).as_deref(), Some("STANDARD"));
        assert_eq!(get_predefined_type(&model, 22).as_deref(), Some("Custom"));
        assert_eq!(get_predefined_type(&model, 404), None);
    }

    #[test]
    fn user_defined_type_objects_give_their_element_type() {
        let model = model();
        assert_eq!(get_predefined_type(&model, 24).as_deref(), Some("Curtain panel"));
        // without an ElementType the occurrence decides
        assert_eq!(get_predefined_type(&model, 26).as_deref(), Some("Own"));
    }

    #[test]
    fn quantity_sets_hold_measure_values_and_id() {
        let qtos = get_psets(&model(), 21, PsetKind::Quantities);
        let set = &qtos["Qto_WallBaseQuantities"];
        assert_eq!(set["Width"], Value::Real(200.0));
        assert_eq!(set["id"], Value::Integer(32));
        assert_eq!(qtos.len(), 1);
    }

    #[test]
    fn occurrence_properties_override_type_properties() {
        let psets = get_psets(&model(), 21, PsetKind::Properties);
        let set = &psets["Pset_WallCommon"];
        assert_eq!(set["IsExternal"], Value::Bool(true));
        assert_eq!(set["Temp"], Value::Text("5 - 30".into()));
        assert_eq!(set["Finish"], Value::Text("Matt, Gloss".into()));
        assert_eq!(set["id"], Value::Integer(42));
    }

    #[test]
    fn type_objects_report_their_own_sets() {
        let psets = get_psets(&model(), 20, PsetKind::Properties);
        assert_eq!(psets["Pset_WallCommon"]["IsExternal"], Value::Bool(false));
        assert!(get_psets(&model(), 20, PsetKind::Quantities).is_empty());
    }

    #[test]
    fn invalid_utf8_upload_is_rejected() {
        let err = parse_ifc_bytes(vec![0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ParseError::Encoding { .. }));
    }
}
