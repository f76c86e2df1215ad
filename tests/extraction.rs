use ifc_stream::extract::objects_data_by_class;
use ifc_stream::model::stats::class_frequency;
use ifc_stream::model::{storeys, IfcModel, Value};
use ifc_stream::parser::parse_ifc_file;
use ifc_stream::table::{
    discover_quantity_columns, quantities_for_set, split_quantity, total_count, DataFrame,
    SplitBy, FIXED_COLUMNS,
};
use pretty_assertions::assert_eq;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.ifc");

fn model() -> IfcModel {
    parse_ifc_file(FIXTURE).unwrap()
}

fn building_elements(model: &IfcModel) -> DataFrame {
    let extraction = objects_data_by_class(model, "IfcBuildingElement");
    DataFrame::from_records(&extraction.records, &extraction.pset_attributes)
}

#[test]
fn one_row_per_element_and_the_full_column_union() {
    let frame = building_elements(&model());

    assert_eq!(frame.height(), 4);
    assert_eq!(frame.width(), FIXED_COLUMNS.len() + 6);
    assert_eq!(&frame.columns()[..FIXED_COLUMNS.len()], &FIXED_COLUMNS);
    assert_eq!(
        &frame.columns()[FIXED_COLUMNS.len()..],
        &[
            "Pset_WallCommon.FireRating",
            "Pset_WallCommon.IsExternal",
            "Pset_WallTypeCommon.Reference",
            "Qto_DoorBaseQuantities.Area",
            "Qto_WallBaseQuantities.Length",
            "Qto_WallBaseQuantities.Width",
        ]
    );
}

#[test]
fn relations_resolve_into_row_values() {
    let frame = building_elements(&model());
    let column = |name: &str| -> Vec<String> {
        frame
            .column(name)
            .unwrap()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    };

    assert_eq!(column("ExpressId"), vec!["21", "22", "23", "24"]);
    assert_eq!(column("Class"), vec!["IfcWall", "IfcWall", "IfcDoor", "IfcSlab"]);
    assert_eq!(column("Level"), vec!["Level 1", "Level 2", "Level 1", "Level 2"]);
    assert_eq!(column("Type"), vec!["Basic Wall 200", "Basic Wall 200", "", ""]);
    assert_eq!(column("PredefinedType"), vec!["STANDARD", "STANDARD", "DOOR", "FLOOR"]);
    assert_eq!(column("Pset_WallTypeCommon.Reference"), vec!["BW200", "BW200", "", ""]);
    assert_eq!(column("Pset_WallCommon.IsExternal"), vec!["True", "True", "", ""]);
}

#[test]
fn quantities_are_null_where_the_set_is_missing() {
    let frame = building_elements(&model());
    assert_eq!(
        frame.column("Qto_WallBaseQuantities.Width").unwrap(),
        vec![&Value::Real(200.0), &Value::Null, &Value::Null, &Value::Null]
    );
}

#[test]
fn extraction_is_deterministic() {
    let model = model();
    assert_eq!(building_elements(&model), building_elements(&model));
}

#[test]
fn class_filter_keeps_only_populated_columns() {
    let frame = building_elements(&model());

    let doors = frame.filter_by_class("IfcDoor");
    assert_eq!(doors.height(), 1);
    assert_eq!(doors.width(), FIXED_COLUMNS.len() + 1);
    assert_eq!(doors.columns().last().unwrap(), "Qto_DoorBaseQuantities.Area");

    let slabs = frame.filter_by_class("IfcSlab");
    assert_eq!(slabs.columns(), &FIXED_COLUMNS);

    assert_eq!(frame.classes(), vec!["IfcWall", "IfcDoor", "IfcSlab"]);
}

#[test]
fn quantity_discovery_and_split() {
    let frame = building_elements(&model());

    assert_eq!(
        discover_quantity_columns(&frame),
        Some(vec![
            "Qto_DoorBaseQuantities".to_string(),
            "Qto_WallBaseQuantities".to_string()
        ])
    );
    assert_eq!(
        quantities_for_set(&frame, "Qto_WallBaseQuantities"),
        vec!["Length", "Width", "Count"]
    );
    assert_eq!(total_count(&frame), 4);

    assert_eq!(
        split_quantity(&frame, "Qto_WallBaseQuantities", "Count", SplitBy::Level),
        vec![("Level 1".to_string(), 2.0), ("Level 2".to_string(), 2.0)]
    );
    assert_eq!(
        split_quantity(&frame, "Qto_WallBaseQuantities", "Length", SplitBy::Type),
        vec![("Basic Wall 200".to_string(), 5000.0)]
    );
}

#[test]
fn frequency_and_storeys() {
    let model = model();

    assert_eq!(
        class_frequency(&model, Some("IfcBuildingElement"), None),
        vec![
            ("IfcWall".to_string(), 2),
            ("IfcDoor".to_string(), 1),
            ("IfcSlab".to_string(), 1)
        ]
    );
    assert_eq!(
        class_frequency(&model, Some("IfcBuildingElement"), Some(1)),
        vec![("IfcWall".to_string(), 2)]
    );

    let levels: Vec<(String, f64)> = storeys(&model)
        .into_iter()
        .map(|s| (s.name, s.elevation))
        .collect();
    assert_eq!(
        levels,
        vec![("Level 1".to_string(), 0.0), ("Level 2".to_string(), 3000.0)]
    );
}
