use std::path::Path;

use ifc_stream::config::Config;
use ifc_stream::error::{ExportError, ModelError};
use ifc_stream::export::{write_class_sheets, SheetSink};
use ifc_stream::table::DataFrame;
use ifc_stream::session::Session;
use ifc_stream::viewer::{format_viewer_psets, PickPayload};
use pretty_assertions::assert_eq;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.ifc");

fn loaded(downloads: &Path) -> Session {
    let mut session = Session::new(Config {
        downloads_dir: downloads.to_path_buf(),
        ..Config::default()
    });
    let bytes = std::fs::read(FIXTURE).unwrap();
    session.load("sample.ifc", bytes).unwrap();
    session.load_data().unwrap();
    session
}

#[test]
fn upload_then_export_every_format() {
    let tmp = tempfile::tempdir().unwrap();
    let downloads = tmp.path().join("downloads");
    let session = loaded(&downloads);

    let csv_path = session.download_csv().unwrap();
    let xlsx_path = session.download_excel().unwrap();
    let json_path = session.download_json().unwrap();

    assert_eq!(csv_path, downloads.join("sample.csv"));
    assert_eq!(xlsx_path, downloads.join("sample.xlsx"));
    assert_eq!(json_path, downloads.join("sample.json"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert!(lines
        .next()
        .unwrap()
        .starts_with("ExpressId,GlobalId,Class,PredefinedType,Name,Level,Type,"));
    assert_eq!(lines.count(), 4);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 4);
    assert_eq!(json[0]["Qto_WallBaseQuantities.Width"], serde_json::json!(200.0));
    assert_eq!(json[1]["Qto_WallBaseQuantities.Width"], serde_json::Value::Null);

    assert!(std::fs::metadata(&xlsx_path).unwrap().len() > 0);
}

#[derive(Default)]
struct Sheets(Vec<(String, DataFrame)>);

impl SheetSink for Sheets {
    fn add_sheet(&mut self, name: &str, frame: &DataFrame) -> Result<(), ExportError> {
        self.0.push((name.to_string(), frame.clone()));
        Ok(())
    }
}

#[test]
fn workbook_has_one_sheet_per_class() {
    let tmp = tempfile::tempdir().unwrap();
    let session = loaded(tmp.path());

    let mut sheets = Sheets::default();
    assert_eq!(write_class_sheets(session.frame().unwrap(), &mut sheets).unwrap(), 3);
    let names: Vec<&str> = sheets.0.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["IfcWall", "IfcDoor", "IfcSlab"]);
    assert_eq!(session.classes(), &["IfcWall", "IfcDoor", "IfcSlab"]);

    for (name, sheet) in &sheets.0 {
        let classes = sheet.column("Class").unwrap();
        assert!(classes.iter().all(|class| class.to_string() == *name), "{name}");
    }
    let heights: Vec<usize> = sheets.0.iter().map(|(_, sheet)| sheet.height()).collect();
    assert_eq!(heights, vec![2, 1, 1]);
}

#[test]
fn changing_the_root_class_rebuilds_the_table() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = loaded(tmp.path());

    session.set_root_class("IfcWall").unwrap();
    assert_eq!(session.frame().unwrap().height(), 2);
    assert_eq!(session.classes(), &["IfcWall"]);
}

#[test]
fn inspector_walks_relations() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = loaded(tmp.path());

    assert!(session.inspect(21, true).unwrap());
    let inverse: Vec<(&str, Option<u64>)> = session
        .debug()
        .inverse_attributes
        .iter()
        .map(|r| (r.name.as_str(), r.entity_id))
        .collect();
    assert_eq!(
        inverse,
        vec![
            ("ContainedInStructure[0]", Some(50)),
            ("IsDefinedBy[0]", Some(33)),
            ("IsDefinedBy[1]", Some(43)),
            ("IsTypedBy[0]", Some(25)),
        ]
    );
    let references: Vec<u64> = session
        .debug()
        .inverse_references
        .iter()
        .map(|r| r.entity_id)
        .collect();
    assert_eq!(references, vec![25, 33, 43, 50]);

    assert!(session.inspect(25, false).unwrap());
    assert!(session.back().unwrap());
    assert_eq!(session.debug().active_step_id, 21);
}

#[test]
fn rename_and_save_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = loaded(tmp.path());
    session.change_project_name("Renamed").unwrap();

    let out = tmp.path().join("renamed.ifc");
    session.save_model(&out).unwrap();

    let mut reloaded = Session::default();
    reloaded.load_path(&out).unwrap();
    assert_eq!(reloaded.summary().unwrap().name, "Renamed");
    assert_eq!(reloaded.model().unwrap().len(), session.model().unwrap().len());
}

#[test]
fn model_without_project_cannot_be_renamed() {
    let mut session = Session::default();
    session
        .load("bare.ifc", b"DATA;\n#1=IFCWALL('w',$,$,$,$,$,$,$,$);\nENDSEC;".to_vec())
        .unwrap();
    let err = session.change_project_name("x").unwrap_err();
    assert!(err.to_string().contains("IfcProject"));
    assert!(matches!(
        Session::default().download_json(),
        Err(ExportError::NoData)
    ));
    assert!(matches!(Session::default().summary(), Err(ModelError::NotLoaded)));
}

#[test]
fn viewer_payload_is_grouped_by_set() {
    let payload: PickPayload = serde_json::from_str(
        r#"{"id": 21, "props": [
            {"expressID": 32, "Name": {"value": "Qto_WallBaseQuantities"},
             "Quantities": [{"Name": {"value": "Width"}, "LengthValue": {"value": 200}}]}
        ]}"#,
    )
    .unwrap();

    let sets = format_viewer_psets(&payload);
    assert_eq!(sets[&32].name, "Qto_WallBaseQuantities");
    assert_eq!(sets[&32].data[0].name, "Width");
    assert_eq!(sets[&32].data[0].value, serde_json::json!(200));
}
