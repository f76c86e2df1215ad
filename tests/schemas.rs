use ifc_stream::export::class_sheets;
use ifc_stream::extract::objects_data_by_class;
use ifc_stream::inspect::DebugProperties;
use ifc_stream::model::{IfcModel, Value};
use ifc_stream::parser::parse_ifc_str;
use ifc_stream::parser::schema::SchemaVersion;
use ifc_stream::table::DataFrame;
use pretty_assertions::assert_eq;

const MEP: &str = "ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCPROJECT('p',$,'Plant',$,$,$,$,$,$);
#10=IFCBUILDINGSTOREY('s',$,'Plant room',$,$,$,$,$,.ELEMENT.,0.);
#20=IFCPIPEFITTING('f1',$,'Elbow',$,$,$,$,$,.BEND.);
#21=IFCWALL('w1',$,'Wall A',$,$,$,$,$,.SOLIDWALL.);
#22=IFCPIPESEGMENTTYPE('pt',$,'Copper 22',$,$,(#31),$,$,$,.RIGIDSEGMENT.);
#23=IFCPIPESEGMENT('s1',$,'Pipe run',$,$,$,$,$,.NOTDEFINED.);
#24=IFCWALL('w2',$,'Wall B',$,$,$,$,$,.SOLIDWALL.);
#25=IFCVALVE('v1',$,'Isolation valve',$,$,$,$,$,.ISOLATING.);
#30=IFCPROPERTYSINGLEVALUE('Reference',$,IFCIDENTIFIER('CU22'),$);
#31=IFCPROPERTYSET('ps',$,'Pset_PipeSegmentTypeCommon',$,(#30));
#40=IFCRELDEFINESBYTYPE('rt',$,$,$,(#23),#22);
#41=IFCRELCONNECTSPATHELEMENTS('rp',$,$,$,$,#21,#24,(),(),.ATEND.,.ATSTART.);
#42=IFCRELCONTAINEDINSPATIALSTRUCTURE('rc',$,$,$,(#20,#21,#23,#24,#25),#10);
ENDSEC;
END-ISO-10303-21;";

const IFC2X3: &str = "ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1=IFCPROJECT('p',$,'Legacy',$,$,$,$,$,$);
#10=IFCBUILDINGSTOREY('s',$,'Ground',$,$,$,$,$,.ELEMENT.,0.);
#20=IFCWALLSTANDARDCASE('w',$,'Wall',$,$,$,$,$);
#21=IFCREINFORCINGBAR('r',$,'Bar',$,$,$,$,$,'B500',12.,113.,6000.,.MAIN.,.TEXTURED.);
#22=IFCBUILDINGELEMENTPART('bp',$,'Part',$,$,$,$,$);
#24=IFCWALLTYPE('t',$,'Wall type',$,$,$,$,$,$,.STANDARD.);
#30=IFCRELCONTAINEDINSPATIALSTRUCTURE('rc',$,$,$,(#20,#21,#22),#10);
#31=IFCRELDEFINESBYTYPE('rt',$,$,$,(#20),#24);
ENDSEC;
END-ISO-10303-21;";

fn frame(model: &IfcModel, class: &str) -> DataFrame {
    let extraction = objects_data_by_class(model, class);
    DataFrame::from_records(&extraction.records, &extraction.pset_attributes)
}

fn column(frame: &DataFrame, name: &str) -> Vec<String> {
    frame
        .column(name)
        .unwrap()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

fn inverse_names(debug: &DebugProperties) -> Vec<&str> {
    debug
        .inverse_attributes
        .iter()
        .map(|row| row.name.as_str())
        .collect()
}

#[test]
fn distribution_elements_are_extracted_as_elements() {
    let model = parse_ifc_str(MEP).unwrap();
    let frame = frame(&model, "IfcElement");

    assert_eq!(column(&frame, "ExpressId"), vec!["20", "21", "23", "24", "25"]);
    assert_eq!(
        column(&frame, "Class"),
        vec!["IfcPipeFitting", "IfcWall", "IfcPipeSegment", "IfcWall", "IfcValve"]
    );
    assert_eq!(column(&frame, "GlobalId")[0], "f1");
    assert_eq!(column(&frame, "Name")[0], "Elbow");
    assert_eq!(column(&frame, "Level")[4], "Plant room");

    assert_eq!(frame.filter_by_class("IfcPipeFitting").height(), 1);
    let sheets: Vec<String> = class_sheets(&frame).into_iter().map(|(name, _)| name).collect();
    assert!(sheets.contains(&"IfcPipeFitting".to_string()));
}

#[test]
fn typed_distribution_elements_inherit_type_sets() {
    let model = parse_ifc_str(MEP).unwrap();
    let frame = frame(&model, "IfcPipeSegment");

    assert_eq!(frame.height(), 1);
    assert_eq!(column(&frame, "Type"), vec!["Copper 22"]);
    assert_eq!(column(&frame, "PredefinedType"), vec!["RIGIDSEGMENT"]);
    assert_eq!(
        frame.column("Pset_PipeSegmentTypeCommon.Reference").unwrap(),
        vec![&Value::from("CU22")]
    );
}

#[test]
fn path_connections_show_up_as_inverse_attributes() {
    let model = parse_ifc_str(MEP).unwrap();
    let mut debug = DebugProperties::default();

    assert!(debug.inspect(&model, 21, true));
    assert_eq!(inverse_names(&debug), vec!["ConnectedTo[0]", "ContainedInStructure[0]"]);
    assert_eq!(debug.inverse_attributes[0].entity_id, Some(41));

    assert!(debug.inspect(&model, 24, true));
    assert_eq!(inverse_names(&debug), vec!["ConnectedFrom[0]", "ContainedInStructure[0]"]);
}

#[test]
fn ifc2x3_files_use_their_own_hierarchy() {
    let model = parse_ifc_str(IFC2X3).unwrap();
    assert_eq!(model.schema().version(), SchemaVersion::Ifc2x3);

    let frame = frame(&model, "IfcBuildingElement");
    assert_eq!(column(&frame, "ExpressId"), vec!["20", "21", "22"]);
    assert_eq!(
        column(&frame, "Class"),
        vec!["IfcWallStandardCase", "IfcReinforcingBar", "IfcBuildingElementPart"]
    );
    assert_eq!(column(&frame, "Level"), vec!["Ground", "Ground", "Ground"]);
    assert_eq!(column(&frame, "Type"), vec!["Wall type", "", ""]);
    assert_eq!(column(&frame, "PredefinedType")[0], "STANDARD");
    assert_eq!(model.project_name(), Some("Legacy"));
}

#[test]
fn ifc2x3_inverse_attributes_use_ifc2x3_names() {
    let model = parse_ifc_str(IFC2X3).unwrap();
    let mut debug = DebugProperties::default();

    assert!(debug.inspect(&model, 20, true));
    assert_eq!(inverse_names(&debug), vec!["ContainedInStructure[0]", "IsDefinedBy[0]"]);

    assert!(debug.inspect(&model, 21, true));
    let grade = debug.attributes.iter().find(|row| row.name == "SteelGrade");
    assert_eq!(grade.map(|row| row.string_value.as_str()), Some("B500"));
}
