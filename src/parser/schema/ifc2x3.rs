//! IFC2X3 (TC1) differences, applied over the IFC4 tables.
//!
//! Only classes whose supertype or attribute layout differ are listed, plus
//! classes that IFC4 dropped.

use super::{EntityDef, InverseDef};

pub(super) const ENTITIES: &[EntityDef] = &[
    // Kernel
    ("IfcProject", Some("IfcObject"), &["LongName", "Phase", "RepresentationContexts", "UnitsInContext"]),
    ("IfcControl", Some("IfcObject"), &[]),
    ("IfcProcess", Some("IfcObject"), &[]),
    ("IfcTask", Some("IfcProcess"), &["TaskId", "Status", "WorkMethod", "IsMilestone", "Priority"]),
    ("IfcResource", Some("IfcObject"), &[]),
    ("IfcConstructionResource", Some("IfcResource"), &["ResourceIdentifier", "ResourceGroup", "ResourceConsumption", "BaseQuantity"]),
    ("IfcZone", Some("IfcSystem"), &[]),
    // Spatial structure
    ("IfcSpatialStructureElement", Some("IfcProduct"), &["LongName", "CompositionType"]),
    ("IfcSpace", Some("IfcSpatialStructureElement"), &["InteriorOrExteriorSpace", "ElevationWithFlooring"]),
    // Building elements
    ("IfcBuildingElementProxy", Some("IfcBuildingElement"), &["CompositionType"]),
    ("IfcRamp", Some("IfcBuildingElement"), &["ShapeType"]),
    ("IfcRoof", Some("IfcBuildingElement"), &["ShapeType"]),
    ("IfcStair", Some("IfcBuildingElement"), &["ShapeType"]),
    ("IfcStairFlight", Some("IfcBuildingElement"), &["NumberOfRiser", "NumberOfTreads", "RiserHeight", "TreadLength"]),
    ("IfcBuildingElementComponent", Some("IfcBuildingElement"), &[]),
    ("IfcBuildingElementPart", Some("IfcBuildingElementComponent"), &[]),
    ("IfcReinforcingElement", Some("IfcBuildingElementComponent"), &["SteelGrade"]),
    ("IfcReinforcingBar", Some("IfcReinforcingElement"), &["NominalDiameter", "CrossSectionArea", "BarLength", "BarRole", "BarSurface"]),
    ("IfcReinforcingMesh", Some("IfcReinforcingElement"), &["MeshLength", "MeshWidth", "LongitudinalBarNominalDiameter", "TransverseBarNominalDiameter", "LongitudinalBarCrossSectionArea", "TransverseBarCrossSectionArea", "LongitudinalBarSpacing", "TransverseBarSpacing"]),
    ("IfcTendonAnchor", Some("IfcReinforcingElement"), &[]),
    ("IfcElectricalElement", Some("IfcElement"), &[]),
    ("IfcEquipmentElement", Some("IfcElement"), &[]),
    // Distribution elements
    ("IfcDistributionControlElement", Some("IfcDistributionElement"), &["ControlElementId"]),
    ("IfcElectricDistributionPoint", Some("IfcFlowController"), &["DistributionPointFunction", "UserDefinedFunction"]),
    ("IfcDistributionPort", Some("IfcPort"), &["FlowDirection"]),
    // Types
    ("IfcSpatialStructureElementType", Some("IfcElementType"), &[]),
    ("IfcSpaceType", Some("IfcSpatialStructureElementType"), &["PredefinedType"]),
    ("IfcBuildingElementProxyType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    ("IfcElectricHeaterType", Some("IfcFlowTerminalType"), &["PredefinedType"]),
    ("IfcGasTerminalType", Some("IfcFlowTerminalType"), &["PredefinedType"]),
    ("IfcElectricalBaseProperties", Some("IfcPropertySetDefinition"), &["EnergySequence", "UserDefinedEnergySequence", "ElectricCurrentType", "InputVoltage", "InputFrequency", "FullLoadCurrent", "MinimumCircuitCurrent", "MaximumPowerInput", "RatedPowerInput", "InputPhase"]),
    // Relationships
    ("IfcRelDefines", Some("IfcRelationship"), &["RelatedObjects"]),
    ("IfcRelDefinesByProperties", Some("IfcRelDefines"), &["RelatingPropertyDefinition"]),
    ("IfcRelDefinesByType", Some("IfcRelDefines"), &["RelatingType"]),
    ("IfcRelOverridesProperties", Some("IfcRelDefinesByProperties"), &["OverridingProperties"]),
    ("IfcRelDecomposes", Some("IfcRelationship"), &["RelatingObject", "RelatedObjects"]),
    ("IfcRelAggregates", Some("IfcRelDecomposes"), &[]),
    ("IfcRelNests", Some("IfcRelDecomposes"), &[]),
    ("IfcRelProjectsElement", Some("IfcRelConnects"), &["RelatingElement", "RelatedFeatureElement"]),
    ("IfcRelVoidsElement", Some("IfcRelConnects"), &["RelatingBuildingElement", "RelatedOpeningElement"]),
    ("IfcRelConnectsStructuralElement", Some("IfcRelConnects"), &["RelatingElement", "RelatedStructuralMember"]),
    // Property definitions
    ("IfcElementQuantity", Some("IfcPropertySetDefinition"), &["MethodOfMeasurement", "Quantities"]),
    ("IfcProperty", None, &["Name", "Description"]),
];

pub(super) const INVERSES: &[InverseDef] = &[
    ("IfcRelDefinesByType", "RelatedObjects", None, "IsDefinedBy"),
    ("IfcRelDefinesByType", "RelatingType", None, "ObjectTypeOf"),
    ("IfcRelDefinesByProperties", "RelatingPropertyDefinition", None, "PropertyDefinitionOf"),
    ("IfcRelDecomposes", "RelatingObject", None, "IsDecomposedBy"),
    ("IfcRelDecomposes", "RelatedObjects", None, "Decomposes"),
    ("IfcRelNests", "RelatingObject", None, "IsDecomposedBy"),
    ("IfcRelNests", "RelatedObjects", None, "Decomposes"),
    ("IfcRelConnectsStructuralElement", "RelatingElement", None, "HasStructuralMember"),
    ("IfcRelConnectsStructuralElement", "RelatedStructuralMember", None, "ReferencesElement"),
];
