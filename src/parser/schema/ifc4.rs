//! IFC4 (ADD2 TC1) class tables.

use super::{EntityDef, InverseDef};

const PREDEFINED: &[&str] = &["PredefinedType"];

pub(super) const ENTITIES: &[EntityDef] = &[
    // Kernel
    ("IfcRoot", None, &["GlobalId", "OwnerHistory", "Name", "Description"]),
    ("IfcObjectDefinition", Some("IfcRoot"), &[]),
    ("IfcContext", Some("IfcObjectDefinition"), &["ObjectType", "LongName", "Phase", "RepresentationContexts", "UnitsInContext"]),
    ("IfcProject", Some("IfcContext"), &[]),
    ("IfcProjectLibrary", Some("IfcContext"), &[]),
    ("IfcObject", Some("IfcObjectDefinition"), &["ObjectType"]),
    ("IfcActor", Some("IfcObject"), &["TheActor"]),
    ("IfcOccupant", Some("IfcActor"), PREDEFINED),
    ("IfcControl", Some("IfcObject"), &["Identification"]),
    ("IfcActionRequest", Some("IfcControl"), &["PredefinedType", "Status", "LongDescription"]),
    ("IfcCostItem", Some("IfcControl"), &["PredefinedType", "CostValues", "CostQuantities"]),
    ("IfcCostSchedule", Some("IfcControl"), &["PredefinedType", "Status", "SubmittedOn", "UpdateDate"]),
    ("IfcPerformanceHistory", Some("IfcControl"), &["LifeCyclePhase", "PredefinedType"]),
    ("IfcPermit", Some("IfcControl"), &["PredefinedType", "Status", "LongDescription"]),
    ("IfcProjectOrder", Some("IfcControl"), &["PredefinedType", "Status", "LongDescription"]),
    ("IfcWorkCalendar", Some("IfcControl"), &["WorkingTimes", "ExceptionTimes", "PredefinedType"]),
    ("IfcWorkControl", Some("IfcControl"), &["CreationDate", "Creators", "Purpose", "Duration", "TotalFloat", "StartTime", "FinishTime"]),
    ("IfcWorkPlan", Some("IfcWorkControl"), PREDEFINED),
    ("IfcWorkSchedule", Some("IfcWorkControl"), PREDEFINED),
    ("IfcGroup", Some("IfcObject"), &[]),
    ("IfcAsset", Some("IfcGroup"), &["Identification", "OriginalValue", "CurrentValue", "TotalReplacementCost", "Owner", "User", "ResponsiblePerson", "IncorporationDate", "DepreciatedValue"]),
    ("IfcInventory", Some("IfcGroup"), &["PredefinedType", "Jurisdiction", "ResponsiblePersons", "LastUpdateDate", "CurrentValue", "OriginalValue"]),
    ("IfcStructuralLoadGroup", Some("IfcGroup"), &["PredefinedType", "ActionType", "ActionSource", "Coefficient", "Purpose"]),
    ("IfcStructuralLoadCase", Some("IfcStructuralLoadGroup"), &["SelfWeightCoefficients"]),
    ("IfcStructuralResultGroup", Some("IfcGroup"), &["TheoryType", "ResultForLoadGroup", "IsLinear"]),
    ("IfcSystem", Some("IfcGroup"), &[]),
    ("IfcBuildingSystem", Some("IfcSystem"), &["PredefinedType", "LongName"]),
    ("IfcDistributionSystem", Some("IfcSystem"), &["LongName", "PredefinedType"]),
    ("IfcDistributionCircuit", Some("IfcDistributionSystem"), &[]),
    ("IfcStructuralAnalysisModel", Some("IfcSystem"), &["PredefinedType", "OrientationOf2DPlane", "LoadedBy", "HasResults", "SharedPlacement"]),
    ("IfcZone", Some("IfcSystem"), &["LongName"]),
    ("IfcProcess", Some("IfcObject"), &["Identification", "LongDescription"]),
    ("IfcEvent", Some("IfcProcess"), &["PredefinedType", "EventTriggerType", "UserDefinedEventTriggerType", "EventOccurenceTime"]),
    ("IfcProcedure", Some("IfcProcess"), PREDEFINED),
    ("IfcTask", Some("IfcProcess"), &["Status", "WorkMethod", "IsMilestone", "Priority", "TaskTime", "PredefinedType"]),
    ("IfcResource", Some("IfcObject"), &["Identification", "LongDescription"]),
    ("IfcConstructionResource", Some("IfcResource"), &["Usage", "BaseCosts", "BaseQuantity"]),
    ("IfcConstructionEquipmentResource", Some("IfcConstructionResource"), PREDEFINED),
    ("IfcConstructionMaterialResource", Some("IfcConstructionResource"), PREDEFINED),
    ("IfcConstructionProductResource", Some("IfcConstructionResource"), PREDEFINED),
    ("IfcCrewResource", Some("IfcConstructionResource"), PREDEFINED),
    ("IfcLaborResource", Some("IfcConstructionResource"), PREDEFINED),
    ("IfcSubContractResource", Some("IfcConstructionResource"), PREDEFINED),
    ("IfcProduct", Some("IfcObject"), &["ObjectPlacement", "Representation"]),
    ("IfcAnnotation", Some("IfcProduct"), &[]),
    ("IfcGrid", Some("IfcProduct"), &["UAxes", "VAxes", "WAxes", "PredefinedType"]),
    ("IfcPort", Some("IfcProduct"), &[]),
    ("IfcDistributionPort", Some("IfcPort"), &["FlowDirection", "PredefinedType", "SystemType"]),
    ("IfcProxy", Some("IfcProduct"), &["ProxyType", "Tag"]),
    // Spatial elements
    ("IfcSpatialElement", Some("IfcProduct"), &["LongName"]),
    ("IfcExternalSpatialStructureElement", Some("IfcSpatialElement"), &[]),
    ("IfcExternalSpatialElement", Some("IfcExternalSpatialStructureElement"), PREDEFINED),
    ("IfcSpatialStructureElement", Some("IfcSpatialElement"), &["CompositionType"]),
    ("IfcSite", Some("IfcSpatialStructureElement"), &["RefLatitude", "RefLongitude", "RefElevation", "LandTitleNumber", "SiteAddress"]),
    ("IfcBuilding", Some("IfcSpatialStructureElement"), &["ElevationOfRefHeight", "ElevationOfTerrain", "BuildingAddress"]),
    ("IfcBuildingStorey", Some("IfcSpatialStructureElement"), &["Elevation"]),
    ("IfcSpace", Some("IfcSpatialStructureElement"), &["PredefinedType", "ElevationWithFlooring"]),
    ("IfcSpatialZone", Some("IfcSpatialElement"), PREDEFINED),
    // Structural analysis
    ("IfcStructuralActivity", Some("IfcProduct"), &["AppliedLoad", "GlobalOrLocal"]),
    ("IfcStructuralAction", Some("IfcStructuralActivity"), &["DestabilizingLoad"]),
    ("IfcStructuralCurveAction", Some("IfcStructuralAction"), &["ProjectedOrTrue", "PredefinedType"]),
    ("IfcStructuralLinearAction", Some("IfcStructuralCurveAction"), &[]),
    ("IfcStructuralPointAction", Some("IfcStructuralAction"), &[]),
    ("IfcStructuralSurfaceAction", Some("IfcStructuralAction"), &["ProjectedOrTrue", "PredefinedType"]),
    ("IfcStructuralPlanarAction", Some("IfcStructuralSurfaceAction"), &[]),
    ("IfcStructuralReaction", Some("IfcStructuralActivity"), &[]),
    ("IfcStructuralCurveReaction", Some("IfcStructuralReaction"), PREDEFINED),
    ("IfcStructuralPointReaction", Some("IfcStructuralReaction"), &[]),
    ("IfcStructuralSurfaceReaction", Some("IfcStructuralReaction"), PREDEFINED),
    ("IfcStructuralItem", Some("IfcProduct"), &[]),
    ("IfcStructuralConnection", Some("IfcStructuralItem"), &["AppliedCondition"]),
    ("IfcStructuralCurveConnection", Some("IfcStructuralConnection"), &["Axis"]),
    ("IfcStructuralPointConnection", Some("IfcStructuralConnection"), &["ConditionCoordinateSystem"]),
    ("IfcStructuralSurfaceConnection", Some("IfcStructuralConnection"), &[]),
    ("IfcStructuralMember", Some("IfcStructuralItem"), &[]),
    ("IfcStructuralCurveMember", Some("IfcStructuralMember"), &["PredefinedType", "Axis"]),
    ("IfcStructuralCurveMemberVarying", Some("IfcStructuralCurveMember"), &[]),
    ("IfcStructuralSurfaceMember", Some("IfcStructuralMember"), &["PredefinedType", "Thickness"]),
    ("IfcStructuralSurfaceMemberVarying", Some("IfcStructuralSurfaceMember"), &[]),
    // Elements
    ("IfcElement", Some("IfcProduct"), &["Tag"]),
    ("IfcBuildingElement", Some("IfcElement"), &[]),
    ("IfcBeam", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcBeamStandardCase", Some("IfcBeam"), &[]),
    ("IfcBuildingElementProxy", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcChimney", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcColumn", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcColumnStandardCase", Some("IfcColumn"), &[]),
    ("IfcCovering", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcCurtainWall", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcDoor", Some("IfcBuildingElement"), &["OverallHeight", "OverallWidth", "PredefinedType", "OperationType", "UserDefinedOperationType"]),
    ("IfcDoorStandardCase", Some("IfcDoor"), &[]),
    ("IfcFooting", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcMember", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcMemberStandardCase", Some("IfcMember"), &[]),
    ("IfcPile", Some("IfcBuildingElement"), &["PredefinedType", "ConstructionType"]),
    ("IfcPlate", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcPlateStandardCase", Some("IfcPlate"), &[]),
    ("IfcRailing", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcRamp", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcRampFlight", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcRoof", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcShadingDevice", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcSlab", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcSlabElementedCase", Some("IfcSlab"), &[]),
    ("IfcSlabStandardCase", Some("IfcSlab"), &[]),
    ("IfcStair", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcStairFlight", Some("IfcBuildingElement"), &["NumberOfRisers", "NumberOfTreads", "RiserHeight", "TreadLength", "PredefinedType"]),
    ("IfcWall", Some("IfcBuildingElement"), PREDEFINED),
    ("IfcWallElementedCase", Some("IfcWall"), &[]),
    ("IfcWallStandardCase", Some("IfcWall"), &[]),
    ("IfcWindow", Some("IfcBuildingElement"), &["OverallHeight", "OverallWidth", "PredefinedType", "PartitioningType", "UserDefinedPartitioningType"]),
    ("IfcWindowStandardCase", Some("IfcWindow"), &[]),
    ("IfcCivilElement", Some("IfcElement"), &[]),
    ("IfcElementAssembly", Some("IfcElement"), &["AssemblyPlace", "PredefinedType"]),
    ("IfcElementComponent", Some("IfcElement"), &[]),
    ("IfcBuildingElementPart", Some("IfcElementComponent"), PREDEFINED),
    ("IfcDiscreteAccessory", Some("IfcElementComponent"), PREDEFINED),
    ("IfcFastener", Some("IfcElementComponent"), PREDEFINED),
    ("IfcMechanicalFastener", Some("IfcElementComponent"), &["NominalDiameter", "NominalLength", "PredefinedType"]),
    ("IfcReinforcingElement", Some("IfcElementComponent"), &["SteelGrade"]),
    ("IfcReinforcingBar", Some("IfcReinforcingElement"), &["NominalDiameter", "CrossSectionArea", "BarLength", "PredefinedType", "BarSurface"]),
    ("IfcReinforcingMesh", Some("IfcReinforcingElement"), &["MeshLength", "MeshWidth", "LongitudinalBarNominalDiameter", "TransverseBarNominalDiameter", "LongitudinalBarCrossSectionArea", "TransverseBarCrossSectionArea", "LongitudinalBarSpacing", "TransverseBarSpacing", "PredefinedType"]),
    ("IfcTendon", Some("IfcReinforcingElement"), &["PredefinedType", "NominalDiameter", "CrossSectionArea", "TensionForce", "PreStress", "FrictionCoefficient", "AnchorageSlip", "MinCurvatureRadius"]),
    ("IfcTendonAnchor", Some("IfcReinforcingElement"), PREDEFINED),
    ("IfcVibrationIsolator", Some("IfcElementComponent"), PREDEFINED),
    ("IfcFeatureElement", Some("IfcElement"), &[]),
    ("IfcFeatureElementAddition", Some("IfcFeatureElement"), &[]),
    ("IfcProjectionElement", Some("IfcFeatureElementAddition"), PREDEFINED),
    ("IfcFeatureElementSubtraction", Some("IfcFeatureElement"), &[]),
    ("IfcOpeningElement", Some("IfcFeatureElementSubtraction"), PREDEFINED),
    ("IfcOpeningStandardCase", Some("IfcOpeningElement"), &[]),
    ("IfcVoidingFeature", Some("IfcFeatureElementSubtraction"), PREDEFINED),
    ("IfcSurfaceFeature", Some("IfcFeatureElement"), PREDEFINED),
    ("IfcFurnishingElement", Some("IfcElement"), &[]),
    ("IfcFurniture", Some("IfcFurnishingElement"), PREDEFINED),
    ("IfcSystemFurnitureElement", Some("IfcFurnishingElement"), PREDEFINED),
    ("IfcGeographicElement", Some("IfcElement"), PREDEFINED),
    ("IfcTransportElement", Some("IfcElement"), PREDEFINED),
    ("IfcVirtualElement", Some("IfcElement"), &[]),
    // Distribution elements
    ("IfcDistributionElement", Some("IfcElement"), &[]),
    ("IfcDistributionControlElement", Some("IfcDistributionElement"), &[]),
    ("IfcActuator", Some("IfcDistributionControlElement"), PREDEFINED),
    ("IfcAlarm", Some("IfcDistributionControlElement"), PREDEFINED),
    ("IfcController", Some("IfcDistributionControlElement"), PREDEFINED),
    ("IfcFlowInstrument", Some("IfcDistributionControlElement"), PREDEFINED),
    ("IfcProtectiveDeviceTrippingUnit", Some("IfcDistributionControlElement"), PREDEFINED),
    ("IfcSensor", Some("IfcDistributionControlElement"), PREDEFINED),
    ("IfcUnitaryControlElement", Some("IfcDistributionControlElement"), PREDEFINED),
    ("IfcDistributionFlowElement", Some("IfcDistributionElement"), &[]),
    ("IfcDistributionChamberElement", Some("IfcDistributionFlowElement"), PREDEFINED),
    ("IfcEnergyConversionDevice", Some("IfcDistributionFlowElement"), &[]),
    ("IfcAirToAirHeatRecovery", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcBoiler", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcBurner", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcChiller", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcCoil", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcCondenser", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcCooledBeam", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcCoolingTower", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcElectricGenerator", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcElectricMotor", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcEngine", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcEvaporativeCooler", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcEvaporator", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcHeatExchanger", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcHumidifier", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcMotorConnection", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcSolarDevice", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcTransformer", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcTubeBundle", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcUnitaryEquipment", Some("IfcEnergyConversionDevice"), PREDEFINED),
    ("IfcFlowController", Some("IfcDistributionFlowElement"), &[]),
    ("IfcAirTerminalBox", Some("IfcFlowController"), PREDEFINED),
    ("IfcDamper", Some("IfcFlowController"), PREDEFINED),
    ("IfcElectricDistributionBoard", Some("IfcFlowController"), PREDEFINED),
    ("IfcElectricTimeControl", Some("IfcFlowController"), PREDEFINED),
    ("IfcFlowMeter", Some("IfcFlowController"), PREDEFINED),
    ("IfcProtectiveDevice", Some("IfcFlowController"), PREDEFINED),
    ("IfcSwitchingDevice", Some("IfcFlowController"), PREDEFINED),
    ("IfcValve", Some("IfcFlowController"), PREDEFINED),
    ("IfcFlowFitting", Some("IfcDistributionFlowElement"), &[]),
    ("IfcCableCarrierFitting", Some("IfcFlowFitting"), PREDEFINED),
    ("IfcCableFitting", Some("IfcFlowFitting"), PREDEFINED),
    ("IfcDuctFitting", Some("IfcFlowFitting"), PREDEFINED),
    ("IfcJunctionBox", Some("IfcFlowFitting"), PREDEFINED),
    ("IfcPipeFitting", Some("IfcFlowFitting"), PREDEFINED),
    ("IfcFlowMovingDevice", Some("IfcDistributionFlowElement"), &[]),
    ("IfcCompressor", Some("IfcFlowMovingDevice"), PREDEFINED),
    ("IfcFan", Some("IfcFlowMovingDevice"), PREDEFINED),
    ("IfcPump", Some("IfcFlowMovingDevice"), PREDEFINED),
    ("IfcFlowSegment", Some("IfcDistributionFlowElement"), &[]),
    ("IfcCableCarrierSegment", Some("IfcFlowSegment"), PREDEFINED),
    ("IfcCableSegment", Some("IfcFlowSegment"), PREDEFINED),
    ("IfcDuctSegment", Some("IfcFlowSegment"), PREDEFINED),
    ("IfcPipeSegment", Some("IfcFlowSegment"), PREDEFINED),
    ("IfcFlowStorageDevice", Some("IfcDistributionFlowElement"), &[]),
    ("IfcElectricFlowStorageDevice", Some("IfcFlowStorageDevice"), PREDEFINED),
    ("IfcTank", Some("IfcFlowStorageDevice"), PREDEFINED),
    ("IfcFlowTerminal", Some("IfcDistributionFlowElement"), &[]),
    ("IfcAirTerminal", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcAudioVisualAppliance", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcCommunicationsAppliance", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcElectricAppliance", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcFireSuppressionTerminal", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcLamp", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcLightFixture", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcMedicalDevice", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcOutlet", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcSanitaryTerminal", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcSpaceHeater", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcStackTerminal", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcWasteTerminal", Some("IfcFlowTerminal"), PREDEFINED),
    ("IfcFlowTreatmentDevice", Some("IfcDistributionFlowElement"), &[]),
    ("IfcDuctSilencer", Some("IfcFlowTreatmentDevice"), PREDEFINED),
    ("IfcFilter", Some("IfcFlowTreatmentDevice"), PREDEFINED),
    ("IfcInterceptor", Some("IfcFlowTreatmentDevice"), PREDEFINED),
    // Types
    ("IfcTypeObject", Some("IfcObjectDefinition"), &["ApplicableOccurrence", "HasPropertySets"]),
    ("IfcTypeProcess", Some("IfcTypeObject"), &["Identification", "LongDescription", "ProcessType"]),
    ("IfcEventType", Some("IfcTypeProcess"), &["PredefinedType", "EventTriggerType", "UserDefinedEventTriggerType"]),
    ("IfcProcedureType", Some("IfcTypeProcess"), PREDEFINED),
    ("IfcTaskType", Some("IfcTypeProcess"), &["PredefinedType", "WorkMethod"]),
    ("IfcTypeResource", Some("IfcTypeObject"), &["Identification", "LongDescription", "ResourceType"]),
    ("IfcConstructionResourceType", Some("IfcTypeResource"), &["BaseCosts", "BaseQuantity"]),
    ("IfcConstructionEquipmentResourceType", Some("IfcConstructionResourceType"), PREDEFINED),
    ("IfcConstructionMaterialResourceType", Some("IfcConstructionResourceType"), PREDEFINED),
    ("IfcConstructionProductResourceType", Some("IfcConstructionResourceType"), PREDEFINED),
    ("IfcCrewResourceType", Some("IfcConstructionResourceType"), PREDEFINED),
    ("IfcLaborResourceType", Some("IfcConstructionResourceType"), PREDEFINED),
    ("IfcSubContractResourceType", Some("IfcConstructionResourceType"), PREDEFINED),
    ("IfcTypeProduct", Some("IfcTypeObject"), &["RepresentationMaps", "Tag"]),
    ("IfcDoorStyle", Some("IfcTypeProduct"), &["OperationType", "ConstructionType", "ParameterTakesPrecedence", "Sizeable"]),
    ("IfcWindowStyle", Some("IfcTypeProduct"), &["ConstructionType", "OperationType", "ParameterTakesPrecedence", "Sizeable"]),
    ("IfcSpatialElementType", Some("IfcTypeProduct"), &["ElementType"]),
    ("IfcSpatialStructureElementType", Some("IfcSpatialElementType"), &[]),
    ("IfcSpaceType", Some("IfcSpatialStructureElementType"), &["PredefinedType", "LongName"]),
    ("IfcSpatialZoneType", Some("IfcSpatialElementType"), &["PredefinedType", "LongName"]),
    ("IfcElementType", Some("IfcTypeProduct"), &["ElementType"]),
    ("IfcBuildingElementType", Some("IfcElementType"), &[]),
    ("IfcBeamType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcBuildingElementProxyType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcChimneyType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcColumnType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcCoveringType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcCurtainWallType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcDoorType", Some("IfcBuildingElementType"), &["PredefinedType", "OperationType", "ParameterTakesPrecedence", "UserDefinedOperationType"]),
    ("IfcFootingType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcMemberType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcPileType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcPlateType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcRailingType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcRampFlightType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcRampType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcRoofType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcShadingDeviceType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcSlabType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcStairFlightType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcStairType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcWallType", Some("IfcBuildingElementType"), PREDEFINED),
    ("IfcWindowType", Some("IfcBuildingElementType"), &["PredefinedType", "PartitioningType", "ParameterTakesPrecedence", "UserDefinedPartitioningType"]),
    ("IfcCivilElementType", Some("IfcElementType"), &[]),
    ("IfcElementAssemblyType", Some("IfcElementType"), PREDEFINED),
    ("IfcElementComponentType", Some("IfcElementType"), &[]),
    ("IfcBuildingElementPartType", Some("IfcElementComponentType"), PREDEFINED),
    ("IfcDiscreteAccessoryType", Some("IfcElementComponentType"), PREDEFINED),
    ("IfcFastenerType", Some("IfcElementComponentType"), PREDEFINED),
    ("IfcMechanicalFastenerType", Some("IfcElementComponentType"), &["PredefinedType", "NominalDiameter", "NominalLength"]),
    ("IfcReinforcingElementType", Some("IfcElementComponentType"), &[]),
    ("IfcReinforcingBarType", Some("IfcReinforcingElementType"), &["PredefinedType", "NominalDiameter", "CrossSectionArea", "BarLength", "BarSurface", "BendingShapeCode", "BendingParameters"]),
    ("IfcReinforcingMeshType", Some("IfcReinforcingElementType"), &["PredefinedType", "MeshLength", "MeshWidth", "LongitudinalBarNominalDiameter", "TransverseBarNominalDiameter", "LongitudinalBarCrossSectionArea", "TransverseBarCrossSectionArea", "LongitudinalBarSpacing", "TransverseBarSpacing", "BendingShapeCode", "BendingParameters"]),
    ("IfcTendonAnchorType", Some("IfcReinforcingElementType"), PREDEFINED),
    ("IfcTendonType", Some("IfcReinforcingElementType"), &["PredefinedType", "NominalDiameter", "CrossSectionArea", "SheathDiameter"]),
    ("IfcVibrationIsolatorType", Some("IfcElementComponentType"), PREDEFINED),
    ("IfcFurnishingElementType", Some("IfcElementType"), &[]),
    ("IfcFurnitureType", Some("IfcFurnishingElementType"), &["AssemblyPlace", "PredefinedType"]),
    ("IfcSystemFurnitureElementType", Some("IfcFurnishingElementType"), PREDEFINED),
    ("IfcGeographicElementType", Some("IfcElementType"), PREDEFINED),
    ("IfcTransportElementType", Some("IfcElementType"), PREDEFINED),
    ("IfcDistributionElementType", Some("IfcElementType"), &[]),
    ("IfcDistributionControlElementType", Some("IfcDistributionElementType"), &[]),
    ("IfcActuatorType", Some("IfcDistributionControlElementType"), PREDEFINED),
    ("IfcAlarmType", Some("IfcDistributionControlElementType"), PREDEFINED),
    ("IfcControllerType", Some("IfcDistributionControlElementType"), PREDEFINED),
    ("IfcFlowInstrumentType", Some("IfcDistributionControlElementType"), PREDEFINED),
    ("IfcProtectiveDeviceTrippingUnitType", Some("IfcDistributionControlElementType"), PREDEFINED),
    ("IfcSensorType", Some("IfcDistributionControlElementType"), PREDEFINED),
    ("IfcUnitaryControlElementType", Some("IfcDistributionControlElementType"), PREDEFINED),
    ("IfcDistributionFlowElementType", Some("IfcDistributionElementType"), &[]),
    ("IfcDistributionChamberElementType", Some("IfcDistributionFlowElementType"), PREDEFINED),
    ("IfcEnergyConversionDeviceType", Some("IfcDistributionFlowElementType"), &[]),
    ("IfcAirToAirHeatRecoveryType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcBoilerType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcBurnerType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcChillerType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcCoilType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcCondenserType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcCooledBeamType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcCoolingTowerType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcElectricGeneratorType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcElectricMotorType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcEngineType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcEvaporativeCoolerType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcEvaporatorType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcHeatExchangerType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcHumidifierType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcMotorConnectionType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcSolarDeviceType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcTransformerType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcTubeBundleType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcUnitaryEquipmentType", Some("IfcEnergyConversionDeviceType"), PREDEFINED),
    ("IfcFlowControllerType", Some("IfcDistributionFlowElementType"), &[]),
    ("IfcAirTerminalBoxType", Some("IfcFlowControllerType"), PREDEFINED),
    ("IfcDamperType", Some("IfcFlowControllerType"), PREDEFINED),
    ("IfcElectricDistributionBoardType", Some("IfcFlowControllerType"), PREDEFINED),
    ("IfcElectricTimeControlType", Some("IfcFlowControllerType"), PREDEFINED),
    ("IfcFlowMeterType", Some("IfcFlowControllerType"), PREDEFINED),
    ("IfcProtectiveDeviceType", Some("IfcFlowControllerType"), PREDEFINED),
    ("IfcSwitchingDeviceType", Some("IfcFlowControllerType"), PREDEFINED),
    ("IfcValveType", Some("IfcFlowControllerType"), PREDEFINED),
    ("IfcFlowFittingType", Some("IfcDistributionFlowElementType"), &[]),
    ("IfcCableCarrierFittingType", Some("IfcFlowFittingType"), PREDEFINED),
    ("IfcCableFittingType", Some("IfcFlowFittingType"), PREDEFINED),
    ("IfcDuctFittingType", Some("IfcFlowFittingType"), PREDEFINED),
    ("IfcJunctionBoxType", Some("IfcFlowFittingType"), PREDEFINED),
    ("IfcPipeFittingType", Some("IfcFlowFittingType"), PREDEFINED),
    ("IfcFlowMovingDeviceType", Some("IfcDistributionFlowElementType"), &[]),
    ("IfcCompressorType", Some("IfcFlowMovingDeviceType"), PREDEFINED),
    ("IfcFanType", Some("IfcFlowMovingDeviceType"), PREDEFINED),
    ("IfcPumpType", Some("IfcFlowMovingDeviceType"), PREDEFINED),
    ("IfcFlowSegmentType", Some("IfcDistributionFlowElementType"), &[]),
    ("IfcCableCarrierSegmentType", Some("IfcFlowSegmentType"), PREDEFINED),
    ("IfcCableSegmentType", Some("IfcFlowSegmentType"), PREDEFINED),
    ("IfcDuctSegmentType", Some("IfcFlowSegmentType"), PREDEFINED),
    ("IfcPipeSegmentType", Some("IfcFlowSegmentType"), PREDEFINED),
    ("IfcFlowStorageDeviceType", Some("IfcDistributionFlowElementType"), &[]),
    ("IfcElectricFlowStorageDeviceType", Some("IfcFlowStorageDeviceType"), PREDEFINED),
    ("IfcTankType", Some("IfcFlowStorageDeviceType"), PREDEFINED),
    ("IfcFlowTerminalType", Some("IfcDistributionFlowElementType"), &[]),
    ("IfcAirTerminalType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcAudioVisualApplianceType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcCommunicationsApplianceType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcElectricApplianceType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcFireSuppressionTerminalType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcLampType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcLightFixtureType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcMedicalDeviceType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcOutletType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcSanitaryTerminalType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcSpaceHeaterType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcStackTerminalType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcWasteTerminalType", Some("IfcFlowTerminalType"), PREDEFINED),
    ("IfcFlowTreatmentDeviceType", Some("IfcDistributionFlowElementType"), &[]),
    ("IfcDuctSilencerType", Some("IfcFlowTreatmentDeviceType"), PREDEFINED),
    ("IfcFilterType", Some("IfcFlowTreatmentDeviceType"), PREDEFINED),
    ("IfcInterceptorType", Some("IfcFlowTreatmentDeviceType"), PREDEFINED),
    // Relationships
    ("IfcRelationship", Some("IfcRoot"), &[]),
    ("IfcRelAssigns", Some("IfcRelationship"), &["RelatedObjects", "RelatedObjectsType"]),
    ("IfcRelAssignsToActor", Some("IfcRelAssigns"), &["RelatingActor", "ActingRole"]),
    ("IfcRelAssignsToControl", Some("IfcRelAssigns"), &["RelatingControl"]),
    ("IfcRelAssignsToGroup", Some("IfcRelAssigns"), &["RelatingGroup"]),
    ("IfcRelAssignsToGroupByFactor", Some("IfcRelAssignsToGroup"), &["Factor"]),
    ("IfcRelAssignsToProcess", Some("IfcRelAssigns"), &["RelatingProcess", "QuantityInProcess"]),
    ("IfcRelAssignsToProduct", Some("IfcRelAssigns"), &["RelatingProduct"]),
    ("IfcRelAssignsToResource", Some("IfcRelAssigns"), &["RelatingResource"]),
    ("IfcRelAssociates", Some("IfcRelationship"), &["RelatedObjects"]),
    ("IfcRelAssociatesApproval", Some("IfcRelAssociates"), &["RelatingApproval"]),
    ("IfcRelAssociatesClassification", Some("IfcRelAssociates"), &["RelatingClassification"]),
    ("IfcRelAssociatesConstraint", Some("IfcRelAssociates"), &["Intent", "RelatingConstraint"]),
    ("IfcRelAssociatesDocument", Some("IfcRelAssociates"), &["RelatingDocument"]),
    ("IfcRelAssociatesLibrary", Some("IfcRelAssociates"), &["RelatingLibrary"]),
    ("IfcRelAssociatesMaterial", Some("IfcRelAssociates"), &["RelatingMaterial"]),
    ("IfcRelConnects", Some("IfcRelationship"), &[]),
    ("IfcRelConnectsElements", Some("IfcRelConnects"), &["ConnectionGeometry", "RelatingElement", "RelatedElement"]),
    ("IfcRelConnectsPathElements", Some("IfcRelConnectsElements"), &["RelatingPriorities", "RelatedPriorities", "RelatedConnectionType", "RelatingConnectionType"]),
    ("IfcRelConnectsWithRealizingElements", Some("IfcRelConnectsElements"), &["RealizingElements", "ConnectionType"]),
    ("IfcRelConnectsPortToElement", Some("IfcRelConnects"), &["RelatingPort", "RelatedElement"]),
    ("IfcRelConnectsPorts", Some("IfcRelConnects"), &["RelatingPort", "RelatedPort", "RealizingElement"]),
    ("IfcRelConnectsStructuralActivity", Some("IfcRelConnects"), &["RelatingElement", "RelatedStructuralActivity"]),
    ("IfcRelConnectsStructuralMember", Some("IfcRelConnects"), &["RelatingStructuralMember", "RelatedStructuralConnection", "AppliedCondition", "AdditionalConditions", "SupportedLength", "ConditionCoordinateSystem"]),
    ("IfcRelConnectsWithEccentricity", Some("IfcRelConnectsStructuralMember"), &["ConnectionConstraint"]),
    ("IfcRelContainedInSpatialStructure", Some("IfcRelConnects"), &["RelatedElements", "RelatingStructure"]),
    ("IfcRelCoversBldgElements", Some("IfcRelConnects"), &["RelatingBuildingElement", "RelatedCoverings"]),
    ("IfcRelCoversSpaces", Some("IfcRelConnects"), &["RelatingSpace", "RelatedCoverings"]),
    ("IfcRelFillsElement", Some("IfcRelConnects"), &["RelatingOpeningElement", "RelatedBuildingElement"]),
    ("IfcRelFlowControlElements", Some("IfcRelConnects"), &["RelatedControlElements", "RelatingFlowElement"]),
    ("IfcRelInterferesElements", Some("IfcRelConnects"), &["RelatingElement", "RelatedElement", "InterferenceGeometry", "InterferenceType", "ImpliedOrder"]),
    ("IfcRelReferencedInSpatialStructure", Some("IfcRelConnects"), &["RelatedElements", "RelatingStructure"]),
    ("IfcRelSequence", Some("IfcRelConnects"), &["RelatingProcess", "RelatedProcess", "TimeLag", "SequenceType", "UserDefinedSequenceType"]),
    ("IfcRelServicesBuildings", Some("IfcRelConnects"), &["RelatingSystem", "RelatedBuildings"]),
    ("IfcRelSpaceBoundary", Some("IfcRelConnects"), &["RelatingSpace", "RelatedBuildingElement", "ConnectionGeometry", "PhysicalOrVirtualBoundary", "InternalOrExternalBoundary"]),
    ("IfcRelSpaceBoundary1stLevel", Some("IfcRelSpaceBoundary"), &["ParentBoundary"]),
    ("IfcRelSpaceBoundary2ndLevel", Some("IfcRelSpaceBoundary1stLevel"), &["CorrespondingBoundary"]),
    ("IfcRelDeclares", Some("IfcRelationship"), &["RelatingContext", "RelatedDefinitions"]),
    ("IfcRelDecomposes", Some("IfcRelationship"), &[]),
    ("IfcRelAggregates", Some("IfcRelDecomposes"), &["RelatingObject", "RelatedObjects"]),
    ("IfcRelNests", Some("IfcRelDecomposes"), &["RelatingObject", "RelatedObjects"]),
    ("IfcRelProjectsElement", Some("IfcRelDecomposes"), &["RelatingElement", "RelatedFeatureElement"]),
    ("IfcRelVoidsElement", Some("IfcRelDecomposes"), &["RelatingBuildingElement", "RelatedOpeningElement"]),
    ("IfcRelDefines", Some("IfcRelationship"), &[]),
    ("IfcRelDefinesByObject", Some("IfcRelDefines"), &["RelatedObjects", "RelatingObject"]),
    ("IfcRelDefinesByProperties", Some("IfcRelDefines"), &["RelatedObjects", "RelatingPropertyDefinition"]),
    ("IfcRelDefinesByTemplate", Some("IfcRelDefines"), &["RelatedPropertySets", "RelatingTemplate"]),
    ("IfcRelDefinesByType", Some("IfcRelDefines"), &["RelatedObjects", "RelatingType"]),
    // Property definitions
    ("IfcPropertyDefinition", Some("IfcRoot"), &[]),
    ("IfcPropertySetDefinition", Some("IfcPropertyDefinition"), &[]),
    ("IfcPreDefinedPropertySet", Some("IfcPropertySetDefinition"), &[]),
    ("IfcDoorLiningProperties", Some("IfcPreDefinedPropertySet"), &["LiningDepth", "LiningThickness", "ThresholdDepth", "ThresholdThickness", "TransomThickness", "TransomOffset", "LiningOffset", "ThresholdOffset", "CasingThickness", "CasingDepth", "ShapeAspectStyle", "LiningToPanelOffsetX", "LiningToPanelOffsetY"]),
    ("IfcDoorPanelProperties", Some("IfcPreDefinedPropertySet"), &["PanelDepth", "PanelOperation", "PanelWidth", "PanelPosition", "ShapeAspectStyle"]),
    ("IfcPermeableCoveringProperties", Some("IfcPreDefinedPropertySet"), &["OperationType", "PanelPosition", "FrameDepth", "FrameThickness", "ShapeAspectStyle"]),
    ("IfcReinforcementDefinitionProperties", Some("IfcPreDefinedPropertySet"), &["DefinitionType", "ReinforcementSectionDefinitions"]),
    ("IfcWindowLiningProperties", Some("IfcPreDefinedPropertySet"), &["LiningDepth", "LiningThickness", "TransomThickness", "MullionThickness", "FirstTransomOffset", "SecondTransomOffset", "FirstMullionOffset", "SecondMullionOffset", "ShapeAspectStyle", "LiningOffset", "LiningToPanelOffsetX", "LiningToPanelOffsetY"]),
    ("IfcWindowPanelProperties", Some("IfcPreDefinedPropertySet"), &["OperationType", "PanelPosition", "FrameDepth", "FrameThickness", "ShapeAspectStyle"]),
    ("IfcPropertySet", Some("IfcPropertySetDefinition"), &["HasProperties"]),
    ("IfcQuantitySet", Some("IfcPropertySetDefinition"), &[]),
    ("IfcElementQuantity", Some("IfcQuantitySet"), &["MethodOfMeasurement", "Quantities"]),
    ("IfcPropertyTemplateDefinition", Some("IfcPropertyDefinition"), &[]),
    ("IfcPropertySetTemplate", Some("IfcPropertyTemplateDefinition"), &["TemplateType", "ApplicableEntity", "HasPropertyTemplates"]),
    ("IfcPropertyTemplate", Some("IfcPropertyTemplateDefinition"), &[]),
    ("IfcComplexPropertyTemplate", Some("IfcPropertyTemplate"), &["UsageName", "TemplateType", "HasPropertyTemplates"]),
    ("IfcSimplePropertyTemplate", Some("IfcPropertyTemplate"), &["TemplateType", "PrimaryMeasureType", "SecondaryMeasureType", "Enumerators", "PrimaryUnit", "SecondaryUnit", "Expression", "AccessState"]),
    // Properties and quantities
    ("IfcPropertyAbstraction", None, &[]),
    ("IfcExtendedProperties", Some("IfcPropertyAbstraction"), &["Name", "Description", "Properties"]),
    ("IfcMaterialProperties", Some("IfcExtendedProperties"), &["Material"]),
    ("IfcProfileProperties", Some("IfcExtendedProperties"), &["ProfileDefinition"]),
    ("IfcPropertyEnumeration", Some("IfcPropertyAbstraction"), &["Name", "EnumerationValues", "Unit"]),
    ("IfcProperty", Some("IfcPropertyAbstraction"), &["Name", "Description"]),
    ("IfcComplexProperty", Some("IfcProperty"), &["UsageName", "HasProperties"]),
    ("IfcSimpleProperty", Some("IfcProperty"), &[]),
    ("IfcPropertyBoundedValue", Some("IfcSimpleProperty"), &["UpperBoundValue", "LowerBoundValue", "Unit", "SetPointValue"]),
    ("IfcPropertyEnumeratedValue", Some("IfcSimpleProperty"), &["EnumerationValues", "EnumerationReference"]),
    ("IfcPropertyListValue", Some("IfcSimpleProperty"), &["ListValues", "Unit"]),
    ("IfcPropertyReferenceValue", Some("IfcSimpleProperty"), &["UsageName", "PropertyReference"]),
    ("IfcPropertySingleValue", Some("IfcSimpleProperty"), &["NominalValue", "Unit"]),
    ("IfcPropertyTableValue", Some("IfcSimpleProperty"), &["DefiningValues", "DefinedValues", "Expression", "DefiningUnit", "DefinedUnit", "CurveInterpolation"]),
    ("IfcPhysicalQuantity", None, &["Name", "Description"]),
    ("IfcPhysicalComplexQuantity", Some("IfcPhysicalQuantity"), &["HasQuantities", "Discrimination", "Quality", "Usage"]),
    ("IfcPhysicalSimpleQuantity", Some("IfcPhysicalQuantity"), &["Unit"]),
    ("IfcQuantityArea", Some("IfcPhysicalSimpleQuantity"), &["AreaValue", "Formula"]),
    ("IfcQuantityCount", Some("IfcPhysicalSimpleQuantity"), &["CountValue", "Formula"]),
    ("IfcQuantityLength", Some("IfcPhysicalSimpleQuantity"), &["LengthValue", "Formula"]),
    ("IfcQuantityTime", Some("IfcPhysicalSimpleQuantity"), &["TimeValue", "Formula"]),
    ("IfcQuantityVolume", Some("IfcPhysicalSimpleQuantity"), &["VolumeValue", "Formula"]),
    ("IfcQuantityWeight", Some("IfcPhysicalSimpleQuantity"), &["WeightValue", "Formula"]),
    // Actors and ownership
    ("IfcOwnerHistory", None, &["OwningUser", "OwningApplication", "State", "ChangeAction", "LastModifiedDate", "LastModifyingUser", "LastModifyingApplication", "CreationDate"]),
    ("IfcPerson", None, &["Identification", "FamilyName", "GivenName", "MiddleNames", "PrefixTitles", "SuffixTitles", "Roles", "Addresses"]),
    ("IfcOrganization", None, &["Identification", "Name", "Description", "Roles", "Addresses"]),
    ("IfcPersonAndOrganization", None, &["ThePerson", "TheOrganization", "Roles"]),
    ("IfcApplication", None, &["ApplicationDeveloper", "Version", "ApplicationFullName", "ApplicationIdentifier"]),
    ("IfcApproval", None, &["Identifier", "Name", "Description", "TimeOfApproval", "Status", "Level", "Qualifier", "RequestingApproval", "GivingApproval"]),
    // External references
    ("IfcExternalInformation", None, &[]),
    ("IfcClassification", Some("IfcExternalInformation"), &["Source", "Edition", "EditionDate", "Name", "Description", "Location", "ReferenceTokens"]),
    ("IfcDocumentInformation", Some("IfcExternalInformation"), &["Identification", "Name", "Description", "Location", "Purpose", "IntendedUse", "Scope", "Revision", "DocumentOwner", "Editors", "CreationTime", "LastRevisionTime", "ElectronicFormat", "ValidFrom", "ValidUntil", "Confidentiality", "Status"]),
    ("IfcLibraryInformation", Some("IfcExternalInformation"), &["Name", "Version", "Publisher", "VersionDate", "Location", "Description"]),
    ("IfcExternalReference", None, &["Location", "Identification", "Name"]),
    ("IfcClassificationReference", Some("IfcExternalReference"), &["ReferencedSource", "Description", "Sort"]),
    ("IfcDocumentReference", Some("IfcExternalReference"), &["Description", "ReferencedDocument"]),
    ("IfcLibraryReference", Some("IfcExternalReference"), &["Description", "Language", "ReferencedLibrary"]),
    // Materials
    ("IfcMaterialDefinition", None, &[]),
    ("IfcMaterial", Some("IfcMaterialDefinition"), &["Name", "Description", "Category"]),
    ("IfcMaterialConstituent", Some("IfcMaterialDefinition"), &["Name", "Description", "Material", "Fraction", "Category"]),
    ("IfcMaterialConstituentSet", Some("IfcMaterialDefinition"), &["Name", "Description", "MaterialConstituents"]),
    ("IfcMaterialLayer", Some("IfcMaterialDefinition"), &["Material", "LayerThickness", "IsVentilated", "Name", "Description", "Category", "Priority"]),
    ("IfcMaterialLayerSet", Some("IfcMaterialDefinition"), &["MaterialLayers", "LayerSetName", "Description"]),
    ("IfcMaterialProfile", Some("IfcMaterialDefinition"), &["Name", "Description", "Material", "Profile", "Priority", "Category"]),
    ("IfcMaterialProfileSet", Some("IfcMaterialDefinition"), &["Name", "Description", "MaterialProfiles", "CompositeProfile"]),
    ("IfcMaterialUsageDefinition", None, &[]),
    ("IfcMaterialLayerSetUsage", Some("IfcMaterialUsageDefinition"), &["ForLayerSet", "LayerSetDirection", "DirectionSense", "OffsetFromReferenceLine", "ReferenceExtent"]),
    ("IfcMaterialProfileSetUsage", Some("IfcMaterialUsageDefinition"), &["ForProfileSet", "CardinalPoint", "ReferenceExtent"]),
    ("IfcMaterialList", None, &["Materials"]),
    // Placement and representation
    ("IfcObjectPlacement", None, &[]),
    ("IfcLocalPlacement", Some("IfcObjectPlacement"), &["PlacementRelTo", "RelativePlacement"]),
    ("IfcGridPlacement", Some("IfcObjectPlacement"), &["PlacementLocation", "PlacementRefDirection"]),
    ("IfcGridAxis", None, &["AxisTag", "AxisCurve", "SameSense"]),
    ("IfcProductRepresentation", None, &["Name", "Description", "Representations"]),
    ("IfcProductDefinitionShape", Some("IfcProductRepresentation"), &[]),
    ("IfcMaterialDefinitionRepresentation", Some("IfcProductRepresentation"), &["RepresentedMaterial"]),
    ("IfcRepresentation", None, &["ContextOfItems", "RepresentationIdentifier", "RepresentationType", "Items"]),
    ("IfcShapeModel", Some("IfcRepresentation"), &[]),
    ("IfcShapeRepresentation", Some("IfcShapeModel"), &[]),
    ("IfcTopologyRepresentation", Some("IfcShapeModel"), &[]),
    ("IfcStyleModel", Some("IfcRepresentation"), &[]),
    ("IfcStyledRepresentation", Some("IfcStyleModel"), &[]),
    ("IfcRepresentationContext", None, &["ContextIdentifier", "ContextType"]),
    ("IfcGeometricRepresentationContext", Some("IfcRepresentationContext"), &["CoordinateSpaceDimension", "Precision", "WorldCoordinateSystem", "TrueNorth"]),
    ("IfcGeometricRepresentationSubContext", Some("IfcGeometricRepresentationContext"), &["ParentContext", "TargetScale", "TargetView", "UserDefinedTargetView"]),
    ("IfcRepresentationMap", None, &["MappingOrigin", "MappedRepresentation"]),
    ("IfcRepresentationItem", None, &[]),
    ("IfcMappedItem", Some("IfcRepresentationItem"), &["MappingSource", "MappingTarget"]),
    ("IfcStyledItem", Some("IfcRepresentationItem"), &["Item", "Styles", "Name"]),
    ("IfcGeometricRepresentationItem", Some("IfcRepresentationItem"), &[]),
    ("IfcPlacement", Some("IfcGeometricRepresentationItem"), &["Location"]),
    ("IfcAxis1Placement", Some("IfcPlacement"), &["Axis"]),
    ("IfcAxis2Placement2D", Some("IfcPlacement"), &["RefDirection"]),
    ("IfcAxis2Placement3D", Some("IfcPlacement"), &["Axis", "RefDirection"]),
    ("IfcPoint", Some("IfcGeometricRepresentationItem"), &[]),
    ("IfcCartesianPoint", Some("IfcPoint"), &["Coordinates"]),
    ("IfcDirection", Some("IfcGeometricRepresentationItem"), &["DirectionRatios"]),
    ("IfcCartesianTransformationOperator", Some("IfcGeometricRepresentationItem"), &["Axis1", "Axis2", "LocalOrigin", "Scale"]),
    ("IfcCartesianTransformationOperator3D", Some("IfcCartesianTransformationOperator"), &["Axis3"]),
    ("IfcCurve", Some("IfcGeometricRepresentationItem"), &[]),
    ("IfcBoundedCurve", Some("IfcCurve"), &[]),
    ("IfcPolyline", Some("IfcBoundedCurve"), &["Points"]),
    ("IfcSolidModel", Some("IfcGeometricRepresentationItem"), &[]),
    ("IfcSweptAreaSolid", Some("IfcSolidModel"), &["SweptArea", "Position"]),
    ("IfcExtrudedAreaSolid", Some("IfcSweptAreaSolid"), &["ExtrudedDirection", "Depth"]),
    ("IfcProfileDef", None, &["ProfileType", "ProfileName"]),
    ("IfcArbitraryClosedProfileDef", Some("IfcProfileDef"), &["OuterCurve"]),
    ("IfcParameterizedProfileDef", Some("IfcProfileDef"), &["Position"]),
    ("IfcCircleProfileDef", Some("IfcParameterizedProfileDef"), &["Radius"]),
    ("IfcRectangleProfileDef", Some("IfcParameterizedProfileDef"), &["XDim", "YDim"]),
    // Units
    ("IfcUnitAssignment", None, &["Units"]),
    ("IfcNamedUnit", None, &["Dimensions", "UnitType"]),
    ("IfcSIUnit", Some("IfcNamedUnit"), &["Prefix", "Name"]),
    ("IfcConversionBasedUnit", Some("IfcNamedUnit"), &["Name", "ConversionFactor"]),
    ("IfcMeasureWithUnit", None, &["ValueComponent", "UnitComponent"]),
    ("IfcDimensionalExponents", None, &["LengthExponent", "MassExponent", "TimeExponent", "ElectricCurrentExponent", "ThermodynamicTemperatureExponent", "AmountOfSubstanceExponent", "LuminousIntensityExponent"]),
];

pub(super) const INVERSES: &[InverseDef] = &[
    ("IfcRelAssigns", "RelatedObjects", None, "HasAssignments"),
    ("IfcRelAssignsToActor", "RelatingActor", None, "IsActingUpon"),
    ("IfcRelAssignsToControl", "RelatingControl", None, "Controls"),
    ("IfcRelAssignsToGroup", "RelatingGroup", None, "IsGroupedBy"),
    ("IfcRelAssignsToProcess", "RelatingProcess", None, "OperatesOn"),
    ("IfcRelAssignsToProduct", "RelatingProduct", None, "ReferencedBy"),
    ("IfcRelAssignsToResource", "RelatingResource", None, "ResourceOf"),
    ("IfcRelAssociates", "RelatedObjects", None, "HasAssociations"),
    ("IfcRelAssociatesApproval", "RelatingApproval", None, "ApprovedObjects"),
    ("IfcRelAssociatesClassification", "RelatingClassification", Some("IfcClassificationReference"), "ClassificationRefForObjects"),
    ("IfcRelAssociatesClassification", "RelatingClassification", Some("IfcClassification"), "ClassificationForObjects"),
    ("IfcRelAssociatesDocument", "RelatingDocument", Some("IfcDocumentReference"), "DocumentRefForObjects"),
    ("IfcRelAssociatesDocument", "RelatingDocument", Some("IfcDocumentInformation"), "DocumentInfoForObjects"),
    ("IfcRelAssociatesLibrary", "RelatingLibrary", Some("IfcLibraryReference"), "LibraryRefForObjects"),
    ("IfcRelAssociatesLibrary", "RelatingLibrary", Some("IfcLibraryInformation"), "LibraryInfoForObjects"),
    ("IfcRelAssociatesMaterial", "RelatingMaterial", None, "AssociatedTo"),
    ("IfcRelConnectsElements", "RelatingElement", None, "ConnectedTo"),
    ("IfcRelConnectsElements", "RelatedElement", None, "ConnectedFrom"),
    ("IfcRelConnectsWithRealizingElements", "RealizingElements", None, "IsConnectionRealization"),
    ("IfcRelConnectsPortToElement", "RelatingPort", None, "ContainedIn"),
    ("IfcRelConnectsPortToElement", "RelatedElement", None, "HasPorts"),
    ("IfcRelConnectsPorts", "RelatingPort", None, "ConnectedTo"),
    ("IfcRelConnectsPorts", "RelatedPort", None, "ConnectedFrom"),
    ("IfcRelConnectsStructuralActivity", "RelatingElement", None, "AssignedStructuralActivity"),
    ("IfcRelConnectsStructuralActivity", "RelatedStructuralActivity", None, "AssignedToStructuralItem"),
    ("IfcRelConnectsStructuralMember", "RelatingStructuralMember", None, "ConnectedBy"),
    ("IfcRelConnectsStructuralMember", "RelatedStructuralConnection", None, "ConnectsStructuralMembers"),
    ("IfcRelContainedInSpatialStructure", "RelatedElements", None, "ContainedInStructure"),
    ("IfcRelContainedInSpatialStructure", "RelatingStructure", None, "ContainsElements"),
    ("IfcRelCoversBldgElements", "RelatingBuildingElement", None, "HasCoverings"),
    ("IfcRelCoversBldgElements", "RelatedCoverings", None, "CoversElements"),
    ("IfcRelCoversSpaces", "RelatingSpace", None, "HasCoverings"),
    ("IfcRelCoversSpaces", "RelatedCoverings", None, "CoversSpaces"),
    ("IfcRelFillsElement", "RelatingOpeningElement", None, "HasFillings"),
    ("IfcRelFillsElement", "RelatedBuildingElement", None, "FillsVoids"),
    ("IfcRelFlowControlElements", "RelatedControlElements", None, "AssignedToFlowElement"),
    ("IfcRelFlowControlElements", "RelatingFlowElement", None, "HasControlElements"),
    ("IfcRelInterferesElements", "RelatingElement", None, "InterferesElements"),
    ("IfcRelInterferesElements", "RelatedElement", None, "IsInterferedByElements"),
    ("IfcRelReferencedInSpatialStructure", "RelatedElements", None, "ReferencedInStructures"),
    ("IfcRelReferencedInSpatialStructure", "RelatingStructure", None, "ReferencesElements"),
    ("IfcRelSequence", "RelatingProcess", None, "IsPredecessorTo"),
    ("IfcRelSequence", "RelatedProcess", None, "IsSuccessorFrom"),
    ("IfcRelServicesBuildings", "RelatingSystem", None, "ServicesBuildings"),
    ("IfcRelServicesBuildings", "RelatedBuildings", None, "ServicedBySystems"),
    ("IfcRelSpaceBoundary", "RelatingSpace", None, "BoundedBy"),
    ("IfcRelSpaceBoundary", "RelatedBuildingElement", None, "ProvidesBoundaries"),
    ("IfcRelSpaceBoundary1stLevel", "ParentBoundary", None, "InnerBoundaries"),
    ("IfcRelSpaceBoundary2ndLevel", "CorrespondingBoundary", None, "Corresponds"),
    ("IfcRelDeclares", "RelatingContext", None, "Declares"),
    ("IfcRelDeclares", "RelatedDefinitions", None, "HasContext"),
    ("IfcRelAggregates", "RelatingObject", None, "IsDecomposedBy"),
    ("IfcRelAggregates", "RelatedObjects", None, "Decomposes"),
    ("IfcRelNests", "RelatingObject", None, "IsNestedBy"),
    ("IfcRelNests", "RelatedObjects", None, "Nests"),
    ("IfcRelProjectsElement", "RelatingElement", None, "HasProjections"),
    ("IfcRelProjectsElement", "RelatedFeatureElement", None, "ProjectsElements"),
    ("IfcRelVoidsElement", "RelatingBuildingElement", None, "HasOpenings"),
    ("IfcRelVoidsElement", "RelatedOpeningElement", None, "VoidsElements"),
    ("IfcRelDefinesByObject", "RelatedObjects", None, "IsDeclaredBy"),
    ("IfcRelDefinesByObject", "RelatingObject", None, "Declares"),
    ("IfcRelDefinesByProperties", "RelatedObjects", None, "IsDefinedBy"),
    ("IfcRelDefinesByProperties", "RelatingPropertyDefinition", None, "DefinesOccurrence"),
    ("IfcRelDefinesByTemplate", "RelatedPropertySets", None, "IsDefinedBy"),
    ("IfcRelDefinesByTemplate", "RelatingTemplate", None, "Defines"),
    ("IfcRelDefinesByType", "RelatedObjects", None, "IsTypedBy"),
    ("IfcRelDefinesByType", "RelatingType", None, "Types"),
    ("IfcPropertySet", "HasProperties", None, "PartOfPset"),
    ("IfcComplexProperty", "HasProperties", None, "PartOfComplex"),
    ("IfcPhysicalComplexQuantity", "HasQuantities", None, "PartOfComplex"),
    ("IfcTypeObject", "HasPropertySets", None, "DefinesType"),
    ("IfcProduct", "ObjectPlacement", None, "PlacesObject"),
    ("IfcProduct", "Representation", None, "ShapeOfProduct"),
    ("IfcLocalPlacement", "PlacementRelTo", None, "ReferencedByPlacements"),
    ("IfcMaterialLayerSet", "MaterialLayers", None, "ToMaterialLayerSet"),
    ("IfcMaterialProfileSet", "MaterialProfiles", None, "ToMaterialProfileSet"),
    ("IfcMaterialConstituentSet", "MaterialConstituents", None, "ToMaterialConstituentSet"),
    ("IfcStyledItem", "Item", None, "StyledByItem"),
];
