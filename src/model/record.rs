use serde::Serialize;

use super::value::PropertySets;

/// One extracted entity with its resolved relations and property sets.
///
/// Records only live between extraction and flattening.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectRecord {
    #[serde(rename = "ExpressId")]
    pub id: u64,
    pub global_id: Option<String>,
    pub class: String,
    pub predefined_type: Option<String>,
    pub name: Option<String>,
    /// Name of the spatial container, empty when not contained.
    pub level: String,
    /// Name of the defining type object, empty when untyped.
    #[serde(rename = "Type")]
    pub type_name: String,
    pub quantity_sets: PropertySets,
    pub property_sets: PropertySets,
}
