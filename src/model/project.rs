use serde::Serialize;

use super::graph::IfcModel;
use crate::parser::step::StepValue;

#[derive(Debug, Clone, Serialize)]
pub struct Storey {
    pub id: u64,
    pub name: String,
    pub elevation: f64,
}

/// Header facts about a loaded model.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub schema: String,
    pub file_name: String,
    pub entity_count: usize,
    pub storeys: Vec<Storey>,
}

impl ProjectSummary {
    #[must_use]
    pub fn from_model(model: &IfcModel, file_name: &str) -> Self {
        Self {
            name: model
                .project_name()
                .unwrap_or("Unknown Project")
                .to_string(),
            schema: model.schema_version().to_string(),
            file_name: file_name.to_string(),
            entity_count: model.len(),
            storeys: storeys(model),
        }
    }
}

/// Building storeys in id order.
#[must_use]
pub fn storeys(model: &IfcModel) -> Vec<Storey> {
    model
        .by_type("IfcBuildingStorey")
        .into_iter()
        .map(|e| Storey {
            id: e.id,
            name: model.name_of(e).map_or_else(|| format!("Storey #{}", e.id), str::to_string),
            elevation: model.attribute_of(e, "Elevation")
                .and_then(StepValue::as_f64)
                .unwrap_or(0.0),
        })
        .collect()
}
