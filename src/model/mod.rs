pub mod graph;
pub mod project;
pub mod record;
pub mod stats;
pub mod value;

pub use graph::IfcModel;
pub use project::{storeys, ProjectSummary, Storey};
pub use record::ObjectRecord;
pub use value::{PropertyMap, PropertySets, Value};
