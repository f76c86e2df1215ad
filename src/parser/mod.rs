pub mod ifc;
pub mod schema;
pub mod step;

pub use crate::error::ParseError;
pub use ifc::{
    get_container, get_predefined_type, get_psets, get_type, parse_ifc_bytes, parse_ifc_file,
    parse_ifc_str, PsetKind,
};
pub use step::{StepEntity, StepFile, StepValue};
