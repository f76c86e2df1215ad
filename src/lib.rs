//! # IFC Stream
//!
//! A terminal-based IFC quantity take-off tool: flattens entities, property
//! sets and quantity sets into tables you can filter, chart and export.
//!
//! ## Features
//!
//! - Parse IFC files (IFC2x3 and IFC4 exchange files)
//! - Extract any class with its property sets, quantities, level and type
//! - Aggregate quantities per level or type
//! - Export to CSV, Excel (one sheet per class) and JSON
//! - Inspect entities with their inverse relations, and rename the project
//!
//! ## Example
//!
//! ```no_run
//! use ifc_stream::extract::objects_data_by_class;
//! use ifc_stream::parser::parse_ifc_file;
//! use ifc_stream::table::DataFrame;
//!
//! let model = parse_ifc_file("model.ifc").expect("Failed to parse");
//! let extraction = objects_data_by_class(&model, "IfcWall");
//! let table = DataFrame::from_records(&extraction.records, &extraction.pset_attributes);
//! println!("{} walls, {} columns", table.height(), table.width());
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod inspect;
pub mod model;
pub mod parser;
pub mod session;
pub mod table;
pub mod ui;
pub mod viewer;
