//! Error types for IFC Stream.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading IFC files.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the IFC file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Uploaded bytes are not valid UTF-8 text.
    #[error("model content is not valid UTF-8: {source}")]
    Encoding {
        #[from]
        source: std::string::FromUtf8Error,
    },

    /// The STEP format is invalid or malformed.
    #[error("invalid STEP format: {message}")]
    InvalidStep { message: String },
}

/// Errors raised by model queries that expect a specific entity to exist.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model has no `IfcProject` entity.
    #[error("model contains no IfcProject entity")]
    MissingProject,

    /// No model has been loaded into the session yet.
    #[error("no model loaded")]
    NotLoaded,
}

/// Errors that can occur when editing entity attributes.
#[derive(Debug, Error)]
pub enum EditError {
    /// The entity id does not resolve.
    #[error("entity #{id} does not exist")]
    UnknownEntity { id: u64 },

    /// The entity class has no attribute with this name.
    #[error("{class} has no attribute '{name}'")]
    UnknownAttribute { class: String, name: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file or directory.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// There is no table to export.
    #[error("no table loaded - extract data before exporting")]
    NoData,

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },

    /// Failed to build or save the Excel workbook.
    #[error("Excel write failed: {source}")]
    XlsxWrite {
        #[from]
        source: rust_xlsxwriter::XlsxError,
    },
}
