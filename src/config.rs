//! Session configuration.

use std::path::PathBuf;

pub const DEFAULT_DOWNLOADS_DIR: &str = "downloads";
pub const DEFAULT_ROOT_CLASS: &str = "IfcBuildingElement";

/// Settings a [`Session`](crate::session::Session) runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory export files are written to; created on demand.
    pub downloads_dir: PathBuf,
    /// Class whose entities (subclasses included) are extracted into the table.
    pub root_class: String,
    /// Class frequency charts only show classes with more occurrences than this.
    pub frequency_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            downloads_dir: PathBuf::from(DEFAULT_DOWNLOADS_DIR),
            root_class: DEFAULT_ROOT_CLASS.to_string(),
            frequency_threshold: 0,
        }
    }
}
