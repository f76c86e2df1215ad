pub mod csv;
pub mod json;
pub mod xlsx;

use std::fs;
use std::path::{Path, PathBuf};

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::export_json;
pub use xlsx::{class_sheets, export_excel, sanitize_sheet_name, write_class_sheets, SheetSink};

/// Builds `<dir>/<stem>.<extension>`, creating `dir` when it is missing.
///
/// `file_name` may carry its own extension (`model.ifc`); it is replaced.
pub fn download_path(dir: &Path, file_name: &str, extension: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::FileCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("export");

    Ok(dir.join(format!("{stem}.{extension}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn download_path_creates_the_directory_and_swaps_the_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("downloads");

        let path = download_path(&dir, "model.ifc", "xlsx").unwrap();

        assert!(dir.is_dir());
        assert_eq!(path, dir.join("model.xlsx"));
    }

    #[test]
    fn empty_file_name_falls_back_to_export() {
        let tmp = tempfile::tempdir().unwrap();
        let path = download_path(tmp.path(), "", "csv").unwrap();
        assert_eq!(path, tmp.path().join("export.csv"));
    }

    #[test]
    fn dotted_stems_are_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let path = download_path(tmp.path(), "tower.v2.ifc", "json").unwrap();
        assert_eq!(path, tmp.path().join("tower.v2.json"));
    }
}
