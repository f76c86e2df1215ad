use crate::error::ExportError;
use crate::table::DataFrame;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the table as a pretty-printed array of row objects.
pub fn export_json<P: AsRef<Path>>(frame: &DataFrame, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(&frame.records())?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    tracing::info!(path = %path_ref.display(), rows = frame.height(), "exported json");
    Ok(())
}
