use crate::error::ExportError;
use crate::model::Value;
use crate::table::DataFrame;
use std::fs::File;
use std::path::Path;

/// Writes the table as CSV: a header row, then one row per record.
///
/// Null cells become empty fields.
pub fn export_csv<P: AsRef<Path>>(frame: &DataFrame, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(frame.columns())?;

    for row in frame.rows() {
        writer.write_record(row.iter().map(Value::to_string))?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    tracing::info!(path = %path_ref.display(), rows = frame.height(), "exported csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nulls_are_written_as_empty_fields() {
        let frame = DataFrame::new(
            vec!["Class".into(), "Qto_A.Width".into(), "Pset_B.IsExternal".into()],
            vec![
                vec![Value::from("IfcWall"), Value::Real(200.0), Value::Bool(true)],
                vec![Value::from("IfcWall"), Value::Null, Value::Bool(false)],
            ],
        );
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.csv");

        export_csv(&frame, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Class,Qto_A.Width,Pset_B.IsExternal\nIfcWall,200,True\nIfcWall,,False\n"
        );
    }

    #[test]
    fn missing_directory_is_a_file_create_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("out.csv");
        let err = export_csv(&DataFrame::default(), &path).unwrap_err();
        assert!(matches!(err, ExportError::FileCreate { .. }));
    }
}
