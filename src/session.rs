//! Per-user state: the loaded model, the derived table and the inspector.
//!
//! Every front end (CLI, TUI) drives the crate through a [`Session`]. Derived
//! state is rebuilt whenever the model it came from changes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{EditError, ExportError, ModelError, ParseError};
use crate::export::{download_path, export_csv, export_excel, export_json};
use crate::extract::objects_data_by_class;
use crate::inspect::DebugProperties;
use crate::model::stats::class_frequency;
use crate::model::{IfcModel, ProjectSummary};
use crate::parser::{parse_ifc_bytes, parse_ifc_file, StepValue};
use crate::table::DataFrame;

#[derive(Debug, Default)]
pub struct Session {
    config: Config,
    file_name: String,
    model: Option<IfcModel>,
    frame: Option<DataFrame>,
    classes: Vec<String>,
    debug: DebugProperties,
}

impl Session {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads an uploaded model, replacing whatever was loaded before.
    pub fn load(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<(), ParseError> {
        let model = parse_ifc_bytes(bytes)?;
        self.replace_model(file_name, model);
        Ok(())
    }

    /// Loads a model from disk.
    pub fn load_path(&mut self, path: &Path) -> Result<(), ParseError> {
        let model = parse_ifc_file(path)?;
        let file_name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        self.replace_model(&file_name, model);
        Ok(())
    }

    fn replace_model(&mut self, file_name: &str, model: IfcModel) {
        tracing::info!(
            file = file_name,
            entities = model.len(),
            schema = model.schema_version(),
            "model loaded"
        );
        self.file_name = file_name.to_string();
        self.model = Some(model);
        self.frame = None;
        self.classes.clear();
        self.debug = DebugProperties::default();
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn model(&self) -> Result<&IfcModel, ModelError> {
        self.model.as_ref().ok_or(ModelError::NotLoaded)
    }

    pub fn summary(&self) -> Result<ProjectSummary, ModelError> {
        Ok(ProjectSummary::from_model(self.model()?, &self.file_name))
    }

    /// Extracts the configured root class into the table and caches it along
    /// with its class list.
    pub fn load_data(&mut self) -> Result<&DataFrame, ModelError> {
        let model = self.model.as_ref().ok_or(ModelError::NotLoaded)?;
        let extraction = objects_data_by_class(model, &self.config.root_class);
        let frame = DataFrame::from_records(&extraction.records, &extraction.pset_attributes);
        self.classes = frame.classes();
        tracing::info!(
            class = %self.config.root_class,
            rows = frame.height(),
            columns = frame.width(),
            "table loaded"
        );
        Ok(self.frame.insert(frame))
    }

    /// Changes the extracted class; a loaded table is rebuilt.
    pub fn set_root_class(&mut self, class: &str) -> Result<(), ModelError> {
        self.config.root_class = class.to_string();
        if self.frame.is_some() {
            self.load_data()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> Option<&DataFrame> {
        self.frame.as_ref()
    }

    /// Classes of the loaded table, most frequent first.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Class occurrence counts above the configured threshold.
    pub fn class_frequency(&self) -> Result<Vec<(String, usize)>, ModelError> {
        Ok(class_frequency(
            self.model()?,
            Some(&self.config.root_class),
            Some(self.config.frequency_threshold),
        ))
    }

    pub fn download_csv(&self) -> Result<PathBuf, ExportError> {
        let (frame, path) = self.download_target("csv")?;
        export_csv(frame, &path)?;
        Ok(path)
    }

    pub fn download_excel(&self) -> Result<PathBuf, ExportError> {
        let (frame, path) = self.download_target("xlsx")?;
        export_excel(frame, &path)?;
        Ok(path)
    }

    pub fn download_json(&self) -> Result<PathBuf, ExportError> {
        let (frame, path) = self.download_target("json")?;
        export_json(frame, &path)?;
        Ok(path)
    }

    fn download_target(&self, extension: &str) -> Result<(&DataFrame, PathBuf), ExportError> {
        let frame = self.frame.as_ref().ok_or(ExportError::NoData)?;
        let path = download_path(&self.config.downloads_dir, &self.file_name, extension)?;
        Ok((frame, path))
    }

    pub fn change_project_name(&mut self, name: &str) -> Result<(), EditError> {
        let model = self.model.as_mut().ok_or(ModelError::NotLoaded)?;
        model.set_project_name(name)?;
        self.refresh_debug();
        Ok(())
    }

    /// Edits one attribute, then refreshes the table and the inspector.
    pub fn set_attribute(&mut self, id: u64, name: &str, value: StepValue) -> Result<(), EditError> {
        let model = self.model.as_mut().ok_or(ModelError::NotLoaded)?;
        model.set_attribute(id, name, value)?;
        if self.frame.is_some() {
            self.load_data()?;
        }
        self.refresh_debug();
        Ok(())
    }

    fn refresh_debug(&mut self) {
        let Some(model) = self.model.as_ref() else {
            return;
        };
        if let Some(current) = self.debug.breadcrumb.pop() {
            self.debug.inspect(model, current, false);
        }
    }

    /// Inspects an entity; see [`DebugProperties::inspect`].
    pub fn inspect(&mut self, id: u64, reset: bool) -> Result<bool, ModelError> {
        let model = self.model.as_ref().ok_or(ModelError::NotLoaded)?;
        Ok(self.debug.inspect(model, id, reset))
    }

    pub fn back(&mut self) -> Result<bool, ModelError> {
        let model = self.model.as_ref().ok_or(ModelError::NotLoaded)?;
        Ok(self.debug.back(model))
    }

    #[must_use]
    pub fn debug(&self) -> &DebugProperties {
        &self.debug
    }

    /// Writes the model, edits included, as STEP text.
    pub fn save_model(&self, path: &Path) -> Result<(), ExportError> {
        let model = self.model.as_ref().ok_or(ExportError::NoData)?;
        fs::write(path, model.to_step_string()).map_err(|source| ExportError::FileCreate {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "model saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MODEL: &str = "ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCPROJECT('p',$,'Old name',$,$,$,$,$,$);
#21=IFCWALL('w1',$,'Wall A',$,$,$,$,$,$);
ENDSEC;
END-ISO-10303-21;";

    fn session(dir: &Path) -> Session {
        let mut session = Session::new(Config {
            downloads_dir: dir.join("downloads"),
            ..Config::default()
        });
        session.load("sample.ifc", MODEL.as_bytes().to_vec()).unwrap();
        session
    }

    #[test]
    fn nothing_loaded_is_an_error() {
        let mut session = Session::default();
        assert!(matches!(session.load_data(), Err(ModelError::NotLoaded)));
        assert!(matches!(session.inspect(1, true), Err(ModelError::NotLoaded)));
        assert!(matches!(session.download_csv(), Err(ExportError::NoData)));
    }

    #[test]
    fn invalid_utf8_upload_fails() {
        let mut session = Session::default();
        let err = session.load("bad.ifc", vec![0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ParseError::Encoding { .. }));
        assert!(!session.is_loaded());
    }

    #[test]
    fn export_requires_extracted_data() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = session(tmp.path());
        assert!(matches!(session.download_excel(), Err(ExportError::NoData)));

        session.load_data().unwrap();
        let path = session.download_csv().unwrap();
        assert_eq!(path, tmp.path().join("downloads").join("sample.csv"));
        assert!(path.exists());
    }

    #[test]
    fn renaming_the_project_survives_a_save() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = session(tmp.path());
        session.change_project_name("New name").unwrap();

        let out = tmp.path().join("renamed.ifc");
        session.save_model(&out).unwrap();

        let mut reloaded = Session::default();
        reloaded.load_path(&out).unwrap();
        assert_eq!(reloaded.summary().unwrap().name, "New name");
        assert_eq!(reloaded.file_name(), "renamed.ifc");
    }

    #[test]
    fn edits_refresh_the_table_and_inspector() {
        let tmp = tempfile::tempdir().unwrap();
        let mut session = session(tmp.path());
        session.load_data().unwrap();
        session.inspect(21, true).unwrap();

        session
            .set_attribute(21, "Name", StepValue::String("Wall Z".into()))
            .unwrap();

        let names = session.frame().unwrap().column("Name").unwrap();
        assert_eq!(names, vec![&crate::model::Value::from("Wall Z")]);
        let name_row = session
            .debug()
            .attributes
            .iter()
            .find(|r| r.name == "Name")
            .unwrap();
        assert_eq!(name_row.string_value, "Wall Z");
        assert_eq!(session.debug().breadcrumb, vec![21]);
    }
}
