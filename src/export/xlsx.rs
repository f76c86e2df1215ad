use std::collections::HashSet;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::ExportError;
use crate::model::Value;
use crate::table::DataFrame;

const MAX_SHEET_NAME: usize = 31;
const RESERVED: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Makes `name` acceptable as an Excel worksheet name.
#[must_use]
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect();
    let trimmed: String = replaced
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME)
        .collect();
    // Truncation can expose a trailing quote again.
    let trimmed = trimmed.trim_end_matches('\'');

    if trimmed.is_empty() {
        "Sheet".to_string()
    } else if trimmed.eq_ignore_ascii_case("History") {
        // Excel keeps this name for its change-tracking sheet.
        format!("{trimmed}_")
    } else {
        trimmed.to_string()
    }
}

/// Splits the table into one sheet per class, most frequent class first.
///
/// Every sheet holds only its class's rows with all-null columns dropped.
/// Names are sanitised and made unique, ignoring case.
#[must_use]
pub fn class_sheets(frame: &DataFrame) -> Vec<(String, DataFrame)> {
    let mut used = HashSet::new();
    frame
        .classes()
        .into_iter()
        .map(|class| {
            let name = unique_name(&sanitize_sheet_name(&class), &mut used);
            (name, frame.filter_by_class(&class))
        })
        .collect()
}

fn unique_name(base: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut n = 2;
    while used.contains(&candidate.to_lowercase()) {
        let suffix = format!(" ({n})");
        let keep = MAX_SHEET_NAME - suffix.chars().count();
        candidate = base.chars().take(keep).collect::<String>() + &suffix;
        n += 1;
    }
    used.insert(candidate.to_lowercase());
    candidate
}

/// Destination for per-class sheets.
pub trait SheetSink {
    fn add_sheet(&mut self, name: &str, frame: &DataFrame) -> Result<(), ExportError>;
}

impl SheetSink for Workbook {
    fn add_sheet(&mut self, name: &str, frame: &DataFrame) -> Result<(), ExportError> {
        let header = Format::new().set_bold();
        let worksheet = self.add_worksheet();
        worksheet.set_name(name)?;
        write_sheet(worksheet, frame, &header)
    }
}

/// Sends every sheet of [`class_sheets`] to `sink`, returning how many were written.
pub fn write_class_sheets<S: SheetSink>(frame: &DataFrame, sink: &mut S) -> Result<usize, ExportError> {
    let sheets = class_sheets(frame);
    for (name, sheet) in &sheets {
        sink.add_sheet(name, sheet)?;
    }
    Ok(sheets.len())
}

/// Writes a workbook with one sheet per class and a bold header row.
pub fn export_excel<P: AsRef<Path>>(frame: &DataFrame, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let mut workbook = Workbook::new();

    let sheets = write_class_sheets(frame, &mut workbook)?;
    if sheets == 0 {
        workbook.add_worksheet();
    }

    workbook.save(path_ref)?;

    tracing::info!(path = %path_ref.display(), sheets, "exported workbook");
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, frame: &DataFrame, header: &Format) -> Result<(), ExportError> {
    for (col, name) in frame.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, cell_col(col)?, name, header)?;
    }

    for (index, row) in frame.rows().iter().enumerate() {
        let row_num = u32::try_from(index + 1).map_err(|_| too_large("rows"))?;
        for (col, value) in row.iter().enumerate() {
            let col = cell_col(col)?;
            match value {
                Value::Null => {}
                Value::Bool(b) => {
                    worksheet.write_boolean(row_num, col, *b)?;
                }
                Value::Integer(i) => {
                    worksheet.write_number(row_num, col, *i as f64)?;
                }
                Value::Real(r) => {
                    worksheet.write_number(row_num, col, *r)?;
                }
                Value::Text(s) => {
                    worksheet.write_string(row_num, col, s)?;
                }
            }
        }
    }
    Ok(())
}

fn cell_col(index: usize) -> Result<u16, ExportError> {
    u16::try_from(index).map_err(|_| too_large("columns"))
}

fn too_large(what: &str) -> ExportError {
    ExportError::WriteError {
        message: format!("too many {what} for a worksheet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reserved_characters_and_quotes_are_cleaned() {
        assert_eq!(sanitize_sheet_name("a[b]:c*d?e/f\\g"), "a_b__c_d_e_f_g");
        assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
        assert_eq!(sanitize_sheet_name("''"), "Sheet");
        assert_eq!(sanitize_sheet_name(""), "Sheet");
    }

    #[test]
    fn history_is_reserved() {
        assert_eq!(sanitize_sheet_name("History"), "History_");
        assert_eq!(sanitize_sheet_name("hiSTory"), "hiSTory_");
        assert_eq!(sanitize_sheet_name("'History'"), "History_");
        assert_eq!(sanitize_sheet_name("Histories"), "Histories");
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "IfcBuildingElementProxyTypeWithAVeryLongName";
        assert_eq!(sanitize_sheet_name(long).chars().count(), 31);
    }

    #[test]
    fn duplicates_are_suffixed_ignoring_case() {
        let mut used = HashSet::new();
        assert_eq!(unique_name("IfcWall", &mut used), "IfcWall");
        assert_eq!(unique_name("IFCWALL", &mut used), "IFCWALL (2)");
        assert_eq!(unique_name("ifcwall", &mut used), "ifcwall (3)");

        let long = "x".repeat(31);
        unique_name(&long, &mut used);
        let second = unique_name(&long, &mut used);
        assert_eq!(second.chars().count(), 31);
        assert!(second.ends_with(" (2)"));
    }

    fn two_classes() -> DataFrame {
        DataFrame::new(
            vec!["Class".into(), "Qto_A.Width".into(), "Qto_B.Area".into()],
            vec![
                vec![Value::from("IfcDoor"), Value::Null, Value::Real(1.5)],
                vec![Value::from("IfcWall"), Value::Real(200.0), Value::Null],
                vec![Value::from("IfcWall"), Value::Null, Value::Null],
            ],
        )
    }

    #[test]
    fn one_sheet_per_class_in_frequency_order() {
        let sheets = class_sheets(&two_classes());
        let names: Vec<&str> = sheets.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["IfcWall", "IfcDoor"]);
        assert_eq!(sheets[0].1.columns(), &["Class", "Qto_A.Width"]);
        assert_eq!(sheets[1].1.columns(), &["Class", "Qto_B.Area"]);
    }

    #[derive(Default)]
    struct Recorded(Vec<(String, DataFrame)>);

    impl SheetSink for Recorded {
        fn add_sheet(&mut self, name: &str, frame: &DataFrame) -> Result<(), ExportError> {
            self.0.push((name.to_string(), frame.clone()));
            Ok(())
        }
    }

    fn three_classes() -> DataFrame {
        DataFrame::new(
            vec!["Class".into(), "Name".into()],
            vec![
                vec![Value::from("IfcWall"), Value::from("Wall A")],
                vec![Value::from("IfcSlab"), Value::from("Floor")],
                vec![Value::from("IfcWall"), Value::from("Wall B")],
                vec![Value::from("IfcDoor"), Value::from("Door")],
            ],
        )
    }

    fn column(frame: &DataFrame, name: &str) -> Vec<String> {
        frame
            .column(name)
            .unwrap()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn every_class_gets_a_sheet_with_only_its_rows() {
        let mut sink = Recorded::default();
        assert_eq!(write_class_sheets(&three_classes(), &mut sink).unwrap(), 3);

        let sheets = sink.0;
        let names: Vec<&str> = sheets.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["IfcWall", "IfcDoor", "IfcSlab"]);
        assert_eq!(column(&sheets[0].1, "Class"), vec!["IfcWall", "IfcWall"]);
        assert_eq!(column(&sheets[0].1, "Name"), vec!["Wall A", "Wall B"]);
        assert_eq!(column(&sheets[1].1, "Name"), vec!["Door"]);
        assert_eq!(column(&sheets[2].1, "Name"), vec!["Floor"]);
    }

    #[test]
    fn workbook_holds_the_class_sheets() {
        let mut workbook = Workbook::new();
        write_class_sheets(&three_classes(), &mut workbook).unwrap();
        let names: Vec<String> = workbook.worksheets().iter().map(Worksheet::name).collect();
        assert_eq!(names, vec!["IfcWall", "IfcDoor", "IfcSlab"]);
    }

    #[test]
    fn workbook_is_written() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.xlsx");
        export_excel(&two_classes(), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);

        let empty = tmp.path().join("empty.xlsx");
        export_excel(&DataFrame::default(), &empty).unwrap();
        assert!(empty.exists());
    }
}
