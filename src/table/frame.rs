use serde::Serialize;
use std::collections::HashMap;

use crate::model::{ObjectRecord, Value};

/// Columns every flattened table starts with.
pub const FIXED_COLUMNS: [&str; 7] = [
    "ExpressId",
    "GlobalId",
    "Class",
    "PredefinedType",
    "Name",
    "Level",
    "Type",
];

pub const CLASS: &str = "Class";
pub const LEVEL: &str = "Level";
pub const TYPE: &str = "Type";

/// Wide table: one row per entity, one column per attribute or `set.property`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataFrame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataFrame {
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Flattens extracted records into a table.
    ///
    /// Columns are the fixed attribute columns followed by `pset_attributes`
    /// in the given order. A dotted column resolves against the record's
    /// property sets first, then its quantity sets; anything missing is null.
    #[must_use]
    pub fn from_records(records: &[ObjectRecord], pset_attributes: &[String]) -> Self {
        let columns: Vec<String> = FIXED_COLUMNS
            .iter()
            .map(|c| (*c).to_string())
            .chain(pset_attributes.iter().cloned())
            .collect();

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| attribute_value(record, column))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of one column, top to bottom.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Rows whose `Class` equals `class`, with all-null columns dropped.
    #[must_use]
    pub fn filter_by_class(&self, class: &str) -> DataFrame {
        let Some(index) = self.column_index(CLASS) else {
            return DataFrame::default();
        };
        let rows = self
            .rows
            .iter()
            .filter(|row| row[index].as_str() == Some(class))
            .cloned()
            .collect();

        DataFrame {
            columns: self.columns.clone(),
            rows,
        }
        .drop_empty_columns()
    }

    /// Removes every column whose values are all null.
    ///
    /// A table without rows keeps no columns at all.
    #[must_use]
    pub fn drop_empty_columns(self) -> DataFrame {
        let keep: Vec<bool> = (0..self.columns.len())
            .map(|i| self.rows.iter().any(|row| !row[i].is_null()))
            .collect();

        let columns = self
            .columns
            .into_iter()
            .zip(&keep)
            .filter_map(|(column, kept)| kept.then_some(column))
            .collect();
        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&keep)
                    .filter_map(|(value, kept)| kept.then_some(value))
                    .collect()
            })
            .collect();

        DataFrame { columns, rows }
    }

    /// Distinct classes, most frequent first (ties by name).
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        if let Some(values) = self.column(CLASS) {
            for class in values.into_iter().filter_map(Value::as_str) {
                *counts.entry(class).or_insert(0) += 1;
            }
        }
        let mut classes: Vec<(&str, usize)> = counts.into_iter().collect();
        classes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        classes.into_iter().map(|(c, _)| c.to_string()).collect()
    }

    /// Rows as `column -> value` objects, for JSON export.
    #[must_use]
    pub fn records(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(column, value)| {
                        let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
                        (column.clone(), json)
                    })
                    .collect()
            })
            .collect()
    }
}

fn attribute_value(record: &ObjectRecord, attribute: &str) -> Value {
    match attribute {
        "ExpressId" => Value::Integer(record.id as i64),
        "GlobalId" => record.global_id.as_deref().into(),
        "Class" => Value::Text(record.class.clone()),
        "PredefinedType" => record.predefined_type.as_deref().into(),
        "Name" => record.name.as_deref().into(),
        "Level" => Value::Text(record.level.clone()),
        "Type" => Value::Text(record.type_name.clone()),
        dotted => {
            let Some((set_name, property)) = dotted.split_once('.') else {
                return Value::Null;
            };
            record
                .property_sets
                .get(set_name)
                .or_else(|| record.quantity_sets.get(set_name))
                .and_then(|set| set.get(property))
                .cloned()
                .unwrap_or(Value::Null)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyMap, PropertySets};
    use pretty_assertions::assert_eq;

    fn record(id: u64, class: &str, qtos: &[(&str, &str, Value)]) -> ObjectRecord {
        let mut quantity_sets = PropertySets::new();
        for (set, name, value) in qtos {
            quantity_sets
                .entry((*set).to_string())
                .or_insert_with(PropertyMap::new)
                .insert((*name).to_string(), value.clone());
        }
        ObjectRecord {
            id,
            global_id: Some(format!("guid-{id}")),
            class: class.to_string(),
            predefined_type: None,
            name: Some(format!("{class} {id}")),
            level: "Level 1".to_string(),
            type_name: String::new(),
            quantity_sets,
            property_sets: PropertySets::new(),
        }
    }

    fn walls_and_door() -> DataFrame {
        let records = vec![
            record(1, "IfcWall", &[("Qto_WallBaseQuantities", "Width", Value::Real(200.0))]),
            record(2, "IfcWall", &[]),
            record(3, "IfcDoor", &[("Qto_DoorBaseQuantities", "Area", Value::Real(1.89))]),
        ];
        let attributes = vec![
            "Qto_DoorBaseQuantities.Area".to_string(),
            "Qto_WallBaseQuantities.Width".to_string(),
        ];
        DataFrame::from_records(&records, &attributes)
    }

    #[test]
    fn flattening_uses_the_batch_wide_column_union() {
        let frame = walls_and_door();
        assert_eq!(frame.width(), 9);
        assert_eq!(frame.height(), 3);
        assert_eq!(
            frame.column("Qto_WallBaseQuantities.Width").unwrap(),
            vec![&Value::Real(200.0), &Value::Null, &Value::Null]
        );
    }

    #[test]
    fn unknown_sets_and_undotted_columns_are_null() {
        let r = record(1, "IfcWall", &[("Qto_A", "X", Value::Integer(1))]);
        assert_eq!(attribute_value(&r, "Qto_A.Y"), Value::Null);
        assert_eq!(attribute_value(&r, "Pset_B.X"), Value::Null);
        assert_eq!(attribute_value(&r, "Undotted"), Value::Null);
        assert_eq!(attribute_value(&r, "Qto_A.X"), Value::Integer(1));
    }

    #[test]
    fn property_names_may_contain_dots() {
        let r = record(1, "IfcWall", &[("Qto_A", "Width.Nominal", Value::Integer(5))]);
        assert_eq!(attribute_value(&r, "Qto_A.Width.Nominal"), Value::Integer(5));
    }

    #[test]
    fn filter_by_class_drops_columns_only_other_classes_use() {
        let doors = walls_and_door().filter_by_class("IfcDoor");
        assert_eq!(doors.height(), 1);
        assert_eq!(
            doors.columns(),
            &[
                "ExpressId",
                "GlobalId",
                "Class",
                "Name",
                "Level",
                "Type",
                "Qto_DoorBaseQuantities.Area",
            ]
        );
    }

    #[test]
    fn filtering_an_absent_class_gives_an_empty_table() {
        let none = walls_and_door().filter_by_class("IfcSlab");
        assert!(none.is_empty());
        assert_eq!(none.width(), 0);
    }

    #[test]
    fn classes_are_ordered_by_frequency() {
        assert_eq!(walls_and_door().classes(), vec!["IfcWall", "IfcDoor"]);
    }

    #[test]
    fn json_records_keep_nulls() {
        let records = walls_and_door().records();
        assert_eq!(records[1]["Qto_WallBaseQuantities.Width"], serde_json::Value::Null);
        assert_eq!(records[0]["ExpressId"], serde_json::json!(1));
    }
}
