//! Quantity-set discovery and aggregation over a flattened table.

use std::collections::{BTreeMap, BTreeSet};

use super::frame::{DataFrame, LEVEL, TYPE};

/// Marker that identifies quantity-set columns.
pub const QUANTITY_SET_MARKER: &str = "Qto";

/// Synthetic quantity meaning "count the rows".
pub const COUNT: &str = "Count";

/// How [`split_quantity`] groups rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitBy {
    #[default]
    Level,
    Type,
}

impl SplitBy {
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            SplitBy::Level => LEVEL,
            SplitBy::Type => TYPE,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SplitBy::Level => SplitBy::Type,
            SplitBy::Type => SplitBy::Level,
        }
    }
}

/// Distinct quantity-set names among the table's columns, sorted.
///
/// `None` when the table has no quantity columns.
#[must_use]
pub fn discover_quantity_columns(frame: &DataFrame) -> Option<Vec<String>> {
    let sets: BTreeSet<String> = frame
        .columns()
        .iter()
        .filter(|column| column.contains(QUANTITY_SET_MARKER))
        .map(|column| column.split_once('.').map_or(column.as_str(), |(set, _)| set).to_string())
        .collect();

    if sets.is_empty() {
        None
    } else {
        Some(sets.into_iter().collect())
    }
}

/// Quantity names of one set, in column order, followed by [`COUNT`].
#[must_use]
pub fn quantities_for_set(frame: &DataFrame, quantity_set: &str) -> Vec<String> {
    let mut quantities: Vec<String> = frame
        .columns()
        .iter()
        .filter_map(|column| {
            let (set, quantity) = column.split_once('.')?;
            (set == quantity_set).then(|| quantity.to_string())
        })
        .collect();
    quantities.push(COUNT.to_string());
    quantities
}

/// Number of rows, nulls included.
#[must_use]
pub fn total_count(frame: &DataFrame) -> usize {
    frame.height()
}

/// Groups rows by level or type and totals one quantity per group.
///
/// [`COUNT`] counts rows; any other quantity sums the numeric cells of
/// `set.quantity`, skipping nulls. Groups are ordered by name.
#[must_use]
pub fn split_quantity(
    frame: &DataFrame,
    quantity_set: &str,
    quantity: &str,
    split: SplitBy,
) -> Vec<(String, f64)> {
    let Some(groups) = frame.column(split.column()) else {
        return Vec::new();
    };

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    if quantity == COUNT {
        for group in groups {
            *totals.entry(group.to_string()).or_insert(0.0) += 1.0;
        }
    } else {
        let Some(values) = frame.column(&format!("{quantity_set}.{quantity}")) else {
            return Vec::new();
        };
        for (group, value) in groups.into_iter().zip(values) {
            if let Some(amount) = value.as_f64() {
                *totals.entry(group.to_string()).or_insert(0.0) += amount;
            }
        }
    }

    totals.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;
    use pretty_assertions::assert_eq;

    fn frame() -> DataFrame {
        let columns = ["Class", "Level", "Type", "Qto_WallBaseQuantities.Width", "Qto_WallBaseQuantities.Length", "Pset_WallCommon.IsExternal"]
            .iter()
            .map(|c| (*c).to_string())
            .collect();
        let row = |level: &str, ty: &str, width: Value, length: Value| {
            vec![Value::from("IfcWall"), Value::from(level), Value::from(ty), width, length, Value::Bool(true)]
        };
        DataFrame::new(
            columns,
            vec![
                row("L1", "A", Value::Real(200.0), Value::Real(5.0)),
                row("L1", "B", Value::Null, Value::Real(3.0)),
                row("L2", "A", Value::Integer(100), Value::Null),
            ],
        )
    }

    #[test]
    fn discovers_quantity_set_prefixes() {
        assert_eq!(
            discover_quantity_columns(&frame()),
            Some(vec!["Qto_WallBaseQuantities".to_string()])
        );
    }

    #[test]
    fn no_quantity_columns_is_none() {
        let frame = DataFrame::new(vec!["Class".into()], vec![vec![Value::from("IfcWall")]]);
        assert_eq!(discover_quantity_columns(&frame), None);
    }

    #[test]
    fn quantities_always_end_with_count() {
        assert_eq!(
            quantities_for_set(&frame(), "Qto_WallBaseQuantities"),
            vec!["Width", "Length", "Count"]
        );
        assert_eq!(quantities_for_set(&frame(), "Qto_Unknown"), vec!["Count"]);
    }

    #[test]
    fn set_matching_is_exact_on_the_prefix() {
        let frame = DataFrame::new(
            vec!["Qto_Wall.A".into(), "Qto_WallBase.B".into()],
            vec![vec![Value::Null, Value::Null]],
        );
        assert_eq!(quantities_for_set(&frame, "Qto_Wall"), vec!["A", "Count"]);
    }

    #[test]
    fn total_count_includes_rows_with_nulls() {
        assert_eq!(total_count(&frame()), 3);
    }

    #[test]
    fn split_sums_numeric_cells_per_group() {
        assert_eq!(
            split_quantity(&frame(), "Qto_WallBaseQuantities", "Width", SplitBy::Level),
            vec![("L1".to_string(), 200.0), ("L2".to_string(), 100.0)]
        );
        assert_eq!(
            split_quantity(&frame(), "Qto_WallBaseQuantities", "Length", SplitBy::Type),
            vec![("A".to_string(), 5.0), ("B".to_string(), 3.0)]
        );
    }

    #[test]
    fn split_count_counts_rows() {
        assert_eq!(
            split_quantity(&frame(), "Qto_WallBaseQuantities", COUNT, SplitBy::Type),
            vec![("A".to_string(), 2.0), ("B".to_string(), 1.0)]
        );
    }
}
