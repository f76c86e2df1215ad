//! Entity inspector: direct attributes, inverse attributes and inverse
//! references of one entity, with breadcrumb navigation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::IfcModel;
use crate::parser::StepValue;

/// Lists with at least this many items collapse into one `name(len)` row.
const EXPAND_LIMIT: usize = 10;

/// One displayed attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    pub name: String,
    pub string_value: String,
    /// Set only when the value is an entity reference, so the row can be followed.
    pub entity_id: Option<u64>,
}

/// An entity that references the inspected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InverseReference {
    pub string_value: String,
    pub entity_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugProperties {
    pub active_step_id: u64,
    /// Ids inspected so far, oldest first.
    pub breadcrumb: Vec<u64>,
    pub attributes: Vec<AttributeRow>,
    pub inverse_attributes: Vec<AttributeRow>,
    pub inverse_references: Vec<InverseReference>,
}

impl DebugProperties {
    /// Inspects entity `id` and appends it to the breadcrumb.
    ///
    /// `reset` starts a fresh navigation. Returns `false` when the id does not
    /// resolve; the lists are then left empty.
    pub fn inspect(&mut self, model: &IfcModel, id: u64, reset: bool) -> bool {
        if reset {
            self.breadcrumb.clear();
        }
        self.active_step_id = id;
        self.breadcrumb.push(id);
        self.attributes.clear();
        self.inverse_attributes.clear();
        self.inverse_references.clear();

        let Some(entity) = model.entity(id) else {
            tracing::debug!(id, "inspected id does not resolve");
            return false;
        };

        self.attributes.push(plain_row("id", id.to_string()));
        self.attributes
            .push(plain_row("type", model.class_of(entity).to_string()));
        for (name, value) in model.attribute_names(entity).iter().zip(&entity.values) {
            add_attribute(model, &mut self.attributes, name, value);
        }

        let mut inverses: BTreeMap<&str, Vec<StepValue>> = BTreeMap::new();
        for referencing in model.inverse(id) {
            self.inverse_references.push(InverseReference {
                string_value: model.describe(referencing.id).unwrap_or_default(),
                entity_id: referencing.id,
            });

            let names = model.attribute_names(referencing);
            for (attribute, value) in names.iter().zip(&referencing.values) {
                if !value.references().contains(&id) {
                    continue;
                }
                if let Some(inverse) = model.inverse_name(referencing, attribute, entity) {
                    inverses
                        .entry(inverse)
                        .or_default()
                        .push(StepValue::Reference(referencing.id));
                }
            }
        }
        for (name, referencing) in inverses {
            add_attribute(model, &mut self.inverse_attributes, name, &StepValue::List(referencing));
        }

        true
    }

    /// Steps back to the previously inspected entity.
    ///
    /// Returns `false` when there is nothing to go back to.
    pub fn back(&mut self, model: &IfcModel) -> bool {
        if self.breadcrumb.len() < 2 {
            return false;
        }
        self.breadcrumb.pop();
        let Some(previous) = self.breadcrumb.pop() else {
            return false;
        };
        self.inspect(model, previous, false)
    }
}

fn plain_row(name: &str, string_value: String) -> AttributeRow {
    AttributeRow {
        name: name.to_string(),
        string_value,
        entity_id: None,
    }
}

fn add_attribute(model: &IfcModel, rows: &mut Vec<AttributeRow>, name: &str, value: &StepValue) {
    match value {
        StepValue::List(items) if items.len() < EXPAND_LIMIT => {
            for (i, item) in items.iter().enumerate() {
                add_attribute(model, rows, &format!("{name}[{i}]"), item);
            }
        }
        StepValue::List(items) => {
            rows.push(plain_row(&format!("{name}({})", items.len()), value.to_step()));
        }
        StepValue::Reference(id) => rows.push(AttributeRow {
            name: name.to_string(),
            string_value: model.describe(*id).unwrap_or_else(|| format!("#{id}")),
            entity_id: Some(*id),
        }),
        other => rows.push(plain_row(name, display_value(other))),
    }
}

fn display_value(value: &StepValue) -> String {
    match value.untyped() {
        StepValue::String(s) | StepValue::Enum(s) => s.clone(),
        StepValue::Boolean(true) => "True".to_string(),
        StepValue::Boolean(false) => "False".to_string(),
        StepValue::Real(r) => r.to_string(),
        StepValue::Integer(i) => i.to_string(),
        StepValue::Null => String::new(),
        other => other.to_step(),
    }
}
