use std::collections::HashMap;

use crate::error::{EditError, ModelError};
use crate::parser::schema::{schema, Schema, SchemaVersion};
use crate::parser::step::{StepEntity, StepFile, StepValue};

/// Parsed IFC entity graph with a reverse-reference index.
#[derive(Debug)]
pub struct IfcModel {
    step: StepFile,
    schema: &'static Schema,
    /// referenced id -> ids of entities holding a reference to it (ascending)
    inverse: HashMap<u64, Vec<u64>>,
}

impl IfcModel {
    #[must_use]
    pub fn new(step: StepFile) -> Self {
        let schema = schema(SchemaVersion::from_file_schema(&step.schema));
        let mut model = Self {
            step,
            schema,
            inverse: HashMap::new(),
        };
        model.rebuild_inverse_index();
        model
    }

    fn rebuild_inverse_index(&mut self) {
        let mut inverse: HashMap<u64, Vec<u64>> = HashMap::new();
        for entity in self.step.entities.values() {
            let mut targets = Vec::new();
            for value in &entity.values {
                collect_references(value, &mut targets);
            }
            targets.sort_unstable();
            targets.dedup();
            for target in targets {
                inverse.entry(target).or_default().push(entity.id);
            }
        }
        // Entities are visited in id order, so every list is already sorted.
        self.inverse = inverse;
    }

    #[must_use]
    pub fn step(&self) -> &StepFile {
        &self.step
    }

    #[must_use]
    pub fn schema_version(&self) -> &str {
        &self.step.schema
    }

    /// Class tables selected from the file's `FILE_SCHEMA`.
    #[must_use]
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.step.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.step.entities.is_empty()
    }

    /// All entities in id order.
    pub fn entities(&self) -> impl Iterator<Item = &StepEntity> {
        self.step.entities.values()
    }

    #[must_use]
    pub fn entity(&self, id: u64) -> Option<&StepEntity> {
        self.step.get_entity(id)
    }

    /// Class name of an entity (`IfcWall`), falling back to its raw keyword.
    #[must_use]
    pub fn class_of<'a>(&self, entity: &'a StepEntity) -> &'a str {
        self.schema.class_name(&entity.entity_type)
    }

    #[must_use]
    pub fn is_a(&self, id: u64) -> Option<&str> {
        self.entity(id).map(|e| self.class_of(e))
    }

    /// True when the entity is `class` or a subtype of it.
    #[must_use]
    pub fn entity_is_a(&self, entity: &StepEntity, class: &str) -> bool {
        self.schema.is_subtype(&entity.entity_type, class)
    }

    /// Entities of `class` including subtypes, in id order.
    #[must_use]
    pub fn by_type(&self, class: &str) -> Vec<&StepEntity> {
        self.entities()
            .filter(|e| self.entity_is_a(e, class))
            .collect()
    }

    /// Attribute value by schema name.
    #[must_use]
    pub fn attribute_of<'a>(&self, entity: &'a StepEntity, name: &str) -> Option<&'a StepValue> {
        let index = self.schema.attribute_index(&entity.entity_type, name)?;
        entity.values.get(index)
    }

    #[must_use]
    pub fn attribute(&self, id: u64, name: &str) -> Option<&StepValue> {
        self.attribute_of(self.entity(id)?, name)
    }

    /// Names for each positional value; values beyond the known schema
    /// attributes are called `Attribute<n>`.
    #[must_use]
    pub fn attribute_names(&self, entity: &StepEntity) -> Vec<String> {
        let known = self.schema.attribute_names(&entity.entity_type);
        (0..entity.values.len())
            .map(|i| {
                known
                    .get(i)
                    .map_or_else(|| format!("Attribute{i}"), |name| (*name).to_string())
            })
            .collect()
    }

    #[must_use]
    pub fn name_of<'a>(&self, entity: &'a StepEntity) -> Option<&'a str> {
        self.attribute_of(entity, "Name").and_then(StepValue::as_str)
    }

    #[must_use]
    pub fn global_id_of<'a>(&self, entity: &'a StepEntity) -> Option<&'a str> {
        self.attribute_of(entity, "GlobalId").and_then(StepValue::as_str)
    }

    /// Entities that hold a reference to `id`, in id order.
    #[must_use]
    pub fn inverse(&self, id: u64) -> Vec<&StepEntity> {
        self.inverse
            .get(&id)
            .map(|ids| ids.iter().filter_map(|i| self.entity(*i)).collect())
            .unwrap_or_default()
    }

    /// Relationship entities of `relation` class whose `attribute` points at `id`.
    #[must_use]
    pub fn relations_to(&self, id: u64, relation: &str, attribute: &str) -> Vec<&StepEntity> {
        self.inverse(id)
            .into_iter()
            .filter(|rel| self.entity_is_a(rel, relation))
            .filter(|rel| {
                self.attribute_of(rel, attribute)
                    .is_some_and(|value| value.references().contains(&id))
            })
            .collect()
    }

    /// Inverse attribute on `target` that `relation.attribute` populates.
    #[must_use]
    pub fn inverse_name(
        &self,
        relation: &StepEntity,
        attribute: &str,
        target: &StepEntity,
    ) -> Option<&'static str> {
        self.schema
            .inverse_name(&relation.entity_type, attribute, &target.entity_type)
    }

    /// STEP text of the entity with its class name, e.g. `#12=IfcWall('g',$,...)`.
    #[must_use]
    pub fn describe(&self, id: u64) -> Option<String> {
        let entity = self.entity(id)?;
        let args = entity
            .values
            .iter()
            .map(StepValue::to_step)
            .collect::<Vec<_>>()
            .join(",");
        Some(format!("#{}={}({args})", entity.id, self.class_of(entity)))
    }

    pub fn project(&self) -> Result<&StepEntity, ModelError> {
        self.by_type("IfcProject")
            .into_iter()
            .next()
            .ok_or(ModelError::MissingProject)
    }

    #[must_use]
    pub fn project_name(&self) -> Option<&str> {
        self.project().ok().and_then(|p| self.name_of(p))
    }

    /// Overwrites one attribute of an entity.
    pub fn set_attribute(&mut self, id: u64, name: &str, value: StepValue) -> Result<(), EditError> {
        let schema = self.schema;
        let entity = self
            .step
            .get_entity_mut(id)
            .ok_or(EditError::UnknownEntity { id })?;

        let index = schema
            .attribute_index(&entity.entity_type, name)
            .filter(|i| *i < entity.values.len())
            .ok_or_else(|| EditError::UnknownAttribute {
                class: schema.class_name(&entity.entity_type).to_string(),
                name: name.to_string(),
            })?;

        tracing::info!(id, attribute = name, "editing attribute");
        let touches_references = matches!(entity.values[index], StepValue::Reference(_) | StepValue::List(_))
            || matches!(value, StepValue::Reference(_) | StepValue::List(_));
        entity.values[index] = value;
        if touches_references {
            self.rebuild_inverse_index();
        }
        Ok(())
    }

    pub fn set_project_name(&mut self, name: &str) -> Result<(), EditError> {
        let id = self.project()?.id;
        self.set_attribute(id, "Name", StepValue::String(name.to_string()))
    }

    /// Serialises the model, including edits, to STEP text.
    #[must_use]
    pub fn to_step_string(&self) -> String {
        self.step.to_step_string()
    }
}

fn collect_references(value: &StepValue, out: &mut Vec<u64>) {
    match value {
        StepValue::Reference(id) => out.push(*id),
        StepValue::List(items) => {
            for item in items {
                collect_references(item, out);
            }
        }
        StepValue::Typed { value, .. } => collect_references(value, out),
        _ => {}
    }
}
