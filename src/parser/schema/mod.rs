//! IFC class tables: hierarchy, explicit attribute names and inverse
//! attribute names.
//!
//! The IFC4 tables cover every rooted entity (objects, types, relationships,
//! property definitions) and the resource entities a quantity take-off
//! touches. IFC2X3 files get the IFC4 tables with the IFC2X3 differences laid
//! over them. Entities of classes outside the tables still load; they lose
//! subclass matching and get positional attribute names.

mod ifc2x3;
mod ifc4;

use std::collections::HashMap;
use std::sync::OnceLock;

/// (class, supertype, own explicit attributes)
type EntityDef = (&'static str, Option<&'static str>, &'static [&'static str]);

/// (relationship class, attribute on the relationship, target class filter,
/// inverse name on the target)
type InverseDef = (&'static str, &'static str, Option<&'static str>, &'static str);

/// Schema family of a file, read from its `FILE_SCHEMA` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    Ifc2x3,
    Ifc4,
}

impl SchemaVersion {
    /// `IFC2X3` and older map to [`SchemaVersion::Ifc2x3`]; everything else,
    /// including an empty header, is read as IFC4.
    #[must_use]
    pub fn from_file_schema(name: &str) -> Self {
        if name.trim().to_ascii_uppercase().starts_with("IFC2X") {
            Self::Ifc2x3
        } else {
            Self::Ifc4
        }
    }
}

#[derive(Debug)]
struct ClassDef {
    name: &'static str,
    supertype: Option<&'static str>,
    attributes: &'static [&'static str],
}

/// Lookup tables keyed by upper-case STEP keyword.
#[derive(Debug)]
pub struct Schema {
    version: SchemaVersion,
    classes: HashMap<String, ClassDef>,
    /// Earlier entries win for the same relationship attribute.
    inverses: Vec<InverseDef>,
}

/// Shared schema tables for `version`, built on first use.
pub fn schema(version: SchemaVersion) -> &'static Schema {
    static IFC4: OnceLock<Schema> = OnceLock::new();
    static IFC2X3: OnceLock<Schema> = OnceLock::new();
    match version {
        SchemaVersion::Ifc4 => IFC4.get_or_init(|| {
            Schema::build(version, &[ifc4::ENTITIES], &[ifc4::INVERSES])
        }),
        SchemaVersion::Ifc2x3 => IFC2X3.get_or_init(|| {
            Schema::build(
                version,
                &[ifc4::ENTITIES, ifc2x3::ENTITIES],
                &[ifc2x3::INVERSES, ifc4::INVERSES],
            )
        }),
    }
}

impl Schema {
    /// Later entity tables replace classes of earlier ones.
    fn build(
        version: SchemaVersion,
        entities: &[&'static [EntityDef]],
        inverses: &[&'static [InverseDef]],
    ) -> Self {
        let classes = entities
            .iter()
            .flat_map(|table| table.iter())
            .map(|(name, supertype, attributes)| {
                (
                    name.to_ascii_uppercase(),
                    ClassDef {
                        name: *name,
                        supertype: *supertype,
                        attributes: *attributes,
                    },
                )
            })
            .collect();
        let inverses = inverses.iter().flat_map(|table| table.iter().copied()).collect();
        Self {
            version,
            classes,
            inverses,
        }
    }

    #[must_use]
    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    fn class(&self, keyword: &str) -> Option<&ClassDef> {
        self.classes.get(&keyword.to_ascii_uppercase())
    }

    /// True when the keyword names a class in the tables.
    #[must_use]
    pub fn knows(&self, keyword: &str) -> bool {
        self.class(keyword).is_some()
    }

    /// Supertype chain starting at `keyword` itself, as upper-case keywords.
    fn lineage(&self, keyword: &str) -> Vec<String> {
        let mut chain = vec![keyword.to_ascii_uppercase()];
        let mut current = self.class(keyword).and_then(|c| c.supertype);
        while let Some(name) = current {
            chain.push(name.to_ascii_uppercase());
            current = self.class(name).and_then(|c| c.supertype);
        }
        chain
    }

    /// CamelCase class name for a keyword, or the keyword itself when unknown.
    #[must_use]
    pub fn class_name<'a>(&self, keyword: &'a str) -> &'a str {
        self.class(keyword).map_or(keyword, |c| c.name)
    }

    /// True when `keyword` is `class` or one of its subtypes (case-insensitive).
    #[must_use]
    pub fn is_subtype(&self, keyword: &str, class: &str) -> bool {
        let target = class.to_ascii_uppercase();
        self.lineage(keyword).iter().any(|k| *k == target)
    }

    /// Explicit attribute names in STEP order (supertype attributes first).
    #[must_use]
    pub fn attribute_names(&self, keyword: &str) -> Vec<&'static str> {
        let mut names = Vec::new();
        for ancestor in self.lineage(keyword).iter().rev() {
            if let Some(class) = self.class(ancestor) {
                names.extend_from_slice(class.attributes);
            }
        }
        names
    }

    #[must_use]
    pub fn attribute_index(&self, keyword: &str, name: &str) -> Option<usize> {
        self.attribute_names(keyword)
            .iter()
            .position(|attribute| *attribute == name)
    }

    /// Name of the inverse attribute that `relation_keyword.attribute`
    /// populates on a `target_keyword` entity it points at.
    #[must_use]
    pub fn inverse_name(
        &self,
        relation_keyword: &str,
        attribute: &str,
        target_keyword: &str,
    ) -> Option<&'static str> {
        self.lineage(relation_keyword).iter().find_map(|ancestor| {
            self.inverses
                .iter()
                .find(|(relation, attr, target, _)| {
                    *attr == attribute
                        && relation.eq_ignore_ascii_case(ancestor)
                        && target.is_none_or(|t| self.is_subtype(target_keyword, t))
                })
                .map(|(_, _, _, inverse)| *inverse)
        })
    }
}
