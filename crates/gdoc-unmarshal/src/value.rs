//! Runtime-described destinations.
//!
//! A [`DocValue`] tree plays the role of a typed record when the shape is
//! only known at runtime, for instance when it is read from a schema file:
//!
//! ```toml
//! [[field]]
//! name = "Fetcher"
//! comment = "Fetcher"
//!
//! [[field]]
//! name = "Modules"
//! comment = "*"
//! kind = "map"
//!
//!   [[field.field]]
//!   name = "ClientDoc"
//!   comment = "Client"
//! ```
//!
//! Serializing a populated tree renders records as objects keyed by field
//! name, maps as objects keyed by entry key and leaves as strings.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::destination::{Destination, Shape};
use crate::error::UnmarshalError;
use crate::path::{descend, split_key};

/// A dynamically shaped destination node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocValue {
    #[default]
    Null,
    Text(String),
    Record(DocRecord),
    Map(DocMap),
}

/// Ordered fields of a record node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocRecord {
    pub fields: Vec<DocField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocField {
    pub name: String,
    /// `None` marks a field that is never populated.
    pub annotation: Option<String>,
    pub value: DocValue,
}

/// String-keyed entries created on demand from `template`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMap {
    pub template: Box<DocValue>,
    pub entries: BTreeMap<String, DocValue>,
}

impl DocMap {
    #[must_use]
    pub fn new(template: DocValue) -> Self {
        Self {
            template: Box::new(template),
            entries: BTreeMap::new(),
        }
    }
}

impl DocRecord {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field; `annotation` of `None` leaves it unpopulated.
    #[must_use]
    pub fn field(
        mut self,
        name: impl Into<String>,
        annotation: Option<&str>,
        value: DocValue,
    ) -> Self {
        self.fields.push(DocField {
            name: name.into(),
            annotation: annotation.map(str::to_string),
            value,
        });
        self
    }

    /// Value of the field called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DocValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    fn resolve(&mut self, path: &str, text: &str) -> Result<bool, UnmarshalError> {
        for field in &mut self.fields {
            let Some(annotation) = field.annotation.as_deref() else {
                continue;
            };
            match &mut field.value {
                DocValue::Text(leaf) => {
                    if annotation == path {
                        text.clone_into(leaf);
                        return Ok(true);
                    }
                }
                DocValue::Record(_) | DocValue::Map(_) => {
                    if let Some(rest) = descend(annotation, path)
                        && field.value.resolve_node(&field.name, rest, text)?
                    {
                        return Ok(true);
                    }
                }
                DocValue::Null => {}
            }
        }
        Ok(false)
    }
}

impl DocValue {
    #[must_use]
    pub const fn text() -> Self {
        Self::Text(String::new())
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Null => Shape::Unset,
            Self::Text(_) => Shape::Text,
            Self::Record(_) => Shape::Record,
            Self::Map(_) => Shape::Map,
        }
    }

    /// Leaf text, if this is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Follow field names and map keys, e.g. `["Modules", "client", "ClientDoc"]`.
    #[must_use]
    pub fn lookup(&self, names: &[&str]) -> Option<&Self> {
        let Some((first, rest)) = names.split_first() else {
            return Some(self);
        };
        let next = match self {
            Self::Record(record) => record.get(first)?,
            Self::Map(map) => map.entries.get(*first)?,
            Self::Null | Self::Text(_) => return None,
        };
        next.lookup(rest)
    }

    fn resolve_node(&mut self, name: &str, path: &str, text: &str) -> Result<bool, UnmarshalError> {
        match self {
            Self::Record(record) => record.resolve(path, text),
            Self::Map(map) => {
                if !matches!(*map.template, Self::Record(_)) {
                    return Err(UnmarshalError::UnsupportedShape {
                        position: format!("map value of `{name}`"),
                        shape: map.template.shape(),
                    });
                }
                let Some((key, rest)) = split_key(path) else {
                    return Ok(false);
                };
                let mut entry = map
                    .entries
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| (*map.template).clone());
                if !entry.resolve_node(name, rest, text)? {
                    return Ok(false);
                }
                map.entries.insert(key.to_string(), entry);
                Ok(true)
            }
            Self::Null | Self::Text(_) => Ok(false),
        }
    }
}

impl Destination for DocValue {
    fn shape(&self) -> Shape {
        Self::shape(self)
    }

    fn resolve(&mut self, path: &str, text: &str) -> Result<bool, UnmarshalError> {
        self.resolve_node("destination", path, text)
    }
}

impl Serialize for DocValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Record(record) => {
                let mut map = serializer.serialize_map(Some(record.fields.len()))?;
                for field in &record.fields {
                    map.serialize_entry(&field.name, &field.value)?;
                }
                map.end()
            }
            Self::Map(doc_map) => serializer.collect_map(&doc_map.entries),
        }
    }
}

// ── Schema files ──────────────────────────────────────────────────

/// Field kinds a schema file can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Record,
    Map,
}

/// One `[[field]]` table of a schema file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub kind: Option<FieldKind>,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldSpec>,
}

/// Top level of a schema file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SchemaSpec {
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldSpec>,
}

impl SchemaSpec {
    /// Parse a TOML schema file.
    ///
    /// # Errors
    /// Returns `UnmarshalError::SchemaFile` for malformed TOML.
    pub fn from_toml(source: &str) -> Result<Self, UnmarshalError> {
        Ok(toml::from_str(source)?)
    }

    /// Build the empty destination tree the schema describes.
    #[must_use]
    pub fn to_value(&self) -> DocValue {
        DocValue::Record(record_from_specs(&self.fields))
    }
}

impl FieldSpec {
    fn kind(&self) -> FieldKind {
        self.kind.unwrap_or(if self.fields.is_empty() {
            FieldKind::Text
        } else {
            FieldKind::Record
        })
    }

    fn to_value(&self) -> DocValue {
        match self.kind() {
            FieldKind::Text => DocValue::text(),
            FieldKind::Record => DocValue::Record(record_from_specs(&self.fields)),
            FieldKind::Map => DocValue::Map(DocMap::new(DocValue::Record(record_from_specs(
                &self.fields,
            )))),
        }
    }
}

fn record_from_specs(specs: &[FieldSpec]) -> DocRecord {
    DocRecord {
        fields: specs
            .iter()
            .map(|spec| DocField {
                name: spec.name.clone(),
                annotation: spec.comment.clone(),
                value: spec.to_value(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn module_docs() -> DocValue {
        let entry = DocRecord::new()
            .field("ClientDoc", Some("Client"), DocValue::text())
            .field("ClientDo", Some("Client.Do"), DocValue::text());
        DocValue::Record(
            DocRecord::new()
                .field("Fetcher", Some("Fetcher"), DocValue::text())
                .field("Note", None, DocValue::text())
                .field(
                    "Modules",
                    Some("*"),
                    DocValue::Map(DocMap::new(DocValue::Record(entry))),
                ),
        )
    }

    #[test]
    fn leaf_assignment() {
        let mut value = module_docs();
        assert!(value.resolve("Fetcher", "f\n").unwrap());
        assert_eq!(
            value.lookup(&["Fetcher"]).and_then(DocValue::as_text),
            Some("f\n")
        );
    }

    #[test]
    fn unannotated_field_is_never_written() {
        let mut value = module_docs();
        assert!(!value.resolve("Note", "n\n").unwrap());
        assert_eq!(value.lookup(&["Note"]), Some(&DocValue::text()));
    }

    #[test]
    fn map_entries_are_created_from_template() {
        let mut value = module_docs();
        assert!(value.resolve("client/Client", "c\n").unwrap());
        assert!(value.resolve("module1/Client.Do", "d\n").unwrap());
        assert!(value.resolve("client/Client.Do", "cd\n").unwrap());
        assert_eq!(
            value
                .lookup(&["Modules", "client", "ClientDo"])
                .and_then(DocValue::as_text),
            Some("cd\n")
        );
        assert_eq!(
            value
                .lookup(&["Modules", "module1", "ClientDoc"])
                .and_then(DocValue::as_text),
            Some("")
        );
    }

    #[test]
    fn unmatched_map_path_adds_no_entry() {
        let mut value = module_docs();
        assert!(!value.resolve("module1/module2/SomeType", "x").unwrap());
        let DocValue::Record(record) = &value else {
            panic!("root should be a record");
        };
        let Some(DocValue::Map(map)) = record.get("Modules") else {
            panic!("Modules should be a map");
        };
        assert!(map.entries.is_empty());
    }

    #[test]
    fn map_with_text_values_is_fatal() {
        let mut value = DocValue::Record(DocRecord::new().field(
            "Broken",
            Some("*"),
            DocValue::Map(DocMap::new(DocValue::text())),
        ));
        let err = value.resolve("pkg/Thing", "x").unwrap_err();
        assert!(matches!(
            err,
            UnmarshalError::UnsupportedShape {
                shape: Shape::Text,
                ..
            }
        ));
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn null_fields_are_ignored() {
        let mut value = DocValue::Record(
            DocRecord::new()
                .field("Hole", Some("Hole"), DocValue::Null)
                .field("Real", Some("Hole"), DocValue::text()),
        );
        assert!(value.resolve("Hole", "h\n").unwrap());
        assert_eq!(value.lookup(&["Hole"]), Some(&DocValue::Null));
        assert_eq!(
            value.lookup(&["Real"]).and_then(DocValue::as_text),
            Some("h\n")
        );
    }

    #[test]
    fn schema_file_builds_tree() {
        let spec = SchemaSpec::from_toml(
            r#"
[[field]]
name = "Fetcher"
comment = "Fetcher"

[[field]]
name = "Module1"
comment = "module1"

  [[field.field]]
  name = "PublicFunc"
  comment = "Module1Func"

[[field]]
name = "Modules"
comment = "*"
kind = "map"

  [[field.field]]
  name = "ClientDoc"
  comment = "Client"
"#,
        )
        .unwrap();
        let expected = DocValue::Record(
            DocRecord::new()
                .field("Fetcher", Some("Fetcher"), DocValue::text())
                .field(
                    "Module1",
                    Some("module1"),
                    DocValue::Record(DocRecord::new().field(
                        "PublicFunc",
                        Some("Module1Func"),
                        DocValue::text(),
                    )),
                )
                .field(
                    "Modules",
                    Some("*"),
                    DocValue::Map(DocMap::new(DocValue::Record(DocRecord::new().field(
                        "ClientDoc",
                        Some("Client"),
                        DocValue::text(),
                    )))),
                ),
        );
        assert_eq!(spec.to_value(), expected);
    }

    #[test]
    fn schema_file_rejects_unknown_kind() {
        let result = SchemaSpec::from_toml("[[field]]\nname = \"X\"\nkind = \"list\"\n");
        assert!(matches!(result, Err(UnmarshalError::SchemaFile(_))));
    }

    #[test]
    fn serializes_as_plain_json() {
        let mut value = module_docs();
        value.resolve("Fetcher", "f\n").unwrap();
        value.resolve("client/Client", "c\n").unwrap();
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Fetcher": "f\n",
                "Note": "",
                "Modules": {
                    "client": { "ClientDoc": "c\n", "ClientDo": "" }
                }
            })
        );
    }
}
