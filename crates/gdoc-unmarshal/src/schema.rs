//! Typed destination schemas.
//!
//! A [`Schema<T>`] lists the annotated fields of `T` in declaration order.
//! Each field is registered with its annotation and an accessor returning a
//! mutable reference into the record; fields that are never registered are
//! never written.
//!
//! ```
//! use std::collections::BTreeMap;
//! use gdoc_unmarshal::{Documented, Schema};
//!
//! #[derive(Debug, Default, Clone)]
//! struct ModuleDoc {
//!     client: String,
//!     client_do: String,
//! }
//!
//! impl Documented for ModuleDoc {
//!     fn schema() -> Schema<Self> {
//!         Schema::<Self>::new()
//!             .text("Client", |d| &mut d.client)
//!             .text("Client.Do", |d| &mut d.client_do)
//!     }
//! }
//!
//! #[derive(Debug, Default)]
//! struct Docs {
//!     modules: BTreeMap<String, ModuleDoc>,
//! }
//!
//! impl Documented for Docs {
//!     fn schema() -> Schema<Self> {
//!         Schema::<Self>::new().map_of("*", |d| &mut d.modules)
//!     }
//! }
//!
//! let mut docs = Docs::default();
//! let schema = Docs::schema();
//! assert!(schema.resolve(&mut docs, "client/Client.Do", "Do some stuff\n"));
//! assert!(!schema.resolve(&mut docs, "client/Server", "ignored\n"));
//! assert_eq!(docs.modules["client"].client_do, "Do some stuff\n");
//! ```

use std::cell::OnceCell;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::destination::{Destination, Shape};
use crate::error::UnmarshalError;
use crate::path::{descend, split_key};

/// A record type that knows its own schema.
pub trait Documented: Sized + 'static {
    fn schema() -> Schema<Self>;
}

/// String-keyed collection of records with value semantics.
///
/// Entries are read out, mutated and stored back, never mutated in place.
pub trait EntryMap {
    type Value: Default + Clone;

    fn get_entry(&self, key: &str) -> Option<&Self::Value>;
    fn put_entry(&mut self, key: String, value: Self::Value);
}

impl<V: Default + Clone> EntryMap for BTreeMap<String, V> {
    type Value = V;

    fn get_entry(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn put_entry(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl<V: Default + Clone, S: BuildHasher> EntryMap for HashMap<String, V, S> {
    type Value = V;

    fn get_entry(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn put_entry(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

enum Field<T> {
    Text {
        annotation: String,
        access: fn(&mut T) -> &mut String,
    },
    Nested(Box<dyn Nested<T>>),
}

/// Schema of a nested field: given up front, or built from the inner type
/// the first time a path reaches it so self-referencing records terminate.
enum ChildSchema<U> {
    Ready(Schema<U>),
    Deferred {
        build: fn() -> Schema<U>,
        built: OnceCell<Schema<U>>,
    },
}

impl<U> ChildSchema<U> {
    fn deferred(build: fn() -> Schema<U>) -> Self {
        Self::Deferred {
            build,
            built: OnceCell::new(),
        }
    }

    fn get(&self) -> &Schema<U> {
        match self {
            Self::Ready(schema) => schema,
            Self::Deferred { build, built } => built.get_or_init(*build),
        }
    }
}

/// A record or map field, erased over its inner type.
trait Nested<T> {
    fn annotation(&self) -> &str;
    fn resolve(&self, target: &mut T, path: &str, text: &str) -> bool;
}

struct RecordField<T, U> {
    annotation: String,
    access: fn(&mut T) -> &mut U,
    schema: ChildSchema<U>,
}

impl<T, U> Nested<T> for RecordField<T, U> {
    fn annotation(&self) -> &str {
        &self.annotation
    }

    fn resolve(&self, target: &mut T, path: &str, text: &str) -> bool {
        self.schema.get().resolve((self.access)(target), path, text)
    }
}

struct MapField<T, M: EntryMap> {
    annotation: String,
    access: fn(&mut T) -> &mut M,
    schema: ChildSchema<M::Value>,
}

impl<T, M: EntryMap> Nested<T> for MapField<T, M> {
    fn annotation(&self) -> &str {
        &self.annotation
    }

    fn resolve(&self, target: &mut T, path: &str, text: &str) -> bool {
        let Some((key, rest)) = split_key(path) else {
            return false;
        };
        let map = (self.access)(target);
        let mut entry = map.get_entry(key).cloned().unwrap_or_default();
        if !self.schema.get().resolve(&mut entry, rest, text) {
            return false;
        }
        map.put_entry(key.to_string(), entry);
        true
    }
}

/// Ordered field bindings of a record type `T`.
pub struct Schema<T> {
    fields: Vec<Field<T>>,
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T> std::fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let annotations: Vec<&str> = self
            .fields
            .iter()
            .map(|field| match field {
                Field::Text { annotation, .. } => annotation.as_str(),
                Field::Nested(nested) => nested.annotation(),
            })
            .collect();
        f.debug_struct("Schema")
            .field("fields", &annotations)
            .finish()
    }
}

impl<T: 'static> Schema<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a string leaf, matched when the remaining path equals
    /// `annotation` exactly.
    #[must_use]
    pub fn text(mut self, annotation: impl Into<String>, access: fn(&mut T) -> &mut String) -> Self {
        self.fields.push(Field::Text {
            annotation: annotation.into(),
            access,
        });
        self
    }

    /// Bind a nested record, entered when `annotation` followed by `/`
    /// prefixes the remaining path, or always for `*`.
    #[must_use]
    pub fn record<U: 'static>(
        mut self,
        annotation: impl Into<String>,
        access: fn(&mut T) -> &mut U,
        schema: Schema<U>,
    ) -> Self {
        self.push_record(annotation.into(), access, ChildSchema::Ready(schema))
    }

    /// [`Schema::record`] with the nested type's own schema, built when a
    /// path first enters the field.
    #[must_use]
    pub fn nested<U: Documented>(
        self,
        annotation: impl Into<String>,
        access: fn(&mut T) -> &mut U,
    ) -> Self {
        self.push_record(annotation.into(), access, ChildSchema::deferred(U::schema))
    }

    fn push_record<U: 'static>(
        mut self,
        annotation: String,
        access: fn(&mut T) -> &mut U,
        schema: ChildSchema<U>,
    ) -> Self {
        self.fields.push(Field::Nested(Box::new(RecordField {
            annotation,
            access,
            schema,
        })));
        self
    }

    /// Bind a string-keyed map of records. The first `/`-separated segment
    /// of the remaining path selects the entry.
    #[must_use]
    pub fn map<M: EntryMap + 'static>(
        mut self,
        annotation: impl Into<String>,
        access: fn(&mut T) -> &mut M,
        schema: Schema<M::Value>,
    ) -> Self {
        self.push_map(annotation.into(), access, ChildSchema::Ready(schema))
    }

    /// [`Schema::map`] with the value type's own schema, built when a path
    /// first enters the field. A record may hold a map of itself.
    #[must_use]
    pub fn map_of<M>(self, annotation: impl Into<String>, access: fn(&mut T) -> &mut M) -> Self
    where
        M: EntryMap + 'static,
        M::Value: Documented,
    {
        self.push_map(
            annotation.into(),
            access,
            ChildSchema::deferred(<M::Value as Documented>::schema),
        )
    }

    fn push_map<M: EntryMap + 'static>(
        mut self,
        annotation: String,
        access: fn(&mut T) -> &mut M,
        schema: ChildSchema<M::Value>,
    ) -> Self {
        self.fields.push(Field::Nested(Box::new(MapField {
            annotation,
            access,
            schema,
        })));
        self
    }
}

impl<T> Schema<T> {
    /// Assign `text` to the leaf of `target` addressed by `path`.
    ///
    /// Fields are tried in registration order and the first match wins.
    /// Returns `false`, leaving `target` untouched, when nothing matches.
    pub fn resolve(&self, target: &mut T, path: &str, text: &str) -> bool {
        for field in &self.fields {
            match field {
                Field::Text { annotation, access } => {
                    if annotation == path {
                        *access(target) = text.to_string();
                        return true;
                    }
                }
                Field::Nested(nested) => {
                    if let Some(rest) = descend(nested.annotation(), path)
                        && nested.resolve(target, rest, text)
                    {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// A typed record paired with the schema describing it.
pub struct Bound<'a, T> {
    schema: &'a Schema<T>,
    target: &'a mut T,
}

impl<'a, T> Bound<'a, T> {
    pub fn new(schema: &'a Schema<T>, target: &'a mut T) -> Self {
        Self { schema, target }
    }
}

impl<T> Destination for Bound<'_, T> {
    fn shape(&self) -> Shape {
        Shape::Record
    }

    fn resolve(&mut self, path: &str, text: &str) -> Result<bool, UnmarshalError> {
        Ok(self.schema.resolve(self.target, path, text))
    }
}
