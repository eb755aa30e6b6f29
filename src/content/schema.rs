//! Collection schemas.
//!
//! A [`Schema`] is declared once per collection and checks the raw data of
//! every entry. Validation returns a cleaned copy holding only the declared
//! fields, so unknown keys (like a `slug` override) never reach the output.
//!
//! ```ignore
//! let schema = Schema::new("profiles", vec![
//!     Field::required("id", Kind::Text),
//!     Field::required("name", Kind::Text),
//!     Field::optional("title", Kind::Text),
//! ]);
//! let data = schema.validate(&entry, &references)?;
//! ```

use super::{
    entry::{Data, Entry},
    error::ContentError,
};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;
use std::path::Path;

/// Shape of a single value.
#[derive(Debug, Clone)]
pub enum Kind {
    Text,
    Bool,
    /// Image path: remote and absolute paths are accepted as-is, relative
    /// paths must point at an existing file next to the entry.
    Image,
    /// Closed set of allowed strings.
    Enum(&'static [&'static str]),
    /// Id of an entry in another collection.
    Reference(&'static str),
    Array(Box<Kind>),
    Object(Vec<Field>),
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
    pub required: bool,
}

impl Field {
    pub fn required(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub fn optional(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

impl Kind {
    pub fn array(kind: Kind) -> Self {
        Self::Array(Box::new(kind))
    }

    fn name(&self) -> String {
        match self {
            Self::Text => "text".into(),
            Self::Bool => "boolean".into(),
            Self::Image => "image path".into(),
            Self::Enum(options) => format!("one of {options:?}"),
            Self::Reference(collection) => format!("`{collection}` id"),
            Self::Array(_) => "array".into(),
            Self::Object(_) => "object".into(),
        }
    }
}

/// Known entry ids per collection, for reference checks.
#[derive(Debug, Default)]
pub struct References {
    ids: FxHashMap<&'static str, FxHashSet<String>>,
}

impl References {
    pub fn insert<I>(&mut self, collection: &'static str, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.ids.entry(collection).or_default().extend(ids);
    }

    pub fn contains(&self, collection: &str, id: &str) -> bool {
        self.ids.get(collection).is_some_and(|ids| ids.contains(id))
    }
}

/// A field that failed its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field path, e.g. `authors[1]` or `hero.buttons[0].label`.
    pub field: String,
    pub reason: String,
}

impl Violation {
    fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}

struct Context<'a> {
    dir: Option<&'a Path>,
    references: &'a References,
}

#[derive(Debug, Clone)]
pub struct Schema {
    collection: &'static str,
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(collection: &'static str, fields: Vec<Field>) -> Self {
        Self { collection, fields }
    }

    /// Validate an entry, naming the collection and entry on failure.
    pub fn validate(&self, entry: &Entry, references: &References) -> Result<Data, ContentError> {
        self.check(&entry.data, entry.dir(), references)
            .map_err(|v| ContentError::validation(self.collection, &entry.id, v.field, v.reason))
    }

    /// Check raw data against the schema.
    pub fn check(
        &self,
        data: &Data,
        dir: Option<&Path>,
        references: &References,
    ) -> Result<Data, Violation> {
        let cx = Context { dir, references };
        check_object(&self.fields, data, "", &cx)
    }
}

fn check_object(fields: &[Field], data: &Data, path: &str, cx: &Context) -> Result<Data, Violation> {
    let mut out = Data::new();
    for field in fields {
        let path = if path.is_empty() {
            field.name.to_owned()
        } else {
            format!("{path}.{}", field.name)
        };
        match data.get(field.name) {
            None | Some(Value::Null) if field.required => {
                return Err(Violation::new(&path, "required"));
            }
            None | Some(Value::Null) => {}
            Some(value) => {
                let value = check_value(&field.kind, value, &path, cx)?;
                out.insert(field.name.to_owned(), value);
            }
        }
    }
    Ok(out)
}

fn check_value(kind: &Kind, value: &Value, path: &str, cx: &Context) -> Result<Value, Violation> {
    match (kind, value) {
        (Kind::Text, Value::String(_)) | (Kind::Bool, Value::Bool(_)) => Ok(value.clone()),
        (Kind::Enum(options), Value::String(s)) if options.contains(&s.as_str()) => {
            Ok(value.clone())
        }
        (Kind::Image, Value::String(src)) => {
            check_image(src, path, cx)?;
            Ok(value.clone())
        }
        (Kind::Reference(collection), _) => check_reference(collection, value, path, cx),
        (Kind::Array(inner), Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| check_value(inner, item, &format!("{path}[{i}]"), cx))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (Kind::Object(fields), Value::Object(data)) => {
            check_object(fields, data, path, cx).map(Value::Object)
        }
        (kind, other) => Err(Violation::new(
            path,
            format!("expected {}, found {}", kind.name(), describe(other)),
        )),
    }
}

fn check_image(src: &str, path: &str, cx: &Context) -> Result<(), Violation> {
    if src.trim().is_empty() {
        return Err(Violation::new(path, "image path must not be empty"));
    }
    let is_remote = src.starts_with("http://") || src.starts_with("https://");
    if is_remote || src.starts_with('/') {
        return Ok(());
    }
    match cx.dir {
        Some(dir) if !dir.join(src).is_file() => Err(Violation::new(
            path,
            format!("image `{src}` not found next to the entry"),
        )),
        _ => Ok(()),
    }
}

/// References are written as a bare id or as `{ collection, id }`.
fn check_reference(
    collection: &str,
    value: &Value,
    path: &str,
    cx: &Context,
) -> Result<Value, Violation> {
    let id = match value {
        Value::String(id) => id.as_str(),
        Value::Object(map) => {
            if let Some(other) = map.get("collection").and_then(Value::as_str)
                && other != collection
            {
                return Err(Violation::new(
                    path,
                    format!("expected a `{collection}` reference, found `{other}`"),
                ));
            }
            map.get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| Violation::new(path, "reference is missing `id`"))?
        }
        other => {
            return Err(Violation::new(
                path,
                format!("expected `{collection}` id, found {}", describe(other)),
            ));
        }
    };

    if cx.references.contains(collection, id) {
        Ok(Value::String(id.to_owned()))
    } else {
        Err(Violation::new(
            path,
            format!("`{id}` does not exist in collection `{collection}`"),
        ))
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
