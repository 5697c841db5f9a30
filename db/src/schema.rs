//! Per-collection document schemas.
//!
//! Documents are free-form attribute bags. A [`Schema`] only constrains the
//! fields it declares: their type, whether they are required, and the default
//! written when a create or full replace leaves them out. Undeclared keys pass
//! through untouched.

use serde_json::{Map, Value};
use thiserror::Error;
use validator::ValidateEmail;

/// A document's attributes: string keys mapped to JSON values.
pub type Attributes = Map<String, Value>;

/// The kind of write a schema is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// New document; defaults are filled in.
    Create,
    /// Supplied fields merged over the stored ones; nothing is defaulted.
    Merge,
    /// Whole body replaced; omitted fields fall back to their defaults.
    Replace,
}

impl WriteMode {
    fn fills_defaults(self) -> bool {
        !matches!(self, WriteMode::Merge)
    }
}

/// Accepted value shapes for a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Email,
    Url,
    Number,
    Boolean,
    Object,
    List(&'static FieldKind),
    /// Identifier of a document in the named collection.
    Reference(&'static str),
}

impl FieldKind {
    fn check(&self, value: &Value) -> Result<(), String> {
        match (self, value) {
            (FieldKind::String, Value::String(_)) => Ok(()),
            (FieldKind::Email, Value::String(s)) if s.validate_email() => Ok(()),
            (FieldKind::Email, Value::String(_)) => Err("must be a valid email address".into()),
            (FieldKind::Url, Value::String(s)) if url::Url::parse(s).is_ok() => Ok(()),
            (FieldKind::Url, Value::String(_)) => Err("must be a valid URL".into()),
            (FieldKind::Number, Value::Number(_)) => Ok(()),
            (FieldKind::Boolean, Value::Bool(_)) => Ok(()),
            (FieldKind::Object, Value::Object(_)) => Ok(()),
            (FieldKind::Reference(_), Value::String(id)) if !id.is_empty() => Ok(()),
            (FieldKind::List(inner), Value::Array(items)) => {
                items.iter().enumerate().try_for_each(|(i, item)| {
                    inner
                        .check(item)
                        .map_err(|message| format!("item {i} {message}"))
                })
            }
            _ => Err(format!("must be {}", self.describe())),
        }
    }

    fn describe(&self) -> String {
        match self {
            FieldKind::String | FieldKind::Email | FieldKind::Url => "a string".into(),
            FieldKind::Number => "a number".into(),
            FieldKind::Boolean => "a boolean".into(),
            FieldKind::Object => "an object".into(),
            FieldKind::List(inner) => format!("a list of {}", inner.describe_plural()),
            FieldKind::Reference(collection) => format!("a {collection} id"),
        }
    }

    fn describe_plural(&self) -> String {
        match self {
            FieldKind::Reference(collection) => format!("{collection} ids"),
            other => other.describe(),
        }
    }
}

/// A declared field of a collection schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<fn() -> Value>,
}

impl FieldSpec {
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
        }
    }

    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
        }
    }

    pub const fn with_default(mut self, default: fn() -> Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Validation rules for one collection.
#[derive(Debug)]
pub struct Schema {
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(collection: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { collection, fields }
    }

    /// Fills defaults (for creates and replaces) and validates every declared field.
    ///
    /// Returns the attributes ready to be stored, or every field error found.
    pub fn apply(&self, mut attributes: Attributes, mode: WriteMode) -> Result<Attributes, SchemaError> {
        let mut errors = Vec::new();

        for field in self.fields {
            if mode.fills_defaults() && !attributes.contains_key(field.name) {
                if let Some(default) = field.default {
                    attributes.insert(field.name.to_owned(), default());
                }
            }

            match attributes.get(field.name) {
                None | Some(Value::Null) if field.required => {
                    errors.push(FieldError::new(field.name, "is required"));
                }
                None | Some(Value::Null) => {}
                Some(value) => {
                    if let Err(message) = field.kind.check(value) {
                        errors.push(FieldError::new(field.name, message));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(attributes)
        } else {
            Err(SchemaError { errors })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A document was rejected by its collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.errors))]
pub struct SchemaError {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
