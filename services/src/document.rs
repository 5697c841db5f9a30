use db::models::document;
use db::schema::Attributes;
use serde::Serialize;
use serde_json::Value;

/// A stored document as the services hand it out: identifier plus attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: String,
    pub attributes: Attributes,
}

impl Document {
    /// Flattens to `{id, ...attributes}`, the shape a document store returns.
    pub fn into_flat(self) -> Attributes {
        let mut flat = self.attributes;
        flat.insert("id".to_owned(), Value::String(self.id));
        flat
    }
}

impl From<document::Model> for Document {
    fn from(model: document::Model) -> Self {
        let attributes = match model.body {
            Value::Object(map) => map,
            // Bodies are always written as objects.
            _ => Attributes::new(),
        };

        Self {
            id: model.id,
            attributes,
        }
    }
}
