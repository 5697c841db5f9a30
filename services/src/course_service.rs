use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use db::repositories::DocumentRepository;
use db::schema::{FieldKind, FieldSpec, Schema};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::service::Service;
use crate::student_service::StudentService;
use crate::{Document, ServiceError};

/// Attribute holding the course roster: an ordered list of student ids.
pub const ROSTER_FIELD: &str = "students";

fn empty_string() -> Value {
    Value::String(String::new())
}

fn empty_roster() -> Value {
    Value::Array(Vec::new())
}

static COURSE_FIELDS: [FieldSpec; 5] = [
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::optional("code", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String).with_default(empty_string),
    FieldSpec::optional("url", FieldKind::Url),
    FieldSpec::optional(ROSTER_FIELD, FieldKind::List(&FieldKind::Reference("students")))
        .with_default(empty_roster),
];

pub static COURSE_SCHEMA: Schema = Schema::new("courses", &COURSE_FIELDS);

pub struct CourseService;

impl Service for CourseService {
    const TYPE: &'static str = "courses";
    const SINGULAR: &'static str = "course";

    fn schema() -> &'static Schema {
        &COURSE_SCHEMA
    }

    // ↓↓↓ OVERRIDE DEFAULT BEHAVIOR IF NEEDED HERE ↓↓↓

    /// Replaces the roster ids with the student documents they point at.
    ///
    /// Students are fetched in one query; ids that no longer resolve are
    /// dropped and roster order is kept.
    fn expand(
        db: DatabaseConnection,
        mut document: Document,
    ) -> Pin<Box<dyn Future<Output = Result<Document, ServiceError>> + Send>> {
        Box::pin(async move {
            let roster = roster_ids(&document);
            if roster.is_empty() {
                return Ok(document);
            }

            let students: HashMap<String, Document> =
                DocumentRepository::find_many(&db, StudentService::TYPE, &roster)
                    .await?
                    .into_iter()
                    .map(Document::from)
                    .map(|student| (student.id.clone(), student))
                    .collect();

            let expanded = roster
                .iter()
                .filter_map(|id| students.get(id))
                .map(|student| Value::Object(student.clone().into_flat()))
                .collect();

            document
                .attributes
                .insert(ROSTER_FIELD.to_owned(), Value::Array(expanded));
            Ok(document)
        })
    }
}

fn roster_ids(document: &Document) -> Vec<String> {
    match document.attributes.get(ROSTER_FIELD) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}
