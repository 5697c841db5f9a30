use db::schema::{FieldKind, FieldSpec, Schema};

use crate::service::Service;

static STUDENT_FIELDS: [FieldSpec; 2] = [
    FieldSpec::optional("name", FieldKind::String),
    FieldSpec::optional("email", FieldKind::Email),
];

/// Students are free-form; only `name` and `email` are typed when present.
pub static STUDENT_SCHEMA: Schema = Schema::new("students", &STUDENT_FIELDS);

pub struct StudentService;

impl Service for StudentService {
    const TYPE: &'static str = "students";
    const SINGULAR: &'static str = "student";

    fn schema() -> &'static Schema {
        &STUDENT_SCHEMA
    }
}
