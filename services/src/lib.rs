pub mod course_service;
pub mod document;
pub mod error;
pub mod service;
pub mod student_service;

pub use course_service::CourseService;
pub use document::Document;
pub use error::ServiceError;
pub use service::{Service, UpdateMode};
pub use student_service::StudentService;
