pub mod document;

pub use document::Entity as Document;
