use std::future::Future;
use std::pin::Pin;

use db::repositories::DocumentRepository;
use db::schema::{Attributes, Schema, WriteMode};
use sea_orm::DatabaseConnection;

use crate::{Document, ServiceError};

/// How an update treats the fields a client left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// PATCH: omitted fields keep their stored values.
    Merge,
    /// PUT: omitted fields revert to their schema defaults (or disappear).
    Replace,
}

/// CRUD over one document collection.
///
/// Implementors only name their collection and schema; every operation has a
/// default implementation on top of [`DocumentRepository`]. Futures own their
/// connection handle so handlers can hold them across awaits.
pub trait Service: Send + Sync + 'static {
    /// Collection name; doubles as the JSON:API resource type.
    const TYPE: &'static str;
    /// Singular noun for messages, e.g. `student`.
    const SINGULAR: &'static str;

    fn schema() -> &'static Schema;

    /// Resolves relations on a single-document read. No-op by default.
    fn expand(
        _db: DatabaseConnection,
        document: Document,
    ) -> Pin<Box<dyn Future<Output = Result<Document, ServiceError>> + Send>> {
        Box::pin(async move { Ok(document) })
    }

    fn find_all(
        db: DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Document>, ServiceError>> + Send>> {
        Box::pin(async move {
            let models = DocumentRepository::find_all(&db, Self::TYPE).await?;
            Ok(models.into_iter().map(Document::from).collect())
        })
    }

    /// Fetches one document and expands its relations.
    fn find_by_id(
        db: DatabaseConnection,
        id: String,
    ) -> Pin<Box<dyn Future<Output = Result<Document, ServiceError>> + Send>> {
        Box::pin(async move {
            let model = DocumentRepository::find_by_id(&db, Self::TYPE, &id)
                .await?
                .ok_or_else(|| ServiceError::not_found(&id))?;
            Self::expand(db, Document::from(model)).await
        })
    }

    /// `NotFound` unless a document with `id` exists. Relations are not expanded.
    fn ensure_exists(
        db: DatabaseConnection,
        id: String,
    ) -> Pin<Box<dyn Future<Output = Result<(), ServiceError>> + Send>> {
        Box::pin(async move {
            DocumentRepository::find_by_id(&db, Self::TYPE, &id)
                .await?
                .map(|_| ())
                .ok_or_else(|| ServiceError::not_found(&id))
        })
    }

    fn create(
        db: DatabaseConnection,
        attributes: Attributes,
    ) -> Pin<Box<dyn Future<Output = Result<Document, ServiceError>> + Send>> {
        Box::pin(async move {
            let body = Self::schema().apply(attributes, WriteMode::Create)?;
            let model = DocumentRepository::insert(&db, Self::TYPE, body).await?;
            tracing::debug!(collection = Self::TYPE, id = %model.id, "Created document");
            Ok(Document::from(model))
        })
    }

    /// Applies `attributes` to the document at `id`. The identifier itself
    /// never changes, whatever the body contains.
    fn update(
        db: DatabaseConnection,
        id: String,
        attributes: Attributes,
        mode: UpdateMode,
    ) -> Pin<Box<dyn Future<Output = Result<Document, ServiceError>> + Send>> {
        Box::pin(async move {
            let current = DocumentRepository::find_by_id(&db, Self::TYPE, &id)
                .await?
                .ok_or_else(|| ServiceError::not_found(&id))?;

            let body = match mode {
                UpdateMode::Merge => {
                    let mut merged = Document::from(current.clone()).attributes;
                    merged.extend(attributes);
                    Self::schema().apply(merged, WriteMode::Merge)?
                }
                UpdateMode::Replace => Self::schema().apply(attributes, WriteMode::Replace)?,
            };

            let model = DocumentRepository::update_body(&db, current, body)
                .await?
                .ok_or_else(|| ServiceError::not_found(&id))?;
            Ok(Document::from(model))
        })
    }

    /// Removes the document at `id` and returns its last stored state.
    fn delete(
        db: DatabaseConnection,
        id: String,
    ) -> Pin<Box<dyn Future<Output = Result<Document, ServiceError>> + Send>> {
        Box::pin(async move {
            let model = DocumentRepository::delete_by_id(&db, Self::TYPE, &id)
                .await?
                .ok_or_else(|| ServiceError::not_found(&id))?;
            tracing::debug!(collection = Self::TYPE, id = %model.id, "Deleted document");
            Ok(Document::from(model))
        })
    }
}
