use crate::models::document::{ActiveModel, Column, Entity, Model};
use crate::schema::Attributes;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde_json::Value;
use uuid::Uuid;

/// Collection-scoped access to the `documents` table.
///
/// Every lookup filters on `collection`, so an id that exists in another
/// collection behaves exactly like an id that does not exist at all.
pub struct DocumentRepository;

impl DocumentRepository {
    /// All documents of a collection, oldest first.
    pub async fn find_all(db: &DatabaseConnection, collection: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Collection.eq(collection))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        collection: &str,
        id: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned())
            .filter(Column::Collection.eq(collection))
            .one(db)
            .await
    }

    /// Fetches every listed id in one query. Missing ids are skipped and the
    /// result is in no particular order.
    pub async fn find_many(
        db: &DatabaseConnection,
        collection: &str,
        ids: &[String],
    ) -> Result<Vec<Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Entity::find()
            .filter(Column::Collection.eq(collection))
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .all(db)
            .await
    }

    /// Inserts a new document under a freshly generated id.
    pub async fn insert(
        db: &DatabaseConnection,
        collection: &str,
        body: Attributes,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            collection: Set(collection.to_owned()),
            body: Set(Value::Object(body)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
    }

    /// Overwrites the stored body of `current`.
    ///
    /// Returns `Ok(None)` if the row disappeared since it was read.
    pub async fn update_body(
        db: &DatabaseConnection,
        current: Model,
        body: Attributes,
    ) -> Result<Option<Model>, DbErr> {
        let mut active: ActiveModel = current.into();
        active.body = Set(Value::Object(body));
        active.updated_at = Set(Utc::now());

        match active.update(db).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Removes a document and hands back its last stored state.
    ///
    /// Returns `Ok(None)` if there was nothing to delete.
    pub async fn delete_by_id(
        db: &DatabaseConnection,
        collection: &str,
        id: &str,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Self::find_by_id(db, collection, id).await? else {
            return Ok(None);
        };

        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::Collection.eq(collection))
            .exec(db)
            .await?;

        Ok((result.rows_affected > 0).then_some(existing))
    }
}
