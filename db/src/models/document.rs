use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A stored document in the `documents` table.
///
/// Every collection shares this table; `collection` says which one a row
/// belongs to and `body` holds the attribute bag (always a JSON object, never
/// containing the identifier).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    /// Server-assigned UUID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Collection name, e.g. `students`.
    pub collection: String,
    #[sea_orm(column_type = "Json")]
    pub body: Json,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
