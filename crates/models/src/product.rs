use sea_orm::{entity::prelude::*, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

/// Persisted product row.
///
/// `id` and `created_at` are filled in by the database on insert;
/// `updated_at` stays `None` until the first update.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub category: String,
    pub supplier_email: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Largest offset/limit Postgres accepts (`BIGINT`).
pub const MAX_BOUND: u64 = i64::MAX as u64;

/// One offset/limit page in primary-key order.
///
/// Values past `MAX_BOUND` are clamped; such a page is simply empty.
pub fn page(skip: u64, limit: u64) -> Select<Entity> {
    Entity::find()
        .order_by_asc(Column::Id)
        .offset(skip.min(MAX_BOUND))
        .limit(limit.min(MAX_BOUND))
}
