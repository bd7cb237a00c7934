use sea_orm::{prelude::DateTimeWithTimeZone, ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use models::product;
use crate::errors::ServiceError;
use crate::product::domain::{touched_at, CreateProductInput, Product, UpdateProductInput};
use crate::product::repository::ProductRepository;
use crate::session::Session;

/// SeaORM-backed repository implementation.
///
/// Reads go straight to the pool; every mutation runs in its own `Session`
/// and commits once.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Product>, ServiceError> {
        Ok(product::page(skip, limit).all(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, ServiceError> {
        Ok(product::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, input: CreateProductInput) -> Result<Product, ServiceError> {
        let session = Session::begin(&self.db).await?;
        let am = product::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            category: Set(input.category),
            supplier_email: Set(input.supplier_email),
            created_at: NotSet,
            updated_at: Set(None),
        };
        let created = am.insert(session.conn()).await?;
        session.commit().await?;
        Ok(created)
    }

    async fn update(&self, id: i32, patch: UpdateProductInput, now: DateTimeWithTimeZone) -> Result<Option<Product>, ServiceError> {
        let session = Session::begin(&self.db).await?;
        // Dropping the session on this path rolls back an empty transaction.
        let Some(found) = product::Entity::find_by_id(id).one(session.conn()).await? else {
            return Ok(None);
        };
        let created_at = found.created_at;
        let mut am: product::ActiveModel = found.into();
        if let Some(name) = patch.name { am.name = Set(name); }
        if let Some(description) = patch.description { am.description = Set(description); }
        if let Some(price) = patch.price { am.price = Set(price); }
        if let Some(category) = patch.category { am.category = Set(category); }
        if let Some(email) = patch.supplier_email { am.supplier_email = Set(email); }
        am.updated_at = Set(Some(touched_at(created_at, now)));
        let updated = am.update(session.conn()).await?;
        session.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let session = Session::begin(&self.db).await?;
        let res = product::Entity::delete_by_id(id).exec(session.conn()).await?;
        session.commit().await?;
        Ok(res.rows_affected > 0)
    }
}
