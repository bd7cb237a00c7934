use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;

use super::domain::{CreateProductInput, Product, UpdateProductInput};
use crate::errors::ServiceError;

/// Repository abstraction for product persistence.
///
/// Absence is reported through `Option`/`bool`; `Err` is reserved for storage
/// failures.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Product>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Product>, ServiceError>;
    async fn insert(&self, input: CreateProductInput) -> Result<Product, ServiceError>;
    async fn update(&self, id: i32, patch: UpdateProductInput, now: DateTimeWithTimeZone) -> Result<Option<Product>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    use crate::product::domain::touched_at;

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, Product>,
        last_id: i32,
    }

    /// Keeps rows in primary-key order like the real table; ids are never reused.
    #[derive(Default)]
    pub struct MockProductRepository {
        table: Mutex<Table>,
        fail_with: Option<String>,
        commits: std::sync::atomic::AtomicUsize,
    }

    impl MockProductRepository {
        /// A repository whose every call fails like an unreachable database.
        pub fn failing(reason: &str) -> Self {
            Self { fail_with: Some(reason.to_string()), ..Self::default() }
        }

        /// Number of committed mutations so far.
        pub fn commits(&self) -> usize {
            self.commits.load(std::sync::atomic::Ordering::SeqCst)
        }

        fn check(&self) -> Result<(), ServiceError> {
            match &self.fail_with {
                Some(reason) => Err(ServiceError::Db(reason.clone())),
                None => Ok(()),
            }
        }

        fn committed(&self) {
            self.commits.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Product>, ServiceError> {
            self.check()?;
            let table = self.table.lock().await;
            let skip = usize::try_from(skip).unwrap_or(usize::MAX);
            let limit = usize::try_from(limit).unwrap_or(usize::MAX);
            Ok(table.rows.values().skip(skip).take(limit).cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<Product>, ServiceError> {
            self.check()?;
            Ok(self.table.lock().await.rows.get(&id).cloned())
        }

        async fn insert(&self, input: CreateProductInput) -> Result<Product, ServiceError> {
            self.check()?;
            let mut table = self.table.lock().await;
            table.last_id += 1;
            let product = Product {
                id: table.last_id,
                name: input.name,
                description: input.description,
                price: input.price,
                category: input.category,
                supplier_email: input.supplier_email,
                created_at: chrono::Utc::now().into(),
                updated_at: None,
            };
            table.rows.insert(product.id, product.clone());
            self.committed();
            Ok(product)
        }

        async fn update(&self, id: i32, patch: UpdateProductInput, now: DateTimeWithTimeZone) -> Result<Option<Product>, ServiceError> {
            self.check()?;
            let mut table = self.table.lock().await;
            let Some(row) = table.rows.get_mut(&id) else { return Ok(None) };
            patch.apply_to(row);
            row.updated_at = Some(touched_at(row.created_at, now));
            let updated = row.clone();
            self.committed();
            Ok(Some(updated))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            self.check()?;
            let removed = self.table.lock().await.rows.remove(&id).is_some();
            if removed { self.committed(); }
            Ok(removed)
        }
    }
}
