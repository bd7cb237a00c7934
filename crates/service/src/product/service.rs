use std::sync::Arc;

use chrono::Utc;
use common::pagination::Pagination;
use tracing::{debug, info, instrument};

use super::domain::{CreateProductInput, Product, UpdateProductInput};
use super::repository::ProductRepository;
use crate::errors::ServiceError;

/// Product business service independent of web framework.
///
/// Inputs are expected to be validated already. Missing products are reported
/// as `None`/`false`, never as an error; `Err` only carries storage failures.
pub struct ProductService<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Page through products in primary-key order.
    ///
    /// # Examples
    /// ```
    /// use service::product::{ProductService, CreateProductInput, repository::mock::MockProductRepository};
    /// use common::pagination::Pagination;
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(MockProductRepository::default()));
    /// let page = tokio_test::block_on(svc.list(Pagination::default())).unwrap();
    /// assert!(page.is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn list(&self, page: Pagination) -> Result<Vec<Product>, ServiceError> {
        let rows = self.repo.list(page.skip, page.limit).await?;
        debug!(count = rows.len(), "listed products");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError> {
        let found = self.repo.get(id).await?;
        if found.is_none() {
            debug!(id, "product not found");
        }
        Ok(found)
    }

    /// Persist a new product; the storage assigns `id` and `created_at`.
    ///
    /// # Examples
    /// ```
    /// use service::product::{ProductService, CreateProductInput, repository::mock::MockProductRepository};
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(MockProductRepository::default()));
    /// let input = CreateProductInput {
    ///     name: "Produto Teste".into(),
    ///     description: None,
    ///     price: Decimal::new(1050, 2),
    ///     category: "Categoria Teste".into(),
    ///     supplier_email: "fornecedor@teste.com".into(),
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert!(created.updated_at.is_none());
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name, category = %input.category))]
    pub async fn create(&self, input: CreateProductInput) -> Result<Product, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, "product_created");
        Ok(created)
    }

    /// Overwrite only the fields present in `patch` and stamp `updated_at`.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: UpdateProductInput) -> Result<Option<Product>, ServiceError> {
        let updated = self.repo.update(id, patch, Utc::now().into()).await?;
        match &updated {
            Some(p) => info!(id = p.id, "product_updated"),
            None => debug!(id, "update skipped, product not found"),
        }
        Ok(updated)
    }

    /// Remove a product; `false` when there was nothing to remove.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let removed = self.repo.delete(id).await?;
        if removed {
            info!(id, "product_deleted");
        } else {
            debug!(id, "delete skipped, product not found");
        }
        Ok(removed)
    }
}
