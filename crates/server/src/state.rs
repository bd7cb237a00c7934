use std::sync::Arc;

use service::product::{repository::ProductRepository, ProductService};

pub type DynProductService = ProductService<dyn ProductRepository>;

/// Shared handler state, built once by the composition root.
#[derive(Clone)]
pub struct ServerState {
    pub products: Arc<DynProductService>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { products: Arc::new(ProductService::new(repo)) }
    }
}
