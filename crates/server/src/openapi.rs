use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub supplier_email: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp, null until the first update
    pub updated_at: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateProductInputDoc {
    /// max 100 characters
    pub name: String,
    /// max 500 characters
    pub description: Option<String>,
    /// 0 <= price < 100000000, at most 2 decimal places
    pub price: f64,
    /// max 50 characters
    pub category: String,
    pub supplier_email: String,
}

/// Every field is optional; omitted fields are left unchanged and
/// `"description": null` clears the description.
#[derive(ToSchema)]
pub struct UpdateProductInputDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub supplier_email: Option<String>,
}

#[derive(utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParamsDoc {
    /// rows to skip (default 0)
    pub skip: Option<u64>,
    /// maximum rows to return (default 25)
    pub limit: Option<u64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            CreateProductInputDoc,
            UpdateProductInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_product_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/products"));
        assert!(doc.paths.paths.contains_key("/products/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
