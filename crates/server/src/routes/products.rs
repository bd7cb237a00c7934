use axum::{extract::State, http::StatusCode, Json};
use service::errors::ServiceError;
use service::product::{CreateProductInput, Product, UpdateProductInput};
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{IdPath, PageQuery, ValidatedJson};
use crate::state::ServerState;

const PRODUCT: &str = "Product";

#[utoipa::path(
    get, path = "/products", tag = "products",
    params(crate::openapi::ListParamsDoc),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ProductDoc]),
        (status = 422, description = "Invalid skip/limit")
    )
)]
pub async fn list(State(state): State<ServerState>, PageQuery(page): PageQuery) -> Result<Json<Vec<Product>>, JsonApiError> {
    let rows = state.products.list(page).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, IdPath(id): IdPath) -> Result<Json<Product>, JsonApiError> {
    let found = state
        .products
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(PRODUCT))?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::CreateProductInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, ValidatedJson(input): ValidatedJson<CreateProductInput>) -> Result<(StatusCode, Json<Product>), JsonApiError> {
    let created = state.products.create(input).await?;
    info!(id = created.id, "created product");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = crate::openapi::UpdateProductInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    ValidatedJson(patch): ValidatedJson<UpdateProductInput>,
) -> Result<Json<Product>, JsonApiError> {
    let updated = state
        .products
        .update(id, patch)
        .await?
        .ok_or_else(|| ServiceError::not_found(PRODUCT))?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, IdPath(id): IdPath) -> Result<StatusCode, JsonApiError> {
    if state.products.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServiceError::not_found(PRODUCT).into())
    }
}
