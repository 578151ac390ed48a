use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_product::aggregate::{Product, ProductDto};

use crate::domain::a001_product;
use crate::shared::api_error::ApiError;

fn parse_id(id: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(id).map_err(|_| ApiError::BadRequest(format!("Invalid product id: {}", id)))
}

/// GET /api/product
pub async fn list_all() -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(a001_product::service::list_all().await?))
}

/// GET /api/product/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, ApiError> {
    let uuid = parse_id(&id)?;
    a001_product::service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /api/product
///
/// Creates when `id` is absent, updates otherwise. Answers with the saved product.
pub async fn upsert(Json(dto): Json<ProductDto>) -> Result<Json<Product>, ApiError> {
    if let Some(id) = dto.id.as_deref() {
        parse_id(id)?;
        a001_product::service::update(dto)
            .await?
            .map(Json)
            .ok_or(ApiError::NotFound)
    } else {
        Ok(Json(a001_product::service::create(dto).await?))
    }
}

/// DELETE /api/product/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let uuid = parse_id(&id)?;
    if a001_product::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound)
    }
}

/// GET /api/product/categories
pub async fn categories() -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(a001_product::service::categories().await?))
}

/// POST /api/product/testdata
pub async fn insert_test_data() -> Result<StatusCode, ApiError> {
    a001_product::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
