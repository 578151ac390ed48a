use crate::shared::api_utils::{api_url, error_message};
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use contracts::domain::a001_product::submission::{PersistenceError, ProductPersistence};
use gloo_net::http::{Request, Response};

/// Turn a non-2xx response into the backend's error text
async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_message(status, &body))
}

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/product"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let response = ensure_ok(response).await?;

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_by_id(id: ProductId) -> Result<Product, String> {
    let response = Request::get(&api_url(&format!("/api/product/{}", id)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Err("Product not found".to_string());
    }
    let response = ensure_ok(response).await?;

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update, depending on whether `dto.id` is set
pub async fn save_product(dto: &ProductDto) -> Result<Product, String> {
    let response = Request::post(&api_url("/api/product"))
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| format!("Failed to encode product: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let response = ensure_ok(response).await?;

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_product(id: ProductId) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/product/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response).await.map(|_| ())
}

/// Category codes currently present in the catalog
pub async fn fetch_categories() -> Result<Vec<String>, String> {
    let response = Request::get(&api_url("/api/product/categories"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let response = ensure_ok(response).await?;

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn insert_test_data() -> Result<(), String> {
    let response = Request::post(&api_url("/api/product/testdata"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response).await.map(|_| ())
}

/// Persistence backed by the catalog REST API
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpProductStore;

impl ProductPersistence for HttpProductStore {
    async fn save(&self, dto: ProductDto) -> Result<Product, PersistenceError> {
        save_product(&dto).await.map_err(PersistenceError::from)
    }
}
