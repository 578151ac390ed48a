use super::draft::ValidationError;
use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::product_category::ProductCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Product identifier, assigned by the backend on create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer rating summary, maintained outside the admin form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: ProductCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl Product {
    /// Build a new product with a fresh id
    pub fn new_for_insert(dto: &ProductDto) -> Self {
        Self {
            id: ProductId::new_v4(),
            title: dto.title.clone(),
            price: dto.price,
            description: dto.description.clone(),
            image: dto.image.clone(),
            category: dto.category,
            rating: dto.rating,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Overwrite the editable fields from a DTO. Identity and metadata stay.
    pub fn update(&mut self, dto: &ProductDto) {
        self.title = dto.title.clone();
        self.price = dto.price;
        self.description = dto.description.clone();
        self.image = dto.image.clone();
        self.category = dto.category;
        if dto.rating.is_some() {
            self.rating = dto.rating;
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_fields(&self.title, self.price, &self.description, &self.image)
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Record handed to the persistence operation: create when `id` is absent,
/// update otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: ProductCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl ProductDto {
    /// Same gate the form applies, repeated on the server for non-UI clients
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_fields(&self.title, self.price, &self.description, &self.image)
    }
}

fn check_fields(
    title: &str,
    price: f64,
    description: &str,
    image: &str,
) -> Result<(), ValidationError> {
    if title.is_empty() || description.is_empty() || image.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::NonPositivePrice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ProductDto {
        ProductDto {
            id: None,
            title: "Shirt".into(),
            price: 19.99,
            description: "Cotton shirt".into(),
            image: "http://x/img.png".into(),
            category: ProductCategory::MensClothing,
            rating: None,
        }
    }

    #[test]
    fn test_dto_validation() {
        assert_eq!(dto().validate(), Ok(()));

        let mut missing = dto();
        missing.image.clear();
        assert_eq!(missing.validate(), Err(ValidationError::MissingRequiredFields));

        let mut free = dto();
        free.price = 0.0;
        assert_eq!(free.validate(), Err(ValidationError::NonPositivePrice));

        let mut nan = dto();
        nan.price = f64::NAN;
        assert_eq!(nan.validate(), Err(ValidationError::NonPositivePrice));
    }

    #[test]
    fn test_update_keeps_identity_and_rating() {
        let mut product = Product::new_for_insert(&ProductDto {
            rating: Some(Rating { rate: 4.1, count: 259 }),
            ..dto()
        });
        let id = product.id;
        let created_at = product.metadata.created_at;

        product.update(&ProductDto {
            title: "Jacket".into(),
            price: 55.0,
            ..dto()
        });

        assert_eq!(product.id, id);
        assert_eq!(product.title, "Jacket");
        assert_eq!(product.price, 55.0);
        assert_eq!(product.rating, Some(Rating { rate: 4.1, count: 259 }));
        assert_eq!(product.metadata.created_at, created_at);
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product::new_for_insert(&dto());
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["category"], "men's clothing");
        assert_eq!(value["title"], "Shirt");
        assert!(value.get("rating").is_none());

        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back.id, product.id);
    }
}
