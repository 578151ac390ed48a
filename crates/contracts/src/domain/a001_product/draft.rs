use super::aggregate::{Product, ProductDto};
use crate::enums::product_category::ProductCategory;
use thiserror::Error;

/// Local rejection of a draft; never reaches the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Price must be a positive number.")]
    NonPositivePrice,
    #[error("Please select a valid category.")]
    UnknownCategory(String),
}

/// Editable product fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Price,
    Description,
    Image,
    Category,
}

impl DraftField {
    pub fn all() -> [DraftField; 5] {
        [
            DraftField::Title,
            DraftField::Price,
            DraftField::Description,
            DraftField::Image,
            DraftField::Category,
        ]
    }

    /// DOM id of the bound control
    pub fn id(&self) -> &'static str {
        match self {
            DraftField::Title => "name",
            DraftField::Price => "price",
            DraftField::Description => "description",
            DraftField::Image => "url",
            DraftField::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Product Name",
            DraftField::Price => "Price",
            DraftField::Description => "Description",
            DraftField::Image => "Image URL",
            DraftField::Category => "Category",
        }
    }
}

/// In-progress copy of a product's editable fields.
///
/// Every field holds the raw control value; the price is parsed only when
/// the draft goes through [`ProductDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            description: String::new(),
            image: String::new(),
            category: ProductCategory::default().code().to_string(),
        }
    }
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.code().to_string(),
        }
    }

    /// Edit mode seeds from the product, create mode from defaults
    pub fn seed(initial: Option<&Product>) -> Self {
        initial.map(Self::from_product).unwrap_or_default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Price => &self.price,
            DraftField::Description => &self.description,
            DraftField::Image => &self.image,
            DraftField::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Price => self.price = value,
            DraftField::Description => self.description = value,
            DraftField::Image => self.image = value,
            DraftField::Category => self.category = value,
        }
    }

    /// Run the full validation gate. Re-evaluated on every submit attempt.
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        if DraftField::all().iter().any(|f| self.get(*f).is_empty()) {
            return Err(ValidationError::MissingRequiredFields);
        }

        let price = parse_price(&self.price).ok_or(ValidationError::NonPositivePrice)?;

        let category = ProductCategory::from_code(&self.category)
            .ok_or_else(|| ValidationError::UnknownCategory(self.category.clone()))?;

        Ok(ValidDraft {
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            image: self.image.clone(),
            category,
        })
    }
}

/// Parse a raw price; `None` unless it is a finite number above zero
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

/// Draft that passed the gate, with typed price and category
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: ProductCategory,
}

impl ValidDraft {
    /// `{...original, ...draft}`: draft fields win, the original contributes
    /// identity and anything the form does not edit.
    pub fn merge(self, original: Option<&Product>) -> ProductDto {
        ProductDto {
            id: original.map(Product::to_string_id),
            title: self.title,
            price: self.price,
            description: self.description,
            image: self.image,
            category: self.category,
            rating: original.and_then(|p| p.rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::{ProductId, Rating};
    use crate::domain::common::{AggregateId, EntityMetadata};

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            title: "Shirt".into(),
            price: "19.99".into(),
            description: "Cotton shirt".into(),
            image: "http://x/img.png".into(),
            category: "men's clothing".into(),
        }
    }

    fn existing() -> Product {
        Product {
            id: ProductId::new_v4(),
            title: "Old".into(),
            price: 10.0,
            description: "Old description".into(),
            image: "http://x/old.png".into(),
            category: ProductCategory::Jewelery,
            rating: Some(Rating { rate: 3.9, count: 70 }),
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn test_default_draft() {
        let draft = ProductDraft::seed(None);
        assert_eq!(draft.category, "men's clothing");
        assert!(draft.title.is_empty());
        assert!(draft.price.is_empty());
        assert!(draft.description.is_empty());
        assert!(draft.image.is_empty());
    }

    #[test]
    fn test_seed_from_product() {
        let product = existing();
        let draft = ProductDraft::seed(Some(&product));
        assert_eq!(draft.title, "Old");
        assert_eq!(draft.price, "10");
        assert_eq!(draft.category, "jewelery");
    }

    #[test]
    fn test_each_missing_field_rejects() {
        for field in DraftField::all() {
            let mut draft = valid_draft();
            draft.set(field, String::new());
            assert_eq!(
                draft.validate(),
                Err(ValidationError::MissingRequiredFields),
                "field {:?}",
                field
            );
        }
    }

    #[test]
    fn test_required_check_runs_before_price_check() {
        let mut draft = valid_draft();
        draft.title.clear();
        draft.price = "abc".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn test_bad_prices_reject() {
        for raw in ["abc", "-5", "0", "0.0", "NaN", "inf", "12abc"] {
            let mut draft = valid_draft();
            draft.price = raw.into();
            assert_eq!(
                draft.validate(),
                Err(ValidationError::NonPositivePrice),
                "price {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_price_whitespace_is_tolerated() {
        assert_eq!(parse_price(" 19.99 "), Some(19.99));
        assert_eq!(parse_price("1e2"), Some(100.0));
    }

    #[test]
    fn test_unknown_category_rejects() {
        let mut draft = valid_draft();
        draft.category = "shoes".into();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::UnknownCategory("shoes".into()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingRequiredFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ValidationError::NonPositivePrice.to_string(),
            "Price must be a positive number."
        );
    }

    #[test]
    fn test_merge_for_create() {
        let dto = valid_draft().validate().unwrap().merge(None);
        assert_eq!(dto.id, None);
        assert_eq!(dto.title, "Shirt");
        assert_eq!(dto.price, 19.99);
        assert_eq!(dto.description, "Cotton shirt");
        assert_eq!(dto.image, "http://x/img.png");
        assert_eq!(dto.category, ProductCategory::MensClothing);
        assert_eq!(dto.rating, None);
    }

    #[test]
    fn test_merge_for_edit_overrides_fields_and_keeps_identity() {
        let product = existing();
        let dto = valid_draft().validate().unwrap().merge(Some(&product));
        assert_eq!(dto.id, Some(product.id.as_string()));
        assert_eq!(dto.title, "Shirt");
        assert_eq!(dto.category, ProductCategory::MensClothing);
        assert_eq!(dto.rating, product.rating);
    }
}
