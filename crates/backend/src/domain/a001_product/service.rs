use super::repository;
use contracts::domain::a001_product::aggregate::{Product, ProductDto, Rating};
use contracts::enums::product_category::ProductCategory;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Create a product; the id is assigned here
pub async fn create(dto: ProductDto) -> anyhow::Result<Product> {
    dto.validate()?;

    let mut aggregate = Product::new_for_insert(&dto);
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!("Created product {} ({})", aggregate.id, aggregate.title);
    Ok(aggregate)
}

/// Update an existing product. `Ok(None)` when it does not exist.
pub async fn update(dto: ProductDto) -> anyhow::Result<Option<Product>> {
    dto.validate()?;

    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let Some(mut aggregate) = repository::get_by_id(id).await? else {
        return Ok(None);
    };

    aggregate.update(&dto);
    aggregate.validate()?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    tracing::info!("Updated product {}", aggregate.id);
    Ok(Some(aggregate))
}

/// Soft delete
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::soft_delete(id).await?;
    if deleted {
        tracing::info!("Deleted product {}", id);
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}

/// Category codes in use by live products, sorted
pub async fn categories() -> anyhow::Result<Vec<String>> {
    let codes: BTreeSet<&'static str> = repository::list_all()
        .await?
        .iter()
        .map(|p| p.category.code())
        .collect();
    Ok(codes.into_iter().map(str::to_string).collect())
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    for dto in test_data() {
        create(dto).await?;
    }
    Ok(())
}

fn test_data() -> Vec<ProductDto> {
    vec![
        ProductDto {
            id: None,
            title: "Fjallraven Foldsack No. 1 Backpack".into(),
            price: 109.95,
            description: "Your perfect pack for everyday use and walks in the forest.".into(),
            image: "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg".into(),
            category: ProductCategory::MensClothing,
            rating: Some(Rating { rate: 3.9, count: 120 }),
        },
        ProductDto {
            id: None,
            title: "Women's Rain Jacket".into(),
            price: 39.99,
            description: "Lightweight, hooded and water resistant.".into(),
            image: "https://fakestoreapi.com/img/71HblAHs5xL._AC_UY879_-2.jpg".into(),
            category: ProductCategory::WomensClothing,
            rating: Some(Rating { rate: 3.8, count: 679 }),
        },
        ProductDto {
            id: None,
            title: "Solid Gold Petite Micropave".into(),
            price: 168.0,
            description: "Satisfaction guaranteed.".into(),
            image: "https://fakestoreapi.com/img/61sbMiUnoGL._AC_UL640_QL65_ML3_.jpg".into(),
            category: ProductCategory::Jewelery,
            rating: Some(Rating { rate: 3.9, count: 70 }),
        },
        ProductDto {
            id: None,
            title: "WD 2TB Elements Portable External Hard Drive".into(),
            price: 64.0,
            description: "USB 3.0 and USB 2.0 compatibility.".into(),
            image: "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg".into(),
            category: ProductCategory::Electronics,
            rating: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;
    use contracts::domain::a001_product::draft::ValidationError;

    fn shirt() -> ProductDto {
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
    fn test_seed_data_is_valid() {
        for dto in test_data() {
            assert!(dto.validate().is_ok(), "{}", dto.title);
        }
    }

    // Single test owns the process-wide connection
    #[tokio::test]
    async fn test_product_lifecycle() {
        db::initialize_in_memory().await.unwrap();

        assert!(list_all().await.unwrap().is_empty());

        let created = create(shirt()).await.unwrap();
        let fetched = get_by_id(created.id.value()).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Shirt");
        assert_eq!(fetched.price, 19.99);
        assert_eq!(fetched.category, ProductCategory::MensClothing);

        let updated = update(ProductDto {
            id: Some(created.id.to_string()),
            title: "Linen shirt".into(),
            category: ProductCategory::Jewelery,
            ..shirt()
        })
        .await
        .unwrap()
        .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Linen shirt");

        let missing = update(ProductDto {
            id: Some(Uuid::new_v4().to_string()),
            ..shirt()
        })
        .await
        .unwrap();
        assert!(missing.is_none());

        let rejected = create(ProductDto {
            price: -5.0,
            ..shirt()
        })
        .await
        .unwrap_err();
        assert_eq!(
            rejected.downcast_ref::<ValidationError>(),
            Some(&ValidationError::NonPositivePrice)
        );

        let second = create(ProductDto {
            title: "Monitor".into(),
            category: ProductCategory::Electronics,
            ..shirt()
        })
        .await
        .unwrap();

        let ids: Vec<_> = list_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![created.id, second.id]);
        assert_eq!(
            categories().await.unwrap(),
            vec!["electronics".to_string(), "jewelery".to_string()]
        );

        assert!(delete(created.id.value()).await.unwrap());
        assert!(!delete(created.id.value()).await.unwrap());
        assert!(get_by_id(created.id.value()).await.unwrap().is_none());
        assert_eq!(list_all().await.unwrap().len(), 1);
    }
}
