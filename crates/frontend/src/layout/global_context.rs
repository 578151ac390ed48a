use crate::domain::a001_product::api;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use leptos::prelude::*;

/// Catalog state shared across pages.
///
/// The list page reads `products`; the form pages write saved records back
/// through [`AppGlobalContext::upsert_product`] so the table reflects a save
/// without a refetch.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub products: RwSignal<Vec<Product>>,
    pub categories: RwSignal<Vec<String>>,
    pub loading: RwSignal<bool>,
    pub loaded: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            loaded: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn expect() -> Self {
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
    }

    pub fn load_products(&self) {
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_products().await {
                Ok(items) => {
                    log::debug!("loaded {} products", items.len());
                    this.products.set(items);
                    this.loaded.set(true);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load products: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    /// Fetch the list once per session; later visits reuse the store.
    pub fn ensure_loaded(&self) {
        if !self.loaded.get_untracked() && !self.loading.get_untracked() {
            self.load_products();
            self.load_categories();
        }
    }

    pub fn load_categories(&self) {
        let categories = self.categories;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_categories().await {
                Ok(items) => categories.set(items),
                Err(e) => log::warn!("failed to load categories: {}", e),
            }
        });
    }

    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.products
            .with_untracked(|items| items.iter().find(|p| p.id == id).cloned())
    }

    pub fn upsert_product(&self, product: Product) {
        self.products.update(|items| upsert_into(items, product));
        self.load_categories();
    }

    /// Delete on the server, then drop the row locally.
    pub fn remove_product(&self, id: ProductId) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_product(id).await {
                Ok(()) => {
                    log::info!("deleted product {}", id);
                    this.products.update(|items| {
                        remove_from(items, id);
                    });
                    this.error.set(None);
                    this.load_categories();
                }
                Err(e) => {
                    log::error!("failed to delete product {}: {}", id, e);
                    this.error.set(Some(e));
                }
            }
        });
    }

    pub fn fill_test_data(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::insert_test_data().await {
                Ok(()) => {
                    this.load_products();
                    this.load_categories();
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the record with the same id in place, or append it.
fn upsert_into(items: &mut Vec<Product>, product: Product) {
    match items.iter_mut().find(|p| p.id == product.id) {
        Some(slot) => *slot = product,
        None => items.push(product),
    }
}

fn remove_from(items: &mut Vec<Product>, id: ProductId) -> bool {
    let before = items.len();
    items.retain(|p| p.id != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityMetadata;
    use contracts::enums::product_category::ProductCategory;

    fn product(title: &str) -> Product {
        Product {
            id: ProductId::new_v4(),
            title: title.into(),
            price: 1.0,
            description: "d".into(),
            image: "i".into(),
            category: ProductCategory::Jewelery,
            rating: None,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut items = vec![product("a"), product("b"), product("c")];
        let mut changed = items[1].clone();
        changed.title = "b2".into();
        upsert_into(&mut items, changed.clone());
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], changed);
    }

    #[test]
    fn test_upsert_appends_new() {
        let mut items = vec![product("a")];
        let fresh = product("b");
        upsert_into(&mut items, fresh.clone());
        assert_eq!(items.last(), Some(&fresh));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut items = vec![product("a"), product("b"), product("c")];
        let (a, b, c) = (items[0].id, items[1].id, items[2].id);
        assert!(remove_from(&mut items, b));
        assert_eq!(items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![a, c]);
        assert!(!remove_from(&mut items, b));
    }
}
