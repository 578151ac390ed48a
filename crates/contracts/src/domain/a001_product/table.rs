//! What the product table renders for a given product sequence.
//!
//! The table is a pure projection: it keeps caller order, keys rows by
//! product id and only hands deletion intent back to the caller.

use super::aggregate::{Product, ProductId};

pub const PRODUCT_TABLE_COLUMNS: [&str; 6] =
    ["Product Name", "Price", "Category", "Rating", "Action", "View"];

pub const EMPTY_TABLE_TEXT: &str = "No products available";

#[derive(Debug, Clone, PartialEq)]
pub enum ProductTableBody {
    /// Single row spanning every column
    Placeholder { text: &'static str, colspan: usize },
    /// One row per product, in input order
    Rows(Vec<Product>),
}

impl ProductTableBody {
    pub fn project(products: &[Product]) -> Self {
        if products.is_empty() {
            ProductTableBody::Placeholder {
                text: EMPTY_TABLE_TEXT,
                colspan: PRODUCT_TABLE_COLUMNS.len(),
            }
        } else {
            ProductTableBody::Rows(products.to_vec())
        }
    }

    /// Rendered `<tr>` count, placeholder included
    pub fn row_count(&self) -> usize {
        match self {
            ProductTableBody::Placeholder { .. } => 1,
            ProductTableBody::Rows(rows) => rows.len(),
        }
    }

    /// Text and colspan of the placeholder row, if this body is empty
    pub fn placeholder(&self) -> Option<(&'static str, usize)> {
        match self {
            ProductTableBody::Placeholder { text, colspan } => Some((*text, *colspan)),
            ProductTableBody::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> &[Product] {
        match self {
            ProductTableBody::Placeholder { .. } => &[],
            ProductTableBody::Rows(rows) => rows,
        }
    }

    pub fn keys(&self) -> Vec<ProductId> {
        match self {
            ProductTableBody::Placeholder { .. } => Vec::new(),
            ProductTableBody::Rows(rows) => rows.iter().map(row_key).collect(),
        }
    }
}

/// Reconciliation key of a row
pub fn row_key(product: &Product) -> ProductId {
    product.id
}

/// Delete handler for one row: forwards that row's id and nothing else
pub fn bind_delete<F>(id: ProductId, on_delete: F) -> impl Fn()
where
    F: Fn(ProductId),
{
    move || on_delete(id)
}
