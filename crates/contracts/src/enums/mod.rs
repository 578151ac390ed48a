pub mod product_category;
