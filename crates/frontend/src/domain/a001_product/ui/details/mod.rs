//! Product details UI
//!
//! - view_model.rs: form state signal and the submit command
//! - view.rs: the form component
//! - page.rs: create and edit pages around the form

mod page;
mod view;
mod view_model;

pub use page::{ProductCreatePage, ProductEditPage};
pub use view::ProductForm;
pub use view_model::ProductFormViewModel;
