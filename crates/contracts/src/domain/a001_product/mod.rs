//! Product aggregate and the admin form/table core
//!
//! - aggregate.rs: Product, ProductId, ProductDto
//! - draft.rs: raw form fields and the validation gate
//! - submission.rs: submit state machine and outcome dispatch
//! - table.rs: list rendering contract

pub mod aggregate;
pub mod draft;
pub mod submission;
pub mod table;
