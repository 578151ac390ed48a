pub mod form;
pub mod page_header;
