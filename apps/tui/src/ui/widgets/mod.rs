pub mod popup;
pub mod radar;
pub mod selector;
