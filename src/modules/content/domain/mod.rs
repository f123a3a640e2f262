pub mod entities;
pub mod templates;
