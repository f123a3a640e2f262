pub mod portfolio_api;

pub use portfolio_api::{ApiError, ContactMessage, PortfolioApi};
