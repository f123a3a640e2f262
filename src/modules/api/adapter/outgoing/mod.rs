pub mod http_portfolio_api;

pub use http_portfolio_api::{ApiClientConfig, HttpPortfolioApi};
