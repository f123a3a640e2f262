pub mod config;
pub mod modules;
pub mod shared;

pub use modules::api;
pub use modules::content;
pub use modules::html;
pub use modules::icon;
pub use modules::sections;
pub use modules::shell;

#[cfg(test)]
mod tests;
