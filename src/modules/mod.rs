pub mod api;
pub mod content;
pub mod html;
pub mod icon;
pub mod sections;
pub mod shell;
