pub mod default_icons;
pub mod icon_resolver;

pub use icon_resolver::{IconResolver, ResolvedIcon};
