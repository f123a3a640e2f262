// src/modules/icon/icon_resolver.rs
use crate::content::domain::entities::Icon;
use crate::icon::default_icons::{default_icon, FALLBACK_ICON};

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedIcon<'a> {
    /// Server-supplied markup, rendered verbatim.
    Custom(&'a str),
    Default(&'static str),
    Fallback,
}

impl<'a> ResolvedIcon<'a> {
    pub fn markup(&self) -> &'a str {
        match self {
            ResolvedIcon::Custom(svg) => svg,
            ResolvedIcon::Default(svg) => svg,
            ResolvedIcon::Fallback => FALLBACK_ICON,
        }
    }
}

/// Resolves a social-platform name against the remote icon set, then the built-in map,
/// then the generic glyph. Remote icons always win so the server can override defaults.
#[derive(Debug, Clone, Copy)]
pub struct IconResolver<'a> {
    custom: &'a [Icon],
}

impl<'a> IconResolver<'a> {
    pub fn new(custom: &'a [Icon]) -> Self {
        Self { custom }
    }

    pub fn resolve(&self, name: &str) -> ResolvedIcon<'a> {
        let lowered = name.to_lowercase();

        if let Some(icon) = self
            .custom
            .iter()
            .find(|icon| icon.name.to_lowercase() == lowered)
        {
            return ResolvedIcon::Custom(icon.svg.as_str());
        }

        match default_icon(&lowered) {
            Some(svg) => ResolvedIcon::Default(svg),
            None => ResolvedIcon::Fallback,
        }
    }
}
