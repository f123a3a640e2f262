// src/modules/shell/viewport.rs

/// Widths strictly below this are mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_width(width: u32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Viewport::Mobile
    }
}
