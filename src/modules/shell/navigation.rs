// src/modules/shell/navigation.rs
use crate::shell::router::normalize_path;
use crate::shell::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub label: &'static str,
    pub path: &'static str,
}

const MOBILE_TABS: [Tab; 5] = [
    Tab { label: "Home", path: "/" },
    Tab { label: "Portfolio", path: "/portfolio" },
    Tab { label: "Projects", path: "/projects" },
    Tab { label: "Blog", path: "/blog" },
    Tab { label: "Contact", path: "/contact" },
];

const DESKTOP_TABS: [Tab; 5] = [
    Tab { label: "About", path: "/about" },
    Tab { label: "Portfolio", path: "/portfolio" },
    Tab { label: "Projects", path: "/projects" },
    Tab { label: "Blog", path: "/blog" },
    Tab { label: "Contact", path: "/contact" },
];

pub fn tabs(viewport: Viewport) -> &'static [Tab] {
    match viewport {
        Viewport::Mobile => &MOBILE_TABS,
        Viewport::Desktop => &DESKTOP_TABS,
    }
}

/// Mobile tabs match exactly, with Home also covering `/about`.
/// Desktop tabs match the path itself or anything below it.
pub fn is_active(viewport: Viewport, tab: &Tab, current_path: &str) -> bool {
    let current = normalize_path(current_path);

    match viewport {
        Viewport::Mobile => current == tab.path || (tab.path == "/" && current == "/about"),
        Viewport::Desktop => {
            current == tab.path
                || current
                    .strip_prefix(tab.path)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    }
}
