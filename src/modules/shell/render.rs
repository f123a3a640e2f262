// src/modules/shell/render.rs
use crate::sections::InfoView;
use crate::shared::markup::escape;
use crate::shell::navigation::{is_active, tabs};
use crate::shell::section::MountedSection;
use crate::shell::shell_state::{Layout, ShellState};
use crate::shell::viewport::Viewport;

fn render_tabs(viewport: Viewport, current_path: &str, class: &str) -> String {
    let items: String = tabs(viewport)
        .iter()
        .map(|tab| {
            let state = if is_active(viewport, tab, current_path) {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            format!(r#"<a href="{}"{}>{}</a>"#, tab.path, state, tab.label)
        })
        .collect();
    format!(r#"<nav class="{}">{}</nav>"#, class, items)
}

fn render_splash(dots: u32, sidebar: &InfoView) -> String {
    let dots: String = (0..dots).map(|_| r#"<span class="dot"></span>"#).collect();
    format!(
        r#"<div class="splash"><div class="dots">{}</div><h1>{} Portfolio</h1></div>"#,
        dots,
        escape(&sidebar.info().name)
    )
}

fn render_mobile(
    state: &ShellState,
    menu_open: bool,
    sidebar: &InfoView,
    pane: &str,
) -> String {
    format!(
        r#"<div class="shell mobile"><header>{}<button class="menu-toggle" aria-expanded="{}">Menu</button></header><main>{}</main>{}</div>"#,
        sidebar.render_identity(),
        menu_open,
        pane,
        render_tabs(Viewport::Mobile, state.path(), "bottom-nav")
    )
}

fn render_desktop(state: &ShellState, sidebar: &InfoView, pane: &str) -> String {
    format!(
        r#"<div class="shell desktop"><aside class="sidebar">{}</aside><main>{}<div class="pane">{}</div></main></div>"#,
        sidebar.render(),
        render_tabs(Viewport::Desktop, state.path(), "tabs sticky"),
        pane
    )
}

/// Whole-page markup for the current layout.
pub fn render_shell(
    state: &ShellState,
    sidebar: &InfoView,
    section: Option<&MountedSection>,
) -> String {
    let pane = section.map(MountedSection::render).unwrap_or_default();

    match state.layout() {
        Layout::Splash { dots } => render_splash(dots, sidebar),
        Layout::Mobile { menu_open } => render_mobile(state, menu_open, sidebar, &pane),
        Layout::Desktop => render_desktop(state, sidebar, &pane),
    }
}
