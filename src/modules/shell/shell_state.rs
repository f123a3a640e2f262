// src/modules/shell/shell_state.rs
//! Load phases, reveal animation and viewport/route tracking for the shell.
//!
//! Pure state: every input is a [`ShellEvent`], every timer or mount request comes back
//! out as a [`ShellEffect`] for the runtime to carry out.

use std::time::Duration;

use crate::shell::router::{normalize_path, resolve, Route};
use crate::shell::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellTiming {
    pub reveal_interval: Duration,
    /// Highest value the reveal counter reaches; it starts at 1.
    pub reveal_cap: u32,
    pub settle_delay: Duration,
    pub copy_feedback: Duration,
}

impl Default for ShellTiming {
    fn default() -> Self {
        Self {
            reveal_interval: Duration::from_millis(1100),
            reveal_cap: 3,
            settle_delay: Duration::from_millis(500),
            copy_feedback: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Waiting for the host to report a complete document.
    Waiting,
    Settling,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Splash { dots: u32 },
    Mobile { menu_open: bool },
    Desktop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    PageLoaded,
    RevealTick,
    SettleElapsed,
    Resized { width: u32 },
    Navigated { path: String },
    MenuToggled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    ScheduleRevealTick(Duration),
    ScheduleSettle(Duration),
    Loaded,
    LayoutChanged(Layout),
    RouteChanged(Route),
}

#[derive(Debug, Clone)]
pub struct ShellState {
    timing: ShellTiming,
    reveal: u32,
    phase: LoadPhase,
    viewport: Viewport,
    path: String,
    menu_open: bool,
}

impl ShellState {
    /// Builds the initial state and the effects that start the reveal sequence.
    pub fn new(timing: ShellTiming, width: u32, path: &str) -> (Self, Vec<ShellEffect>) {
        let state = Self {
            timing,
            reveal: 1,
            phase: LoadPhase::Waiting,
            viewport: Viewport::from_width(width),
            path: normalize_path(path),
            menu_open: false,
        };

        let mut effects = Vec::new();
        if state.reveal < timing.reveal_cap {
            effects.push(ShellEffect::ScheduleRevealTick(timing.reveal_interval));
        }
        (state, effects)
    }

    pub fn timing(&self) -> &ShellTiming {
        &self.timing
    }

    pub fn reveal(&self) -> u32 {
        self.reveal
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Loaded
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn route(&self) -> Route {
        resolve(self.viewport, &self.path)
    }

    pub fn layout(&self) -> Layout {
        match (self.phase, self.viewport) {
            (LoadPhase::Waiting | LoadPhase::Settling, _) => Layout::Splash { dots: self.reveal },
            (LoadPhase::Loaded, Viewport::Mobile) => Layout::Mobile {
                menu_open: self.menu_open,
            },
            (LoadPhase::Loaded, Viewport::Desktop) => Layout::Desktop,
        }
    }

    pub fn handle(&mut self, event: ShellEvent) -> Vec<ShellEffect> {
        let layout_before = self.layout();
        let route_before = self.is_loaded().then(|| self.route());
        let mut effects = Vec::new();

        match event {
            ShellEvent::PageLoaded => {
                if self.phase == LoadPhase::Waiting {
                    self.phase = LoadPhase::Settling;
                    effects.push(ShellEffect::ScheduleSettle(self.timing.settle_delay));
                }
            }
            ShellEvent::RevealTick => {
                if self.reveal < self.timing.reveal_cap {
                    self.reveal += 1;
                    if self.reveal < self.timing.reveal_cap {
                        effects.push(ShellEffect::ScheduleRevealTick(self.timing.reveal_interval));
                    }
                }
            }
            ShellEvent::SettleElapsed => {
                if self.phase == LoadPhase::Settling {
                    self.phase = LoadPhase::Loaded;
                    effects.push(ShellEffect::Loaded);
                }
            }
            ShellEvent::Resized { width } => {
                self.viewport = Viewport::from_width(width);
            }
            ShellEvent::Navigated { path } => {
                self.path = normalize_path(&path);
                self.menu_open = false;
            }
            ShellEvent::MenuToggled => {
                if self.viewport.is_mobile() {
                    self.menu_open = !self.menu_open;
                }
            }
        }

        let layout_after = self.layout();
        if layout_after != layout_before {
            effects.push(ShellEffect::LayoutChanged(layout_after));
        }

        if self.is_loaded() {
            let route = self.route();
            if route_before.as_ref() != Some(&route) {
                effects.push(ShellEffect::RouteChanged(route));
            }
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(width: u32, path: &str) -> ShellState {
        let (mut state, _) = ShellState::new(ShellTiming::default(), width, path);
        state.handle(ShellEvent::PageLoaded);
        state.handle(ShellEvent::SettleElapsed);
        state
    }

    /* --------------------------------------------------
     * Reveal sequence
     * -------------------------------------------------- */

    #[test]
    fn reveal_starts_at_one_and_schedules_first_tick() {
        let (state, effects) = ShellState::new(ShellTiming::default(), 1280, "/");

        assert_eq!(state.reveal(), 1);
        assert_eq!(state.layout(), Layout::Splash { dots: 1 });
        assert_eq!(
            effects,
            vec![ShellEffect::ScheduleRevealTick(Duration::from_millis(1100))]
        );
    }

    #[test]
    fn reveal_stops_at_cap() {
        let (mut state, _) = ShellState::new(ShellTiming::default(), 1280, "/");

        let second = state.handle(ShellEvent::RevealTick);
        assert_eq!(state.reveal(), 2);
        assert!(second.contains(&ShellEffect::ScheduleRevealTick(Duration::from_millis(1100))));

        let third = state.handle(ShellEvent::RevealTick);
        assert_eq!(state.reveal(), 3);
        assert!(!third
            .iter()
            .any(|e| matches!(e, ShellEffect::ScheduleRevealTick(_))));

        state.handle(ShellEvent::RevealTick);
        assert_eq!(state.reveal(), 3);
    }

    /* --------------------------------------------------
     * Load phases
     * -------------------------------------------------- */

    #[test]
    fn settle_only_after_page_load() {
        let (mut state, _) = ShellState::new(ShellTiming::default(), 1280, "/");

        assert!(state.handle(ShellEvent::SettleElapsed).is_empty());
        assert_eq!(state.phase(), LoadPhase::Waiting);

        let effects = state.handle(ShellEvent::PageLoaded);
        assert_eq!(
            effects,
            vec![ShellEffect::ScheduleSettle(Duration::from_millis(500))]
        );
        assert_eq!(state.phase(), LoadPhase::Settling);
    }

    #[test]
    fn loaded_is_emitted_exactly_once_with_route() {
        let (mut state, _) = ShellState::new(ShellTiming::default(), 1280, "/blog");
        state.handle(ShellEvent::PageLoaded);

        let effects = state.handle(ShellEvent::SettleElapsed);
        assert_eq!(
            effects,
            vec![
                ShellEffect::Loaded,
                ShellEffect::LayoutChanged(Layout::Desktop),
                ShellEffect::RouteChanged(Route::Blog),
            ]
        );

        assert!(state.handle(ShellEvent::PageLoaded).is_empty());
        assert!(state.handle(ShellEvent::SettleElapsed).is_empty());
    }

    /* --------------------------------------------------
     * Viewport and routing
     * -------------------------------------------------- */

    #[test]
    fn crossing_breakpoint_switches_layout_and_default_route() {
        let mut state = loaded(1280, "/");
        assert_eq!(state.route(), Route::About);

        let effects = state.handle(ShellEvent::Resized { width: 500 });
        assert_eq!(
            effects,
            vec![
                ShellEffect::LayoutChanged(Layout::Mobile { menu_open: false }),
                ShellEffect::RouteChanged(Route::Info),
            ]
        );
    }

    #[test]
    fn resize_that_keeps_route_does_not_remount() {
        let mut state = loaded(1280, "/projects");
        let effects = state.handle(ShellEvent::Resized { width: 400 });
        assert_eq!(
            effects,
            vec![ShellEffect::LayoutChanged(Layout::Mobile { menu_open: false })]
        );
    }

    #[test]
    fn resize_within_same_class_is_silent() {
        let mut state = loaded(1280, "/");
        assert!(state.handle(ShellEvent::Resized { width: 1000 }).is_empty());
    }

    #[test]
    fn navigation_closes_menu_and_changes_route() {
        let mut state = loaded(400, "/");
        state.handle(ShellEvent::MenuToggled);
        assert!(state.menu_open());

        let effects = state.handle(ShellEvent::Navigated {
            path: "/contact".to_string(),
        });

        assert!(!state.menu_open());
        assert!(effects.contains(&ShellEffect::RouteChanged(Route::Contact)));
        assert!(effects.contains(&ShellEffect::LayoutChanged(Layout::Mobile { menu_open: false })));
    }

    #[test]
    fn route_changes_are_held_until_loaded() {
        let (mut state, _) = ShellState::new(ShellTiming::default(), 1280, "/");
        let effects = state.handle(ShellEvent::Navigated {
            path: "/blog".to_string(),
        });
        assert!(effects.is_empty());
        assert_eq!(state.path(), "/blog");
    }

    #[test]
    fn menu_toggle_is_mobile_only() {
        let mut state = loaded(1280, "/");
        assert!(state.handle(ShellEvent::MenuToggled).is_empty());
        assert!(!state.menu_open());
    }
}
