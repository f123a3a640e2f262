// src/modules/shell/runtime.rs
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::application::ports::outgoing::PortfolioApi;
use crate::config::ShellConfig;
use crate::sections::{InfoView, SectionEffect, SectionTask, SectionUpdate};
use crate::shell::render::render_shell;
use crate::shell::router::Route;
use crate::shell::section::{MountedSection, SectionAction};
use crate::shell::shell_state::{ShellEffect, ShellEvent, ShellState};

/// What the host knows about its environment when the shell mounts.
#[derive(Debug, Clone)]
pub struct HostSnapshot {
    pub width: u32,
    pub path: String,
    /// The document had already finished loading; no separate load event will follow.
    pub document_complete: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    PageLoaded,
    Resized { width: u32 },
    Navigate { path: String },
    ToggleMenu,
    Section(SectionAction),
}

/// Side effects only the host can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    WriteClipboard(String),
    PushHistory(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyTarget {
    Sidebar,
    Section { generation: u64 },
}

#[derive(Debug)]
enum RuntimeMsg {
    Shell(ShellEvent),
    SidebarLoaded(SectionUpdate),
    SectionLoaded { generation: u64, update: SectionUpdate },
    CopyReset { target: CopyTarget, seq: u64 },
}

struct Mounted {
    route: Route,
    generation: u64,
    section: MountedSection,
}

/// Drives a [`ShellState`] on tokio: timers, fetches and the mounted section view.
pub struct ShellRuntime {
    api: Arc<dyn PortfolioApi>,
    config: ShellConfig,
    state: ShellState,
    sidebar: InfoView,
    mounted: Option<Mounted>,
    generation: u64,
    pending_fetches: usize,
    tx: mpsc::UnboundedSender<RuntimeMsg>,
    rx: mpsc::UnboundedReceiver<RuntimeMsg>,
    timers: Vec<JoinHandle<()>>,
}

impl ShellRuntime {
    /// Must be called from within a tokio runtime.
    pub fn mount(api: Arc<dyn PortfolioApi>, config: ShellConfig, snapshot: HostSnapshot) -> Self {
        let (state, effects) = ShellState::new(config.timing, snapshot.width, &snapshot.path);
        let (tx, rx) = mpsc::unbounded_channel();

        let mut runtime = Self {
            api,
            config,
            state,
            sidebar: InfoView::new(),
            mounted: None,
            generation: 0,
            pending_fetches: 0,
            tx,
            rx,
            timers: Vec::new(),
        };

        info!(
            width = snapshot.width,
            path = %snapshot.path,
            document_complete = snapshot.document_complete,
            "Mounting shell"
        );

        runtime.run_effects(effects);
        if snapshot.document_complete {
            runtime.apply_shell_event(ShellEvent::PageLoaded);
        }
        runtime
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn sidebar(&self) -> &InfoView {
        &self.sidebar
    }

    pub fn mounted_route(&self) -> Option<&Route> {
        self.mounted.as_ref().map(|m| &m.route)
    }

    pub fn mounted_section(&self) -> Option<&MountedSection> {
        self.mounted.as_ref().map(|m| &m.section)
    }

    pub fn pending_fetches(&self) -> usize {
        self.pending_fetches
    }

    pub fn dispatch(&mut self, event: HostEvent) -> Vec<HostCommand> {
        match event {
            HostEvent::PageLoaded => {
                self.apply_shell_event(ShellEvent::PageLoaded);
                Vec::new()
            }
            HostEvent::Resized { width } => {
                self.apply_shell_event(ShellEvent::Resized { width });
                Vec::new()
            }
            HostEvent::Navigate { path } => {
                self.apply_shell_event(ShellEvent::Navigated { path });
                Vec::new()
            }
            HostEvent::ToggleMenu => {
                self.apply_shell_event(ShellEvent::MenuToggled);
                Vec::new()
            }
            HostEvent::Section(action) => self.dispatch_section(action),
        }
    }

    /// Waits for one timer or fetch to complete and applies it.
    pub async fn next(&mut self) {
        if let Some(msg) = self.rx.recv().await {
            self.handle_msg(msg);
        }
    }

    /// Runs until the shell is loaded and no fetch is in flight.
    ///
    /// Never returns if the host does not report the page as loaded.
    pub async fn settle(&mut self) {
        while !(self.state.is_loaded() && self.pending_fetches == 0) {
            self.next().await;
        }
    }

    pub fn render(&self) -> String {
        render_shell(
            &self.state,
            &self.sidebar,
            self.mounted.as_ref().map(|m| &m.section),
        )
    }

    fn dispatch_section(&mut self, action: SectionAction) -> Vec<HostCommand> {
        // Copy feedback lives on the Info view; outside of it, the sidebar owns it.
        let (effect, target) = match (&mut self.mounted, action) {
            (Some(mounted), SectionAction::Copy(field)) => match mounted.section.info_mut() {
                Some(view) => (
                    view.copy(field),
                    CopyTarget::Section {
                        generation: mounted.generation,
                    },
                ),
                None => (self.sidebar.copy(field), CopyTarget::Sidebar),
            },
            (None, SectionAction::Copy(field)) => (self.sidebar.copy(field), CopyTarget::Sidebar),
            (Some(mounted), action) => (mounted.section.handle(action), CopyTarget::Sidebar),
            (None, action) => {
                debug!(action = ?action, "No section mounted, dropping action");
                (SectionEffect::None, CopyTarget::Sidebar)
            }
        };

        match effect {
            SectionEffect::None => Vec::new(),
            SectionEffect::Run(task) => {
                if let Some(generation) = self.mounted.as_ref().map(|m| m.generation) {
                    self.spawn_section_task(generation, task);
                }
                Vec::new()
            }
            SectionEffect::Navigate(path) => {
                self.apply_shell_event(ShellEvent::Navigated { path: path.clone() });
                vec![HostCommand::PushHistory(path)]
            }
            SectionEffect::WriteClipboard { text, seq, .. } => {
                let tx = self.tx.clone();
                self.spawn_timer(self.state.timing().copy_feedback, move || {
                    let _ = tx.send(RuntimeMsg::CopyReset { target, seq });
                });
                vec![HostCommand::WriteClipboard(text)]
            }
        }
    }

    fn apply_shell_event(&mut self, event: ShellEvent) {
        let effects = self.state.handle(event);
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<ShellEffect>) {
        for effect in effects {
            match effect {
                ShellEffect::ScheduleRevealTick(delay) => {
                    let tx = self.tx.clone();
                    self.spawn_timer(delay, move || {
                        let _ = tx.send(RuntimeMsg::Shell(ShellEvent::RevealTick));
                    });
                }
                ShellEffect::ScheduleSettle(delay) => {
                    let tx = self.tx.clone();
                    self.spawn_timer(delay, move || {
                        let _ = tx.send(RuntimeMsg::Shell(ShellEvent::SettleElapsed));
                    });
                }
                ShellEffect::Loaded => {
                    info!("Shell loaded");
                    self.spawn_sidebar_fetch();
                }
                ShellEffect::LayoutChanged(layout) => {
                    debug!(layout = ?layout, "Layout changed");
                }
                ShellEffect::RouteChanged(route) => self.mount_section(route),
            }
        }
    }

    fn mount_section(&mut self, route: Route) {
        self.generation += 1;
        let generation = self.generation;
        let section = MountedSection::mount(&route, &self.config.media_base_url);

        info!(route = ?route, generation, "Mounting section");

        if let Some(task) = section.initial_task() {
            self.spawn_section_task(generation, task);
        }
        self.mounted = Some(Mounted {
            route,
            generation,
            section,
        });
    }

    fn spawn_section_task(&mut self, generation: u64, task: SectionTask) {
        self.pending_fetches += 1;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let update = task.run(api.as_ref()).await;
            let _ = tx.send(RuntimeMsg::SectionLoaded { generation, update });
        });
    }

    fn spawn_sidebar_fetch(&mut self) {
        self.pending_fetches += 1;
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let update = SectionTask::LoadInfo.run(api.as_ref()).await;
            let _ = tx.send(RuntimeMsg::SidebarLoaded(update));
        });
    }

    fn spawn_timer<F>(&mut self, delay: Duration, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.timers.retain(|handle| !handle.is_finished());
        self.timers.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fire();
        }));
    }

    fn handle_msg(&mut self, msg: RuntimeMsg) {
        match msg {
            RuntimeMsg::Shell(event) => self.apply_shell_event(event),
            RuntimeMsg::SidebarLoaded(update) => {
                self.pending_fetches = self.pending_fetches.saturating_sub(1);
                self.sidebar.apply(update);
            }
            RuntimeMsg::SectionLoaded { generation, update } => {
                self.pending_fetches = self.pending_fetches.saturating_sub(1);
                match &mut self.mounted {
                    Some(mounted) if mounted.generation == generation => {
                        mounted.section.apply(update)
                    }
                    _ => debug!(generation, "Discarding result for unmounted section"),
                }
            }
            RuntimeMsg::CopyReset { target, seq } => match target {
                CopyTarget::Sidebar => self.sidebar.reset_copied(seq),
                CopyTarget::Section { generation } => {
                    if let Some(view) = self
                        .mounted
                        .as_mut()
                        .filter(|m| m.generation == generation)
                        .and_then(|m| m.section.info_mut())
                    {
                        view.reset_copied(seq);
                    }
                }
            },
        }
    }
}

impl Drop for ShellRuntime {
    fn drop(&mut self) {
        for handle in &self.timers {
            handle.abort();
        }
    }
}
