pub mod navigation;
pub mod render;
pub mod router;
pub mod runtime;
pub mod section;
pub mod shell_state;
pub mod viewport;

pub use router::Route;
pub use runtime::{HostCommand, HostEvent, HostSnapshot, ShellRuntime};
pub use section::{MountedSection, SectionAction};
pub use shell_state::{Layout, LoadPhase, ShellState, ShellTiming};
pub use viewport::Viewport;
