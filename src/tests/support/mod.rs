pub mod fake_backend;
pub mod fixtures;
pub mod stubs;

use std::time::Duration;

use crate::config::ShellConfig;
use crate::shell::ShellTiming;

/// Shell timing short enough for tests running on the real clock.
pub fn fast_shell_config(media_base_url: &str) -> ShellConfig {
    ShellConfig {
        timing: ShellTiming {
            reveal_interval: Duration::from_millis(5),
            reveal_cap: 3,
            settle_delay: Duration::from_millis(1),
            copy_feedback: Duration::from_millis(20),
        },
        media_base_url: media_base_url.to_string(),
    }
}
