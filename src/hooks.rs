//! The startup hook.
//!
//! The host fires a startup event exactly once when the window manager
//! first starts (manual reloads do not re-fire it). The manifest answers
//! by spawning the personal autostart script, fire-and-forget: the child
//! is never waited on and its outcome is never inspected.
//!
//! The once-per-process guarantee lives *here*, as a process-wide atomic,
//! so it holds even if the host sends the event more than once.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Process-wide latch: has the startup hook fired yet?
static FIRED: AtomicBool = AtomicBool::new(false);

/// Resolve the config directory (`$XDG_CONFIG_HOME/tilerc`).
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("tilerc")
}

/// Launches external processes on behalf of the hook.
///
/// A trait so tests can substitute a recording double for the real
/// process spawner.
pub trait Spawner {
    /// Start `program` detached. Must not block on the child.
    fn spawn(&self, program: &Path) -> std::io::Result<()>;
}

/// The real spawner: `std::process::Command`, child handle dropped.
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&self, program: &Path) -> std::io::Result<()> {
        std::process::Command::new(program).spawn().map(|_| ())
    }
}

/// A one-shot action fired on first window-manager start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupHook {
    /// Path of the autostart script.
    pub script: PathBuf,
}

impl StartupHook {
    /// The personal hook: `$XDG_CONFIG_HOME/tilerc/autostart.sh`.
    pub fn personal() -> Self {
        Self {
            script: config_dir().join("autostart.sh"),
        }
    }

    /// Fire the hook if it has not fired yet this process.
    ///
    /// Returns `true` when the script was actually launched this call.
    /// A spawn failure still consumes the latch: the hook is one-shot
    /// whether or not the script could be started, and the failure is
    /// logged and otherwise ignored.
    pub fn fire(&self, spawner: &dyn Spawner) -> bool {
        self.fire_with_latch(spawner, &FIRED)
    }

    /// Whether the process-wide latch has been consumed.
    pub fn has_fired() -> bool {
        FIRED.load(Ordering::SeqCst)
    }

    fn fire_with_latch(&self, spawner: &dyn Spawner, latch: &AtomicBool) -> bool {
        if latch.swap(true, Ordering::SeqCst) {
            debug!("startup hook already fired, ignoring");
            return false;
        }
        debug!("running startup script {}", self.script.display());
        if let Err(e) = spawner.spawn(&self.script) {
            warn!("startup script {} failed to start: {}", self.script.display(), e);
        }
        true
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// A test double that records every spawn request.
    #[derive(Default)]
    struct RecordingSpawner {
        calls: RefCell<Vec<PathBuf>>,
        fail: bool,
    }

    impl Spawner for RecordingSpawner {
        fn spawn(&self, program: &Path) -> std::io::Result<()> {
            self.calls.borrow_mut().push(program.to_path_buf());
            if self.fail {
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn fires_once_per_latch() {
        let spawner = RecordingSpawner::default();
        let latch = AtomicBool::new(false);
        let hook = StartupHook {
            script: PathBuf::from("/tmp/autostart.sh"),
        };

        assert!(hook.fire_with_latch(&spawner, &latch));
        assert!(!hook.fire_with_latch(&spawner, &latch));
        assert!(!hook.fire_with_latch(&spawner, &latch));
        assert_eq!(spawner.calls.borrow().len(), 1);
        assert_eq!(spawner.calls.borrow()[0], PathBuf::from("/tmp/autostart.sh"));
    }

    #[test]
    fn spawn_failure_still_consumes_the_latch() {
        let spawner = RecordingSpawner {
            fail: true,
            ..Default::default()
        };
        let latch = AtomicBool::new(false);
        let hook = StartupHook {
            script: PathBuf::from("/nowhere/autostart.sh"),
        };

        assert!(hook.fire_with_latch(&spawner, &latch));
        assert!(!hook.fire_with_latch(&spawner, &latch));
        assert_eq!(spawner.calls.borrow().len(), 1);
    }

    #[test]
    fn process_wide_latch_is_one_shot() {
        let spawner = RecordingSpawner::default();
        let hook = StartupHook {
            script: PathBuf::from("/tmp/autostart.sh"),
        };

        // Another test in this binary may have consumed the global latch
        // already; either way the second call never fires.
        let _ = hook.fire(&spawner);
        let second = hook.fire(&spawner);
        assert!(!second);
        assert!(StartupHook::has_fired());
        assert!(spawner.calls.borrow().len() <= 1);
    }

    #[test]
    fn personal_hook_points_into_the_config_dir() {
        let hook = StartupHook::personal();
        assert!(hook.script.ends_with("tilerc/autostart.sh"));
    }

    #[test]
    fn hook_wire_round_trip() {
        let hook = StartupHook {
            script: PathBuf::from("/home/u/.config/tilerc/autostart.sh"),
        };
        let json = serde_json::to_string(&hook).unwrap();
        let back: StartupHook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hook);
    }
}
