//! One installer run against one root

use std::path::{Path, PathBuf};

use crate::audit::FileLog;
use crate::clock::Clock;
use crate::layout;

/// The resolved root and the audit log of this run, both fixed once started
#[derive(Debug, Clone)]
pub struct Session {
    root: PathBuf,
    log: FileLog,
}

impl Session {
    /// Start a session; the log is named after the start time and created on first write
    pub fn start(root: impl Into<PathBuf>, clock: &dyn Clock) -> Self {
        let root = root.into();
        let log = FileLog::new(layout::log_path(&root, clock.now()));
        Self { root, log }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log(&self) -> &FileLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_session_log_under_backups() {
        let clock = FixedClock::at(2024, 1, 2, 3, 4, 5);
        let session = Session::start("qt", &clock);
        assert_eq!(session.root(), Path::new("qt"));
        assert_eq!(
            session.log().path(),
            Path::new("qt")
                .join("Backups")
                .join("settings-installer-2024-01-02_030405.txt")
        );
        assert!(!session.log().path().exists());
    }
}
