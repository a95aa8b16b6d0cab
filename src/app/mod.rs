use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Result;

use crate::app::constants::{LOG_NO_LOGS_MESSAGE, STATUS_READY};
use crate::app::logging::{log_path, prune_log_file};
use crate::model::{MountRecord, seed_mountpoints};
use crate::store::RecordStore;

mod constants;
mod handlers;
mod logging;
mod selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderMode {
    Help,
    Logs,
    Off,
}

pub(crate) struct App {
    pub(crate) log_path: PathBuf,
    pub(crate) last_log: String,
    pub(crate) log_lines: VecDeque<String>,
    pub(crate) store: RecordStore,
    pub(crate) selected: Option<usize>,
    pub(crate) last_selected: Option<MountRecord>,
    pub(crate) status: String,
    pub(crate) header_mode: HeaderMode,
}

impl App {
    pub(crate) fn load() -> Result<Self> {
        let log_path = log_path()?;
        prune_log_file(&log_path);
        let store = RecordStore::from_records(&seed_mountpoints());
        let mut app = Self {
            log_path,
            last_log: String::from(LOG_NO_LOGS_MESSAGE),
            log_lines: VecDeque::new(),
            store,
            selected: None,
            last_selected: None,
            status: String::new(),
            header_mode: HeaderMode::Help,
        };
        app.set_status(STATUS_READY);
        Ok(app)
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn for_test() -> Self {
        let mut log_path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        log_path.push(format!("sshfs-eddy-test-{nanos}.log"));
        Self {
            log_path,
            last_log: String::from(LOG_NO_LOGS_MESSAGE),
            log_lines: VecDeque::new(),
            store: RecordStore::new(),
            selected: None,
            last_selected: None,
            status: String::new(),
            header_mode: HeaderMode::Help,
        }
    }

    pub(crate) fn for_test_with_seed() -> Self {
        let mut app = Self::for_test();
        app.store = RecordStore::from_records(&seed_mountpoints());
        app
    }
}
