use super::files::{DataStore, RUN_LOG_FILE};
use crate::error::Result;
use crate::models::{RunLogEntry, RunStats};

pub const RUN_LOG_CAPACITY: usize = 100;

// Pipeline run log

impl DataStore {
    /// Append one entry to the run log, keeping the newest 100
    pub fn log_run(&self, stats: RunStats, success: bool, error: Option<String>) -> Result<()> {
        let mut log = self.load_log::<RunLogEntry>(RUN_LOG_FILE, RUN_LOG_CAPACITY);
        log.push(RunLogEntry::new(stats, success, error));
        self.write_json(RUN_LOG_FILE, log.as_slice())?;
        tracing::info!(success, entries = log.len(), "Logged pipeline run");
        Ok(())
    }

    /// Like `log_run`, but a failure to write the log is only reported
    pub fn record_run(&self, stats: RunStats, success: bool, error: Option<String>) {
        if let Err(e) = self.log_run(stats, success, error) {
            tracing::error!("Error logging pipeline run: {}", e);
        }
    }

    /// Logged runs, oldest first
    pub fn run_log(&self) -> Vec<RunLogEntry> {
        self.load_log(RUN_LOG_FILE, RUN_LOG_CAPACITY).into_vec()
    }
}
