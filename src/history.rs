use chrono::{DateTime, Local};
use itertools::Itertools;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::score::SessionSummary;

const HEADER: &str = "date,score,elapsed_secs,wpm,spawn_interval";

/// Append-only log of finished sessions.
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new() -> Option<Self> {
        AppDirs::history_path().map(|path| Self { path })
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, summary: &SessionSummary, spawn_interval_secs: f64) -> io::Result<()> {
        self.append_at(Local::now(), summary, spawn_interval_secs)
    }

    pub fn append_at(
        &self,
        date: DateTime<Local>,
        summary: &SessionSummary,
        spawn_interval_secs: f64,
    ) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // If the log doesn't exist yet, it needs a header
        let needs_header = !self.path.exists();

        let mut log_file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        if needs_header {
            writeln!(log_file, "{HEADER}")?;
        }

        let line = [
            date.format("%Y-%m-%d %H:%M:%S").to_string(),
            summary.score.to_string(),
            format!("{:.2}", summary.elapsed.as_secs_f64()),
            format!("{:.2}", summary.words_per_minute),
            format!("{spawn_interval_secs:.1}"),
        ]
        .iter()
        .join(",");

        writeln!(log_file, "{line}")
    }
}
