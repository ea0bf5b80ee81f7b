//! Append-only JSONL run journal.
//!
//! Writes one JSON object per line: when a run starts, and how it ended.
//! Write failures are ignored; the journal never affects program output.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub struct RunJournal {
    writer: Option<BufWriter<File>>,
    run_id: String,
}

impl RunJournal {
    /// Open the journal at `path` for appending, creating parent directories.
    pub fn new(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            run_id: generate_run_id(),
        })
    }

    /// A journal that discards all events.
    pub fn noop() -> Self {
        Self {
            writer: None,
            run_id: generate_run_id(),
        }
    }

    pub fn log_started(&mut self, max: u64) {
        self.write_event(serde_json::json!({
            "ts": epoch_secs(),
            "run": self.run_id,
            "type": "started",
            "max": max,
        }));
    }

    pub fn log_finished(&mut self, lines: usize, duration_ms: u64) {
        self.write_event(serde_json::json!({
            "ts": epoch_secs(),
            "run": self.run_id,
            "type": "finished",
            "lines": lines,
            "duration_ms": duration_ms,
        }));
    }

    /// `formatted` counts lines handed to the output, not lines known to
    /// have reached it.
    pub fn log_failed(&mut self, formatted: usize, error: &str) {
        self.write_event(serde_json::json!({
            "ts": epoch_secs(),
            "run": self.run_id,
            "type": "failed",
            "formatted": formatted,
            "error": error,
        }));
    }

    fn write_event(&mut self, value: serde_json::Value) {
        if let Some(ref mut writer) = self.writer {
            if let Ok(line) = serde_json::to_string(&value) {
                let _ = writeln!(writer, "{line}");
                let _ = writer.flush();
            }
        }
    }
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn generate_run_id() -> String {
    let pid = std::process::id();
    let ts = epoch_secs();
    format!("r{:x}", pid ^ (ts as u32))
}
