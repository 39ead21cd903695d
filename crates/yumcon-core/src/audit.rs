//! JSONL audit trail of console actions issued against the repository
//! server, one file per day with size-based rotation.

use anyhow::Context;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

const MAX_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Clone)]
pub struct AuditLog {
    session_id: String,
    base_dir: PathBuf,
    max_bytes: u64,
}

#[derive(Clone, Copy, Debug)]
pub enum AuditOutcome {
    Ok,
    Failed,
}

impl AuditOutcome {
    fn as_str(self) -> &'static str {
        match self {
            AuditOutcome::Ok => "ok",
            AuditOutcome::Failed => "failed",
        }
    }
}

impl AuditLog {
    pub fn open_default() -> anyhow::Result<Self> {
        Self::open(crate::config::default_audit_dir()?, MAX_BYTES)
    }

    pub fn open(base_dir: PathBuf, max_bytes: u64) -> anyhow::Result<Self> {
        fs::create_dir_all(&base_dir).context("create audit dir")?;
        Ok(Self {
            session_id: Uuid::new_v4().to_string(),
            base_dir,
            max_bytes,
        })
    }

    pub fn record(
        &self,
        action: &str,
        repo: Option<&str>,
        outcome: AuditOutcome,
        error: Option<&str>,
    ) -> anyhow::Result<()> {
        let ts = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("format timestamp")?;
        let entry = AuditEntry {
            ts,
            session_id: &self.session_id,
            action,
            repo,
            outcome: outcome.as_str(),
            error,
        };
        self.append(&entry)
    }

    fn append(&self, entry: &AuditEntry<'_>) -> anyhow::Result<()> {
        let date = OffsetDateTime::now_utc()
            .format(&time::format_description::parse("[year][month][day]")?)
            .context("format date")?;
        let path = rotated_path(&self.base_dir, &date, self.max_bytes)?;
        let line = serde_json::to_string(entry).context("serialize audit entry")?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open audit log {}", path.display()))?;
        writeln!(file, "{line}").context("write audit entry")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct AuditEntry<'a> {
    ts: String,
    session_id: &'a str,
    action: &'a str,
    repo: Option<&'a str>,
    outcome: &'static str,
    error: Option<&'a str>,
}

fn rotated_path(base_dir: &Path, date: &str, max_bytes: u64) -> anyhow::Result<PathBuf> {
    let mut suffix = 0;
    loop {
        let name = if suffix == 0 {
            format!("actions-{date}.jsonl")
        } else {
            format!("actions-{date}-{suffix}.jsonl")
        };
        let path = base_dir.join(name);
        if let Ok(metadata) = fs::metadata(&path) {
            if metadata.len() >= max_bytes {
                suffix += 1;
                continue;
            }
        }
        return Ok(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn record_appends_jsonl() {
        let tmp = TempDir::new().unwrap();
        let audit = AuditLog::open(tmp.path().to_path_buf(), 1024).unwrap();
        audit
            .record("virtual.save", Some("virt"), AuditOutcome::Ok, None)
            .unwrap();
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let contents = fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
        assert!(contents.contains("\"action\":\"virtual.save\""));
        assert!(contents.contains("\"outcome\":\"ok\""));
    }

    #[test]
    fn failed_actions_carry_the_error_text() {
        let tmp = TempDir::new().unwrap();
        let audit = AuditLog::open(tmp.path().to_path_buf(), 1024).unwrap();
        audit
            .record(
                "virtual.save",
                Some("virt"),
                AuditOutcome::Failed,
                Some("Saving failed : 500 Internal Server Error"),
            )
            .unwrap();
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        let contents = fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
        assert!(contents.contains("500 Internal Server Error"));
    }

    #[test]
    fn log_rotates_when_file_is_full() {
        let tmp = TempDir::new().unwrap();
        let audit = AuditLog::open(tmp.path().to_path_buf(), 1).unwrap();
        audit
            .record("repo.set_type", Some("centos7"), AuditOutcome::Ok, None)
            .unwrap();
        audit
            .record("repo.set_type", Some("centos7"), AuditOutcome::Ok, None)
            .unwrap();
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert!(entries.len() >= 2);
    }
}
