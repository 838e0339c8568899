//! Parallel auditing of many URLs.
//!
//! Every URL runs its own independent pipeline; one failing URL never
//! aborts the batch.

use crate::error::{Error, Result};
use crate::model::ComplianceReport;
use crate::Auditor;
use rayon::prelude::*;
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;

/// Options for batch audits.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Worker threads (`None` = rayon's default)
    pub jobs: Option<usize>,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs.max(1));
        self
    }
}

/// Outcome for one URL of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// URL as given
    pub url: String,

    /// Report, when the audit succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ComplianceReport>,

    /// Error message, when the audit failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    fn from_result(url: &str, result: Result<ComplianceReport>) -> Self {
        match result {
            Ok(report) => Self {
                url: url.to_string(),
                report: Some(report),
                error: None,
            },
            Err(e) => {
                log::warn!("Audit of {} failed: {}", url, e);
                Self {
                    url: url.to_string(),
                    report: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Whether the audit succeeded.
    pub fn is_ok(&self) -> bool {
        self.report.is_some()
    }
}

/// Audit URLs in parallel, preserving input order.
pub fn audit_batch<S>(urls: &[S], auditor: &Auditor, options: &BatchOptions) -> Result<Vec<BatchEntry>>
where
    S: AsRef<str> + Sync,
{
    audit_batch_with_progress(urls, auditor, options, |_| {})
}

/// Audit URLs in parallel, calling `on_done` as each URL completes.
pub fn audit_batch_with_progress<S, F>(
    urls: &[S],
    auditor: &Auditor,
    options: &BatchOptions,
    on_done: F,
) -> Result<Vec<BatchEntry>>
where
    S: AsRef<str> + Sync,
    F: Fn(&BatchEntry) + Sync,
{
    let run = || {
        urls.par_iter()
            .map(|url| {
                let url = url.as_ref();
                let entry = BatchEntry::from_result(url, auditor.audit(url));
                on_done(&entry);
                entry
            })
            .collect::<Vec<_>>()
    };

    let entries = match options.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| Error::Other(format!("failed to start worker pool: {}", e)))?
            .install(run),
        None => run(),
    };

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    log::info!("Batch finished: {} audited, {} failed", entries.len(), failed);
    Ok(entries)
}

/// Read a URL list: one URL per line, blank lines and `#` comments skipped.
pub fn read_url_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    let mut urls = Vec::new();
    for line in std::io::BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        urls.push(line.to_string());
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticAccessor;
    use std::io::Write;
    use std::sync::Arc;

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let auditor = Auditor::new().with_accessor(Arc::new(StaticAccessor::new(
            "<html><body><a href=\"/a\">Pricing plans</a></body></html>",
        )));
        let urls = ["https://a.example/", "not a url", "https://b.example/"];
        let entries = audit_batch(&urls, &auditor, &BatchOptions::new().with_jobs(2)).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].url, "https://a.example/");
        assert!(entries[0].is_ok());
        assert!(!entries[1].is_ok());
        assert!(entries[1].error.as_deref().unwrap().starts_with("Invalid URL"));
        assert_eq!(entries[2].report.as_ref().unwrap().url, "https://b.example/");
    }

    #[test]
    fn test_batch_progress_callback() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let auditor = Auditor::new().with_accessor(Arc::new(StaticAccessor::new("<p>Hi.</p>")));
        let done = AtomicUsize::new(0);
        let urls = vec!["https://a.example/".to_string(); 5];
        audit_batch_with_progress(&urls, &auditor, &BatchOptions::default(), |_| {
            done.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        assert_eq!(done.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_entry_serialization_skips_empty_fields() {
        let entry = BatchEntry::from_result("x", Err(Error::InvalidUrl("x".into())));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"url":"x","error":"Invalid URL: x"}"#);
    }

    #[test]
    fn test_read_url_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# targets\nhttps://a.example/\n\n  https://b.example/  \n#https://c.example/").unwrap();
        let urls = read_url_list(file.path()).unwrap();
        assert_eq!(urls, vec!["https://a.example/", "https://b.example/"]);
    }
}
