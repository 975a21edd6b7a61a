//! File-backed report emission.
//!
//! One XML document per build: a timestamped file created inside the
//! reports directory with a `.tmp` suffix, renamed to its final name on
//! close so downstream consumers never observe a half-written report.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use buildspy_core::Element;
use chrono::Utc;
use tracing::debug;

use crate::errors::{ReportError, Result};
use crate::reporter::EventReporter;

/// Name of the document root wrapping all appended elements.
const DOCUMENT_ROOT: &str = "mavenExecution";

/// XML declaration written at the top of every report.
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// How many timestamped names to try before giving up on a crowded
/// reports directory.
const CREATE_ATTEMPTS: u32 = 16;

/// File-backed [`EventReporter`] producing a pretty-printed XML document.
#[derive(Debug)]
pub struct FileReporter {
    inner: Mutex<Inner>,
    final_path: PathBuf,
}

#[derive(Debug)]
struct Inner {
    writer: Option<BufWriter<File>>,
    tmp_path: PathBuf,
}

impl FileReporter {
    /// Create a report file inside `reports_dir`, creating the directory
    /// when missing.
    ///
    /// The file name is `build-spy-<UTC stamp>.xml` and carries a `.tmp`
    /// suffix until [`close`](EventReporter::close). A name already taken
    /// by a sibling spy is never truncated; a fresh stamp is tried
    /// instead.
    pub fn create(reports_dir: &Path) -> Result<Self> {
        fs::create_dir_all(reports_dir).map_err(|source| ReportError::CreateDir {
            path: reports_dir.to_path_buf(),
            source,
        })?;
        let (file, final_path, tmp_path) = Self::create_unique(reports_dir)?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "{XML_DECLARATION}")?;
        writeln!(writer, "<{DOCUMENT_ROOT}>")?;
        debug!(path = %tmp_path.display(), "report file opened");

        Ok(Self {
            inner: Mutex::new(Inner {
                writer: Some(writer),
                tmp_path,
            }),
            final_path,
        })
    }

    fn create_unique(reports_dir: &Path) -> Result<(File, PathBuf, PathBuf)> {
        for attempt in 0..CREATE_ATTEMPTS {
            let stamp = Utc::now().format("%Y%m%d-%H%M%S-%6f");
            let name = if attempt == 0 {
                format!("build-spy-{stamp}.xml")
            } else {
                format!("build-spy-{stamp}-{attempt}.xml")
            };
            let final_path = reports_dir.join(name);
            let tmp_path = final_path.with_extension("xml.tmp");
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&tmp_path)
            {
                Ok(file) => return Ok((file, final_path, tmp_path)),
                Err(source) if source.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(path = %tmp_path.display(), "report name taken, retrying");
                }
                Err(source) => return Err(source.into()),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free report name in {}", reports_dir.display()),
        )
        .into())
    }

    /// Final path of the report, valid once closed.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.final_path
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl EventReporter for FileReporter {
    fn append(&self, element: Element) -> Result<()> {
        let mut inner = self.lock();
        let Some(writer) = inner.writer.as_mut() else {
            return Err(ReportError::Closed);
        };
        writer.write_all(element.to_xml_at(1).as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        let mut inner = self.lock();
        let Some(mut writer) = inner.writer.take() else {
            return Ok(());
        };
        writeln!(writer, "</{DOCUMENT_ROOT}>")?;
        writer.flush()?;
        drop(writer);
        fs::rename(&inner.tmp_path, &self.final_path)?;
        debug!(path = %self.final_path.display(), "report file closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_element(kind: &str) -> Element {
        let mut element = Element::new("ExecutionEvent");
        element.set_attribute("type", kind);
        element
    }

    #[test]
    fn writes_a_framed_document() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = FileReporter::create(dir.path()).unwrap();
        reporter.append(event_element("ProjectStarted")).unwrap();
        reporter.append(event_element("ProjectSucceeded")).unwrap();
        reporter.close().unwrap();

        let content = fs::read_to_string(reporter.path()).unwrap();
        assert!(content.starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<mavenExecution>\n"
        ));
        assert!(content.contains("  <ExecutionEvent type=\"ProjectStarted\"/>\n"));
        assert!(content.contains("  <ExecutionEvent type=\"ProjectSucceeded\"/>\n"));
        assert!(content.ends_with("</mavenExecution>\n"));
    }

    #[test]
    fn tmp_suffix_dropped_on_close() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = FileReporter::create(dir.path()).unwrap();
        assert!(!reporter.path().exists());
        reporter.close().unwrap();
        assert!(reporter.path().exists());

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn append_after_close_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = FileReporter::create(dir.path()).unwrap();
        reporter.close().unwrap();
        let err = reporter.append(event_element("MojoStarted")).unwrap_err();
        assert!(matches!(err, ReportError::Closed));
    }

    #[test]
    fn close_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = FileReporter::create(dir.path()).unwrap();
        reporter.close().unwrap();
        reporter.close().unwrap();
    }

    #[test]
    fn creates_missing_reports_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("target").join("build-spy");
        let reporter = FileReporter::create(&nested).unwrap();
        reporter.close().unwrap();
        assert!(reporter.path().starts_with(&nested));
    }

    #[test]
    fn sibling_reporters_never_share_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let reporters: Vec<FileReporter> = (0..8)
            .map(|_| FileReporter::create(dir.path()).unwrap())
            .collect();

        for (i, reporter) in reporters.iter().enumerate() {
            reporter.append(event_element(&format!("ProjectStarted-{i}"))).unwrap();
            reporter.close().unwrap();
        }

        let paths: std::collections::HashSet<PathBuf> =
            reporters.iter().map(|r| r.path().to_path_buf()).collect();
        assert_eq!(paths.len(), 8);
        for (i, reporter) in reporters.iter().enumerate() {
            let content = fs::read_to_string(reporter.path()).unwrap();
            assert!(content.contains(&format!("type=\"ProjectStarted-{i}\"")));
        }
    }

    #[test]
    fn report_file_name_is_timestamped_xml() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = FileReporter::create(dir.path()).unwrap();
        let name = reporter.path().file_name().unwrap().to_string_lossy().into_owned();
        reporter.close().unwrap();
        assert!(name.starts_with("build-spy-"));
        assert!(name.ends_with(".xml"));
    }
}
