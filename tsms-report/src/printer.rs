//! Print sinks for rendered sales reports
//!
//! Supports:
//! - File output (one standalone HTML document per job)
//! - In-memory capture (previews and tests)
//!
//! Printing is fire-and-forget: when a sink cannot open a context the job
//! is dropped without an error, and failures after opening are only logged.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use shared::models::ReportKind;
use shared::util::now_millis;
use tracing::{debug, info, instrument, warn};

use crate::error::{PrintError, PrintResult};
use crate::renderer::{ReportContext, ReportRenderer};

/// An open print target receiving one document
pub trait PrintContext {
    /// Append markup to the document
    fn write(&mut self, markup: &str) -> PrintResult<()>;

    /// Hand the written document to the output
    fn print(&mut self) -> PrintResult<()>;

    /// Finish the job; further writes fail with `PrintError::Closed`
    fn close(&mut self) -> PrintResult<()>;
}

/// Trait for print targets
pub trait PrintSink {
    type Context: PrintContext;

    /// Open a new print context, or `None` when the target is unavailable
    fn open(&self, kind: ReportKind) -> Option<Self::Context>;
}

/// Render `ctx` into a print document and send it to `sink`
///
/// Returns silently when the sink is unavailable. Write/print/close
/// failures are logged and not reported to the caller.
#[instrument(skip_all, fields(kind = %ctx.kind))]
pub fn print_report<S: PrintSink>(sink: &S, renderer: &ReportRenderer, ctx: &ReportContext) {
    let Some(mut context) = sink.open(ctx.kind) else {
        debug!("Print context unavailable, skipping");
        return;
    };

    let document = renderer.render_print_document(ctx);
    if let Err(e) = context.write(&document).and_then(|_| context.print()) {
        warn!(error = %e, "Print job failed");
    }
    if let Err(e) = context.close() {
        warn!(error = %e, "Failed to close print context");
    }
}

// ============================================================================
// File sink
// ============================================================================

/// Writes each job as `sales-report-<kind>-<millis>.html` into a directory
#[derive(Debug, Clone)]
pub struct FilePrintSink {
    dir: PathBuf,
}

impl FilePrintSink {
    /// Create a sink for `dir`
    ///
    /// The directory is checked on every `open`, not here.
    pub fn new(dir: impl Into<PathBuf>) -> PrintResult<Self> {
        let dir = dir.into();
        if dir.as_os_str().is_empty() {
            return Err(PrintError::InvalidConfig("Empty print directory".to_string()));
        }
        Ok(Self { dir })
    }

    /// Get the output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PrintSink for FilePrintSink {
    type Context = FilePrintContext;

    fn open(&self, kind: ReportKind) -> Option<FilePrintContext> {
        if !self.dir.is_dir() {
            warn!(dir = %self.dir.display(), "Print directory missing");
            return None;
        }
        let path = self
            .dir
            .join(format!("sales-report-{}-{}.html", kind, now_millis()));
        Some(FilePrintContext {
            path,
            buf: String::new(),
            closed: false,
        })
    }
}

/// Buffered document, written to disk on `print`
#[derive(Debug)]
pub struct FilePrintContext {
    path: PathBuf,
    buf: String,
    closed: bool,
}

impl FilePrintContext {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintContext for FilePrintContext {
    fn write(&mut self, markup: &str) -> PrintResult<()> {
        if self.closed {
            return Err(PrintError::Closed);
        }
        self.buf.push_str(markup);
        Ok(())
    }

    fn print(&mut self) -> PrintResult<()> {
        if self.closed {
            return Err(PrintError::Closed);
        }
        fs::write(&self.path, self.buf.as_bytes())?;
        info!(path = %self.path.display(), bytes = self.buf.len(), "Print document written");
        Ok(())
    }

    fn close(&mut self) -> PrintResult<()> {
        self.closed = true;
        Ok(())
    }
}

// ============================================================================
// Memory sink
// ============================================================================

/// A captured print job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    pub kind: ReportKind,
    pub document: String,
    pub printed: bool,
    pub closed: bool,
}

/// Captures jobs in memory; can be switched unavailable
///
/// Clones share the same job list.
#[derive(Debug, Clone)]
pub struct MemoryPrintSink {
    jobs: Arc<Mutex<Vec<PrintJob>>>,
    available: Arc<AtomicBool>,
}

impl MemoryPrintSink {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(Mutex::new(Vec::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A sink whose `open` always fails
    pub fn unavailable() -> Self {
        let sink = Self::new();
        sink.set_available(false);
        sink
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Snapshot of captured jobs
    pub fn jobs(&self) -> Vec<PrintJob> {
        self.jobs.lock().clone()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.lock().len()
    }
}

impl Default for MemoryPrintSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintSink for MemoryPrintSink {
    type Context = MemoryPrintContext;

    fn open(&self, kind: ReportKind) -> Option<MemoryPrintContext> {
        if !self.available.load(Ordering::SeqCst) {
            return None;
        }
        let mut jobs = self.jobs.lock();
        jobs.push(PrintJob {
            kind,
            document: String::new(),
            printed: false,
            closed: false,
        });
        Some(MemoryPrintContext {
            jobs: Arc::clone(&self.jobs),
            index: jobs.len() - 1,
        })
    }
}

/// Context writing into one captured job
#[derive(Debug)]
pub struct MemoryPrintContext {
    jobs: Arc<Mutex<Vec<PrintJob>>>,
    index: usize,
}

impl MemoryPrintContext {
    fn with_job<T>(&self, f: impl FnOnce(&mut PrintJob) -> PrintResult<T>) -> PrintResult<T> {
        let mut jobs = self.jobs.lock();
        let job = jobs.get_mut(self.index).ok_or(PrintError::Closed)?;
        f(job)
    }
}

impl PrintContext for MemoryPrintContext {
    fn write(&mut self, markup: &str) -> PrintResult<()> {
        self.with_job(|job| {
            if job.closed {
                return Err(PrintError::Closed);
            }
            job.document.push_str(markup);
            Ok(())
        })
    }

    fn print(&mut self) -> PrintResult<()> {
        self.with_job(|job| {
            if job.closed {
                return Err(PrintError::Closed);
            }
            job.printed = true;
            Ok(())
        })
    }

    fn close(&mut self) -> PrintResult<()> {
        self.with_job(|job| {
            job.closed = true;
            Ok(())
        })
    }
}
