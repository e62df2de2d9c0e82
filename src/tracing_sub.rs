//! Diagnostics setup.
//!
//! The terminal belongs to the UI, so log output never goes to stdout or
//! stderr: it is appended to a file when one is configured and discarded
//! otherwise.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

pub enum DelegatingWriter<'a> {
    File(&'a File),
    Sink(io::Sink),
}

impl Write for DelegatingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DelegatingWriter::File(file) => file.write(buf),
            DelegatingWriter::Sink(sink) => sink.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DelegatingWriter::File(file) => file.flush(),
            DelegatingWriter::Sink(sink) => sink.flush(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubscriberMakeWriter {
    file: Option<Arc<File>>,
}

impl SubscriberMakeWriter {
    pub fn discard() -> Self {
        Self::default()
    }

    pub fn with_file(file: File) -> Self {
        Self {
            file: Some(Arc::new(file)),
        }
    }

    pub fn is_discarding(&self) -> bool {
        self.file.is_none()
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match &self.file {
            Some(file) => DelegatingWriter::File(file),
            None => DelegatingWriter::Sink(io::sink()),
        }
    }
}

pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place. Only opening the log file can fail.
pub fn init(log_file: Option<&Path>, level: Level) -> io::Result<()> {
    let writer = match log_file {
        Some(path) => SubscriberMakeWriter::with_file(open_log_file(path)?),
        None => SubscriberMakeWriter::discard(),
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}
