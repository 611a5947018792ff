//! Standard output sink.

use std::fmt;
use std::io::{self, Write};

use mgmt_types::{Sink, SinkError, SinkKind};

/// Writes each line to the console and flushes immediately.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
}

impl ConsoleSink {
    /// Sink writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Sink writing to an arbitrary console-like stream.
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self { out: Box::new(out) }
    }
}

impl Sink for ConsoleSink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.out, "{}", line).map_err(SinkError::from_console)?;
        self.out.flush().map_err(SinkError::from_console)
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::testing::SharedBuffer;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_appends_newline() {
        let buffer = SharedBuffer::default();
        let mut sink = ConsoleSink::with_writer(buffer.clone());

        sink.emit("ERROR: disk full").unwrap();
        sink.emit("done").unwrap();

        assert_eq!(buffer.contents(), "ERROR: disk full\ndone\n");
        assert_eq!(sink.kind(), SinkKind::Console);
        assert!(sink.path().is_none());
    }

    #[test]
    fn test_closed_stream() {
        let mut sink = ConsoleSink::with_writer(ClosedPipe);
        assert!(matches!(sink.emit("lost"), Err(SinkError::StreamClosed)));
    }
}
