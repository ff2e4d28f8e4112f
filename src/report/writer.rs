use std::io::{self, Write};

use super::CheckResult;

/// Writes check results, one per line, to the underlying writer.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes a single result line and flushes it.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn emit(&mut self, result: &CheckResult) -> io::Result<()> {
        log::trace!("emitting {result}");
        writeln!(self.out, "{result}")?;
        self.out.flush()
    }

    /// Writes every result in order.
    pub fn emit_all<'a>(
        &mut self,
        results: impl IntoIterator<Item = &'a CheckResult>,
    ) -> io::Result<()> {
        for result in results {
            self.emit(result)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
