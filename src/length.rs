use crate::error::{Error, Result};
use crate::sink::{Flow, Sink};
use crate::symbol::Symbol;
use std::io::Write;

/// Counts the symbols of a term and reports only the total.
#[derive(Debug)]
pub struct LengthPrinter<W> {
    out: W,
    count: u64,
    limit: u64,
}

impl<W: Write> LengthPrinter<W> {
    pub fn new(out: W) -> Self {
        Self::with_limit(out, u64::MAX)
    }

    /// Creates a length printer that fails once the count reaches `limit`.
    pub fn with_limit(out: W, limit: u64) -> Self {
        Self {
            out,
            count: 0,
            limit,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for LengthPrinter<W> {
    fn consume(&mut self, symbol: Symbol) -> Result<Flow> {
        if symbol.is_end() {
            writeln!(self.out, "{}", self.count)?;
            self.out.flush()?;
            return Ok(Flow::Halt);
        }

        self.count += 1;
        if self.count >= self.limit {
            return Err(Error::Overflow { limit: self.limit });
        }
        Ok(Flow::Continue)
    }
}
