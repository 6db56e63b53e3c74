use crate::error::{Error, Result};
use crate::sink::{Flow, Sink};
use crate::symbol::Symbol;
use std::io::Write;
use tracing::debug;

/// Reports the symbols at selected 1-based positions of a term.
///
/// Positions are reported in ascending order whatever order they were given
/// in. Positions past the end of the term are reported as too short once the
/// stream ends; that is not an error.
#[derive(Debug)]
pub struct Picker<W> {
    out: W,
    /// Pending positions, sorted descending so the smallest is at the back.
    pending: Vec<u64>,
    /// 1-based index of the last symbol seen.
    index: u64,
    finished: bool,
}

impl<W: Write> Picker<W> {
    /// Creates a picker for `positions`. Duplicates are reported once.
    ///
    /// Fails with [`Error::InvalidArgument`] on position 0.
    pub fn new(out: W, positions: impl IntoIterator<Item = u64>) -> Result<Self> {
        let mut pending: Vec<u64> = positions.into_iter().collect();
        if pending.contains(&0) {
            return Err(Error::InvalidArgument(
                "positions are 1-based; 0 is not a position".into(),
            ));
        }
        pending.sort_unstable_by(|a, b| b.cmp(a));
        pending.dedup();

        Ok(Self {
            out,
            pending,
            index: 0,
            finished: false,
        })
    }

    /// Positions not yet satisfied, largest first.
    pub fn pending(&self) -> &[u64] {
        &self.pending
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Reports every unsatisfied position as too short, smallest first.
    fn finish(&mut self) -> Result<Flow> {
        if !self.finished {
            self.finished = true;
            if !self.pending.is_empty() {
                debug!(
                    unsatisfied = self.pending.len(),
                    length = self.index,
                    "positions beyond end of sequence"
                );
            }
            while let Some(position) = self.pending.pop() {
                writeln!(self.out, "{position}: sequence too short")?;
            }
            self.out.flush()?;
        }
        Ok(Flow::Halt)
    }
}

impl<W: Write> Sink for Picker<W> {
    fn consume(&mut self, symbol: Symbol) -> Result<Flow> {
        let Symbol::Digit(d) = symbol else {
            return self.finish();
        };
        if self.pending.is_empty() {
            return self.finish();
        }

        self.index += 1;
        if self.pending.last() == Some(&self.index) {
            self.pending.pop();
            writeln!(self.out, "{}: {}", self.index, d as char)?;
            if self.pending.is_empty() {
                return self.finish();
            }
        }
        Ok(Flow::Continue)
    }
}
