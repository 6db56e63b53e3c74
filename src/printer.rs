use crate::error::Result;
use crate::sink::{Flow, Sink};
use crate::symbol::Symbol;
use std::io::Write;

/// Writes every symbol of the term, then a line break.
#[derive(Debug)]
pub struct Printer<W> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for Printer<W> {
    fn consume(&mut self, symbol: Symbol) -> Result<Flow> {
        match symbol {
            Symbol::Digit(d) => {
                self.out.write_all(&[d])?;
                Ok(Flow::Continue)
            }
            Symbol::End => {
                writeln!(self.out)?;
                self.out.flush()?;
                Ok(Flow::Halt)
            }
        }
    }
}
