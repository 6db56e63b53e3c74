use crate::symbol::Symbol;
use std::convert::Infallible;

/// Downstream capability of a [`Stage`]: somewhere to put emitted symbols.
///
/// The direct drive implements this by calling straight into the next stage,
/// the queue drive by recording an event.
pub trait Emit {
    type Error;

    fn emit(&mut self, symbol: Symbol) -> Result<(), Self::Error>;
}

impl Emit for Vec<Symbol> {
    type Error = Infallible;

    fn emit(&mut self, symbol: Symbol) -> Result<(), Infallible> {
        self.push(symbol);
        Ok(())
    }
}

/// One run-length transducer: one step of the look-and-say sequence.
///
/// Holds only the current run, so memory per stage is constant no matter how
/// long its input is.
#[derive(Debug, Default, Clone)]
pub struct Stage {
    /// Digit of the pending run, `None` before the first symbol.
    last: Option<u8>,
    /// Number of equal digits received since the last flush.
    run: u64,
    terminated: bool,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one symbol into the stage.
    ///
    /// A change of digit flushes the pending run downstream as its count
    /// digits followed by the digit. The end marker flushes and is then
    /// forwarded; after that the stage ignores further input.
    pub fn consume<E: Emit + ?Sized>(
        &mut self,
        symbol: Symbol,
        downstream: &mut E,
    ) -> Result<(), E::Error> {
        if self.terminated {
            return Ok(());
        }

        match symbol {
            Symbol::Digit(d) if self.last == Some(d) => {
                self.run += 1;
            }
            Symbol::Digit(d) => {
                self.flush(downstream)?;
                self.last = Some(d);
                self.run = 1;
            }
            Symbol::End => {
                self.flush(downstream)?;
                self.last = None;
                self.run = 0;
                self.terminated = true;
                downstream.emit(Symbol::End)?;
            }
        }
        Ok(())
    }

    /// Emits the pending run, if any, and leaves the stage with `run == 0`.
    fn flush<E: Emit + ?Sized>(&mut self, downstream: &mut E) -> Result<(), E::Error> {
        let Some(last) = self.last else {
            return Ok(());
        };
        if self.run == 0 {
            return Ok(());
        }

        let mut buf = [0u8; 20];
        for &digit in count_digits(self.run, &mut buf) {
            downstream.emit(Symbol::from_value(digit))?;
        }
        downstream.emit(Symbol::Digit(last))?;
        self.run = 0;
        Ok(())
    }

    /// Returns the stage to its freshly constructed state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Length of the pending run.
    pub fn run(&self) -> u64 {
        self.run
    }
}

/// Writes the decimal digit values of `n` (most significant first) into `buf`.
///
/// Look-and-say runs never exceed 3, so in practice this yields one digit.
fn count_digits(mut n: u64, buf: &mut [u8; 20]) -> &[u8] {
    let mut at = buf.len();
    loop {
        at -= 1;
        buf[at] = (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    &buf[at..]
}
