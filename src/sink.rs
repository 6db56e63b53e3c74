use crate::error::Result;
use crate::symbol::Symbol;

/// What a sink wants the driver to do after consuming a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep feeding symbols.
    Continue,
    /// The sink needs no more input; the owning pipeline terminates.
    Halt,
}

/// Terminal consumer of the last stage's output.
///
/// Sinks never see the pipeline itself. Returning [`Flow::Halt`] is how a sink
/// asks its driver to terminate.
pub trait Sink {
    fn consume(&mut self, symbol: Symbol) -> Result<Flow>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn consume(&mut self, symbol: Symbol) -> Result<Flow> {
        (**self).consume(symbol)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn consume(&mut self, symbol: Symbol) -> Result<Flow> {
        (**self).consume(symbol)
    }
}

/// Captures the whole stream in memory.
///
/// Only suitable for terms short enough to hold; the pipelines themselves
/// never need it.
#[derive(Debug, Default, Clone)]
pub struct Collector {
    symbols: String,
    ended: bool,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    pub fn into_string(self) -> String {
        self.symbols
    }

    /// Returns true once the end marker has been seen.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl Sink for Collector {
    fn consume(&mut self, symbol: Symbol) -> Result<Flow> {
        match symbol.as_char() {
            Some(c) => {
                self.symbols.push(c);
                Ok(Flow::Continue)
            }
            None => {
                self.ended = true;
                Ok(Flow::Halt)
            }
        }
    }
}
