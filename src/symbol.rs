use std::fmt;

/// A symbol flowing through the pipeline.
///
/// Digits are stored as their ASCII byte so they can be written out unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// An ASCII digit, `b'0'..=b'9'`.
    Digit(u8),

    /// End-of-stream marker. Never encoded as a run.
    End,
}

impl Symbol {
    /// The seed every sequence starts from.
    pub const ONE: Symbol = Symbol::Digit(b'1');

    /// Builds a symbol from a decimal value in `0..=9`.
    pub(crate) fn from_value(value: u8) -> Self {
        debug_assert!(value < 10, "digit value out of range: {value}");
        Symbol::Digit(b'0' + value)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Symbol::End)
    }

    /// Returns the digit as a `char`, or `None` for the end marker.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Digit(d) => Some(*d as char),
            Symbol::End => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Digit(d) => write!(f, "{}", *d as char),
            Symbol::End => f.write_str("<end>"),
        }
    }
}
