//! # Look-and-say - streaming term computation
//!
//! Computes terms of the look-and-say sequence ("1", "11", "21", "1211",
//! "111221", ...) without ever holding a term in memory.
//!
//! Term `n` is produced by a pipeline of `n - 1` run-length stages. Each stage
//! keeps only its current run and passes the encoded run on as soon as it
//! closes, so memory does not depend on term length. Two drives execute the
//! same stages:
//! 1. **Direct**: each emission calls into the next stage. Simple, but the
//!    stack grows with `n`; gated by [`DIRECT_DRIVE_LIMIT`].
//! 2. **Queue**: emissions become events in an explicit depth-first queue.
//!    No stack growth, usable for very large `n`.
//!
//! The final stage feeds a [`Sink`]: [`Printer`], [`Picker`],
//! [`LengthPrinter`] or [`Collector`].
//!
//! ## Example
//!
//! ```
//! use looksay_rs::{Collector, Strategy};
//!
//! let (sink, stats) = Strategy::Queue.execute(6, Collector::new()).unwrap();
//! assert_eq!(sink.as_str(), "312211");
//! assert_eq!(stats.stages, 5);
//!
//! // Or pull digits one at a time.
//! let length = looksay_rs::digits(20).unwrap().count();
//! assert_eq!(length, 302);
//! ```

mod direct;
mod drive;
mod error;
mod event;
mod iter;
mod length;
mod picker;
mod printer;
mod query;
mod queue;
mod sink;
mod stage;
mod symbol;

#[cfg(test)]
mod tests;

pub use direct::DirectPipeline;
pub use drive::{Drive, DriveStats, Strategy, DIRECT_DRIVE_LIMIT};
pub use error::{Error, Result};
pub use event::{Event, EventQueue};
pub use iter::{digits, SequenceIter};
pub use length::LengthPrinter;
pub use picker::Picker;
pub use printer::Printer;
pub use query::{Query, USAGE};
pub use queue::QueuePipeline;
pub use sink::{Collector, Flow, Sink};
pub use stage::{Emit, Stage};
pub use symbol::Symbol;
