//! The seam shared by the execution strategies.
//!
//! A [`Drive`] owns a chain of stages plus a sink and runs it to completion.
//! [`Strategy`] picks one and carries the size gate for the direct drive.

use crate::direct::DirectPipeline;
use crate::error::{Error, Result};
use crate::queue::QueuePipeline;
use crate::sink::Sink;

/// Largest term (exclusive) the direct drive is used for by default.
///
/// The direct drive recurses once per stage, so deep pipelines exhaust the
/// thread's stack. Stack exhaustion is not caught; callers gate on this
/// value instead and may override it.
pub const DIRECT_DRIVE_LIMIT: usize = 10_000;

/// Counters for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveStats {
    /// Number of stages in the pipeline (`n - 1`).
    pub stages: usize,
    /// Symbols dispatched to stages or the sink.
    pub events: u64,
    /// Peak number of queued events; 0 for the direct drive.
    pub peak_events: usize,
    /// True if the sink halted the run before the end marker reached it.
    pub halted_early: bool,
}

/// A strategy for executing a stage graph.
pub trait Drive {
    type Sink: Sink;

    /// Feeds the seed into the first stage and runs until the pipeline drains
    /// or the sink halts it.
    fn run(&mut self) -> Result<DriveStats>;

    /// Stops the pipeline; nothing further reaches the sink.
    fn terminate(&mut self);

    fn sink(&self) -> &Self::Sink;

    fn into_sink(self) -> Self::Sink;
}

/// Which drive to execute a query with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Nested synchronous calls, one stack frame per stage.
    Direct,
    /// Explicit event queue, no stack growth.
    Queue,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Direct, Strategy::Queue];

    /// Section label used in the textual output.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Direct => "Version 1",
            Strategy::Queue => "Version 2",
        }
    }

    /// Returns true if this strategy may run a pipeline for term `n`.
    pub fn permits(&self, n: usize, direct_limit: usize) -> bool {
        match self {
            Strategy::Direct => n < direct_limit,
            Strategy::Queue => true,
        }
    }

    /// Builds the pipeline for term `n`, runs it, and hands the sink back.
    pub fn execute<S: Sink>(self, n: usize, sink: S) -> Result<(S, DriveStats)> {
        match self {
            Strategy::Direct => drive(DirectPipeline::new(n, sink)?),
            Strategy::Queue => drive(QueuePipeline::new(n, sink)?),
        }
    }
}

fn drive<D: Drive>(mut pipeline: D) -> Result<(D::Sink, DriveStats)> {
    let stats = pipeline.run()?;
    Ok((pipeline.into_sink(), stats))
}

/// Validates the term index shared by every pipeline constructor.
pub(crate) fn check_term(n: usize) -> Result<()> {
    if n < 1 {
        return Err(Error::InvalidArgument("N must be greater than 0".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Collector;

    #[test]
    fn test_permits() {
        assert!(Strategy::Direct.permits(9_999, DIRECT_DRIVE_LIMIT));
        assert!(!Strategy::Direct.permits(10_000, DIRECT_DRIVE_LIMIT));
        assert!(Strategy::Direct.permits(10_000, 20_000));
        assert!(Strategy::Queue.permits(1_000_000, DIRECT_DRIVE_LIMIT));
    }

    #[test]
    fn test_execute_both() {
        for strategy in Strategy::ALL {
            let (sink, stats) = strategy.execute(6, Collector::new()).unwrap();
            assert_eq!(sink.as_str(), "312211", "{strategy:?}");
            assert_eq!(stats.stages, 5);
            assert!(!stats.halted_early);
        }
    }

    #[test]
    fn test_zero_rejected() {
        for strategy in Strategy::ALL {
            let err = strategy.execute(0, Collector::new()).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{strategy:?}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Strategy::Direct.label(), "Version 1");
        assert_eq!(Strategy::Queue.label(), "Version 2");
    }
}
