use crate::drive::{check_term, Drive, DriveStats};
use crate::error::Result;
use crate::event::{Event, EventQueue};
use crate::sink::{Flow, Sink};
use crate::stage::{Emit, Stage};
use crate::symbol::Symbol;
use std::convert::Infallible;
use tracing::{debug, info};

/// Downstream of one stage in the queue drive: records events for `target`.
pub(crate) struct Enqueue<'a> {
    pub(crate) queue: &'a mut EventQueue,
    pub(crate) target: usize,
}

impl Emit for Enqueue<'_> {
    type Error = Infallible;

    fn emit(&mut self, symbol: Symbol) -> Result<(), Infallible> {
        self.queue.push(self.target, symbol);
        Ok(())
    }
}

/// Feeds `event` into its stage, queueing whatever the stage emits.
///
/// Returns the event back if it is addressed past the last stage.
pub(crate) fn dispatch(
    stages: &mut [Stage],
    queue: &mut EventQueue,
    event: Event,
) -> Option<Event> {
    let Some(stage) = stages.get_mut(event.target) else {
        return Some(event);
    };
    let mut downstream = Enqueue {
        queue,
        target: event.target + 1,
    };
    match stage.consume(event.symbol, &mut downstream) {
        Ok(()) => None,
        Err(never) => match never {},
    }
}

/// Pipeline driven by an explicit event queue.
///
/// Stages never call each other; each emission becomes an [`Event`] and a
/// single loop dispatches them. Memory is bounded by the number of in-flight
/// events, not by term length, and the stack does not grow with `n`.
pub struct QueuePipeline<S> {
    stages: Vec<Stage>,
    sink: S,
    queue: EventQueue,
    events: u64,
    halted: bool,
    halted_early: bool,
}

impl<S: Sink> QueuePipeline<S> {
    /// Creates the pipeline computing term `n` into `sink`.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `n == 0`.
    pub fn new(n: usize, sink: S) -> Result<Self> {
        check_term(n)?;
        debug!(n, "building queue pipeline");
        Ok(Self {
            stages: vec![Stage::new(); n - 1],
            sink,
            queue: EventQueue::new(),
            events: 0,
            halted: false,
            halted_early: false,
        })
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Resets every stage and seeds the queue with `'1'` and the end marker.
    pub fn start(&mut self) {
        self.stages.iter_mut().for_each(Stage::reset);
        self.queue.reset();
        self.events = 0;
        self.halted = false;
        self.halted_early = false;

        self.queue.push(0, Symbol::ONE);
        self.queue.push(0, Symbol::End);
    }

    /// Pops and dispatches a single event, returning it.
    ///
    /// Returns `None` once the queue is drained or the sink has halted.
    pub fn step(&mut self) -> Result<Option<Event>> {
        let Some(event) = self.queue.pop() else {
            return Ok(None);
        };
        self.events += 1;

        if let Some(event) = dispatch(&mut self.stages, &mut self.queue, event) {
            if self.sink.consume(event.symbol)? == Flow::Halt {
                self.halted = true;
                self.halted_early = !event.symbol.is_end();
                self.terminate();
            }
        }
        Ok(Some(event))
    }

    /// Largest number of events queued at once during the current run.
    pub fn peak_events(&self) -> usize {
        self.queue.peak()
    }

    fn stats(&self) -> DriveStats {
        DriveStats {
            stages: self.stages.len(),
            events: self.events,
            peak_events: self.queue.peak(),
            halted_early: self.halted_early,
        }
    }
}

impl<S: Sink> Drive for QueuePipeline<S> {
    type Sink = S;

    fn run(&mut self) -> Result<DriveStats> {
        self.start();
        while self.step()?.is_some() {}
        if !self.halted {
            self.terminate();
        }
        Ok(self.stats())
    }

    fn terminate(&mut self) {
        self.queue.clear();
        info!(
            stages = self.stages.len(),
            peak_events = self.queue.peak(),
            "event queue terminated"
        );
    }

    fn sink(&self) -> &S {
        &self.sink
    }

    fn into_sink(self) -> S {
        self.sink
    }
}
