use crate::drive::{check_term, Drive, DriveStats};
use crate::error::{Error, Result};
use crate::sink::{Flow, Sink};
use crate::stage::{Emit, Stage};
use crate::symbol::Symbol;
use tracing::debug;

/// Pipeline where each emission calls straight into the next stage.
///
/// Native recursion depth equals the number of stages, so this is only safe
/// below [`DIRECT_DRIVE_LIMIT`](crate::DIRECT_DRIVE_LIMIT) or a similar bound.
pub struct DirectPipeline<S> {
    stages: Vec<Stage>,
    sink: S,
    terminated: bool,
}

/// Shared state of one run: the sink and what it has asked for.
struct Control<'s, S: ?Sized> {
    sink: &'s mut S,
    halted: bool,
    halted_early: bool,
    events: u64,
}

/// The downstream of a stage: the remaining stages, then the sink.
struct Chain<'a, 's, S: ?Sized> {
    stages: &'a mut [Stage],
    control: &'a mut Control<'s, S>,
}

impl<S: Sink + ?Sized> Emit for Chain<'_, '_, S> {
    type Error = Error;

    fn emit(&mut self, symbol: Symbol) -> Result<()> {
        let control = &mut *self.control;
        // Once the sink has halted, every stage's downstream is a no-op.
        if control.halted {
            return Ok(());
        }
        control.events += 1;

        match self.stages.split_first_mut() {
            Some((head, rest)) => head.consume(
                symbol,
                &mut Chain {
                    stages: rest,
                    control,
                },
            ),
            None => {
                if control.sink.consume(symbol)? == Flow::Halt {
                    control.halted = true;
                    control.halted_early = !symbol.is_end();
                }
                Ok(())
            }
        }
    }
}

impl<S: Sink> DirectPipeline<S> {
    /// Creates the pipeline computing term `n` into `sink`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `n == 0`.
    pub fn new(n: usize, sink: S) -> Result<Self> {
        check_term(n)?;
        debug!(n, "building direct pipeline");
        Ok(Self {
            stages: vec![Stage::new(); n - 1],
            sink,
            terminated: false,
        })
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl<S: Sink> Drive for DirectPipeline<S> {
    type Sink = S;

    fn run(&mut self) -> Result<DriveStats> {
        self.stages.iter_mut().for_each(Stage::reset);
        self.terminated = false;

        let mut control = Control {
            sink: &mut self.sink,
            halted: false,
            halted_early: false,
            events: 0,
        };
        let mut chain = Chain {
            stages: &mut self.stages[..],
            control: &mut control,
        };
        chain.emit(Symbol::ONE)?;
        chain.emit(Symbol::End)?;

        let stats = DriveStats {
            stages: self.stages.len(),
            events: control.events,
            peak_events: 0,
            halted_early: control.halted_early,
        };
        if control.halted {
            self.terminate();
        }
        Ok(stats)
    }

    fn terminate(&mut self) {
        debug!(stages = self.stages.len(), "direct pipeline terminated");
        self.stages.iter_mut().for_each(Stage::reset);
        self.terminated = true;
    }

    fn sink(&self) -> &S {
        &self.sink
    }

    fn into_sink(self) -> S {
        self.sink
    }
}
