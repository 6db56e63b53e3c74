use crate::drive::check_term;
use crate::error::Result;
use crate::event::EventQueue;
use crate::queue::dispatch;
use crate::stage::Stage;
use crate::symbol::Symbol;

/// Lazily yields the digits of one term, pulling them through the stages.
///
/// Each call to `next` runs the event queue only until one symbol leaves the
/// last stage, so standard iterator adapters (`nth`, `count`, `take`) work on
/// terms far too long to hold in memory.
///
/// ```
/// let digits: String = looksay_rs::digits(6).unwrap().collect();
/// assert_eq!(digits, "312211");
/// ```
pub struct SequenceIter {
    stages: Vec<Stage>,
    queue: EventQueue,
    done: bool,
}

impl SequenceIter {
    pub(crate) fn new(n: usize) -> Result<Self> {
        check_term(n)?;
        let mut queue = EventQueue::new();
        queue.push(0, Symbol::ONE);
        queue.push(0, Symbol::End);
        Ok(Self {
            stages: vec![Stage::new(); n - 1],
            queue,
            done: false,
        })
    }

    /// Largest number of events queued at once so far.
    pub fn peak_events(&self) -> usize {
        self.queue.peak()
    }
}

impl Iterator for SequenceIter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.done {
            return None;
        }

        while let Some(event) = self.queue.pop() {
            let Some(out) = dispatch(&mut self.stages, &mut self.queue, event) else {
                continue;
            };
            match out.symbol.as_char() {
                Some(c) => return Some(c),
                None => break,
            }
        }

        self.done = true;
        self.queue.clear();
        None
    }
}

impl std::iter::FusedIterator for SequenceIter {}

/// Returns an iterator over the digits of term `n`.
///
/// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
/// `n == 0`.
pub fn digits(n: usize) -> Result<SequenceIter> {
    SequenceIter::new(n)
}
