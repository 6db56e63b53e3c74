use crate::symbol::Symbol;
use std::collections::VecDeque;

/// A symbol addressed to a pipeline position.
///
/// `target == stage count` addresses the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub target: usize,
    pub symbol: Symbol,
}

/// Pending events of the queue drive, popped in depth-first order.
///
/// Events are popped from the back. A pushed event is placed below any run of
/// events at the back that share its target, so the symbols one stage emits
/// in a single call come out in emission order, and each one's descendants
/// are popped before its next sibling. This is the order in which nested
/// direct calls would dispatch them.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
    peak: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: usize, symbol: Symbol) {
        let mut at = self.events.len();
        while at > 0 && self.events[at - 1].target == target {
            at -= 1;
        }
        self.events.insert(at, Event { target, symbol });
        self.peak = self.peak.max(self.events.len());
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_back()
    }

    /// Drops every pending event. The peak is kept.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Largest number of events held at once.
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Clears the queue and forgets its peak.
    pub fn reset(&mut self) {
        self.events.clear();
        self.peak = 0;
    }
}
