//! Timer Queue
//!
//! Each component owns one `TimerQueue` holding its pending callbacks as
//! plain event values. Advancing a component drains due entries in
//! `(due, scheduling order)` order, so callbacks inside one component always
//! fire in wall-clock order even when the surface skips frames.
//!
//! Cancelled entries are removed from the queue and can never be delivered.
//! Dropping the queue drops every pending timer with it.

use std::time::Duration;

/// Handle to a scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    due: Duration,
    event: E,
}

/// Ordered queue of pending timer events
#[derive(Debug)]
pub struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire `after` past `now`
    pub fn schedule(&mut self, now: Duration, after: Duration, event: E) -> TimerId {
        self.schedule_at(now + after, event)
    }

    /// Schedule `event` at an absolute time
    pub fn schedule_at(&mut self, due: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due, event });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending timer whose event matches
    pub fn cancel_where(&mut self, mut matches: impl FnMut(&E) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !matches(&e.event));
        before - self.entries.len()
    }

    /// Cancel everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether a timer is still pending
    #[cfg(test)]
    fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Whether any pending timer carries a matching event
    pub fn any(&self, mut matches: impl FnMut(&E) -> bool) -> bool {
        self.entries.iter().any(|e| matches(&e.event))
    }

    /// Earliest pending due time
    #[cfg(test)]
    fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Remove and return the earliest entry due at or before `now`
    ///
    /// Ties on `due` resolve in scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(idx, _)| idx)?;

        let entry = self.entries.remove(idx);
        Some((entry.due, entry.event))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ms;

    #[derive(Debug, PartialEq)]
    enum Tick {
        A,
        B,
        C,
    }

    #[test]
    fn test_pops_in_due_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(0), ms(300), Tick::C);
        q.schedule(ms(0), ms(100), Tick::A);
        q.schedule(ms(0), ms(200), Tick::B);

        assert_eq!(q.pop_due(ms(1000)), Some((ms(100), Tick::A)));
        assert_eq!(q.pop_due(ms(1000)), Some((ms(200), Tick::B)));
        assert_eq!(q.pop_due(ms(1000)), Some((ms(300), Tick::C)));
        assert_eq!(q.pop_due(ms(1000)), None);
    }

    #[test]
    fn test_ties_resolve_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule_at(ms(50), Tick::B);
        q.schedule_at(ms(50), Tick::A);

        assert_eq!(q.pop_due(ms(50)).map(|(_, e)| e), Some(Tick::B));
        assert_eq!(q.pop_due(ms(50)).map(|(_, e)| e), Some(Tick::A));
    }

    #[test]
    fn test_not_due_yet() {
        let mut q = TimerQueue::new();
        q.schedule(ms(0), ms(40), Tick::A);
        assert_eq!(q.pop_due(ms(39)), None);
        assert_eq!(q.next_due(), Some(ms(40)));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut q = TimerQueue::new();
        let id = q.schedule(ms(0), ms(10), Tick::A);
        assert!(q.is_pending(id));
        assert!(q.cancel(id));
        assert!(!q.cancel(id));
        assert_eq!(q.pop_due(ms(100)), None);
    }

    #[test]
    fn test_cancel_where() {
        let mut q = TimerQueue::new();
        q.schedule(ms(0), ms(10), Tick::A);
        q.schedule(ms(0), ms(20), Tick::B);
        q.schedule(ms(0), ms(30), Tick::A);

        assert_eq!(q.cancel_where(|e| *e == Tick::A), 2);
        assert_eq!(q.len(), 1);
        assert!(q.any(|e| *e == Tick::B));
    }
}
