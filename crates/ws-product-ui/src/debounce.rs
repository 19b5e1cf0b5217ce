//! Debounce bookkeeping with monotonic tickets.
//!
//! The timer itself belongs to the host (a browser timeout, a test clock).
//! Every schedule supersedes the previous one; a timer that fires with a
//! superseded ticket is ignored.

/// Identifies one scheduled firing. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct Debouncer {
    last: u64,
    pending: Option<Ticket>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new quiet window, superseding any pending one.
    pub fn schedule(&mut self) -> Ticket {
        self.last += 1;
        let ticket = Ticket(self.last);
        self.pending = Some(ticket);
        ticket
    }

    /// Drop the pending window without firing.
    pub fn cancel(&mut self) -> Option<Ticket> {
        self.pending.take()
    }

    /// Claim a firing. Only the newest pending ticket is honoured, once.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_schedule_fires() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        let third = debouncer.schedule();

        assert!(first < second && second < third);
        assert!(!debouncer.fire(first));
        assert!(!debouncer.fire(second));
        assert!(debouncer.fire(third));
        assert!(!debouncer.fire(third));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_suppresses_firing() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule();
        assert_eq!(debouncer.cancel(), Some(ticket));
        assert!(!debouncer.fire(ticket));
    }

    #[test]
    fn tickets_keep_increasing_after_cancel() {
        let mut debouncer = Debouncer::new();
        let a = debouncer.schedule();
        debouncer.cancel();
        let b = debouncer.schedule();
        assert!(b.id() > a.id());
    }
}
