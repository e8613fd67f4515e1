//! Cancellable deferred operation with a timeout.
//!
//! Pure state machine; the browser side drives it with timers. Every start
//! issues a new ticket, and only the ticket of the current run may settle it,
//! so timers of cancelled or restarted runs are ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredSpec {
    pub delay_ms: u32,
    pub timeout_ms: u32,
}

impl DeferredSpec {
    pub fn new(delay_ms: u32, timeout_ms: u32) -> Self {
        Self {
            delay_ms,
            timeout_ms,
        }
    }

    /// Time to wait before the run settles
    pub fn wait_ms(&self) -> u32 {
        self.delay_ms.min(self.timeout_ms)
    }

    pub fn times_out(&self) -> bool {
        self.delay_ms > self.timeout_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredState {
    Idle,
    Running,
    Completed,
    Cancelled,
    TimedOut,
}

impl DeferredState {
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            DeferredState::Completed | DeferredState::Cancelled | DeferredState::TimedOut
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredOp {
    spec: DeferredSpec,
    state: DeferredState,
    ticket: u64,
}

impl DeferredOp {
    pub fn new(spec: DeferredSpec) -> Self {
        Self {
            spec,
            state: DeferredState::Idle,
            ticket: 0,
        }
    }

    pub fn spec(&self) -> DeferredSpec {
        self.spec
    }

    pub fn state(&self) -> DeferredState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DeferredState::Running
    }

    /// Begin a run (restarting any current one) and return its ticket
    pub fn start(&mut self) -> u64 {
        self.ticket += 1;
        self.state = DeferredState::Running;
        self.ticket
    }

    /// Settle the run identified by `ticket` once its wait has elapsed.
    ///
    /// Returns the final state, or `None` when the ticket is stale.
    pub fn settle(&mut self, ticket: u64) -> Option<DeferredState> {
        if ticket != self.ticket || self.state != DeferredState::Running {
            return None;
        }
        self.state = if self.spec.times_out() {
            DeferredState::TimedOut
        } else {
            DeferredState::Completed
        };
        Some(self.state)
    }

    /// Cancel the current run. Returns false when nothing was running.
    pub fn cancel(&mut self) -> bool {
        if self.state != DeferredState::Running {
            return false;
        }
        self.ticket += 1;
        self.state = DeferredState::Cancelled;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_completes() {
        let mut op = DeferredOp::new(DeferredSpec::new(1000, 10_000));
        assert_eq!(op.state(), DeferredState::Idle);
        let ticket = op.start();
        assert!(op.is_running());
        assert_eq!(op.settle(ticket), Some(DeferredState::Completed));
        assert!(op.state().is_settled());
    }

    #[test]
    fn test_delay_beyond_timeout_times_out() {
        let spec = DeferredSpec::new(5000, 300);
        assert_eq!(spec.wait_ms(), 300);
        let mut op = DeferredOp::new(spec);
        let ticket = op.start();
        assert_eq!(op.settle(ticket), Some(DeferredState::TimedOut));
    }

    #[test]
    fn test_cancel_suppresses_settlement() {
        let mut op = DeferredOp::new(DeferredSpec::new(2000, 10_000));
        let ticket = op.start();
        assert!(op.cancel());
        assert_eq!(op.state(), DeferredState::Cancelled);
        assert_eq!(op.settle(ticket), None);
        assert_eq!(op.state(), DeferredState::Cancelled);
        assert!(!op.cancel());
    }

    #[test]
    fn test_restart_invalidates_previous_ticket() {
        let mut op = DeferredOp::new(DeferredSpec::new(2000, 10_000));
        let first = op.start();
        let second = op.start();
        assert_eq!(op.settle(first), None);
        assert!(op.is_running());
        assert_eq!(op.settle(second), Some(DeferredState::Completed));
        assert_eq!(op.settle(second), None);
    }
}
