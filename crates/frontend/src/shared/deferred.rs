//! Browser driver for [`DeferredOp`]: a gloo timer settles the run, and
//! only the ticket that started it is allowed to.

use contracts::shared::deferred::{DeferredOp, DeferredSpec, DeferredState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct DeferredTask {
    name: &'static str,
    op: RwSignal<DeferredOp>,
}

impl DeferredTask {
    pub fn new(name: &'static str, spec: DeferredSpec) -> Self {
        Self {
            name,
            op: RwSignal::new(DeferredOp::new(spec)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.op.with(|op| op.is_running())
    }

    /// Start (or restart) the run. `on_settled` receives `Completed` or
    /// `TimedOut`; it is dropped without being called when the run is
    /// cancelled or superseded.
    pub fn start(&self, on_settled: impl FnOnce(DeferredState) + 'static) {
        let mut ticket = 0;
        self.op.update(|op| ticket = op.start());
        let wait_ms = self.op.with_untracked(|op| op.spec().wait_ms());
        let name = self.name;
        let op = self.op;
        log::debug!("{}: started, settles in {} ms", name, wait_ms);

        spawn_local(async move {
            TimeoutFuture::new(wait_ms).await;
            match op.try_update(|op| op.settle(ticket)) {
                Some(Some(state)) => {
                    log::debug!("{}: {:?}", name, state);
                    on_settled(state);
                }
                _ => log::debug!("{}: stale timer ignored", name),
            }
        });
    }

    /// Cancel the current run. Returns false when nothing was running.
    pub fn cancel(&self) -> bool {
        let cancelled = self.op.try_update(|op| op.cancel()).unwrap_or(false);
        if cancelled {
            log::debug!("{}: cancelled", self.name);
        }
        cancelled
    }
}
