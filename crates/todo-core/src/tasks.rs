//! Screen-scoped Tasks
//!
//! Store calls are spawned on the UI executor but owned by the screen:
//! each is wrapped in an [`Abortable`] so tearing the screen down cancels
//! whatever is still pending.

use std::collections::HashMap;
use std::future::Future;

use futures::future::{AbortHandle, Abortable};

use crate::store::RequestId;

#[derive(Debug, Default)]
pub struct TaskScope {
    handles: HashMap<RequestId, AbortHandle>,
    closed: bool,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a future so it can be cancelled with the scope.
    ///
    /// After [`TaskScope::cancel_all`] the returned future resolves to
    /// `Err(Aborted)` without polling `fut`.
    pub fn track<F: Future>(&mut self, id: RequestId, fut: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        if self.closed {
            handle.abort();
        } else {
            self.handles.insert(id, handle);
        }
        Abortable::new(fut, registration)
    }

    /// Forget a task that ran to completion
    pub fn finish(&mut self, id: RequestId) {
        self.handles.remove(&id);
    }

    pub fn pending(&self) -> usize {
        self.handles.len()
    }

    /// Abort every pending task; later tasks are aborted on arrival
    pub fn cancel_all(&mut self) {
        if !self.handles.is_empty() {
            log::debug!("Cancelling {} pending store call(s)", self.handles.len());
        }
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
        self.closed = true;
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
