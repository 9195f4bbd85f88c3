//! Debounced execution of async work: "run X once Y has passed with no new calls".

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// State of the task taken over by [`Debouncer::take`].
#[derive(Debug)]
pub enum Pending<T> {
    /// The quiet period had not elapsed; the task was aborted before it started.
    Waiting,
    /// The task had already started and is left running.
    Running(JoinHandle<T>),
}

#[derive(Debug)]
struct Scheduled<T> {
    handle: JoinHandle<T>,
    fired: Arc<AtomicBool>,
}

/// Runs the most recently submitted task after a quiet period.
///
/// Every [`call`](Self::call) restarts the timer and aborts the task scheduled
/// before it, so a burst of calls results in a single execution of the last
/// one. Must be used from within a Tokio runtime.
#[derive(Debug)]
pub struct Debouncer<T = ()> {
    delay: Duration,
    pending: Mutex<Option<Scheduled<T>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `task` to run after the quiet period, replacing any task
    /// scheduled earlier.
    pub fn call<F>(&self, task: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let delay = self.delay;
        let fired = Arc::new(AtomicBool::new(false));
        let started = Arc::clone(&fired);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            started.store(true, Ordering::SeqCst);
            task.await
        });

        if let Some(previous) = self.pending().replace(Scheduled { handle, fired }) {
            previous.handle.abort();
        }
    }

    /// Aborts the scheduled task, running or not. Returns `true` when it was
    /// still waiting out the quiet period.
    pub fn cancel(&self) -> bool {
        match self.pending().take() {
            Some(scheduled) => {
                let waiting = !scheduled.fired.load(Ordering::SeqCst);
                scheduled.handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Removes the scheduled task. A task still waiting is aborted; a task
    /// already running is handed back untouched so the caller can await it.
    pub fn take(&self) -> Option<Pending<T>> {
        let scheduled = self.pending().take()?;
        if scheduled.handle.is_finished() {
            return None;
        }
        if scheduled.fired.load(Ordering::SeqCst) {
            return Some(Pending::Running(scheduled.handle));
        }
        scheduled.handle.abort();
        Some(Pending::Waiting)
    }

    pub fn is_pending(&self) -> bool {
        self.pending()
            .as_ref()
            .is_some_and(|scheduled| !scheduled.handle.is_finished())
    }

    fn pending(&self) -> MutexGuard<'_, Option<Scheduled<T>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(scheduled) = pending.take() {
            scheduled.handle.abort();
        }
    }
}
