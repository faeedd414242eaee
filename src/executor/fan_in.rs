// src/executor/fan_in.rs
//! Fan-out of independent tasks with an index-keyed, first-error-wins fan-in.

use crate::error::ConcatError;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;

type Completion<T> = oneshot::Sender<Result<Vec<T>, ConcatError>>;

/// Collects task results by original index and settles exactly once.
///
/// The completion sender is taken by whichever comes first: an error from
/// any task, or the success that brings the outstanding count to zero.
/// Everything that settles afterwards is dropped.
pub(crate) struct FanIn<T> {
    slots: Mutex<Vec<Option<T>>>,
    outstanding: AtomicUsize,
    completion: Mutex<Option<Completion<T>>>,
}

impl<T> FanIn<T> {
    pub(crate) fn new(len: usize) -> (Arc<Self>, oneshot::Receiver<Result<Vec<T>, ConcatError>>) {
        let (tx, rx) = oneshot::channel();
        let fan_in = Self {
            slots: Mutex::new((0..len).map(|_| None).collect()),
            outstanding: AtomicUsize::new(len),
            completion: Mutex::new(Some(tx)),
        };
        (Arc::new(fan_in), rx)
    }

    /// Records the outcome of the task at `index`.
    pub(crate) fn settle(&self, index: usize, outcome: Result<T, ConcatError>) {
        match outcome {
            Ok(value) => {
                self.slots.lock()[index] = Some(value);
                if self.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
                    let values: Vec<T> = std::mem::take(&mut *self.slots.lock())
                        .into_iter()
                        .flatten()
                        .collect();
                    self.complete(Ok(values));
                }
            }
            Err(e) => {
                if !self.complete(Err(e)) {
                    log::debug!("Discarding error from task {} after settlement", index);
                }
            }
        }
    }

    fn complete(&self, result: Result<Vec<T>, ConcatError>) -> bool {
        match self.completion.lock().take() {
            // The receiver may already be gone; the caller stopped listening.
            Some(tx) => {
                let _ = tx.send(result);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    fn is_settled(&self) -> bool {
        self.completion.lock().is_none()
    }
}

/// Spawns one detached task per item and joins their results in item order.
///
/// Returns the first error to arrive. Tasks still in flight at that point
/// run to completion in the background and their results are discarded.
pub(crate) async fn fan_out<I, T, F, Fut>(items: Vec<I>, task: F) -> Result<Vec<T>, ConcatError>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T, ConcatError>> + Send + 'static,
    T: Send + 'static,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let (fan_in, settled) = FanIn::new(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let fan_in = Arc::clone(&fan_in);
        let work = task(item);
        tokio::spawn(async move {
            fan_in.settle(index, work.await);
        });
    }
    drop(fan_in);

    settled.await.map_err(|_| ConcatError::TaskFailed {
        message: "every task ended without reporting a result".to_string(),
    })?
}
