// src/executor/background.rs
//! Runs detached work on the caller's Tokio runtime, or on a dedicated
//! thread with its own runtime when the caller has none.

use crate::error::ConcatError;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::runtime::{Builder, Handle};
use tokio::sync::oneshot;

/// Completion handle for work started by the background entry points.
///
/// Awaiting it (or calling [`BackgroundTask::wait_blocking`]) only reports
/// that the work is over. Dropping it leaves the work running.
#[derive(Debug)]
pub struct BackgroundTask {
    settled: oneshot::Receiver<()>,
}

impl BackgroundTask {
    /// Blocks the current thread until the work is over.
    ///
    /// Panics if called from within an async context; await the task there.
    pub fn wait_blocking(self) -> Result<(), ConcatError> {
        self.settled.blocking_recv().map_err(|_| lost())
    }
}

impl Future for BackgroundTask {
    type Output = Result<(), ConcatError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.settled)
            .poll(cx)
            .map(|settled| settled.map_err(|_| lost()))
    }
}

fn lost() -> ConcatError {
    ConcatError::TaskFailed {
        message: "background work ended without settling".to_string(),
    }
}

/// Starts `work` without waiting for it.
pub(crate) fn spawn_background<W>(work: W) -> BackgroundTask
where
    W: Future<Output = ()> + Send + 'static,
{
    let (tx, settled) = oneshot::channel();
    let task = async move {
        work.await;
        let _ = tx.send(());
    };

    match Handle::try_current() {
        Ok(handle) => {
            handle.spawn(task);
        }
        Err(_) => {
            log::debug!("No Tokio runtime in scope, starting a background thread");
            let spawned = std::thread::Builder::new()
                .name("concatenate-background".to_string())
                .spawn(move || match Builder::new_current_thread().enable_all().build() {
                    Ok(runtime) => runtime.block_on(task),
                    Err(e) => log::warn!("Could not start background runtime: {}", e),
                });
            if let Err(e) = spawned {
                log::warn!("Could not start background thread: {}", e);
            }
        }
    }

    BackgroundTask { settled }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_without_an_ambient_runtime() {
        let (tx, rx) = std::sync::mpsc::channel();
        let task = spawn_background(async move {
            tokio::task::yield_now().await;
            tx.send(7).unwrap();
        });

        task.wait_blocking().unwrap();
        assert_eq!(rx.recv().unwrap(), 7);
    }

    #[tokio::test]
    async fn uses_the_ambient_runtime() {
        let task = spawn_background(async {
            assert!(Handle::try_current().is_ok());
        });
        task.await.unwrap();
    }

    #[tokio::test]
    async fn panicking_work_is_reported_as_lost() {
        let task = spawn_background(async {
            panic!("background work lost");
        });
        assert!(matches!(task.await, Err(ConcatError::TaskFailed { .. })));
    }
}
