//! Data-loading tasks bound to the lifetime of the page that started them.

use std::future::Future;

use tokio::task::JoinHandle;

/// A background load owned by a page.
///
/// Dropping the task (the page unmounting) aborts the in-flight request, so a
/// response can never be applied to a page that no longer exists.
#[derive(Debug)]
pub struct LoadTask<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> LoadTask<T> {
    /// Spawn `fut` on the current tokio runtime.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(fut)),
        }
    }

    /// Wait for the result. Returns `None` if the task was cancelled, panicked,
    /// or was already joined.
    pub async fn join(&mut self) -> Option<T> {
        let handle = self.handle.take()?;
        match handle.await {
            Ok(value) => Some(value),
            Err(err) if err.is_cancelled() => {
                tracing::debug!("load task cancelled before completion");
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "load task failed");
                None
            }
        }
    }
}

impl<T> LoadTask<T> {
    /// A task with nothing in flight.
    #[cfg(test)]
    pub(crate) fn idle() -> Self {
        Self { handle: None }
    }

    /// Abort the in-flight load.
    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    /// True once the load has completed (or been joined).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl<T> Drop for LoadTask<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
