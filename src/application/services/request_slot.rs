//! Cancellable, optionally time-limited background requests.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, debug_span};
use uuid::Uuid;

use crate::domain::errors::DashboardError;

/// Result of a request run in a [`RequestSlot`].
#[derive(Debug)]
pub struct Completion<T> {
    /// Generation the request was started under.
    pub generation: u64,
    /// Correlation id used in logs.
    pub request_id: Uuid,
    /// Outcome of the request.
    pub result: Result<T, DashboardError>,
}

/// Holds at most one in-flight request for a dashboard operation.
///
/// Starting a request aborts the previous one; completions from older
/// generations are recognised with [`RequestSlot::accept`].
#[derive(Debug)]
pub struct RequestSlot {
    name: &'static str,
    timeout: Option<Duration>,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl RequestSlot {
    /// Creates an idle slot.
    #[must_use]
    pub const fn new(name: &'static str, timeout: Option<Duration>) -> Self {
        Self {
            name,
            timeout,
            generation: 0,
            handle: None,
        }
    }

    /// Returns the generation of the most recent request.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Runs `future` in the background, superseding any running request.
    ///
    /// The completion is wrapped with `wrap` and posted to `tx`. Aborted
    /// requests post nothing.
    pub fn start<T, F, M, W>(&mut self, future: F, tx: mpsc::UnboundedSender<M>, wrap: W) -> u64
    where
        T: Send + 'static,
        F: Future<Output = Result<T, DashboardError>> + Send + 'static,
        M: Send + 'static,
        W: FnOnce(Completion<T>) -> M + Send + 'static,
    {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;
        let request_id = Uuid::new_v4();
        let timeout = self.timeout;
        let span = debug_span!("request", slot = self.name, %request_id, generation);

        let handle = tokio::spawn(
            async move {
                debug!("Request started");
                let result = with_timeout(future, timeout).await;
                debug!(ok = result.is_ok(), "Request finished");
                let _ = tx.send(wrap(Completion {
                    generation,
                    request_id,
                    result,
                }));
            }
            .instrument(span),
        );

        self.handle = Some(handle);
        generation
    }

    /// Aborts the running request, if any. Returns whether one was aborted.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!(slot = self.name, generation = self.generation, "Superseded request aborted");
                true
            }
            _ => false,
        }
    }

    /// Checks a completion against the slot, clearing it when current.
    ///
    /// Returns `false` for completions of superseded requests.
    pub fn accept<T>(&mut self, completion: &Completion<T>) -> bool {
        if completion.generation != self.generation {
            debug!(
                slot = self.name,
                stale = completion.generation,
                current = self.generation,
                "Dropping stale completion"
            );
            return false;
        }
        self.handle = None;
        true
    }
}

impl Drop for RequestSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Awaits `future`, failing with [`DashboardError::Timeout`] past `timeout`.
///
/// # Errors
/// Returns the future's own error, or a timeout error.
pub async fn with_timeout<T, F>(future: F, timeout: Option<Duration>) -> Result<T, DashboardError>
where
    F: Future<Output = Result<T, DashboardError>>,
{
    match timeout {
        Some(after) => tokio::time::timeout(after, future)
            .await
            .unwrap_or(Err(DashboardError::Timeout { after })),
        None => future.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Msg {
        Done(Completion<u32>),
    }

    fn unwrap(msg: Msg) -> Completion<u32> {
        match msg {
            Msg::Done(c) => c,
        }
    }

    #[tokio::test]
    async fn test_completion_is_posted() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = RequestSlot::new("train", None);

        let generation = slot.start(async { Ok(7) }, tx, Msg::Done);
        let completion = unwrap(rx.recv().await.unwrap());

        assert_eq!(completion.generation, generation);
        assert!(slot.accept(&completion));
        assert_eq!(completion.result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_superseded_request_is_aborted() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = RequestSlot::new("weather", None);

        let first = slot.start(
            async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(1)
            },
            tx.clone(),
            Msg::Done,
        );
        let second = slot.start(async { Ok(2) }, tx, Msg::Done);
        assert!(second > first);

        let completion = unwrap(rx.recv().await.unwrap());
        assert_eq!(completion.generation, second);
        assert_eq!(completion.result.unwrap(), 2);

        // The aborted task dropped its sender, so the channel closes.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_stale_completion_rejected() {
        let mut slot = RequestSlot::new("sos", None);
        let (tx, mut rx) = mpsc::unbounded_channel();

        slot.start(async { Ok(1) }, tx.clone(), Msg::Done);
        let stale = unwrap(rx.recv().await.unwrap());
        slot.start(async { Ok(2) }, tx, Msg::Done);

        assert!(!slot.accept(&stale));
    }

    #[tokio::test]
    async fn test_timeout_becomes_error() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = RequestSlot::new("emergency", Some(Duration::from_millis(20)));

        slot.start(
            async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(0)
            },
            tx,
            Msg::Done,
        );

        let completion = unwrap(rx.recv().await.unwrap());
        assert!(matches!(
            completion.result,
            Err(DashboardError::Timeout { after }) if after == Duration::from_millis(20)
        ));
    }

    #[tokio::test]
    async fn test_cancel_idle_slot() {
        let mut slot = RequestSlot::new("idle", None);
        assert!(!slot.cancel());
        assert_eq!(slot.generation(), 0);
    }
}
