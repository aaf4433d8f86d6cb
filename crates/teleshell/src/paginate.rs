//! Sequential pagination and cancellation.
//!
//! List operations are iterated one page at a time: a page is requested,
//! emitted downstream, and only then is the next page requested with the
//! continuation token the service returned. There is never more than one
//! request in flight.
use std::collections::HashSet;

use tokio::sync::watch;

/// A cloneable cancellation signal.
///
/// Triggering it aborts the in-flight service call of every invocation that
/// holds a clone, and ends their pagination loops.
#[derive(Clone, Debug)]
pub struct Cancellation {
    sender: std::sync::Arc<watch::Sender<bool>>,
}

impl Default for Cancellation {
    fn default() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: std::sync::Arc::new(sender),
        }
    }
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once the signal has been triggered.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this only errs if it was
        // dropped, which cannot happen while we hold it.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

/// Decide whether another page should be requested.
///
/// Returns the token for the next request, or `None` when iteration is over:
/// the service returned no token, an empty token, or a token that was already
/// sent during this run.
pub fn next_token(
    command: &str,
    sent: &HashSet<String>,
    received: Option<String>,
) -> Option<String> {
    let received = received.filter(|token| !token.is_empty())?;
    if sent.contains(&received) {
        log::warn!(
            "{command} returned continuation token '{received}' a second time, \
             ending iteration to avoid looping"
        );
        return None;
    }
    Some(received)
}
