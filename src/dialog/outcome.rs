//! Single-resolution outcome channel
//!
//! Every dialog request hands its caller an [`Outcome`], a future of the
//! boolean verdict. The widget keeps the matching [`OutcomeResolver`]; the
//! first `resolve`/`reject` settles the outcome and every later attempt is
//! ignored.

use super::types::{DialogError, DialogResult};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Create a connected resolver/outcome pair
pub fn channel() -> (OutcomeResolver, Outcome) {
    let (sender, receiver) = oneshot::channel();
    (
        OutcomeResolver {
            sender: Some(sender),
        },
        Outcome {
            receiver,
            settled: None,
        },
    )
}

/// Sending half of an outcome, held by the widget for the live request
#[derive(Debug)]
pub struct OutcomeResolver {
    sender: Option<oneshot::Sender<DialogResult<bool>>>,
}

impl OutcomeResolver {
    /// Deliver a verdict. Returns `false` if the outcome was already settled.
    pub fn resolve(&mut self, verdict: bool) -> bool {
        self.settle(Ok(verdict))
    }

    /// Fail the outcome. Returns `false` if it was already settled.
    pub fn reject(&mut self, error: DialogError) -> bool {
        self.settle(Err(error))
    }

    pub fn is_settled(&self) -> bool {
        self.sender.is_none()
    }

    fn settle(&mut self, result: DialogResult<bool>) -> bool {
        match self.sender.take() {
            Some(sender) => {
                // The caller may have dropped its outcome; the request still counts as settled
                let _ = sender.send(result);
                true
            }
            None => false,
        }
    }
}

/// Future of a dialog's verdict.
///
/// Resolves to `Ok(true)` when the affirmative button was activated and
/// `Ok(false)` for every dismissal, including supersession. A resolver
/// dropped without a verdict also yields `Ok(false)`.
#[derive(Debug)]
pub struct Outcome {
    receiver: oneshot::Receiver<DialogResult<bool>>,
    settled: Option<DialogResult<bool>>,
}

impl Outcome {
    /// An outcome that is already failed
    pub fn rejected(error: DialogError) -> Self {
        let (mut resolver, outcome) = channel();
        resolver.reject(error);
        outcome
    }

    /// Non-blocking check; `None` while the dialog is still waiting on the user
    pub fn try_verdict(&mut self) -> Option<DialogResult<bool>> {
        if let Some(settled) = &self.settled {
            return Some(settled.clone());
        }

        let result = match self.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Ok(false),
        };
        self.settled = Some(result.clone());
        Some(result)
    }
}

impl Future for Outcome {
    type Output = DialogResult<bool>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let Some(settled) = &this.settled {
            return Poll::Ready(settled.clone());
        }

        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(received) => {
                let result = received.unwrap_or(Ok(false));
                this.settled = Some(result.clone());
                Poll::Ready(result)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
