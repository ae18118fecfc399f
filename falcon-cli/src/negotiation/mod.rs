//! Resource-match negotiation
//!
//! Drives a schedule result to a terminal decision:
//! - `interpret`: classify the scheduler's reply (may ask to join the queue)
//! - `present`: show the matched resources
//! - `coordinator`: run the steps in order and issue compensating cancels

mod coordinator;
mod interpret;
mod present;

pub use coordinator::negotiate;
pub use interpret::interpret;
pub use present::{present, render_job_table};

/// Classification of a schedule result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Resources were matched (possibly with a warning); present them
    Matched,
    /// The caller agreed to wait in the queue
    Queued,
    /// The caller declined to wait in the queue
    QueueCanceled,
    /// No job was created server-side
    UrlError,
    BindCreditCardFirst,
    CreditCardQueryFailed,
}

/// How a negotiation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationOutcome {
    MatchedConfirmed,
    MatchedRejected,
    Queued,
    QueueCanceled,
    UrlError,
    BlockedOnPayment,
    PaymentQueryFailed,
    /// A match was expected but the result carried no resources
    NoMatchedResources,
}

impl NegotiationOutcome {
    /// Only a confirmed match leads to a launch
    pub fn proceed_to_launch(self) -> bool {
        matches!(self, NegotiationOutcome::MatchedConfirmed)
    }

    /// Whether this exit requires the server-side job to be stopped
    pub fn requires_cancel(self) -> bool {
        matches!(
            self,
            NegotiationOutcome::MatchedRejected | NegotiationOutcome::QueueCanceled
        )
    }
}
