//! Negotiation coordinator
//!
//! Runs a schedule result through interpretation, presentation and the launch
//! confirmation, and stops the server-side job when the caller walks away
//! from it. A cancel, when one is due, is awaited before `negotiate` returns.
//! An answer that cannot be read counts as a decline: the cancel still runs
//! and the read error is returned afterwards.

use std::path::Path;

use anyhow::Result;
use falcon_core::domain::job::ScheduleResult;
use falcon_core::domain::platform::PlatformTag;
use falcon_core::domain::resource::MatchedResource;
use tracing::{debug, info, warn};

use super::{MatchStatus, NegotiationOutcome, interpret, present};
use crate::api::PlatformApi;
use crate::console::Console;

/// Negotiation states
enum State<'r> {
    Interpreting,
    Presenting,
    AwaitingConfirmation(&'r [MatchedResource]),
    /// Terminal; the outcome says whether the job is launched
    Done(NegotiationOutcome),
}

/// Drive a schedule result to a launch decision
///
/// # Arguments
/// * `platform` - Used only to stop the job on a decline
/// * `console` - Where the match is shown and the questions are asked
/// * `result` - The scheduler's reply
/// * `job_file` - The submitted job definition
///
/// # Returns
/// The outcome; `proceed_to_launch()` tells the caller whether to launch.
/// Fails only when an answer could not be read, after any due cancel ran.
pub async fn negotiate<P, C>(
    platform: &P,
    console: &mut C,
    result: &ScheduleResult,
    job_file: &Path,
) -> Result<NegotiationOutcome>
where
    P: PlatformApi + ?Sized,
    C: Console,
{
    let mut state = State::Interpreting;
    let mut unanswered = None;

    loop {
        state = match state {
            State::Interpreting => match interpret(result, job_file, console) {
                Ok(status) => interpreted(status),
                // The queue question is the only one interpretation asks.
                Err(e) => {
                    warn!("No answer to the queue question for job {}: {:#}", result.job_id, e);
                    unanswered = Some(e);
                    State::Done(NegotiationOutcome::QueueCanceled)
                }
            },
            // No cancel here: the job was never confirmed as matched.
            State::Presenting => match present(result, console) {
                Some(matched) => State::AwaitingConfirmation(matched),
                None => {
                    warn!("Job {} was matched without any resources", result.job_id);
                    State::Done(NegotiationOutcome::NoMatchedResources)
                }
            },
            State::AwaitingConfirmation(matched) => {
                let answer = console
                    .confirm("Do you want to launch the job with the above matched GPU resource?")
                    .unwrap_or_else(|e| {
                        warn!("No answer to the launch question for job {}: {:#}", result.job_id, e);
                        unanswered = Some(e);
                        false
                    });
                if answer {
                    console.info("Launching the job with the above matched GPU resource.");
                    info!(
                        "Job {} confirmed on {} matched resource(s)",
                        result.job_id,
                        matched.len()
                    );
                    State::Done(NegotiationOutcome::MatchedConfirmed)
                } else {
                    console.info("Cancelling the job with the above matched GPU resource.");
                    State::Done(NegotiationOutcome::MatchedRejected)
                }
            }
            State::Done(outcome) => {
                if outcome.requires_cancel() {
                    cancel_job(platform, console, &result.job_id).await;
                }
                debug!("Negotiation for job {} ended: {:?}", result.job_id, outcome);
                return match unanswered {
                    Some(e) => Err(e),
                    None => Ok(outcome),
                };
            }
        };
    }
}

/// The state following an interpreted schedule result
fn interpreted<'r>(status: MatchStatus) -> State<'r> {
    match status {
        MatchStatus::Matched => State::Presenting,
        MatchStatus::Queued => State::Done(NegotiationOutcome::Queued),
        MatchStatus::QueueCanceled => State::Done(NegotiationOutcome::QueueCanceled),
        MatchStatus::UrlError => State::Done(NegotiationOutcome::UrlError),
        MatchStatus::BindCreditCardFirst => State::Done(NegotiationOutcome::BlockedOnPayment),
        MatchStatus::CreditCardQueryFailed => State::Done(NegotiationOutcome::PaymentQueryFailed),
    }
}

/// Stop a job the caller declined
///
/// A failed stop is reported but does not change the outcome: the caller
/// already declined and nothing will be launched.
async fn cancel_job<P, C>(platform: &P, console: &mut C, job_id: &str)
where
    P: PlatformApi + ?Sized,
    C: Console,
{
    match platform.stop_job(job_id, PlatformTag::Falcon).await {
        Ok(()) => info!("Stopped job {}", job_id),
        Err(e) => {
            warn!("Failed to stop job {}: {}", job_id, e);
            console.error(&format!("Failed to cancel job {}: {}", job_id, e));
        }
    }
}
