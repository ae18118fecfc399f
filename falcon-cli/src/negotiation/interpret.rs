//! Schedule result interpretation

use std::path::Path;

use anyhow::Result;
use falcon_core::domain::job::{ScheduleResult, StartStatus};
use tracing::warn;

use super::MatchStatus;
use crate::console::Console;

/// Classify a schedule result
///
/// Prints the diagnostic that goes with each status. A `QUEUED` result asks
/// the caller whether to join the waiting queue; that is the only prompt here,
/// and an unreadable answer to it is the only failure.
///
/// # Arguments
/// * `result` - The scheduler's reply
/// * `job_file` - Job definition the result belongs to, named in syntax warnings
/// * `console` - Where diagnostics go and answers come from
pub fn interpret<C: Console>(
    result: &ScheduleResult,
    job_file: &Path,
    console: &mut C,
) -> Result<MatchStatus> {
    if !result.has_job() {
        match &result.message {
            Some(message) => console.error(&format!(
                "Failed to launch the job with response messages: {}",
                message
            )),
            None => console
                .error("Failed to launch the job. Please check if the network is available."),
        }
        return Ok(MatchStatus::UrlError);
    }

    let status = match &result.status {
        StartStatus::Invalid => {
            let file_name = job_file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| job_file.display().to_string());
            console.info("");
            console.warn(&format!(
                "Please check your {} file to make sure the syntax is valid, e.g. \
                 whether minimum_num_gpus or maximum_cost_per_hour is valid.",
                file_name
            ));
            MatchStatus::Matched
        }
        StartStatus::Blocked => {
            console.info("");
            console.warn(
                "Because the value of maximum_cost_per_hour is too low, \
                 we can not find exactly matched machines for your job.",
            );
            console.warn("But here we still present machines closest to your expected price as below.");
            MatchStatus::Matched
        }
        StartStatus::Queued => {
            console.info("");
            console.info("No resource available now, but we can keep your job in the waiting queue.");
            if console.confirm("Do you want to join the queue?")? {
                console.success("You have confirmed to keep your job in the waiting list.");
                MatchStatus::Queued
            } else {
                MatchStatus::QueueCanceled
            }
        }
        StartStatus::BindCreditCardFirst => {
            console.error("Please bind your credit card before launching the job.");
            MatchStatus::BindCreditCardFirst
        }
        StartStatus::CreditCardQueryFailed => {
            console.error("Failed to query credit card binding status. Please try again later.");
            MatchStatus::CreditCardQueryFailed
        }
        StartStatus::Submitted | StartStatus::Launched => MatchStatus::Matched,
        StartStatus::Unrecognized(raw) => {
            warn!(
                "Job {} has unrecognized start status '{}', treating it as matched",
                result.job_id, raw
            );
            MatchStatus::Matched
        }
    };

    Ok(status)
}
