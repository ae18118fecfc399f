//! Launch command handlers
//!
//! `falcon launch <JOB_FILE>` schedules a job definition, negotiates the
//! resource match with the user and, once confirmed, runs the job (or
//! confirms its cluster) and reports the result.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};
use falcon_client::{ClientError, PlatformClient, Result as ClientResult};
use falcon_core::domain::job::{LaunchResult, ScheduleResult};
use falcon_core::domain::platform::PlatformTag;
use tracing::{debug, info, warn};

use crate::api::PlatformApi;
use crate::config::{Config, PlatformVersion};
use crate::console::{Console, TerminalConsole};
use crate::error::LaunchError;
use crate::negotiation::{negotiate, render_job_table};

/// Launch command group
///
/// The `default` subcommand is implied, so `falcon launch job.yaml` and
/// `falcon launch default job.yaml` do the same thing.
#[derive(Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct LaunchCommand {
    #[command(subcommand)]
    command: Option<LaunchSubcommand>,

    #[command(flatten)]
    args: LaunchArgs,
}

impl LaunchCommand {
    /// The effective arguments, whichever form was used
    pub fn into_args(self) -> LaunchArgs {
        match self.command {
            Some(LaunchSubcommand::Default(args)) => args,
            None => {
                // Options given before `default` keep clap from matching the
                // subcommand, so its name lands in front of the job files.
                let mut args = self.args;
                if args.job_files.first().is_some_and(|file| file.as_os_str() == "default") {
                    args.job_files.remove(0);
                }
                args
            }
        }
    }
}

#[derive(Subcommand)]
enum LaunchSubcommand {
    /// Launch job at the Falcon platform
    #[command(hide = true)]
    Default(LaunchArgs),
}

/// Options of a launch
#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
    /// Job definition file; only the first one is launched
    #[arg(value_name = "JOB_FILE")]
    pub job_files: Vec<PathBuf>,

    /// Cluster name. An existing cluster with that name is reused, otherwise a new one is created
    #[arg(short, long)]
    pub cluster: Option<String>,

    /// User API key
    #[arg(
        short = 'k',
        long = "api_key",
        env = "FALCON_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Queue group id the job is scheduled in (plain launches only)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Platform version to launch to
    #[arg(short, long, value_enum, default_value_t = PlatformVersion::Release)]
    pub version: PlatformVersion,
}

impl LaunchArgs {
    /// The job file to launch
    pub fn job_file(&self) -> Result<&Path, LaunchError> {
        self.job_files
            .first()
            .map(PathBuf::as_path)
            .ok_or(LaunchError::MissingJobFile)
    }
}

/// Handle the launch command
///
/// # Arguments
/// * `command` - The parsed launch command
/// * `platform_url` - Explicit platform URL, overriding the version's default
pub async fn handle_launch_command(command: LaunchCommand, platform_url: Option<String>) -> Result<()> {
    let args = command.into_args();
    args.job_file()?;

    let config = Config::resolve(platform_url, args.version, args.api_key.clone());
    config.validate()?;

    let client = PlatformClient::new(config.platform_url, config.api_key);
    info!(
        "Launching to {} ({:?}), api key {}",
        client.base_url(),
        config.version,
        if client.has_api_key() { "set" } else { "not set" }
    );
    let mut console = TerminalConsole::new();

    run_launch(&client, &mut console, &args).await
}

/// Run a launch against a platform
///
/// Fails only on missing input or an unreadable answer; every negotiation
/// exit is reported on the console and returns `Ok`.
pub async fn run_launch<P, C>(platform: &P, console: &mut C, args: &LaunchArgs) -> Result<()>
where
    P: PlatformApi + ?Sized,
    C: Console,
{
    let job_file = args.job_file()?;
    if args.job_files.len() > 1 {
        debug!("Ignoring {} extra job file(s)", args.job_files.len() - 1);
    }

    match &args.cluster {
        Some(cluster) => launch_job_with_cluster(platform, console, job_file, cluster).await,
        None => launch_job(platform, console, job_file, args.group.as_deref()).await,
    }
}

/// Schedule, negotiate, run and report a plain launch
async fn launch_job<P, C>(
    platform: &P,
    console: &mut C,
    job_file: &Path,
    group_id: Option<&str>,
) -> Result<()>
where
    P: PlatformApi + ?Sized,
    C: Console,
{
    let reply = platform.schedule_job(job_file, group_id).await;
    let Some(result) = scheduled(console, reply) else {
        return Ok(());
    };

    let outcome = negotiate(platform, console, &result, job_file).await?;
    if !outcome.proceed_to_launch() {
        return Ok(());
    }

    let launched = platform.run_scheduled_job(&result).await;
    report_launch_result(platform, console, launched).await;

    Ok(())
}

/// Schedule on a cluster, negotiate and confirm the cluster
async fn launch_job_with_cluster<P, C>(
    platform: &P,
    console: &mut C,
    job_file: &Path,
    cluster_name: &str,
) -> Result<()>
where
    P: PlatformApi + ?Sized,
    C: Console,
{
    let reply = platform.schedule_job_on_cluster(job_file, cluster_name).await;
    let Some(result) = scheduled(console, reply) else {
        return Ok(());
    };

    let outcome = negotiate(platform, console, &result, job_file).await?;
    if !outcome.proceed_to_launch() {
        return Ok(());
    }

    // Cluster failures below leave the job alone; nothing is cancelled.
    let Some(cluster_id) = result.assigned_cluster() else {
        console.error("Cluster id was not assigned. Please check if the cli arguments are valid");
        return Ok(());
    };

    match platform
        .confirm_cluster_and_start_job(cluster_id, &result.matched_resources)
        .await
    {
        Ok(true) => {
            info!("Cluster {} confirmed for job {}", cluster_id, result.job_id);
            console.success("Cluster successfully confirmed and job will be started on cluster soon.");
        }
        Ok(false) => {
            console.error("Cluster confirmation failed. Please check if the cli arguments are valid");
        }
        Err(e) => {
            warn!("Cluster {} confirmation request failed: {}", cluster_id, e);
            console.error("Cluster confirmation failed. Please check if the cli arguments are valid");
        }
    }

    Ok(())
}

/// Unwrap a schedule reply, reporting a failed call
///
/// A call that failed is reported here. A call that succeeded but created no
/// job is left for the negotiation to report.
fn scheduled<C: Console>(
    console: &mut C,
    reply: ClientResult<ScheduleResult>,
) -> Option<ScheduleResult> {
    match reply {
        Ok(result) => Some(result),
        Err(e @ ClientError::JobFile { .. }) => {
            console.error(&format!("Failed to launch the job: {}", e));
            None
        }
        Err(e) => {
            let e = LaunchError::from(e);
            warn!("Schedule request failed: {}", e);
            console.error("Failed to launch the job. Please check if the network is available.");
            console.error(&e.to_string());
            if let LaunchError::Transport(inner) = &e {
                if inner.is_unauthorized() {
                    console.warn("Please check your API key (--api_key or FALCON_API_KEY).");
                } else if inner.is_server_error() {
                    console.warn("The platform is unavailable right now. Please try again later.");
                }
            }
            None
        }
    }
}

/// Report the outcome of running a job and show its current status
async fn report_launch_result<P, C>(platform: &P, console: &mut C, launched: ClientResult<LaunchResult>)
where
    P: PlatformApi + ?Sized,
    C: Console,
{
    let result = match launched {
        Ok(result) => result,
        Err(e) => {
            warn!("Run request failed: {}", e);
            console.error("Failed to launch the job");
            console.error(&LaunchError::from(e).to_string());
            return;
        }
    };

    if result.job_url.is_empty() {
        match &result.message {
            Some(message) => console.error(&format!(
                "Failed to launch the job with response messages: {}",
                message
            )),
            None => console.error("Failed to launch the job"),
        }
        return;
    }

    let project_name = result.project_name.as_deref().unwrap_or_default();
    let jobs = match platform
        .list_jobs(project_name, PlatformTag::Falcon, Some(&result.job_id))
        .await
    {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!("Job status query failed for {}: {}", result.job_id, e);
            console.warn(&format!("Failed to query the status of job {}: {}", result.job_id, e));
            return;
        }
    };

    console.info("");
    if !jobs.is_empty() {
        console.info("Your launch result is as follows:");
        console.info(&render_job_table(&jobs));
    }
}
