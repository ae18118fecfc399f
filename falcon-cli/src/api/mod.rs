//! Platform API seam
//!
//! The launch flow talks to the platform through [`PlatformApi`] so the
//! negotiation can be exercised without a network. [`PlatformClient`] is the
//! production implementation.

use std::path::Path;

use async_trait::async_trait;
use falcon_client::{PlatformClient, Result};
use falcon_core::domain::job::{JobRecord, LaunchResult, ScheduleResult};
use falcon_core::domain::platform::PlatformTag;
use falcon_core::domain::resource::MatchedResource;

/// Remote calls the launch flow depends on
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Submit a job definition for resource matching
    async fn schedule_job(&self, job_file: &Path, group_id: Option<&str>)
    -> Result<ScheduleResult>;

    /// Submit a job definition bound to a named cluster
    async fn schedule_job_on_cluster(
        &self,
        job_file: &Path,
        cluster_name: &str,
    ) -> Result<ScheduleResult>;

    /// Run a job whose match was confirmed
    async fn run_scheduled_job(&self, schedule_result: &ScheduleResult) -> Result<LaunchResult>;

    /// Confirm a cluster and start the job on it
    async fn confirm_cluster_and_start_job(
        &self,
        cluster_id: &str,
        matched_resources: &[MatchedResource],
    ) -> Result<bool>;

    /// Stop a job
    async fn stop_job(&self, job_id: &str, platform: PlatformTag) -> Result<()>;

    /// List jobs of a project, optionally narrowed to one job
    async fn list_jobs(
        &self,
        project_name: &str,
        platform: PlatformTag,
        job_id: Option<&str>,
    ) -> Result<Vec<JobRecord>>;
}

#[async_trait]
impl PlatformApi for PlatformClient {
    async fn schedule_job(
        &self,
        job_file: &Path,
        group_id: Option<&str>,
    ) -> Result<ScheduleResult> {
        PlatformClient::schedule_job(self, job_file, group_id).await
    }

    async fn schedule_job_on_cluster(
        &self,
        job_file: &Path,
        cluster_name: &str,
    ) -> Result<ScheduleResult> {
        PlatformClient::schedule_job_on_cluster(self, job_file, cluster_name).await
    }

    async fn run_scheduled_job(&self, schedule_result: &ScheduleResult) -> Result<LaunchResult> {
        PlatformClient::run_scheduled_job(self, schedule_result).await
    }

    async fn confirm_cluster_and_start_job(
        &self,
        cluster_id: &str,
        matched_resources: &[MatchedResource],
    ) -> Result<bool> {
        PlatformClient::confirm_cluster_and_start_job(self, cluster_id, matched_resources).await
    }

    async fn stop_job(&self, job_id: &str, platform: PlatformTag) -> Result<()> {
        PlatformClient::stop_job(self, job_id, platform).await
    }

    async fn list_jobs(
        &self,
        project_name: &str,
        platform: PlatformTag,
        job_id: Option<&str>,
    ) -> Result<Vec<JobRecord>> {
        PlatformClient::list_jobs(self, project_name, platform, job_id).await
    }
}
