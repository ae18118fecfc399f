//! Job-related API endpoints

use std::path::{Path, PathBuf};

use falcon_core::domain::job::{JobRecord, LaunchResult, ScheduleResult};
use falcon_core::domain::platform::PlatformTag;
use falcon_core::dto::job::{JobList, ListJobs, RunScheduledJob, ScheduleJob, StopJob};
use reqwest::Method;
use tracing::debug;

use crate::PlatformClient;
use crate::error::{ClientError, Result};

impl PlatformClient {
    // =============================================================================
    // Scheduling
    // =============================================================================

    /// Submit a job definition for resource matching
    ///
    /// # Arguments
    /// * `job_file` - Path to the job definition file
    /// * `group_id` - Optional queue group the job should be scheduled in
    ///
    /// # Returns
    /// The scheduler's reply, which may describe a declined submission
    pub async fn schedule_job(
        &self,
        job_file: &Path,
        group_id: Option<&str>,
    ) -> Result<ScheduleResult> {
        let mut req = read_job_file(job_file).await?;
        req.group_id = group_id.filter(|g| !g.is_empty()).map(str::to_string);

        self.send_schedule(req).await
    }

    /// Submit a job definition bound to a named cluster
    ///
    /// The platform reuses the cluster if one with that name exists and
    /// creates it otherwise.
    pub async fn schedule_job_on_cluster(
        &self,
        job_file: &Path,
        cluster_name: &str,
    ) -> Result<ScheduleResult> {
        let mut req = read_job_file(job_file).await?;
        req.cluster_name = Some(cluster_name.to_string());

        self.send_schedule(req).await
    }

    async fn send_schedule(&self, req: ScheduleJob) -> Result<ScheduleResult> {
        debug!("Scheduling job file {}", req.job_file_name);
        let response = self
            .request(Method::POST, "/api/v1/jobs/schedule")
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Run a job whose resource match has been confirmed
    pub async fn run_scheduled_job(&self, schedule_result: &ScheduleResult) -> Result<LaunchResult> {
        debug!("Running scheduled job {}", schedule_result.job_id);
        let response = self
            .request(Method::POST, "/api/v1/jobs/start")
            .json(&RunScheduledJob {
                job_id: schedule_result.job_id.clone(),
                project_name: schedule_result.project_name.clone(),
                job_name: schedule_result.job_name.clone(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Stop a job
    ///
    /// # Arguments
    /// * `job_id` - The platform job id
    /// * `platform` - Platform the job was scheduled on
    pub async fn stop_job(&self, job_id: &str, platform: PlatformTag) -> Result<()> {
        debug!("Stopping job {} on {}", job_id, platform);
        let response = self
            .request(Method::POST, "/api/v1/jobs/stop")
            .json(&StopJob {
                job_id: job_id.to_string(),
                platform,
            })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    /// List jobs of a project
    ///
    /// # Arguments
    /// * `project_name` - Project the jobs belong to
    /// * `platform` - Platform to query
    /// * `job_id` - Narrow the listing to one job
    pub async fn list_jobs(
        &self,
        project_name: &str,
        platform: PlatformTag,
        job_id: Option<&str>,
    ) -> Result<Vec<JobRecord>> {
        let response = self
            .request(Method::POST, "/api/v1/jobs/list")
            .json(&ListJobs {
                project_name: project_name.to_string(),
                platform,
                job_id: job_id.map(str::to_string),
            })
            .send()
            .await?;

        let list: JobList = self.handle_response(response).await?;
        Ok(list.job_list)
    }
}

/// Read a job definition into a schedule request
async fn read_job_file(job_file: &Path) -> Result<ScheduleJob> {
    let job_yaml = tokio::fs::read_to_string(job_file)
        .await
        .map_err(|source| ClientError::JobFile {
            path: PathBuf::from(job_file),
            source,
        })?;

    let job_file_name = job_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| job_file.display().to_string());

    Ok(ScheduleJob {
        job_file_name,
        job_yaml,
        group_id: None,
        cluster_name: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_job_file_uses_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "job: python train.py").unwrap();

        let req = read_job_file(&path).await.unwrap();
        assert_eq!(req.job_file_name, "train.yaml");
        assert_eq!(req.job_yaml, "job: python train.py\n");
        assert!(req.group_id.is_none());
        assert!(req.cluster_name.is_none());
    }

    #[tokio::test]
    async fn test_missing_job_file_is_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let err = read_job_file(&path).await.unwrap_err();
        assert!(matches!(err, ClientError::JobFile { .. }));
    }

    #[tokio::test]
    async fn test_schedule_job_fails_before_network_on_missing_file() {
        let client = PlatformClient::new("http://127.0.0.1:9", None);
        let err = client
            .schedule_job(Path::new("/nonexistent/job.yaml"), Some("group-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::JobFile { .. }));
    }
}
