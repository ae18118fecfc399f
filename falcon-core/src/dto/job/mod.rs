//! Job DTOs for platform communication

use serde::{Deserialize, Serialize};

use crate::domain::job::JobRecord;
use crate::domain::platform::PlatformTag;

/// Request to schedule a job definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleJob {
    /// File name of the job definition, without directories
    pub job_file_name: String,
    /// Job definition contents, sent verbatim
    pub job_yaml: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

/// Request to run a job that has already been scheduled and confirmed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunScheduledJob {
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
}

/// Request to stop a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopJob {
    pub job_id: String,
    pub platform: PlatformTag,
}

/// Request to list jobs of a project, optionally narrowed to one job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListJobs {
    pub project_name: String,
    pub platform: PlatformTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

/// Job list envelope returned by the platform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobList {
    #[serde(default)]
    pub job_list: Vec<JobRecord>,
}
