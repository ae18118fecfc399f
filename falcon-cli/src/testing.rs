//! Test doubles for the launch flow

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use falcon_client::{ClientError, Result as ClientResult};
use falcon_core::domain::job::{JobRecord, LaunchResult, ScheduleResult, StartStatus};
use falcon_core::domain::platform::PlatformTag;
use falcon_core::domain::resource::MatchedResource;

use crate::api::PlatformApi;
use crate::console::Console;

/// A remote call seen by [`RecordingPlatform`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Schedule {
        job_file: PathBuf,
        group_id: Option<String>,
    },
    ScheduleOnCluster {
        cluster_name: String,
    },
    Run {
        job_id: String,
    },
    ConfirmCluster {
        cluster_id: String,
        resources: usize,
    },
    Stop {
        job_id: String,
        platform: PlatformTag,
    },
    List {
        project_name: String,
        job_id: Option<String>,
    },
}

/// Platform fake that answers from canned data and records every call
pub struct RecordingPlatform {
    schedule_result: ScheduleResult,
    launch_result: Option<LaunchResult>,
    cluster_confirmed: bool,
    jobs: Vec<JobRecord>,
    fail_schedule: bool,
    fail_stop: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingPlatform {
    pub fn new(schedule_result: ScheduleResult) -> Self {
        let launch_result = LaunchResult {
            job_id: schedule_result.job_id.clone(),
            job_url: schedule_result.job_url.clone(),
            project_name: Some("default-project".to_string()),
            job_name: Some("mnist".to_string()),
            status: Some("RUNNING".to_string()),
            message: None,
        };
        let jobs = vec![JobRecord {
            job_name: "mnist".to_string(),
            job_id: schedule_result.job_id.clone(),
            status: "RUNNING".to_string(),
            created_time: "2024-03-01 10:00:00".to_string(),
            duration_hours: 0.0,
            cost: 0.0,
        }];

        Self {
            schedule_result,
            launch_result: Some(launch_result),
            cluster_confirmed: true,
            jobs,
            fail_schedule: false,
            fail_stop: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_schedule(mut self) -> Self {
        self.fail_schedule = true;
        self
    }

    pub fn failing_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }

    /// `None` makes the run call fail
    pub fn with_launch_result(mut self, launch_result: Option<LaunchResult>) -> Self {
        self.launch_result = launch_result;
        self
    }

    pub fn with_cluster_confirmed(mut self, confirmed: bool) -> Self {
        self.cluster_confirmed = confirmed;
        self
    }

    pub fn with_jobs(mut self, jobs: Vec<JobRecord>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Job ids of every stop call, in order
    pub fn stop_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Stop { job_id, .. } => Some(job_id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn scheduled(&self) -> ClientResult<ScheduleResult> {
        if self.fail_schedule {
            return Err(ClientError::api_error(503, "service unavailable"));
        }
        Ok(self.schedule_result.clone())
    }
}

#[async_trait]
impl PlatformApi for RecordingPlatform {
    async fn schedule_job(
        &self,
        job_file: &Path,
        group_id: Option<&str>,
    ) -> ClientResult<ScheduleResult> {
        self.record(Call::Schedule {
            job_file: job_file.to_path_buf(),
            group_id: group_id.map(str::to_string),
        });
        self.scheduled()
    }

    async fn schedule_job_on_cluster(
        &self,
        _job_file: &Path,
        cluster_name: &str,
    ) -> ClientResult<ScheduleResult> {
        self.record(Call::ScheduleOnCluster {
            cluster_name: cluster_name.to_string(),
        });
        self.scheduled()
    }

    async fn run_scheduled_job(&self, schedule_result: &ScheduleResult) -> ClientResult<LaunchResult> {
        self.record(Call::Run {
            job_id: schedule_result.job_id.clone(),
        });
        self.launch_result
            .clone()
            .ok_or_else(|| ClientError::api_error(500, "run failed"))
    }

    async fn confirm_cluster_and_start_job(
        &self,
        cluster_id: &str,
        matched_resources: &[MatchedResource],
    ) -> ClientResult<bool> {
        self.record(Call::ConfirmCluster {
            cluster_id: cluster_id.to_string(),
            resources: matched_resources.len(),
        });
        Ok(self.cluster_confirmed)
    }

    async fn stop_job(&self, job_id: &str, platform: PlatformTag) -> ClientResult<()> {
        self.record(Call::Stop {
            job_id: job_id.to_string(),
            platform,
        });
        if self.fail_stop {
            return Err(ClientError::api_error(500, "stop failed"));
        }
        Ok(())
    }

    async fn list_jobs(
        &self,
        project_name: &str,
        _platform: PlatformTag,
        job_id: Option<&str>,
    ) -> ClientResult<Vec<JobRecord>> {
        self.record(Call::List {
            project_name: project_name.to_string(),
            job_id: job_id.map(str::to_string),
        });
        Ok(self.jobs.clone())
    }
}

/// Console that records output and answers prompts from a script
pub struct ScriptedConsole {
    answers: VecDeque<bool>,
    pub lines: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            lines: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Whether any printed line contains `needle`
    pub fn printed(&self, needle: &str) -> bool {
        self.count(needle) > 0
    }

    /// Number of printed lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|line| line.contains(needle)).count()
    }
}

impl Console for ScriptedConsole {
    fn info(&mut self, message: &str) {
        if !message.is_empty() {
            self.lines.push(message.to_string());
        }
    }

    fn warn(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn success(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.prompts.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted answer for '{}'", question))
    }
}

pub fn resource(provider: &str, accelerator: &str, count: u32) -> MatchedResource {
    MatchedResource {
        provider: provider.to_string(),
        instance_type: format!("gpu_{}x_{}", count, accelerator.to_lowercase()),
        vcpus: 8 * count,
        memory_gb: 64.0 * count as f64,
        accelerator_type: accelerator.to_string(),
        accelerator_count: count,
        region: "us-east-1".to_string(),
        cost: 1.5 * count as f64,
    }
}

/// A schedule result for job `1024` with one matched resource
pub fn schedule_result(status: StartStatus) -> ScheduleResult {
    ScheduleResult {
        job_id: "1024".to_string(),
        job_url: "https://open.fedml.ai/jobs/1024".to_string(),
        status,
        message: None,
        matched_resources: vec![resource("lambda", "A100", 1)],
        cluster_id: None,
        project_name: Some("default-project".to_string()),
        job_name: Some("mnist".to_string()),
    }
}
