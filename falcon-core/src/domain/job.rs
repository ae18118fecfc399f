//! Job domain types

use serde::{Deserialize, Serialize};

use crate::domain::resource::MatchedResource;

/// Reply from the scheduler to a job submission
///
/// Produced once by the platform and consumed once by the negotiation. An
/// empty `job_url` means no job was created server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleResult {
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub job_url: String,
    #[serde(default)]
    pub status: StartStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "gpu_matched")]
    pub matched_resources: Vec<MatchedResource>,
    #[serde(default)]
    pub cluster_id: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub job_name: Option<String>,
}

impl ScheduleResult {
    /// Whether the platform actually created a job for this submission
    pub fn has_job(&self) -> bool {
        !self.job_url.is_empty()
    }

    /// The assigned cluster id, if one was assigned and is non-empty
    pub fn assigned_cluster(&self) -> Option<&str> {
        self.cluster_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Start status reported by the scheduler
///
/// Decoded from the platform's upper-case status strings. Strings this client
/// does not know decode to `Unrecognized` so callers must handle them
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StartStatus {
    Invalid,
    Blocked,
    Queued,
    BindCreditCardFirst,
    CreditCardQueryFailed,
    #[default]
    Submitted,
    Launched,
    Unrecognized(String),
}

impl StartStatus {
    pub fn as_str(&self) -> &str {
        match self {
            StartStatus::Invalid => "INVALID",
            StartStatus::Blocked => "BLOCKED",
            StartStatus::Queued => "QUEUED",
            StartStatus::BindCreditCardFirst => "BIND_CREDIT_CARD_FIRST",
            StartStatus::CreditCardQueryFailed => "QUERY_CREDIT_CARD_BINDING_STATUS_FAILED",
            StartStatus::Submitted => "SUBMITTED",
            StartStatus::Launched => "LAUNCHED",
            StartStatus::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for StartStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "INVALID" => StartStatus::Invalid,
            "BLOCKED" => StartStatus::Blocked,
            "QUEUED" => StartStatus::Queued,
            "BIND_CREDIT_CARD_FIRST" => StartStatus::BindCreditCardFirst,
            "QUERY_CREDIT_CARD_BINDING_STATUS_FAILED" => StartStatus::CreditCardQueryFailed,
            "SUBMITTED" => StartStatus::Submitted,
            "LAUNCHED" => StartStatus::Launched,
            _ => StartStatus::Unrecognized(raw),
        }
    }
}

impl From<StartStatus> for String {
    fn from(status: StartStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for StartStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reply to a request to run a scheduled job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchResult {
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub job_url: String,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub job_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A job row as listed by the platform, used for post-launch reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub job_name: String,
    pub job_id: String,
    #[serde(default)]
    pub status: String,
    /// Creation time as rendered by the platform
    #[serde(default, rename = "started_time")]
    pub created_time: String,
    #[serde(default, rename = "compute_duration")]
    pub duration_hours: f64,
    #[serde(default)]
    pub cost: f64,
}
