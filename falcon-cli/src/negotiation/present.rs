//! Matched resource and job status tables

use falcon_core::domain::job::{JobRecord, ScheduleResult};
use falcon_core::domain::resource::MatchedResource;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::console::Console;

/// Marker shown in the "Selected" column
const CHECK_MARK: &str = "✓";

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Instance")]
    instance: String,
    #[tabled(rename = "vCPU(s)")]
    vcpus: u32,
    #[tabled(rename = "Memory(GB)")]
    memory: f64,
    #[tabled(rename = "GPU(s)")]
    gpus: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Cost")]
    cost: f64,
    #[tabled(rename = "Selected")]
    selected: &'static str,
}

impl From<&MatchedResource> for ResourceRow {
    fn from(resource: &MatchedResource) -> Self {
        Self {
            provider: resource.provider.clone(),
            instance: resource.instance_type.clone(),
            vcpus: resource.vcpus,
            memory: resource.memory_gb,
            gpus: resource.accelerator_spec(),
            region: resource.region.clone(),
            cost: resource.cost,
            selected: CHECK_MARK,
        }
    }
}

#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "Job Name")]
    name: String,
    #[tabled(rename = "Job ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Spend Time(hour)")]
    duration: f64,
    #[tabled(rename = "Cost")]
    cost: f64,
}

impl From<&JobRecord> for JobRow {
    fn from(job: &JobRecord) -> Self {
        Self {
            name: job.job_name.clone(),
            id: job.job_id.clone(),
            status: job.status.clone(),
            created: job.created_time.clone(),
            duration: job.duration_hours,
            cost: job.cost,
        }
    }
}

/// Show the resources matched for a job
///
/// # Returns
/// The matched resources, or `None` when the result carries none
pub fn present<'r, C: Console>(
    result: &'r ScheduleResult,
    console: &mut C,
) -> Option<&'r [MatchedResource]> {
    if result.matched_resources.is_empty() {
        return None;
    }

    console.info("");
    console.info("Searched and matched the following GPU resource for your job:");
    let rows = result.matched_resources.iter().map(ResourceRow::from);
    console.info(&Table::new(rows).with(Style::ascii()).to_string());
    console.info("");

    console.info("You can also view the matched GPU resource with Web UI at: ");
    console.info(&result.job_url);

    Some(&result.matched_resources)
}

/// Render job records as a status table
pub fn render_job_table(jobs: &[JobRecord]) -> String {
    Table::new(jobs.iter().map(JobRow::from))
        .with(Style::ascii())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedConsole, resource, schedule_result};
    use falcon_core::domain::job::StartStatus;

    #[test]
    fn test_present_renders_every_candidate() {
        let mut result = schedule_result(StartStatus::Submitted);
        result.matched_resources = vec![resource("lambda", "A100", 8), resource("runpod", "H100", 2)];
        let mut console = ScriptedConsole::new(&[]);

        let matched = present(&result, &mut console).unwrap();

        assert_eq!(matched.len(), 2);
        assert!(console.printed("Provider"));
        assert!(console.printed("Selected"));
        assert!(console.printed("A100:8"));
        assert!(console.printed("H100:2"));
        assert!(console.printed(CHECK_MARK));
        assert_eq!(console.lines.last().unwrap(), &result.job_url);
        assert!(console.prompts.is_empty());
    }

    #[test]
    fn test_present_without_candidates() {
        let mut result = schedule_result(StartStatus::Submitted);
        result.matched_resources.clear();
        let mut console = ScriptedConsole::new(&[]);

        assert!(present(&result, &mut console).is_none());
        assert!(console.lines.is_empty());
    }

    #[test]
    fn test_job_table_columns() {
        let table = render_job_table(&[JobRecord {
            job_name: "mnist".to_string(),
            job_id: "1024".to_string(),
            status: "RUNNING".to_string(),
            created_time: "2024-03-01 10:00:00".to_string(),
            duration_hours: 0.5,
            cost: 0.55,
        }]);

        for column in ["Job Name", "Job ID", "Status", "Created", "Spend Time(hour)", "Cost"] {
            assert!(table.contains(column), "missing column {}", column);
        }
        assert!(table.contains("mnist"));
        assert!(table.contains("RUNNING"));
    }
}
