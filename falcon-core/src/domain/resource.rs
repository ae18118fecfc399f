//! Matched resource domain model
//!
//! A compute offer the scheduler proposes for a job.

use serde::{Deserialize, Serialize};

/// One candidate compute offer
///
/// Read-only display data; field names on the wire follow the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedResource {
    /// Cloud or marketplace provider
    #[serde(default, rename = "gpu_provider")]
    pub provider: String,

    /// Provider-specific instance type
    #[serde(default, rename = "gpu_instance")]
    pub instance_type: String,

    #[serde(default, rename = "cpu_count")]
    pub vcpus: u32,

    /// Memory size in GB
    #[serde(default, rename = "mem_size")]
    pub memory_gb: f64,

    #[serde(default, rename = "gpu_type")]
    pub accelerator_type: String,

    #[serde(default, rename = "gpu_num")]
    pub accelerator_count: u32,

    #[serde(default, rename = "gpu_region")]
    pub region: String,

    /// Hourly cost
    #[serde(default)]
    pub cost: f64,
}

impl MatchedResource {
    /// Accelerator spec as shown to users, e.g. `A100:8`
    pub fn accelerator_spec(&self) -> String {
        format!("{}:{}", self.accelerator_type, self.accelerator_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerator_spec() {
        let resource = MatchedResource {
            provider: "lambda".to_string(),
            instance_type: "gpu_8x_h100".to_string(),
            vcpus: 208,
            memory_gb: 1800.0,
            accelerator_type: "H100".to_string(),
            accelerator_count: 8,
            region: "us-west-1".to_string(),
            cost: 23.92,
        };
        assert_eq!(resource.accelerator_spec(), "H100:8");
    }
}
