//! Cluster DTOs

use serde::{Deserialize, Serialize};

use crate::domain::resource::MatchedResource;

/// Request to confirm a cluster for the matched resources and start its job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmCluster {
    pub cluster_id: String,
    #[serde(rename = "gpu_matched")]
    pub matched_resources: Vec<MatchedResource>,
}

/// Platform answer to a cluster confirmation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterConfirmation {
    #[serde(default)]
    pub confirmed: bool,
}
