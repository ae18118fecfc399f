//! Cluster-related API endpoints

use falcon_core::domain::resource::MatchedResource;
use falcon_core::dto::cluster::{ClusterConfirmation, ConfirmCluster};
use reqwest::Method;
use tracing::debug;

use crate::PlatformClient;
use crate::error::Result;

impl PlatformClient {
    /// Confirm a cluster for the matched resources and start its job
    ///
    /// # Arguments
    /// * `cluster_id` - Cluster assigned by the scheduler
    /// * `matched_resources` - The resources the caller accepted
    ///
    /// # Returns
    /// Whether the platform accepted the confirmation
    pub async fn confirm_cluster_and_start_job(
        &self,
        cluster_id: &str,
        matched_resources: &[MatchedResource],
    ) -> Result<bool> {
        debug!(
            "Confirming cluster {} with {} matched resource(s)",
            cluster_id,
            matched_resources.len()
        );
        let response = self
            .request(Method::POST, "/api/v1/clusters/confirm")
            .json(&ConfirmCluster {
                cluster_id: cluster_id.to_string(),
                matched_resources: matched_resources.to_vec(),
            })
            .send()
            .await?;

        let confirmation: ClusterConfirmation = self.handle_response(response).await?;
        Ok(confirmation.confirmed)
    }
}
