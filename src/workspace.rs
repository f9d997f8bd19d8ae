// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Wiring from ambient kubeconfig to a client for the GitOps virtual workspace

use crate::config::Config;
use crate::discovery::{resolve_virtual_workspace, PollPolicy};
use crate::error::Result;
use crate::kubernetes::{get_rest_config, ClusterAwareClient, ResourceIdentity, RestConfig, Scheme};
use crate::types::{APIExport, GitOpsDeployment};
use tracing::{info, instrument};

/// Build a client for the virtual workspace published by `config.export_name`
#[instrument(skip(config), fields(export = %config.export_name))]
pub async fn new_virtual_workspace_client(config: &Config) -> Result<ClusterAwareClient> {
    let rest_config = get_rest_config().await?;
    connect_virtual_workspace(rest_config, &config.export_name, &PollPolicy::default()).await
}

/// Discover the virtual workspace of `export_name` through `rest_config` and
/// return a client for it that may use APIExport and GitOpsDeployment
pub async fn connect_virtual_workspace(
    rest_config: RestConfig,
    export_name: &str,
    policy: &PollPolicy,
) -> Result<ClusterAwareClient> {
    let mut scheme = Scheme::new();
    scheme.add::<APIExport>()?;
    let registry = ClusterAwareClient::new(rest_config.clone(), scheme.clone())
        .unscoped_api::<APIExport>()?;

    let vw_config = resolve_virtual_workspace(&rest_config, &registry, export_name, policy).await?;

    scheme.add::<GitOpsDeployment>()?;
    Ok(ClusterAwareClient::new(vw_config, scheme))
}

/// Fetch the configured GitOpsDeployment from the configured workspace
pub async fn fetch_gitops_deployment(
    client: &ClusterAwareClient,
    config: &Config,
) -> Result<GitOpsDeployment> {
    let identity = ResourceIdentity::new(&config.deployment_namespace, &config.deployment_name);
    info!(
        "Fetching GitOpsDeployment {} from workspace {}",
        identity, config.workspace
    );
    client.for_cluster(&config.workspace)?.get(&identity).await
}
