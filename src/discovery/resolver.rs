// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolve the connection config for an APIExport's virtual workspace

use super::poll::{poll_immediate, PollPolicy};
use super::registry::ExportRegistry;
use crate::error::{Result, VwError};
use crate::kubernetes::RestConfig;
use crate::types::APIExport;
use http::Uri;
use kube::ResourceExt;
use tracing::{debug, info, instrument};
use url::Url;

/// Find the export to use. An empty name means "the only export there is".
pub async fn lookup_export<R: ExportRegistry>(registry: &R, export_name: &str) -> Result<APIExport> {
    if !export_name.is_empty() {
        return registry.get(export_name).await;
    }

    let mut exports = registry.list().await?;
    match exports.len() {
        0 => Err(VwError::NoneFound),
        1 => Ok(exports.remove(0)),
        _ => Err(VwError::Ambiguous(
            exports.iter().map(|e| e.name_any()).collect(),
        )),
    }
}

/// URL of the export's first virtual workspace, as a client host.
// TODO: shard across all virtual workspaces once kcp publishes more than one per export
pub fn virtual_workspace_host(export: &APIExport) -> Result<Uri> {
    let raw = export
        .virtual_workspace_urls()
        .next()
        .ok_or_else(|| VwError::NoVirtualEndpoint(export.name_any()))?;

    let invalid = |reason: String| VwError::InvalidEndpoint {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    raw.parse::<Uri>().map_err(|e| invalid(e.to_string()))
}

/// Single lookup: the base config re-pointed at the export's virtual workspace
#[instrument(skip(cfg, registry), fields(base = %cfg.host()))]
pub async fn rest_config_for_export<R: ExportRegistry>(
    cfg: &RestConfig,
    registry: &R,
    export_name: &str,
) -> Result<RestConfig> {
    let export = lookup_export(registry, export_name).await?;
    let host = virtual_workspace_host(&export)?;
    debug!("APIExport {} serves virtual workspace {}", export.name_any(), host);
    Ok(cfg.with_host(host))
}

/// Poll the registry until the export publishes a virtual workspace URL
pub async fn resolve_virtual_workspace<R: ExportRegistry>(
    cfg: &RestConfig,
    registry: &R,
    export_name: &str,
    policy: &PollPolicy,
) -> Result<RestConfig> {
    info!(
        "Waiting up to {:?} for the virtual workspace URL of APIExport {:?}",
        policy.timeout, export_name
    );
    let resolved = poll_immediate(policy, "virtual workspace URL", || {
        rest_config_for_export(cfg, registry, export_name)
    })
    .await?;
    info!("Using virtual workspace at {}", resolved.host());
    Ok(resolved)
}
