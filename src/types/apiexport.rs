// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::Condition;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// kcp APIExport, the registry entry publishing an API surface and its virtual workspaces
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "apis.kcp.dev", version = "v1alpha1", kind = "APIExport")]
#[kube(status = "APIExportStatus")]
#[serde(rename_all = "camelCase")]
pub struct APIExportSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub latest_resource_schemas: Vec<String>,
}

impl APIExport {
    /// URLs of the virtual workspaces serving this export, in the order kcp lists them
    pub fn virtual_workspace_urls(&self) -> impl Iterator<Item = &str> {
        self.status
            .iter()
            .flat_map(|s| s.virtual_workspaces.iter())
            .map(|vw| vw.url.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct APIExportStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    #[serde(default)]
    pub virtual_workspaces: Vec<VirtualWorkspace>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct VirtualWorkspace {
    pub url: String,
}
