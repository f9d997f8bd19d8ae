// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{defaults, env as vars};
use crate::kubernetes::LogicalCluster;
use anyhow::{Context, Result};
use std::env;

/// Program configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// APIExport publishing the virtual workspace. Empty means "the only one there is".
    pub export_name: String,
    /// Logical cluster holding the GitOpsDeployment
    pub workspace: LogicalCluster,
    pub deployment_namespace: String,
    pub deployment_name: String,
    /// `EnvFilter` directives handed to the tracing subscriber
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let workspace_path = get(vars::WORKSPACE_PATH, defaults::WORKSPACE_PATH);
        let workspace = LogicalCluster::parse(&workspace_path)
            .with_context(|| format!("{} is not a valid workspace path", vars::WORKSPACE_PATH))?;

        Ok(Config {
            export_name: get(vars::APIEXPORT_NAME, defaults::APIEXPORT_NAME),
            workspace,
            deployment_namespace: get(vars::DEPLOYMENT_NAMESPACE, defaults::DEPLOYMENT_NAMESPACE),
            deployment_name: get(vars::DEPLOYMENT_NAME, defaults::DEPLOYMENT_NAME),
            log_level: get(vars::LOG_LEVEL, defaults::LOG_LEVEL),
        })
    }
}
