// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Client-side throttling applied on top of the inferred kubeconfig
pub mod throttle {
    /// Sustained requests per second
    pub const QPS: f32 = 100.0;
    /// Requests admitted in a single burst
    pub const BURST: u32 = 250;
}

/// Virtual workspace URL polling configuration
pub mod discovery {
    /// Delay between lookup attempts in seconds
    pub const POLL_INTERVAL_SECS: u64 = 1;
    /// Total time budget for the lookup in seconds
    pub const POLL_TIMEOUT_SECS: u64 = 120;
}

/// Environment variables read by `Config::from_env`
pub mod env {
    pub const APIEXPORT_NAME: &str = "APIEXPORT_NAME";
    pub const WORKSPACE_PATH: &str = "WORKSPACE_PATH";
    pub const DEPLOYMENT_NAMESPACE: &str = "GITOPS_DEPLOYMENT_NAMESPACE";
    pub const DEPLOYMENT_NAME: &str = "GITOPS_DEPLOYMENT_NAME";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Values used when the matching environment variable is not set
pub mod defaults {
    pub const APIEXPORT_NAME: &str = "gitopsrvc-backend-shared";
    pub const WORKSPACE_PATH: &str = "root:users:ti:rg:rh-sso-cbanavik-kcp-redhat-com:user-28620";
    pub const DEPLOYMENT_NAMESPACE: &str = "test";
    pub const DEPLOYMENT_NAME: &str = "gitops-test";
    pub const LOG_LEVEL: &str = "debug";
}
