// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VwError {
    #[error("No usable kubeconfig or in-cluster configuration: {0}")]
    ConfigUnavailable(String),

    #[error("Failed to register {kind} in scheme: {reason}")]
    SchemeRegistrationFailed { kind: String, reason: String },

    #[error("No kind is registered for {0}")]
    KindNotRegistered(String),

    #[error("{kind} {name:?} not found")]
    NotFound { kind: String, name: String },

    #[error("More than one APIExport found: {}", .0.join(", "))]
    Ambiguous(Vec<String>),

    #[error("No APIExport found")]
    NoneFound,

    #[error("APIExport {0:?} status.virtualWorkspaces is empty")]
    NoVirtualEndpoint(String),

    #[error("Invalid virtual workspace URL {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Invalid logical cluster path {path:?}: {reason}")]
    InvalidClusterPath { path: String, reason: String },

    #[error("Virtual workspace URL never became available within {timeout:?} (last error: {last_error})")]
    EndpointDiscoveryTimeout { timeout: Duration, last_error: String },

    #[error("Kubernetes API error: {0}")]
    TransportError(#[from] kube::Error),
}

impl VwError {
    /// Map a kube error to `NotFound` when the API server answered 404
    pub(crate) fn from_lookup(err: kube::Error, kind: &str, name: &str) -> Self {
        match err {
            kube::Error::Api(resp) if resp.code == 404 => VwError::NotFound {
                kind: kind.to_string(),
                name: name.to_string(),
            },
            other => VwError::TransportError(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, VwError>;
