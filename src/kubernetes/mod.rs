// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes plumbing: connection configs, logical cluster scoping, schemes and typed clients.

pub mod client;
pub mod cluster;
pub mod rest_config;
pub mod scheme;

pub use client::{ClusterAwareClient, ResourceIdentity, WorkspaceClient};
pub use cluster::LogicalCluster;
pub use rest_config::{apply_throttle_overrides, get_rest_config, RestConfig};
pub use scheme::Scheme;
