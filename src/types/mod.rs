// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types consumed from kcp and the GitOps backend.

pub mod apiexport;
pub mod condition;
pub mod gitops;

pub use apiexport::{APIExport, APIExportSpec, APIExportStatus, VirtualWorkspace};
pub use condition::Condition;
pub use gitops::{GitOpsDeployment, GitOpsDeploymentSpec, GitOpsDeploymentStatus};
