// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Logical cluster paths and host scoping

use crate::error::{Result, VwError};
use http::uri::PathAndQuery;
use http::Uri;
use std::fmt;

/// A kcp logical cluster path such as `root:org:team`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalCluster(String);

impl LogicalCluster {
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = |reason: &str| VwError::InvalidClusterPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(invalid("path is empty"));
        }
        for segment in path.split(':') {
            if segment.is_empty() {
                return Err(invalid("empty segment"));
            }
            if !segment
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
            {
                return Err(invalid(
                    "segments may only contain lowercase letters, digits and '-'",
                ));
            }
            if segment.starts_with('-') || segment.ends_with('-') {
                return Err(invalid("segments must start and end with a letter or digit"));
            }
        }

        Ok(Self(path.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path prefix kcp routes to this logical cluster
    pub fn url_prefix(&self) -> String {
        format!("/clusters/{}", self.0)
    }

    /// `host` with this cluster's prefix appended to its path. Every request
    /// made against the returned host lands in this logical cluster.
    pub fn scoped_host(&self, host: &Uri) -> Result<Uri> {
        let invalid = |reason: String| VwError::InvalidEndpoint {
            url: host.to_string(),
            reason,
        };

        let mut parts = host.clone().into_parts();
        let base = parts
            .path_and_query
            .as_ref()
            .map(PathAndQuery::path)
            .unwrap_or("");
        let path = format!("{}{}", base.trim_end_matches('/'), self.url_prefix());
        parts.path_and_query =
            Some(PathAndQuery::try_from(path).map_err(|e| invalid(e.to_string()))?);
        Uri::from_parts(parts).map_err(|e| invalid(e.to_string()))
    }
}

impl fmt::Display for LogicalCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
