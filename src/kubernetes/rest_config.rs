// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Connection configuration with client-side throttling

use crate::constants::throttle::{BURST, QPS};
use crate::error::{Result, VwError};
use http::Uri;
use kube::client::ClientBuilder;
use kube::{Client, Config as KConfig};
use std::time::Duration;
use tower::limit::RateLimitLayer;
use tower::util::option_layer;
use tracing::{debug, info};

/// A kube config plus the request rate limits clients built from it must honour.
/// A zero `qps` or `burst` disables throttling.
#[derive(Debug, Clone)]
pub struct RestConfig {
    pub kube: KConfig,
    pub qps: f32,
    pub burst: u32,
}

impl RestConfig {
    pub fn new(kube: KConfig) -> Self {
        Self {
            kube,
            qps: 0.0,
            burst: 0,
        }
    }

    pub fn host(&self) -> &Uri {
        &self.kube.cluster_url
    }

    /// Copy of this config pointed at another host; auth, TLS and limits are kept
    pub fn with_host(&self, host: Uri) -> Self {
        let mut cfg = self.clone();
        cfg.kube.cluster_url = host;
        cfg
    }

    /// Requests admitted per window, and the window length
    pub fn rate_limit_window(&self) -> Option<(u64, Duration)> {
        if self.qps <= 0.0 || self.burst == 0 {
            return None;
        }
        let per = Duration::from_secs_f64(f64::from(self.burst) / f64::from(self.qps));
        Some((u64::from(self.burst), per))
    }

    /// Build a throttled client talking to this config's host. Any path on
    /// the host is kept as a prefix of every request path.
    pub fn client(&self) -> Result<Client> {
        let throttle = option_layer(
            self.rate_limit_window()
                .map(|(num, per)| RateLimitLayer::new(num, per)),
        );
        let builder = ClientBuilder::try_from(self.kube.clone()).map_err(|e| {
            VwError::ConfigUnavailable(format!(
                "Failed to build client for {}: {}",
                self.kube.cluster_url, e
            ))
        })?;

        debug!(
            "Building client for {} (qps={}, burst={})",
            self.kube.cluster_url, self.qps, self.burst
        );
        Ok(builder.with_layer(&throttle).build())
    }
}

/// Infer the ambient kube config (KUBECONFIG, ~/.kube/config or in-cluster)
/// and apply the generous client-side limits used against kcp.
pub async fn get_rest_config() -> Result<RestConfig> {
    let kube = KConfig::infer()
        .await
        .map_err(|e| VwError::ConfigUnavailable(e.to_string()))?;
    info!("Using control plane at {}", kube.cluster_url);
    Ok(apply_throttle_overrides(RestConfig::new(kube)))
}

/// Raise the client-side limits above the library defaults; kcp tolerates
/// the bursty discovery traffic this program generates.
pub fn apply_throttle_overrides(mut cfg: RestConfig) -> RestConfig {
    cfg.qps = QPS;
    cfg.burst = BURST;
    cfg
}
