// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed clients scoped to kcp logical clusters

use super::cluster::LogicalCluster;
use super::rest_config::RestConfig;
use super::scheme::Scheme;
use crate::error::{Result, VwError};
use k8s_openapi::NamespaceResourceScope;
use kube::{Api, Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, instrument};

/// Namespace and name of a single namespaced object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentity {
    pub namespace: String,
    pub name: String,
}

impl ResourceIdentity {
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Builds clients against one endpoint, restricted to the kinds in its scheme
#[derive(Debug, Clone)]
pub struct ClusterAwareClient {
    config: RestConfig,
    scheme: Scheme,
}

impl ClusterAwareClient {
    pub fn new(config: RestConfig, scheme: Scheme) -> Self {
        Self { config, scheme }
    }

    /// Cluster-wide API for `K` at the endpoint itself, without a logical cluster prefix
    pub fn unscoped_api<K>(&self) -> Result<Api<K>>
    where
        K: Resource<DynamicType = ()>,
    {
        self.scheme.ensure_registered::<K>()?;
        Ok(Api::all(self.config.client()?))
    }

    /// Client whose requests all target `cluster`, nested under the endpoint's own path
    pub fn for_cluster(&self, cluster: &LogicalCluster) -> Result<WorkspaceClient> {
        let host = cluster.scoped_host(self.config.host())?;
        let client = self.config.with_host(host).client()?;
        Ok(WorkspaceClient::new(
            client,
            self.scheme.clone(),
            cluster.clone(),
        ))
    }
}

/// A kube client already scoped to one logical cluster
#[derive(Clone)]
pub struct WorkspaceClient {
    client: Client,
    scheme: Scheme,
    cluster: LogicalCluster,
}

impl WorkspaceClient {
    pub fn new(client: Client, scheme: Scheme, cluster: LogicalCluster) -> Self {
        Self {
            client,
            scheme,
            cluster,
        }
    }

    /// Fetch a single namespaced object
    #[instrument(skip(self), fields(cluster = %self.cluster, kind = %K::kind(&())))]
    pub async fn get<K>(&self, identity: &ResourceIdentity) -> Result<K>
    where
        K: Resource<DynamicType = (), Scope = NamespaceResourceScope>
            + Clone
            + DeserializeOwned
            + fmt::Debug,
    {
        self.scheme.ensure_registered::<K>()?;

        let api: Api<K> = Api::namespaced(self.client.clone(), &identity.namespace);
        debug!("Getting {} {}", K::kind(&()), identity);

        api.get(&identity.name)
            .await
            .map_err(|e| VwError::from_lookup(e, &K::kind(&()), &identity.to_string()))
    }
}
