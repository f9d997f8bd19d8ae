// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry of the resource kinds a client may operate on

use crate::error::{Result, VwError};
use kube::core::ApiResource;
use kube::Resource;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Scheme {
    resources: Vec<ApiResource>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `K`. Registering the same kind twice is a no-op; a different
    /// kind claiming an already registered group/version/plural is an error.
    pub fn add<K>(&mut self) -> Result<()>
    where
        K: Resource<DynamicType = ()>,
    {
        let ar = ApiResource::erase::<K>(&());

        if let Some(existing) = self
            .resources
            .iter()
            .find(|r| r.group == ar.group && r.version == ar.version && r.plural == ar.plural)
        {
            if existing.kind == ar.kind {
                return Ok(());
            }
            return Err(VwError::SchemeRegistrationFailed {
                kind: ar.kind.clone(),
                reason: format!(
                    "{}/{} {} is already registered to kind {}",
                    ar.group, ar.version, ar.plural, existing.kind
                ),
            });
        }

        debug!("Registered {} ({})", ar.kind, ar.api_version);
        self.resources.push(ar);
        Ok(())
    }

    pub fn is_registered<K>(&self) -> bool
    where
        K: Resource<DynamicType = ()>,
    {
        let (group, version, kind) = (K::group(&()), K::version(&()), K::kind(&()));
        self.resources
            .iter()
            .any(|r| r.group == group && r.version == version && r.kind == kind)
    }

    /// Fail with `KindNotRegistered` unless `K` was added
    pub fn ensure_registered<K>(&self) -> Result<()>
    where
        K: Resource<DynamicType = ()>,
    {
        if self.is_registered::<K>() {
            Ok(())
        } else {
            Err(VwError::KindNotRegistered(format!(
                "{} ({})",
                K::kind(&()),
                K::api_version(&())
            )))
        }
    }
}
