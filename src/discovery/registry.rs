// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read access to the APIExport registry

use crate::error::{Result, VwError};
use crate::types::APIExport;
use kube::api::ListParams;
use kube::Api;
use std::future::Future;
use tracing::instrument;

/// Source of APIExports for virtual workspace discovery
pub trait ExportRegistry {
    /// Fetch one export, failing with `NotFound` if it does not exist
    fn get(&self, name: &str) -> impl Future<Output = Result<APIExport>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<APIExport>>> + Send;
}

impl ExportRegistry for Api<APIExport> {
    #[instrument(skip(self))]
    async fn get(&self, name: &str) -> Result<APIExport> {
        Api::get(self, name)
            .await
            .map_err(|e| VwError::from_lookup(e, "APIExport", name))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<APIExport>> {
        Ok(Api::list(self, &ListParams::default()).await?.items)
    }
}
