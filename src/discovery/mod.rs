// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Virtual workspace discovery through the APIExport registry

pub mod poll;
pub mod registry;
pub mod resolver;

pub use poll::{poll_immediate, retry_everything, PollPolicy, Retry};
pub use registry::ExportRegistry;
pub use resolver::{lookup_export, rest_config_for_export, resolve_virtual_workspace};
