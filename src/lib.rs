// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod kubernetes;
pub mod logging;
pub mod types;
pub mod workspace;

#[cfg(test)]
pub mod test_utils;
