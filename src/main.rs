// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::{error, info, warn};

use vwfetch::config::Config;
use vwfetch::logging;
use vwfetch::workspace::{fetch_gitops_deployment, new_virtual_workspace_client};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    logging::init(&config.log_level)?;

    info!("Fetching a simple gitops deployment from user workspace");

    tokio::select! {
        res = run(&config) => {
            if let Err(e) = res {
                error!("{:#}", e);
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, aborting");
            std::process::exit(130);
        }
    }

    Ok(())
}

async fn run(config: &Config) -> Result<()> {
    let client = new_virtual_workspace_client(config)
        .await
        .context("Failed to create virtual workspace client")?;

    let deployment = fetch_gitops_deployment(&client, config)
        .await
        .context("Failed to get GitOpsDeployment")?;

    println!(
        "GitOps Deployment found:\n{}",
        serde_yaml::to_string(&deployment)?
    );
    Ok(())
}
