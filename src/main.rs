// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::info;

use bind_compute::bind;
use bind_compute::cli::BindComputeArgs;
use bind_compute::config::BindComputeOptions;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = BindComputeArgs::parse();
    let options = BindComputeOptions::from_args(args)?;
    info!(
        "Binding workspace to compute in location workspace {}",
        options.location_workspace
    );

    let mut out = std::io::stdout();

    // Dropping the workflow future on Ctrl-C guarantees no further remote
    // call is issued
    tokio::select! {
        result = bind::run(&options, &mut out) => Ok(result?),
        _ = tokio::signal::ctrl_c() => {
            anyhow::bail!("interrupted");
        }
    }
}
