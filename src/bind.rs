// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The bind workflow: discover supported exports, reconcile bindings, create
//! the placement and wait for everything to converge.

use std::io::Write;

use kube::Client;
use tracing::{debug, info};

use crate::config::BindComputeOptions;
use crate::error::Result;
use crate::kubernetes::build_clients;
use crate::reconcilers::{
    apply_api_bindings, apply_placement, bind_ready, resolve_api_exports, wait_for_ready,
};

/// Run the full workflow against the environment's configured API server.
pub async fn run(options: &BindComputeOptions, out: &mut dyn Write) -> Result<()> {
    let (user_client, location_client) = build_clients(&options.location_workspace).await?;
    run_with_clients(options, user_client, location_client, out).await
}

/// Run the workflow with pre-built clients: one scoped to the caller's
/// workspace, one to the location workspace.
///
/// Steps are sequenced fail-fast with no rollback: resources created before
/// a failure stay in place, and re-running converges on them by name.
pub async fn run_with_clients(
    options: &BindComputeOptions,
    user_client: Client,
    location_client: Client,
    out: &mut dyn Write,
) -> Result<()> {
    let desired =
        resolve_api_exports(&location_client, &options.location_workspace, &options.api_exports)
            .await?;
    info!(
        "Binding {} APIExports from workspace {}",
        desired.len(),
        options.location_workspace
    );

    let (bindings, err) = apply_api_bindings(&user_client, &desired, out).await;
    if let Some(err) = err {
        return Err(err);
    }

    let placement = apply_placement(&user_client, options, out).await?;

    // The objects returned by the create calls may already carry converged
    // status; only poll when they do not.
    if !bind_ready(&bindings, &placement) {
        debug!("Waiting for placement {} to become ready", options.placement_name);
        wait_for_ready(&user_client, &bindings, &placement, options.bind_wait_timeout).await?;
    }

    Ok(())
}
