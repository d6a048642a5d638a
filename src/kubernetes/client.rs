// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Workspace-scoped client creation.
//!
//! The inferred client configuration points at the caller's workspace via its
//! `/clusters/<path>` URL suffix. The location workspace is reached with the
//! same credentials by rewriting that suffix.

use kube::{Client, Config};
use tracing::debug;

use crate::error::{BindError, Result};
use crate::workspace::{rewrite_cluster_url, WorkspacePath};

/// Build the two clients the bind workflow needs: one scoped to the caller's
/// workspace (taken from the environment as-is) and one scoped to the
/// location workspace.
pub async fn build_clients(location_workspace: &WorkspacePath) -> Result<(Client, Client)> {
    let config = Config::infer()
        .await
        .map_err(|e| BindError::KubeconfigError(format!("Failed to infer config: {e}")))?;

    let user_client = Client::try_from(config.clone())?;

    let mut location_config = config;
    let rewritten = rewrite_cluster_url(&location_config.cluster_url.to_string(), location_workspace)?;
    debug!(
        "Scoping location client to workspace {}: {}",
        location_workspace, rewritten
    );
    location_config.cluster_url = rewritten
        .parse()
        .map_err(|e| BindError::InvalidClusterUrl(format!("{rewritten}: {e}")))?;
    let location_client = Client::try_from(location_config)?;

    Ok((user_client, location_client))
}
