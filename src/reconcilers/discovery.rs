// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! APIExport discovery against the location workspace.
//!
//! The synctargets in the location workspace advertise which APIExports they
//! support. The user's requested exports must be a subset of that union; with
//! no explicit request the well-known kubernetes exports are probed instead.

use std::collections::BTreeSet;

use kube::{api::ListParams, Api, Client};
use tracing::debug;

use crate::constants::default_exports;
use crate::error::{BindError, Result};
use crate::types::sync_target::SyncTarget;
use crate::workspace::WorkspacePath;

/// Resolve the set of APIExports to bind.
///
/// With an empty request the result holds whichever of the default exports
/// the synctargets support, possibly none. A non-empty request is validated
/// as a whole: any unsupported entry fails the run before anything is
/// created, naming every unsupported export.
pub async fn resolve_api_exports(
    location_client: &Client,
    location_workspace: &WorkspacePath,
    requested: &[String],
) -> Result<BTreeSet<String>> {
    let mut desired: BTreeSet<String> = requested.iter().cloned().collect();

    let sync_targets: Api<SyncTarget> = Api::all(location_client.clone());
    let targets = sync_targets.list(&ListParams::default()).await?;

    let mut supported = BTreeSet::new();
    for target in targets.items {
        for export in target.spec.supported_api_exports {
            let Some(workspace) = export.workspace else {
                continue;
            };
            // A reference without a path points at the location workspace itself
            let path = if workspace.path.is_empty() {
                location_workspace.to_string()
            } else {
                workspace.path
            };
            supported.insert(format!("{path}:{}", workspace.export_name));
        }
    }
    debug!(
        "Workspace {} supports {} APIExports",
        location_workspace,
        supported.len()
    );

    if desired.is_empty() {
        let defaults = [
            default_exports::GLOBAL_KUBERNETES.to_string(),
            format!(
                "{location_workspace}:{}",
                default_exports::LOCAL_KUBERNETES_NAME
            ),
        ];
        for export in defaults {
            if supported.contains(&export) {
                desired.insert(export);
            }
        }
    } else {
        let unsupported: Vec<String> = desired.difference(&supported).cloned().collect();
        if !unsupported.is_empty() {
            return Err(BindError::UnsupportedExports {
                workspace: location_workspace.to_string(),
                exports: unsupported.join(","),
            });
        }
    }

    Ok(desired)
}
