// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! APIBinding reconciliation: create whatever the desired export set needs
//! on top of the bindings already present in the caller's workspace.

use std::collections::BTreeSet;
use std::io::Write;

use kube::{
    api::{ListParams, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, warn};

use crate::error::BindError;
use crate::naming::api_binding_name;
use crate::types::api_binding::{
    APIBinding, APIBindingSpec, ExportReference, WorkspaceExportReference,
};
use crate::workspace::split_export;

/// Create an APIBinding for every desired export not already bound.
///
/// "Already exists" on create is success: a concurrent invocation got there
/// first and the remote system enforces name uniqueness. Other failures are
/// collected so every missing binding is still attempted; the attempted
/// bindings are returned alongside the combined error, so callers must not
/// assume the list is empty when the error is set.
pub async fn apply_api_bindings(
    client: &Client,
    desired: &BTreeSet<String>,
    out: &mut dyn Write,
) -> (Vec<APIBinding>, Option<BindError>) {
    let api: Api<APIBinding> = Api::all(client.clone());

    let existing_list = match api.list(&ListParams::default()).await {
        Ok(list) => list,
        Err(e) => return (Vec::new(), Some(e.into())),
    };

    let mut existing = BTreeSet::new();
    for binding in existing_list.items {
        // Bindings without a workspace reference import non-workspace export
        // sources and play no part in this reconciliation
        if let Some(id) = binding.export_id() {
            existing.insert(id);
        }
    }

    let mut errs: Vec<BindError> = Vec::new();
    let mut bindings = Vec::new();
    for export in desired.difference(&existing) {
        let (path, export_name) = split_export(export);
        let binding = APIBinding::new(
            &api_binding_name(&path, &export_name),
            APIBindingSpec {
                reference: ExportReference {
                    workspace: Some(WorkspaceExportReference { path, export_name }),
                },
            },
        );

        match api.create(&PostParams::default(), &binding).await {
            Ok(created) => bindings.push(created),
            Err(kube::Error::Api(e)) if e.code == 409 => {
                // Lost a creation race; keep the local object, the waiter
                // will fetch its current state by name
                debug!("APIBinding {} already exists", binding.name_any());
                bindings.push(binding.clone());
            }
            Err(e) => {
                warn!("Failed to create APIBinding {}: {}", binding.name_any(), e);
                errs.push(e.into());
                continue;
            }
        }

        if let Err(e) = writeln!(
            out,
            "apibinding {} for apiexport {} created.",
            binding.name_any(),
            export
        ) {
            errs.push(e.into());
        }
    }

    (bindings, BindError::aggregate(errs))
}
