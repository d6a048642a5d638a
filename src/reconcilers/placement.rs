// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Placement creation. One placement per run, idempotent on conflict.

use std::io::Write;

use kube::{api::PostParams, Api, Client, ResourceExt};
use tracing::debug;

use crate::config::BindComputeOptions;
use crate::constants::location_resource;
use crate::error::Result;
use crate::types::placement::{GroupVersionResource, Placement, PlacementSpec};

/// Create the placement tying the namespace selector to the location
/// selectors in the location workspace.
///
/// A 409 on create means an earlier or concurrent invocation already created
/// it under the same derived name; the locally constructed object is returned
/// in that case, so callers needing current status must re-fetch by name.
pub async fn apply_placement(
    client: &Client,
    options: &BindComputeOptions,
    out: &mut dyn Write,
) -> Result<Placement> {
    let api: Api<Placement> = Api::all(client.clone());

    let placement = Placement::new(
        &options.placement_name,
        PlacementSpec {
            namespace_selector: Some(options.namespace_selector.clone()),
            location_selectors: options.location_selectors.clone(),
            location_workspace: options.location_workspace.to_string(),
            location_resource: GroupVersionResource {
                group: location_resource::GROUP.to_string(),
                version: location_resource::VERSION.to_string(),
                resource: location_resource::RESOURCE.to_string(),
            },
        },
    );

    let placement = match api.create(&PostParams::default(), &placement).await {
        Ok(created) => created,
        Err(kube::Error::Api(e)) if e.code == 409 => {
            debug!("Placement {} already exists", placement.name_any());
            placement
        }
        Err(e) => return Err(e.into()),
    };

    writeln!(out, "placement {} created.", placement.name_any())?;
    Ok(placement)
}
