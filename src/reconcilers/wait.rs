// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Convergence wait: poll the created bindings and placement until the
//! external controllers report them ready, bounded by a timeout.

use std::time::Duration;

use kube::{Api, Client, ResourceExt};
use tokio::time::Instant;
use tracing::debug;

use crate::constants::poll;
use crate::error::{BindError, Result};
use crate::types::api_binding::APIBinding;
use crate::types::placement::Placement;

/// The combined readiness predicate: the placement's Ready condition is True
/// and every binding's phase is Bound.
pub fn bind_ready(bindings: &[APIBinding], placement: &Placement) -> bool {
    placement.is_ready() && bindings.iter().all(APIBinding::is_bound)
}

/// Re-fetch the placement and every binding by name until `bind_ready`, the
/// timeout elapses, or a fetch fails.
///
/// A transport error aborts immediately; only "not ready yet" is retried.
/// Both failure modes name the placement for operator diagnosis.
pub async fn wait_for_ready(
    client: &Client,
    bindings: &[APIBinding],
    placement: &Placement,
    timeout: Duration,
) -> Result<()> {
    let placements: Api<Placement> = Api::all(client.clone());
    let binding_api: Api<APIBinding> = Api::all(client.clone());

    let placement_name = placement.name_any();
    let deadline = Instant::now() + timeout;
    let interval = Duration::from_millis(poll::INTERVAL_MS);

    loop {
        match fetch_and_check(&placements, &binding_api, bindings, &placement_name).await {
            Ok(true) => return Ok(()),
            Ok(false) => debug!("Placement {} not ready yet", placement_name),
            Err(e) => {
                return Err(BindError::WaitFailed {
                    placement: placement_name,
                    source: Box::new(e),
                })
            }
        }

        if Instant::now() >= deadline {
            return Err(BindError::WaitTimeout(placement_name));
        }
        tokio::time::sleep(interval).await;
    }
}

async fn fetch_and_check(
    placements: &Api<Placement>,
    binding_api: &Api<APIBinding>,
    bindings: &[APIBinding],
    placement_name: &str,
) -> Result<bool> {
    let current_placement = placements.get(placement_name).await?;

    let mut current_bindings = Vec::with_capacity(bindings.len());
    for binding in bindings {
        current_bindings.push(binding_api.get(&binding.name_any()).await?);
    }

    Ok(bind_ready(&current_bindings, &current_placement))
}
