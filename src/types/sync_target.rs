// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

use crate::types::api_binding::ExportReference;

/// A SyncTarget is a schedulable unit in a location workspace. This tool only
/// reads which APIExports each target advertises support for.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "workload.kcp.dev", version = "v1alpha1", kind = "SyncTarget")]
#[serde(rename_all = "camelCase")]
pub struct SyncTargetSpec {
    // serde's camelCase would produce "supportedApiExports"; the wire name
    // capitalizes the API initialism
    #[serde(
        rename = "supportedAPIExports",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub supported_api_exports: Vec<ExportReference>,
}
