// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// An APIBinding imports one APIExport into the workspace it lives in,
/// making the exported resource types usable there.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "apis.kcp.dev", version = "v1alpha1", kind = "APIBinding")]
#[kube(status = "APIBindingStatus")]
#[serde(rename_all = "camelCase")]
pub struct APIBindingSpec {
    pub reference: ExportReference,
}

/// Reference to an APIExport. Only workspace-backed exports carry a
/// workspace reference; other export sources leave it unset.
#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceExportReference>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceExportReference {
    /// Absolute path of the workspace holding the export. An empty path on a
    /// synctarget reference means the export lives in the location workspace.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    pub export_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct APIBindingStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<APIBindingPhase>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub enum APIBindingPhase {
    Pending,
    Binding,
    Bound,
    Failed,
}

impl APIBinding {
    /// Whether the external controller has finished binding the export
    pub fn is_bound(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.phase.as_ref())
            .is_some_and(|p| *p == APIBindingPhase::Bound)
    }

    /// The fully qualified `<path>:<name>` identifier of the bound export,
    /// or None when the binding does not reference a workspace export.
    pub fn export_id(&self) -> Option<String> {
        self.spec
            .reference
            .workspace
            .as_ref()
            .map(|w| format!("{}:{}", w.path, w.export_name))
    }
}
