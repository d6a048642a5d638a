// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load client configuration: {0}")]
    KubeconfigError(String),

    #[error("Invalid location workspace: {0}")]
    InvalidWorkspace(String),

    #[error("Invalid cluster URL: {0}")]
    InvalidClusterUrl(String),

    #[error("Invalid label selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid APIExport {0:?}: expected format <workspace_path>:<export_name>")]
    InvalidExport(String),

    #[error("The following APIExports are not supported by the synctargets in workspace {workspace}: {exports}")]
    UnsupportedExports { workspace: String, exports: String },

    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),

    #[error("bind compute is not ready {placement}: {source}")]
    WaitFailed {
        placement: String,
        #[source]
        source: Box<BindError>,
    },

    #[error("bind compute is not ready {0}: timed out waiting for the condition")]
    WaitTimeout(String),

    #[error("{}", join_errors(.0))]
    Aggregate(Vec<BindError>),
}

fn join_errors(errs: &[BindError]) -> String {
    errs.iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl BindError {
    /// Combine independently collected errors into a single error value.
    /// Returns `None` when the list is empty, the sole error when there is
    /// exactly one, and an aggregate otherwise.
    pub fn aggregate(mut errs: Vec<BindError>) -> Option<BindError> {
        match errs.len() {
            0 => None,
            1 => errs.pop(),
            _ => Some(BindError::Aggregate(errs)),
        }
    }
}

pub type Result<T> = std::result::Result<T, BindError>;
