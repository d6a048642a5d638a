// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Logical workspace paths and cluster URL handling.
//!
//! A workspace path is a colon-separated list of lowercase segments
//! (`root:org:team`). The API server scopes requests to a workspace through
//! the `/clusters/<path>` prefix of the request URL.

use std::fmt;

use url::Url;

use crate::error::{BindError, Result};

/// A validated workspace path, e.g. `root:my-org:compute`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspacePath(String);

impl WorkspacePath {
    pub fn new(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(BindError::InvalidWorkspace(path.to_string()));
        }
        for segment in path.split(':') {
            if !valid_segment(segment) {
                return Err(BindError::InvalidWorkspace(path.to_string()));
            }
        }
        Ok(Self(path.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Segments must start with a lowercase letter or digit and contain only
/// lowercase letters, digits and hyphens, with no trailing hyphen.
fn valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
        return false;
    }
    if segment.ends_with('-') {
        return false;
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Split a fully qualified export identifier `<workspace_path>:<name>` into
/// its source workspace path and leaf name.
pub fn split_export(export: &str) -> (String, String) {
    match export.rsplit_once(':') {
        Some((path, name)) => (path.to_string(), name.to_string()),
        None => (String::new(), export.to_string()),
    }
}

/// Rewrite a cluster URL to target another workspace.
///
/// The configured server URL carries the caller's workspace as a
/// `/clusters/<path>` suffix; replace it with the given workspace to reach
/// that workspace through the same front proxy.
pub fn rewrite_cluster_url(host: &str, workspace: &WorkspacePath) -> Result<String> {
    let mut url = Url::parse(host).map_err(|e| BindError::InvalidClusterUrl(format!("{host}: {e}")))?;

    let path = url.path().to_string();
    let Some(index) = path.find("/clusters/") else {
        return Err(BindError::InvalidClusterUrl(format!(
            "{host}: missing /clusters/<workspace> path"
        )));
    };

    url.set_path(&format!("{}/clusters/{}", &path[..index], workspace));
    Ok(url.to_string())
}
