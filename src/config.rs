// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;

use crate::cli::BindComputeArgs;
use crate::error::{BindError, Result};
use crate::naming;
use crate::selector::{self, LabelSelector};
use crate::workspace::WorkspacePath;

/// The desired state of one bind run, built once from the command line and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct BindComputeOptions {
    /// Name of the placement to create; derived from the selector content
    /// when the user does not supply one
    pub placement_name: String,
    /// Requested APIExports, each `<workspace_path>:<export_name>`; empty
    /// means probe the well-known defaults
    pub api_exports: Vec<String>,
    /// Selects the namespaces whose workload gets scheduled
    pub namespace_selector: LabelSelector,
    /// Select locations in the location workspace
    pub location_selectors: Vec<LabelSelector>,
    /// The workspace holding the synctargets
    pub location_workspace: WorkspacePath,
    /// How long to wait for the placement and bindings to become ready
    pub bind_wait_timeout: Duration,
}

impl BindComputeOptions {
    /// Validate and complete the parsed arguments.
    ///
    /// Fails before any remote call on a bad workspace path, an unqualified
    /// export or an unparseable selector.
    pub fn from_args(args: BindComputeArgs) -> Result<Self> {
        let location_workspace = WorkspacePath::new(&args.location_workspace)?;

        for export in &args.api_exports {
            match export.split_once(':') {
                Some((path, name)) if !path.is_empty() && !name.is_empty() => {}
                _ => return Err(BindError::InvalidExport(export.clone())),
            }
        }

        let namespace_selector = selector::parse(&args.namespace_selector)?;

        // Default to one match-everything selector
        let location_selector_strings = if args.location_selectors.is_empty() {
            vec![String::new()]
        } else {
            args.location_selectors
        };
        let location_selectors = location_selector_strings
            .iter()
            .map(|s| selector::parse(s))
            .collect::<Result<Vec<_>>>()?;

        let placement_name = match args.placement_name {
            Some(name) if !name.is_empty() => name,
            _ => naming::placement_name(
                &args.namespace_selector,
                &location_selector_strings,
                location_workspace.as_str(),
            ),
        };

        Ok(Self {
            placement_name,
            api_exports: args.api_exports,
            namespace_selector,
            location_selectors,
            location_workspace,
            bind_wait_timeout: args.timeout,
        })
    }
}
