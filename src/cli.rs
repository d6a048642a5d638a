// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface

use std::time::Duration;

use clap::Parser;

/// Bind a workspace to compute by importing the APIExports supported in a
/// location workspace and placing workload namespaces onto its locations.
#[derive(Parser, Debug)]
#[command(name = "bind-compute")]
pub struct BindComputeArgs {
    /// Workspace holding the synctargets to bind against, e.g. root:locations
    pub location_workspace: String,

    /// APIExports to bind for workload, each in the format
    /// <workspace_path>:<export_name>. Defaults to the supported kubernetes
    /// exports when omitted.
    #[arg(long = "apiexports", value_name = "EXPORTS", value_delimiter = ',')]
    pub api_exports: Vec<String>,

    /// Label selector for the namespaces to schedule; empty selects all
    #[arg(long = "namespace-selector", default_value = "")]
    pub namespace_selector: String,

    /// Label selectors for locations in the location workspace; repeat the
    /// flag for alternatives. Defaults to selecting every location.
    #[arg(long = "location-selectors", value_name = "SELECTOR")]
    pub location_selectors: Vec<String>,

    /// Name of the placement to create; derived from the selectors when unset
    #[arg(long = "name")]
    pub placement_name: Option<String>,

    /// Duration to wait for the placement and bindings to become ready
    #[arg(long, default_value = "30s", value_parser = parse_duration)]
    pub timeout: Duration,
}

/// Parse durations like `500ms`, `30s`, `5m` or `1h`; a bare number is
/// taken as seconds.
fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    let (number, unit): (&str, &str) = match value.find(|c: char| c.is_ascii_alphabetic()) {
        Some(i) => (&value[..i], &value[i..]),
        None => (value, "s"),
    };

    let amount: u64 = number
        .parse()
        .map_err(|_| format!("invalid duration {value:?}"))?;

    match unit {
        "ms" => Ok(Duration::from_millis(amount)),
        "s" => Ok(Duration::from_secs(amount)),
        "m" => Ok(Duration::from_secs(amount * 60)),
        "h" => Ok(Duration::from_secs(amount * 3600)),
        _ => Err(format!("invalid duration unit {unit:?} in {value:?}")),
    }
}
