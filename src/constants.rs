// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Default APIExports probed when the user does not name any explicitly
pub mod default_exports {
    /// The shared kubernetes APIExport under the root compute workspace
    pub const GLOBAL_KUBERNETES: &str = "root:compute:kubernetes";
    /// Name of the kubernetes APIExport local to the location workspace
    pub const LOCAL_KUBERNETES_NAME: &str = "kubernetes";
}

/// The resource type a placement schedules onto
pub mod location_resource {
    pub const GROUP: &str = "workload.kcp.dev";
    pub const VERSION: &str = "v1alpha1";
    pub const RESOURCE: &str = "synctargets";
}

/// Readiness polling configuration
pub mod poll {
    /// Interval between readiness re-fetches in milliseconds
    pub const INTERVAL_MS: u64 = 500;
}

/// Maximum length of a resource name (DNS-1123 subdomain)
pub const MAX_RESOURCE_NAME_LEN: usize = 253;
