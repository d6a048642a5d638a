// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client-side reconciliation steps of the bind workflow

pub mod bindings;
pub mod discovery;
pub mod placement;
pub mod wait;

pub use bindings::apply_api_bindings;
pub use discovery::resolve_api_exports;
pub use placement::apply_placement;
pub use wait::{bind_ready, wait_for_ready};
