// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Remote resource shapes consumed and produced by the bind workflow

pub mod api_binding;
pub mod placement;
pub mod sync_target;
