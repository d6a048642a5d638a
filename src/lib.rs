// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod bind;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod naming;
pub mod reconcilers;
pub mod selector;
pub mod types;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_utils;
