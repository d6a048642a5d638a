// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client construction for the caller and location workspaces

pub mod client;

pub use client::build_clients;
